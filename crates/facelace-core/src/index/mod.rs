//! Index types and semantics for containers.
//!
//! This module provides index types and their associated semantics for working with
//! 6-element and 54-element containers.
//!
//! # Index Types
//!
//! - [`Index6`] - Index into 6-element containers (range 0-5)
//! - [`Index54`] - Index into 54-element containers (facelets, face-major order)
//!
//! # Semantics
//!
//! - [`FaceSemantics`] - Maps [`Face`] to indices 0-5
//! - [`ColorSemantics`] - Maps [`Color`] to indices 0-5
//! - [`FaceletSemantics`] - Maps [`FaceletPosition`] to indices 0-53
//!
//! [`Face`]: crate::Face
//! [`Color`]: crate::Color
//! [`FaceletPosition`]: crate::FaceletPosition
//!
//! # Examples
//!
//! ```
//! use facelace_core::{
//!     Color, Face, FaceletPosition, Slot,
//!     index::{ColorSemantics, FaceletSemantics, Index6Semantics, Index54Semantics},
//! };
//!
//! assert_eq!(ColorSemantics::to_index(Color::Red).index(), 2);
//!
//! let pos = FaceletPosition::new(Face::Back, Slot::new(3));
//! let idx = FaceletSemantics::to_index(pos);
//! assert_eq!(idx.index(), 12);
//! assert_eq!(FaceletSemantics::from_index(idx), pos);
//! ```

pub use self::{index_6::*, index_54::*};

mod index_54;
mod index_6;
