//! Core data structures for Rubik's Cube facelet entry.
//!
//! This crate provides the small, type-safe vocabulary shared by the store,
//! the solve client, and the application: faces, palette colors, slots within
//! a face, and containers indexed by those types.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`face`]: The six cube faces, their fixed center colors, and the
//!      solver traversal order.
//!    - [`color`]: The six-color palette and the color → notation letter table.
//!    - [`position`]: [`Slot`] (0-8, row-major within a face) and
//!      [`FaceletPosition`] (face + slot).
//!
//! 2. **Index semantics** - Define how values map to indices in containers
//!    - [`index`]: [`Index6`] and [`Index54`] together with [`FaceSemantics`],
//!      [`ColorSemantics`], and [`FaceletSemantics`].
//!
//! 3. **Generic containers** - Containers parameterized by semantics
//!    - [`containers`]: [`Array6`] and [`Array54`].
//!
//! [`Index6`]: index::Index6
//! [`Index54`]: index::Index54
//! [`FaceSemantics`]: index::FaceSemantics
//! [`ColorSemantics`]: index::ColorSemantics
//! [`FaceletSemantics`]: index::FaceletSemantics
//! [`Array6`]: containers::Array6
//! [`Array54`]: containers::Array54
//!
//! # Examples
//!
//! ```
//! use facelace_core::{Color, Face, FaceletPosition, Slot};
//!
//! let center = FaceletPosition::new(Face::Top, Slot::CENTER);
//! assert!(center.is_center());
//! assert_eq!(Face::Top.center_color(), Color::White);
//! assert_eq!(Color::White.notation_letter(), 'U');
//! ```

pub mod color;
pub mod containers;
pub mod face;
pub mod index;
pub mod position;

pub use self::{
    color::{Color, ParseColorError},
    face::Face,
    position::{FaceletPosition, Slot},
};

/// Number of facelets on each face.
pub const FACELETS_PER_FACE: usize = 9;

/// Total number of facelets on the cube.
pub const FACELET_COUNT: usize = 54;

/// Number of facelets each palette color covers on a complete cube.
pub const COLOR_QUOTA: usize = 9;
