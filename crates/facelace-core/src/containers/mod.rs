//! Fixed-size containers indexed through semantics types.
//!
//! - [`Array6`] - 6-element array indexed by an [`Index6Semantics`] value
//!   (faces or colors)
//! - [`Array54`] - 54-element array indexed by an [`Index54Semantics`] value
//!   (facelet positions)
//!
//! [`Index6Semantics`]: crate::index::Index6Semantics
//! [`Index54Semantics`]: crate::index::Index54Semantics
//!
//! # Examples
//!
//! ```
//! use facelace_core::{Color, containers::Array6, index::ColorSemantics};
//!
//! let mut counts = Array6::<usize, ColorSemantics>::from_array([0; 6]);
//! counts[Color::Blue] += 1;
//! assert_eq!(counts[Color::Blue], 1);
//! assert_eq!(counts[Color::Red], 0);
//! ```

pub use self::{array_6::*, array_54::*};

mod array_54;
mod array_6;
