//! Facelet entry state for a Rubik's Cube.
//!
//! This crate owns the player's in-progress cube description and everything
//! needed to turn it into a solver request:
//!
//! - [`FaceletStore`]: the mutable source of truth. Centers are fixed, every
//!   other facelet is painted or unset, and per-color usage counters are kept
//!   in step with every mutation.
//! - [`CubeState`]: a read-only snapshot of all 54 facelets.
//! - [`validate`]: completeness and color-quota checks over a snapshot.
//! - [`encode`] / [`CubeString`]: the 54-letter solver notation.
//!
//! # Example
//!
//! ```
//! use facelace_core::{Color, Face, FaceletPosition, Slot};
//! use facelace_store::{FaceletStore, ValidationError, validate};
//!
//! let mut store = FaceletStore::new();
//! store
//!     .set_color(FaceletPosition::new(Face::Top, Slot::new(0)), Color::White)
//!     .unwrap();
//! assert_eq!(store.count(Color::White), 2);
//!
//! // Most facelets are still unset.
//! assert!(matches!(
//!     validate(&store.snapshot()),
//!     Err(ValidationError::IncompleteInput { .. })
//! ));
//! ```

mod cube_state;
mod error;
mod facelet_state;
mod notation;
mod store;
mod validate;

pub use self::{
    cube_state::CubeState,
    error::{EncodeError, InputBlockReason, StoreError, SubmitError, ValidationError},
    facelet_state::{FaceletState, InputOperation},
    notation::{CubeString, CubeStringError, decode, encode},
    store::FaceletStore,
    validate::validate,
};
