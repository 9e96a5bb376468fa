use facelace_core::{Color, Face, FaceletPosition};

/// Errors returned by [`FaceletStore`](crate::FaceletStore) mutations.
///
/// A failed mutation leaves the store exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StoreError {
    /// Attempted to paint or clear a fixed center facelet.
    #[display("cannot modify a center facelet")]
    CannotModifyCenter,
    /// The color has already been used on all nine facelets it may cover.
    #[display("Each color can be used only 9 times.")]
    CapacityRejected {
        /// The color whose quota is exhausted.
        color: Color,
    },
    /// A snapshot's center facelet does not hold the face's fixed color.
    #[display("center of {face} face must be {}", face.center_color())]
    CenterMismatch {
        /// The face whose center is wrong.
        face: Face,
    },
}

/// Reason an input would be blocked, as reported by capability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputBlockReason {
    /// The facelet is a fixed center.
    #[display("center facelet")]
    CenterFacelet,
    /// The color's quota of nine is used up.
    #[display("no {color} facelets left")]
    QuotaExhausted {
        /// The exhausted color.
        color: Color,
    },
}

impl From<InputBlockReason> for StoreError {
    fn from(reason: InputBlockReason) -> Self {
        match reason {
            InputBlockReason::CenterFacelet => Self::CannotModifyCenter,
            InputBlockReason::QuotaExhausted { color } => Self::CapacityRejected { color },
        }
    }
}

/// Errors produced by [`validate`](crate::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    /// At least one facelet has no color yet.
    #[display("Fill colours in all blocks before solving.")]
    IncompleteInput {
        /// Number of unset facelets.
        missing: usize,
    },
    /// A palette color does not cover exactly nine facelets.
    #[display("Each color must appear exactly 9 times. '{color}' appears {count} times.")]
    QuotaMismatch {
        /// The first offending color in palette order.
        color: Color,
        /// How many facelets hold that color.
        count: usize,
    },
}

/// Errors produced by [`encode`](crate::encode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EncodeError {
    /// The snapshot still has an unset facelet.
    #[display("facelet {position} has no color")]
    UnsetFacelet {
        /// The first unset facelet in notation order.
        position: FaceletPosition,
    },
}

/// Errors from turning the store into a solver request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SubmitError {
    /// The snapshot failed validation.
    #[display("{_0}")]
    Invalid(ValidationError),
    /// The snapshot could not be encoded.
    #[display("{_0}")]
    Encode(EncodeError),
}
