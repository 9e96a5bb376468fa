use facelace_core::{COLOR_QUOTA, Color};

use crate::{CubeState, ValidationError};

/// Checks that a snapshot describes a fully colored cube with a legal color distribution.
///
/// Completeness is checked first; an incomplete snapshot reports only the
/// number of unset facelets. A complete snapshot must then use every palette
/// color exactly nine times. The first offending color in [`Color::ALL`]
/// order is reported.
///
/// # Errors
///
/// Returns [`ValidationError::IncompleteInput`] or
/// [`ValidationError::QuotaMismatch`] as described above.
///
/// # Example
///
/// ```
/// use facelace_core::{Color, Face, FaceletPosition, Slot};
/// use facelace_store::{CubeState, ValidationError, validate};
///
/// assert_eq!(validate(&CubeState::solved()), Ok(()));
///
/// let swapped = CubeState::solved()
///     .with(FaceletPosition::new(Face::Top, Slot::new(0)), Some(Color::Red));
/// assert_eq!(
///     validate(&swapped),
///     Err(ValidationError::QuotaMismatch { color: Color::White, count: 8 })
/// );
/// ```
pub fn validate(state: &CubeState) -> Result<(), ValidationError> {
    let missing = state.missing_count();
    if missing > 0 {
        return Err(ValidationError::IncompleteInput { missing });
    }

    let counts = state.color_counts();
    if let Some(color) = Color::ALL
        .into_iter()
        .find(|color| counts[*color] != COLOR_QUOTA)
    {
        return Err(ValidationError::QuotaMismatch {
            color,
            count: counts[color],
        });
    }

    Ok(())
}
