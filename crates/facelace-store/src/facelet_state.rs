use facelace_core::Color;
use serde::{Deserialize, Serialize};

use crate::InputBlockReason;

/// The state of a single facelet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, Serialize, Deserialize)]
pub enum FaceletState {
    /// A fixed center facelet. Never changes.
    Center(Color),
    /// A facelet painted by the player.
    Painted(Color),
    /// A facelet with no color yet.
    Unset,
}

/// The cell-local effect an input would have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputOperation {
    /// Nothing changes.
    NoOp,
    /// A color is assigned.
    Set,
    /// A color is removed.
    Removed,
}

impl FaceletState {
    /// Returns the facelet's color, whether fixed or painted.
    #[must_use]
    pub const fn as_color(&self) -> Option<Color> {
        match self {
            Self::Center(color) | Self::Painted(color) => Some(*color),
            Self::Unset => None,
        }
    }

    /// Returns the effect of painting `color` here, ignoring color quotas.
    ///
    /// # Errors
    ///
    /// Returns [`InputBlockReason::CenterFacelet`] for a center facelet.
    pub fn set_color_capability(&self, color: Color) -> Result<InputOperation, InputBlockReason> {
        match self {
            Self::Center(_) => Err(InputBlockReason::CenterFacelet),
            Self::Painted(current) if *current == color => Ok(InputOperation::NoOp),
            Self::Painted(_) | Self::Unset => Ok(InputOperation::Set),
        }
    }

    /// Returns the effect of clearing this facelet.
    ///
    /// # Errors
    ///
    /// Returns [`InputBlockReason::CenterFacelet`] for a center facelet.
    pub fn clear_capability(&self) -> Result<InputOperation, InputBlockReason> {
        match self {
            Self::Center(_) => Err(InputBlockReason::CenterFacelet),
            Self::Painted(_) => Ok(InputOperation::Removed),
            Self::Unset => Ok(InputOperation::NoOp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_color() {
        assert_eq!(FaceletState::Center(Color::Red).as_color(), Some(Color::Red));
        assert_eq!(FaceletState::Painted(Color::Blue).as_color(), Some(Color::Blue));
        assert_eq!(FaceletState::Unset.as_color(), None);
    }

    #[test]
    fn test_capabilities() {
        let center = FaceletState::Center(Color::White);
        assert_eq!(
            center.set_color_capability(Color::Red),
            Err(InputBlockReason::CenterFacelet)
        );
        assert_eq!(center.clear_capability(), Err(InputBlockReason::CenterFacelet));

        let painted = FaceletState::Painted(Color::Green);
        assert_eq!(
            painted.set_color_capability(Color::Green),
            Ok(InputOperation::NoOp)
        );
        assert_eq!(
            painted.set_color_capability(Color::Yellow),
            Ok(InputOperation::Set)
        );
        assert_eq!(painted.clear_capability(), Ok(InputOperation::Removed));

        assert_eq!(
            FaceletState::Unset.set_color_capability(Color::Orange),
            Ok(InputOperation::Set)
        );
        assert_eq!(FaceletState::Unset.clear_capability(), Ok(InputOperation::NoOp));
    }
}
