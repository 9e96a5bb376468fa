//! Cube face representation.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::Color;

/// One of the six faces of the cube.
///
/// The variant order is the display order used by the entry grid
/// (Front, Back, Top, Bottom, Left, Right).
///
/// # Examples
///
/// ```
/// use facelace_core::{Color, Face};
///
/// assert_eq!(Face::Front.center_color(), Color::Blue);
/// assert_eq!(Face::NOTATION_ORDER[0], Face::Top);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Face {
    /// The face toward the viewer.
    Front = 0,
    /// The face away from the viewer.
    Back = 1,
    /// The upper face.
    Top = 2,
    /// The lower face.
    Bottom = 3,
    /// The left face.
    Left = 4,
    /// The right face.
    Right = 5,
}

impl Face {
    /// All faces in display order.
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    /// Faces in the order the solver notation string lists them.
    ///
    /// This is the U, R, F, D, L, B convention expected by two-phase solvers,
    /// which is neither alphabetical nor the display order.
    pub const NOTATION_ORDER: [Self; 6] = [
        Self::Top,
        Self::Right,
        Self::Front,
        Self::Bottom,
        Self::Left,
        Self::Back,
    ];

    /// Returns the fixed color of this face's center facelet.
    ///
    /// The table follows the solved-cube convention the entry grid is built
    /// around; it doubles as the face → color legend shown to the player.
    #[must_use]
    pub const fn center_color(self) -> Color {
        match self {
            Self::Front => Color::Blue,
            Self::Back => Color::Green,
            Self::Top => Color::White,
            Self::Bottom => Color::Yellow,
            Self::Left => Color::Orange,
            Self::Right => Color::Red,
        }
    }

    /// Returns the human-readable face name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Back => "Back",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }

    /// Returns the zero-based index of this face in [`Face::ALL`].
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Creates a face from its index in [`Face::ALL`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-5.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Front,
            1 => Self::Back,
            2 => Self::Top,
            3 => Self::Bottom,
            4 => Self::Left,
            5 => Self::Right,
            _ => panic!("Invalid face index"),
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, face) in (0..).zip(Face::ALL) {
            assert_eq!(face.index(), i);
            assert_eq!(Face::from_index(i), face);
        }
    }

    #[test]
    fn test_center_colors_are_distinct() {
        for a in Face::ALL {
            for b in Face::ALL {
                if a != b {
                    assert_ne!(a.center_color(), b.center_color());
                }
            }
        }
    }

    #[test]
    fn test_notation_order_is_a_permutation() {
        let mut seen = [false; 6];
        for face in Face::NOTATION_ORDER {
            assert!(!seen[usize::from(face.index())]);
            seen[usize::from(face.index())] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    #[should_panic(expected = "Invalid face index")]
    fn test_from_index_six_panics() {
        let _ = Face::from_index(6);
    }
}
