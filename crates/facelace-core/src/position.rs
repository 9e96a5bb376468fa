//! Facelet positions.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{FACELET_COUNT, Face};

/// A slot within a face, 0-8 in row-major order.
///
/// Slot 4 is the center of the face.
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Slot(u8);

impl Slot {
    /// The center slot of a face.
    pub const CENTER: Self = Self(4);

    /// All slots in row-major order.
    pub const ALL: [Self; 9] = {
        let mut all = [Self(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a slot from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 9, "Slot index must be 0-8");
        Self(index)
    }

    /// Creates a slot from its row-major index, returning `None` if out of range.
    #[must_use]
    pub const fn try_new(index: u8) -> Option<Self> {
        if index < 9 { Some(Self(index)) } else { None }
    }

    /// Creates a slot from a row and column (each 0-2).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-2.
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3, "Row and column must be 0-2");
        Self(row * 3 + col)
    }

    /// Returns the row-major index (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-2).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    /// Returns the column (0-2).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }

    /// Returns whether this is the center slot.
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.0 == Self::CENTER.0
    }
}

impl TryFrom<u8> for Slot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or_else(|| format!("slot index out of range: {value}"))
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.0
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// The position of a single facelet: a face and a slot within it.
///
/// # Examples
///
/// ```
/// use facelace_core::{Face, FaceletPosition, Slot};
///
/// let pos = FaceletPosition::new(Face::Right, Slot::new(2));
/// assert_eq!(pos.face(), Face::Right);
/// assert!(!pos.is_center());
/// assert_eq!(FaceletPosition::ALL.len(), 54);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FaceletPosition {
    face: Face,
    slot: Slot,
}

impl FaceletPosition {
    /// All 54 facelet positions, faces in [`Face::ALL`] order and slots ascending.
    pub const ALL: [Self; FACELET_COUNT] = {
        let mut all = [Self::new(Face::Front, Slot(0)); FACELET_COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < FACELET_COUNT {
            all[i] = Self::new(Face::from_index((i / 9) as u8), Slot((i % 9) as u8));
            i += 1;
        }
        all
    };

    /// Creates a new facelet position.
    #[must_use]
    pub const fn new(face: Face, slot: Slot) -> Self {
        Self { face, slot }
    }

    /// Returns the center facelet of `face`.
    #[must_use]
    pub const fn center_of(face: Face) -> Self {
        Self::new(face, Slot::CENTER)
    }

    /// Returns the face.
    #[must_use]
    pub const fn face(self) -> Face {
        self.face
    }

    /// Returns the slot within the face.
    #[must_use]
    pub const fn slot(self) -> Slot {
        self.slot
    }

    /// Returns whether this facelet is a fixed center.
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.slot.is_center()
    }

    /// Returns the index of this position within [`FaceletPosition::ALL`] (0-53).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.face.index() * 9 + self.slot.index()
    }

    /// Iterates over the nine positions of `face` in row-major order.
    pub fn face_positions(face: Face) -> impl Iterator<Item = Self> {
        Slot::ALL.into_iter().map(move |slot| Self::new(face, slot))
    }
}

impl Display for FaceletPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.face, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_row_col() {
        assert_eq!(Slot::new(0).row(), 0);
        assert_eq!(Slot::new(5).row(), 1);
        assert_eq!(Slot::new(5).col(), 2);
        assert_eq!(Slot::from_row_col(2, 1), Slot::new(7));
        assert!(Slot::new(4).is_center());
        assert_eq!(Slot::try_new(9), None);
    }

    #[test]
    #[should_panic(expected = "Slot index must be 0-8")]
    fn test_slot_nine_panics() {
        let _ = Slot::new(9);
    }

    #[test]
    fn test_all_positions_are_ordered_by_index() {
        for (i, pos) in (0..).zip(FaceletPosition::ALL) {
            assert_eq!(pos.index(), i);
        }
        assert_eq!(FaceletPosition::ALL[0].face(), Face::Front);
        assert_eq!(FaceletPosition::ALL[53].face(), Face::Right);
    }

    #[test]
    fn test_exactly_six_centers() {
        let centers: Vec<_> = FaceletPosition::ALL
            .into_iter()
            .filter(|pos| pos.is_center())
            .collect();
        assert_eq!(centers.len(), 6);
        for face in Face::ALL {
            assert!(centers.contains(&FaceletPosition::center_of(face)));
        }
    }

    #[test]
    fn test_display() {
        let pos = FaceletPosition::new(Face::Bottom, Slot::new(7));
        assert_eq!(pos.to_string(), "Bottom[7]");
    }
}
