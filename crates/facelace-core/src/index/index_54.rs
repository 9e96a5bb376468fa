use crate::{Face, FaceletPosition, Slot};

/// An index in the range 0-53 addressing one facelet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index54 {
    index: u8,
}

impl Index54 {
    /// Creates a new index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-53.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 54);
        Self { index }
    }

    /// Returns the underlying index value (0-53).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns an iterator over all 54 valid indices.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..54).map(Index54::new)
    }
}

/// Defines the semantics for mapping values to indices in 54-element containers.
pub trait Index54Semantics {
    /// The type of values used to index the container.
    type Value;

    /// Converts a value to an index.
    fn to_index(value: Self::Value) -> Index54;

    /// Converts an index back to a value.
    fn from_index(index: Index54) -> Self::Value;
}

/// Semantics for facelet positions, face-major in [`Face::ALL`] order.
#[derive(Debug)]
pub struct FaceletSemantics;

impl Index54Semantics for FaceletSemantics {
    type Value = FaceletPosition;

    fn to_index(value: Self::Value) -> Index54 {
        Index54::new(value.index())
    }

    fn from_index(index: Index54) -> Self::Value {
        let i = index.index();
        FaceletPosition::new(Face::from_index(i / 9), Slot::new(i % 9))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_round_trip() {
        for pos in FaceletPosition::ALL {
            let index = FaceletSemantics::to_index(pos);
            assert_eq!(FaceletSemantics::from_index(index), pos);
        }
    }

    #[test]
    fn test_all_covers_range() {
        assert_eq!(Index54::all().count(), 54);
        assert_eq!(Index54::all().last().map(Index54::index), Some(53));
    }

    proptest! {
        #[test]
        fn test_index_round_trip_is_face_major(raw in 0u8..54) {
            let index = Index54::new(raw);
            let pos = FaceletSemantics::from_index(index);
            prop_assert_eq!(FaceletSemantics::to_index(pos), index);
            prop_assert_eq!(pos.face().index() * 9 + pos.slot().index(), raw);
        }
    }
}
