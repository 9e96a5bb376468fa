use crate::{Color, Face};

/// An index in the range 0-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index6 {
    index: u8,
}

impl Index6 {
    /// Creates a new index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-5.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 6);
        Self { index }
    }

    /// Returns the underlying index value (0-5).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns an iterator over all 6 valid indices.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..6).map(Index6::new)
    }
}

/// Defines the semantics for mapping values to indices in 6-element containers.
pub trait Index6Semantics {
    /// The type of values used to index the container.
    type Value;

    /// Converts a value to an index.
    fn to_index(value: Self::Value) -> Index6;

    /// Converts an index back to a value.
    fn from_index(index: Index6) -> Self::Value;
}

/// Semantics for cube faces, in [`Face::ALL`] order.
#[derive(Debug)]
pub struct FaceSemantics;

impl Index6Semantics for FaceSemantics {
    type Value = Face;

    fn to_index(value: Self::Value) -> Index6 {
        Index6::new(value.index())
    }

    fn from_index(index: Index6) -> Self::Value {
        Face::from_index(index.index())
    }
}

/// Semantics for palette colors, in [`Color::ALL`] order.
#[derive(Debug)]
pub struct ColorSemantics;

impl Index6Semantics for ColorSemantics {
    type Value = Color;

    fn to_index(value: Self::Value) -> Index6 {
        Index6::new(value.index())
    }

    fn from_index(index: Index6) -> Self::Value {
        Color::from_index(index.index())
    }
}
