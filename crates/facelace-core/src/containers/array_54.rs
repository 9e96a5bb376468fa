use std::{
    fmt,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use crate::index::{Index54, Index54Semantics};

/// A 54-element array indexed by semantic values.
pub struct Array54<T, S>
where
    S: Index54Semantics,
{
    array: [T; 54],
    _marker: PhantomData<fn() -> S>,
}

impl<T, S> Array54<T, S>
where
    S: Index54Semantics,
{
    /// Creates a container from a plain array in index order.
    #[must_use]
    pub const fn from_array(array: [T; 54]) -> Self {
        Self {
            array,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying array in index order.
    #[must_use]
    pub const fn as_array(&self) -> &[T; 54] {
        &self.array
    }

    /// Iterates over `(value, element)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (S::Value, &T)> {
        Index54::all()
            .zip(&self.array)
            .map(|(i, v)| (S::from_index(i), v))
    }

    /// Iterates over the elements in index order.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.array.iter()
    }
}

impl<T, S> Index<S::Value> for Array54<T, S>
where
    S: Index54Semantics,
{
    type Output = T;

    fn index(&self, value: S::Value) -> &Self::Output {
        &self.array[usize::from(S::to_index(value).index())]
    }
}

impl<T, S> IndexMut<S::Value> for Array54<T, S>
where
    S: Index54Semantics,
{
    fn index_mut(&mut self, value: S::Value) -> &mut Self::Output {
        &mut self.array[usize::from(S::to_index(value).index())]
    }
}

impl<T: Clone, S: Index54Semantics> Clone for Array54<T, S> {
    fn clone(&self) -> Self {
        Self::from_array(self.array.clone())
    }
}

impl<T: PartialEq, S: Index54Semantics> PartialEq for Array54<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<T: Eq, S: Index54Semantics> Eq for Array54<T, S> {}

impl<T: fmt::Debug, S: Index54Semantics> fmt::Debug for Array54<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.array).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Face, FaceletPosition, Slot, index::FaceletSemantics};

    #[test]
    fn test_index_by_position() {
        let mut array = Array54::<u8, FaceletSemantics>::from_array([0; 54]);
        let pos = FaceletPosition::new(Face::Bottom, Slot::new(8));
        array[pos] = 7;
        assert_eq!(array[pos], 7);
        assert_eq!(array.as_array()[35], 7);
    }

    #[test]
    fn test_iter_matches_all_positions() {
        let array = Array54::<u8, FaceletSemantics>::from_array([0; 54]);
        let positions: Vec<_> = array.iter().map(|(pos, _)| pos).collect();
        assert_eq!(positions, FaceletPosition::ALL);
    }
}
