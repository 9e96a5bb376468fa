use std::{
    fmt,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use crate::index::{Index6, Index6Semantics};

/// A 6-element array indexed by semantic values.
pub struct Array6<T, S>
where
    S: Index6Semantics,
{
    array: [T; 6],
    _marker: PhantomData<fn() -> S>,
}

impl<T, S> Array6<T, S>
where
    S: Index6Semantics,
{
    /// Creates a container from a plain array in index order.
    #[must_use]
    pub const fn from_array(array: [T; 6]) -> Self {
        Self {
            array,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying array in index order.
    #[must_use]
    pub const fn as_array(&self) -> &[T; 6] {
        &self.array
    }

    /// Iterates over `(value, element)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (S::Value, &T)> {
        Index6::all().zip(&self.array).map(|(i, v)| (S::from_index(i), v))
    }

    /// Iterates over the elements in index order.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.array.iter()
    }
}

impl<T, S> Index<S::Value> for Array6<T, S>
where
    S: Index6Semantics,
{
    type Output = T;

    fn index(&self, value: S::Value) -> &Self::Output {
        &self.array[usize::from(S::to_index(value).index())]
    }
}

impl<T, S> IndexMut<S::Value> for Array6<T, S>
where
    S: Index6Semantics,
{
    fn index_mut(&mut self, value: S::Value) -> &mut Self::Output {
        &mut self.array[usize::from(S::to_index(value).index())]
    }
}

impl<T: Clone, S: Index6Semantics> Clone for Array6<T, S> {
    fn clone(&self) -> Self {
        Self::from_array(self.array.clone())
    }
}

impl<T: Copy, S: Index6Semantics> Copy for Array6<T, S> {}

impl<T: PartialEq, S: Index6Semantics> PartialEq for Array6<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<T: Eq, S: Index6Semantics> Eq for Array6<T, S> {}

impl<T: Default, S: Index6Semantics> Default for Array6<T, S> {
    fn default() -> Self {
        Self::from_array(std::array::from_fn(|_| T::default()))
    }
}

impl<T: fmt::Debug, S: Index6Semantics> fmt::Debug for Array6<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.array).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Face, index::FaceSemantics};

    #[test]
    fn test_index_by_face() {
        let mut array = Array6::<&str, FaceSemantics>::from_array([""; 6]);
        array[Face::Left] = "left";
        assert_eq!(array[Face::Left], "left");
        assert_eq!(array.as_array()[4], "left");
    }

    #[test]
    fn test_iter_yields_values_in_order() {
        let array = Array6::<u8, FaceSemantics>::from_array([0, 1, 2, 3, 4, 5]);
        let faces: Vec<_> = array.iter().map(|(face, _)| face).collect();
        assert_eq!(faces, Face::ALL);
    }
}
