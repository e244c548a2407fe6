//! Contiguous views and iteration.
//!
//! The live region is always one contiguous block, so views and iterators
//! borrow it as a plain slice. Each call to [`Vessel::iter`] or
//! [`Vessel::iter_mut`] starts a fresh, finite pass over the elements
//! present at that moment; reallocation while a pass is live is ruled out
//! by the borrow.

use std::slice;

use crate::Vessel;

impl<T> Vessel<T> {
    /// The live elements as a contiguous slice. Empty when the container
    /// is not `Active`.
    pub fn as_slice(&self) -> &[T] {
        self.live()
    }

    /// The live elements as a mutable contiguous slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.live_mut()
    }

    /// Iterate the live elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.live().iter()
    }

    /// Iterate the live elements mutably in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.live_mut().iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a Vessel<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vessel<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
