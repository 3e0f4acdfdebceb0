//! Random-access containers that can be renumbered.
//!
//! [`IndexedSeq`] is the capability every remapping operation is bounded by: a
//! length-known sequence with positional read, write and swap access. It is
//! implemented for slices, arrays, [`Vec`] and [`VecDeque`], and can be
//! implemented for any container that stores one element per identifier.
//!
//! # Examples
//!
//! ```
//! use renumber_core::IndexedSeq;
//!
//! fn first_and_last<C: IndexedSeq + ?Sized>(seq: &C) -> Option<(&C::Item, &C::Item)> {
//!     if seq.is_empty() {
//!         return None;
//!     }
//!     Some((seq.at(0), seq.at(seq.len() - 1)))
//! }
//!
//! assert_eq!(first_and_last(&[1, 2, 3][..]), Some((&1, &3)));
//! assert_eq!(first_and_last(&Vec::<u8>::new()), None);
//! ```

use std::collections::VecDeque;

/// An ordered, random-access sequence with a known length.
///
/// Positions are `0..len()`. Accessors panic on an out-of-range position, the
/// same way slice indexing does.
pub trait IndexedSeq {
    /// Element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn at(&self, index: usize) -> &Self::Item;

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn at_mut(&mut self, index: usize) -> &mut Self::Item;

    /// Swaps the elements at positions `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of range.
    fn swap_at(&mut self, a: usize, b: usize);

    /// Clones every element into a new vector, in order.
    fn snapshot(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        (0..self.len()).map(|i| self.at(i).clone()).collect()
    }
}

impl<T> IndexedSeq for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_vec()
    }
}

impl<T, const N: usize> IndexedSeq for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_vec()
    }
}

impl<T> IndexedSeq for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.clone()
    }
}

impl<T> IndexedSeq for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotate_left<C: IndexedSeq + ?Sized>(seq: &mut C) {
        for i in 1..seq.len() {
            seq.swap_at(i - 1, i);
        }
    }

    #[test]
    fn test_slice_and_vec_agree() {
        let mut vec = vec![1, 2, 3, 4];
        let mut arr = [1, 2, 3, 4];
        rotate_left(&mut vec);
        rotate_left(&mut arr[..]);
        assert_eq!(vec, [2, 3, 4, 1]);
        assert_eq!(arr, [2, 3, 4, 1]);
    }

    #[test]
    fn test_array_impl() {
        let mut arr = ['a', 'b', 'c'];
        assert_eq!(IndexedSeq::len(&arr), 3);
        *arr.at_mut(1) = 'z';
        assert_eq!(*arr.at(1), 'z');
        rotate_left(&mut arr);
        assert_eq!(arr, ['z', 'c', 'a']);
    }

    #[test]
    fn test_vec_deque_wrapped_storage() {
        let mut deque = VecDeque::with_capacity(4);
        deque.extend([2, 3]);
        deque.push_front(1);
        deque.push_front(0);
        rotate_left(&mut deque);
        assert_eq!(deque.snapshot(), [1, 2, 3, 0]);
    }

    #[test]
    fn test_empty() {
        let empty: Vec<u8> = Vec::new();
        assert!(IndexedSeq::is_empty(&empty));
        assert!(empty.snapshot().is_empty());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_out_of_range_access_panics() {
        let vec = vec![1, 2, 3];
        let _ = vec.at(3);
    }
}
