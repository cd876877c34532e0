//! A point-in-time, bounds-checked read-only window.

use contig_common::{Result, verify_index};

/// An immutable, bounds-checked window over a contiguous run of elements.
///
/// The window captures its span at creation and never tracks later owner
/// mutation: its length is fixed, unlike
/// [`TypedView`](crate::TypedView), whose count is recomputed. It owns no
/// storage; the borrow keeps the owner alive (and immutable) for the
/// window's lifetime.
pub struct ReadOnlyArrayView<'a, T> {
    slice: &'a [T],
}

impl<'a, T> ReadOnlyArrayView<'a, T> {
    pub(crate) fn new(slice: &'a [T]) -> ReadOnlyArrayView<'a, T> {
        ReadOnlyArrayView { slice }
    }

    /// Returns the fixed length of the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.slice.len()
    }

    /// Returns `true` if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Returns a reference to the element at `index` within the window.
    ///
    /// Fails with `IndexOutOfRange` when `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&'a T> {
        verify_index!(index, self.slice.len());
        Ok(&self.slice[index])
    }

    /// Returns the window's span as a slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    /// Returns an iterator over the window's elements.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.slice.iter()
    }
}

impl<T> std::ops::Index<usize> for ReadOnlyArrayView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.slice[index]
    }
}

impl<'a, T> IntoIterator for &ReadOnlyArrayView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl<T> Clone for ReadOnlyArrayView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadOnlyArrayView<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for ReadOnlyArrayView<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.slice.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contig_common::ErrorKind;

    #[test]
    fn test_window_basics() {
        let data = [10, 20, 30, 40];
        let view = ReadOnlyArrayView::new(&data[1..3]);
        assert_eq!(view.len(), 2);
        assert!(!view.is_empty());
        assert_eq!(*view.get(0).unwrap(), 20);
        assert_eq!(view[1], 30);
        assert_eq!(view.as_slice(), &[20, 30]);
    }

    #[test]
    fn test_window_out_of_range() {
        let data = [1, 2];
        let view = ReadOnlyArrayView::new(&data[..]);
        let err = view.get(2).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::IndexOutOfRange { index: 2, count: 2 }
        ));
    }

    #[test]
    fn test_window_iter() {
        let data = [1, 2, 3];
        let view = ReadOnlyArrayView::new(&data[..]);
        let collected: Vec<i32> = view.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);

        let mut sum = 0;
        for &x in &view {
            sum += x;
        }
        assert_eq!(sum, 6);
    }
}
