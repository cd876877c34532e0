//! The swap-remove growable list variant.

use std::cmp::Ordering;

use contig_common::{Result, verify_index, verify_range};

use crate::array_view::ReadOnlyArrayView;

/// A growable list with unordered O(1) removal.
///
/// Removal replaces the target slot with the last logical element and
/// decrements the count, trading order preservation for constant-time
/// removal — the same policy [`NativeList`](crate::NativeList) uses. Also
/// exposes whole-buffer sorting and an in-place transform over every
/// logical element.
///
/// No `Pod` bound: this variant never reinterprets memory.
#[derive(Clone, Debug)]
pub struct FastRemoveRawList<T> {
    items: Vec<T>,
}

impl<T> FastRemoveRawList<T> {
    /// Creates a new, empty list without allocating.
    pub fn new() -> FastRemoveRawList<T> {
        Self::with_capacity(0)
    }

    /// Creates a new list with capacity for at least `capacity` elements.
    /// A capacity of zero does not allocate.
    pub fn with_capacity(capacity: usize) -> FastRemoveRawList<T> {
        FastRemoveRawList {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of logical elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements the list can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Appends an element, doubling the capacity (minimum one element)
    /// when full.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.items.len() == self.items.capacity() {
            self.grow_for(self.items.len() + 1);
        }
        self.items.push(value);
    }

    /// Returns a reference to the element at `index`, or an
    /// `IndexOutOfRange` error.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        verify_index!(index, self.items.len());
        Ok(&self.items[index])
    }

    /// Returns a mutable reference to the element at `index`, or an
    /// `IndexOutOfRange` error.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index!(index, self.items.len());
        Ok(&mut self.items[index])
    }

    /// Overwrites the element at `index`, or fails with
    /// `IndexOutOfRange`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.replace(index, value)
    }

    /// Overwrites the element at `index` in place, or fails with
    /// `IndexOutOfRange`.
    pub fn replace(&mut self, index: usize, value: T) -> Result<()> {
        verify_index!(index, self.items.len());
        self.items[index] = value;
        Ok(())
    }

    /// Removes the first element equal to `value` by replacing it with
    /// the last logical element. O(n) search, O(1) removal; does not
    /// preserve order.
    ///
    /// Returns `true` if an element was found and removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                self.items.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the element at `index` by replacing it with the last
    /// logical element. O(1); does not preserve order. Fails with
    /// `IndexOutOfRange` when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        verify_index!(index, self.items.len());
        self.items.swap_remove(index);
        Ok(())
    }

    /// Returns the index of the first logical element equal to `value`,
    /// or `None`. Only the logical window `[0, len)` is scanned.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|e| e == value)
    }

    /// Sets the count to zero without releasing the storage.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sorts the whole buffer in place by natural ordering.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.items.sort_unstable();
    }

    /// Sorts the whole buffer in place by a caller-supplied ordering.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_unstable_by(compare);
    }

    /// Applies a pure function to every logical element in place.
    pub fn transform_all<F>(&mut self, mut transform: F)
    where
        F: FnMut(&T) -> T,
    {
        for item in &mut self.items {
            *item = transform(item);
        }
    }

    /// Returns a point-in-time read-only window over all logical
    /// elements.
    pub fn read_only_view(&self) -> ReadOnlyArrayView<'_, T> {
        ReadOnlyArrayView::new(&self.items)
    }

    /// Returns a point-in-time read-only window over
    /// `[start, start + length)`, or fails with `RangeOutOfBounds` when
    /// the range exceeds the current count.
    pub fn read_only_view_range(
        &self,
        start: usize,
        length: usize,
    ) -> Result<ReadOnlyArrayView<'_, T>> {
        verify_range!(start, length, self.items.len());
        Ok(ReadOnlyArrayView::new(&self.items[start..start + length]))
    }

    /// Returns the logical elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the logical elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns an iterator over the logical elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn grow_for(&mut self, required: usize) {
        let mut new_cap = self.items.capacity().max(1);
        while new_cap < required {
            new_cap *= 2;
        }
        self.items.reserve_exact(new_cap - self.items.len());
    }
}

impl<T: Clone> FastRemoveRawList<T> {
    /// Bulk-appends the contents of a contiguous slice, growing to at
    /// least `len + values.len()` via the doubling policy before copying.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        let required = self.items.len() + values.len();
        if required > self.items.capacity() {
            self.grow_for(required);
        }
        self.items.extend_from_slice(values);
    }
}

impl<T> std::ops::Index<usize> for FastRemoveRawList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> std::ops::IndexMut<usize> for FastRemoveRawList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}

impl<T> Default for FastRemoveRawList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> From<&[T]> for FastRemoveRawList<T> {
    fn from(slice: &[T]) -> Self {
        let mut list = Self::with_capacity(slice.len());
        list.extend_from_slice(slice);
        list
    }
}

impl<'a, T> IntoIterator for &'a FastRemoveRawList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
