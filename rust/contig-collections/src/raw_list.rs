//! The order-preserving growable list variant.

use contig_common::{Result, verify_index};

/// A growable list that preserves relative element order on removal.
///
/// Shares the doubling growth policy of [`NativeList`](crate::NativeList)
/// but removes by shifting every trailing element down one slot, which is
/// O(n) per removal. Use [`FastRemoveRawList`](crate::FastRemoveRawList)
/// when order does not matter and O(1) removal does.
///
/// Unlike `NativeList` there is no `Pod` bound: this variant never
/// reinterprets memory.
#[derive(Clone, Debug)]
pub struct RawList<T> {
    items: Vec<T>,
}

impl<T> RawList<T> {
    /// Default capacity used by [`RawList::new`].
    pub const DEFAULT_CAPACITY: usize = 4;

    /// Creates a new list preallocated to
    /// [`DEFAULT_CAPACITY`](RawList::DEFAULT_CAPACITY).
    pub fn new() -> RawList<T> {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new list with capacity for at least `capacity` elements.
    /// A capacity of zero does not allocate.
    pub fn with_capacity(capacity: usize) -> RawList<T> {
        RawList {
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
        verify_index!(index, self.items.len());
        self.items[index] = value;
        Ok(())
    }

    /// Removes the first element equal to `value`, shifting every
    /// trailing element down by one. O(n).
    ///
    /// Returns `true` if an element was found and removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().position(|e| e == value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the element at `index`, shifting every trailing element
    /// down by one. O(n). Fails with `IndexOutOfRange` when
    /// `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        verify_index!(index, self.items.len());
        self.items.remove(index);
        Ok(())
    }

    /// Sets the count to zero without releasing the storage.
    pub fn clear(&mut self) {
        self.items.clear();
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

    /// Grows the capacity by doubling (minimum one element) until
    /// `required` elements fit.
    fn grow_for(&mut self, required: usize) {
        let mut new_cap = self.items.capacity().max(1);
        while new_cap < required {
            new_cap *= 2;
        }
        self.items.reserve_exact(new_cap - self.items.len());
    }
}

impl<T: Clone> RawList<T> {
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

impl<T> std::ops::Index<usize> for RawList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> std::ops::IndexMut<usize> for RawList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}

impl<T> Default for RawList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> From<&[T]> for RawList<T> {
    fn from(slice: &[T]) -> Self {
        let mut list = Self::with_capacity(slice.len());
        list.extend_from_slice(slice);
        list
    }
}

impl<'a, T> IntoIterator for &'a RawList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctor_zero_capacity() {
        let list = RawList::<i32>::with_capacity(0);
        assert_eq!(list.capacity(), 0);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_ctor_regular() {
        let list = RawList::<i32>::with_capacity(10);
        assert!(list.capacity() >= 10);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_ctor_default() {
        let list = RawList::<i32>::new();
        assert_eq!(list.capacity(), RawList::<i32>::DEFAULT_CAPACITY);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_add() {
        let mut list = RawList::new();
        list.push(1);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], 1);

        list.push(2);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], 2);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = RawList::new();
        list.push(1);
        list.push(2);
        list.push(3);

        assert!(list.remove(&1));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], 2);
        assert_eq!(list[1], 3);

        assert!(list.remove(&2));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], 3);

        assert!(list.remove(&3));
        assert_eq!(list.len(), 0);

        assert!(!list.remove(&3));
    }

    #[test]
    fn test_remove_at_shifts_trailing() {
        let mut list = RawList::new();
        list.extend_from_slice(&[0, 1, 2, 3, 4, 5]);
        list.remove_at(3).unwrap();
        assert_eq!(list.len(), 5);
        assert_eq!(list.as_slice(), &[0, 1, 2, 4, 5]);
        assert!(list.remove_at(5).is_err());
    }

    #[test]
    fn test_add_range() {
        let mut list = RawList::new();
        list.extend_from_slice(&[0, 1, 2, 3, 4, 5]);
        assert_eq!(list.len(), 6);
        for i in 0..list.len() {
            assert_eq!(list[i], i as i32);
        }
    }

    #[test]
    fn test_growth_doubles() {
        let mut list = RawList::<u8>::with_capacity(0);
        list.push(0);
        assert_eq!(list.capacity(), 1);
        list.push(1);
        assert_eq!(list.capacity(), 2);
        list.push(2);
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn test_works_with_non_pod_elements() {
        let mut list = RawList::new();
        list.push(String::from("a"));
        list.push(String::from("b"));
        assert!(list.remove(&String::from("a")));
        assert_eq!(list[0], "b");
    }

    #[test]
    fn test_checked_access() {
        let mut list = RawList::from(&[1, 2, 3][..]);
        assert_eq!(*list.get(2).unwrap(), 3);
        assert!(list.get(3).is_err());
        list.set(0, 10).unwrap();
        *list.get_mut(1).unwrap() = 20;
        assert_eq!(list.as_slice(), &[10, 20, 3]);
    }
}
