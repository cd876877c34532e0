//! The core growable buffer, [`NativeList<T>`].

use std::marker::PhantomData;

use contig_common::{Result, verify_index, verify_range};

use crate::array_view::ReadOnlyArrayView;
use crate::storage::{ALIGNMENT, AlignedBuf};
use crate::typed_view::TypedView;

/// A growable, contiguous buffer of POD elements with a logical count kept
/// distinct from the allocated capacity.
///
/// `NativeList<T>` is built for high-frequency mutation: amortized O(1)
/// append with doubling growth, bulk append from externally-owned slices in
/// a single contiguous copy, O(1) swap-with-last removal, and direct access
/// to the backing storage. Elements at logical indices `[0, len)` are
/// caller-written; slots between `len` and the capacity hold unspecified
/// (but always initialized) bytes until written.
///
/// Shrinking never deallocates. The [`resize`](NativeList::resize) /
/// [`set_count`](NativeList::set_count) pair differ only in what a grown
/// logical window contains: `set_count` zero-fills every newly exposed
/// slot, `resize` promises nothing about them.
///
/// # Type Requirements
///
/// `T` must implement `bytemuck::Pod`: no padding bytes, every bit pattern
/// valid, `Copy` with no drop glue. Zero-sized types and alignments above
/// 64 bytes are rejected at construction.
pub struct NativeList<T> {
    buf: AlignedBuf,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> NativeList<T> {
    /// Creates a new, empty list without allocating.
    pub fn new() -> NativeList<T> {
        Self::with_capacity(0)
    }

    /// Creates a new list with capacity for at least `capacity` elements.
    ///
    /// A capacity of zero does not allocate.
    pub fn with_capacity(capacity: usize) -> NativeList<T> {
        assert!(size_of::<T>() != 0, "zero-sized element types are not supported");
        assert!(
            align_of::<T>() <= ALIGNMENT,
            "element alignment (is {}) should be <= {ALIGNMENT}",
            align_of::<T>()
        );
        NativeList {
            buf: AlignedBuf::with_capacity(capacity * size_of::<T>()),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of logical elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the list can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity() / size_of::<T>()
    }

    /// Appends an element to the back of the list.
    ///
    /// Doubles the capacity (minimum one element) when the list is full.
    /// Amortized O(1).
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow_for(self.len + 1);
        }
        let offset = self.len * size_of::<T>();
        self.buf.as_bytes_mut()[offset..offset + size_of::<T>()]
            .copy_from_slice(bytemuck::bytes_of(&value));
        self.len += 1;
    }

    /// Bulk-appends the contents of an externally-owned contiguous slice.
    ///
    /// Grows the capacity by the doubling policy until `len + values.len()`
    /// fits (never to the exact requirement), then performs one contiguous
    /// byte copy. Nothing is copied if growth is impossible, so a failed
    /// call never leaves a partial append behind.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        if values.is_empty() {
            return;
        }
        let required = self.len + values.len();
        if required > self.capacity() {
            self.grow_for(required);
        }
        let offset = self.len * size_of::<T>();
        let bytes: &[u8] = bytemuck::cast_slice(values);
        self.buf.as_bytes_mut()[offset..offset + bytes.len()].copy_from_slice(bytes);
        self.len = required;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Fails with `IndexOutOfRange` when `index >= len` (the logical
    /// count, not the capacity).
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        verify_index!(index, self.len);
        Ok(&self.as_slice()[index])
    }

    /// Returns a mutable reference aliasing directly into backing storage.
    ///
    /// Writes through the reference are immediately visible without
    /// re-indexing. Fails with `IndexOutOfRange` when `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index!(index, self.len);
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Overwrites the element at `index`.
    ///
    /// Fails with `IndexOutOfRange` when `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        verify_index!(index, self.len);
        self.as_mut_slice()[index] = value;
        Ok(())
    }

    /// Removes the first element equal to `value` by replacing it with the
    /// last logical element. O(n) search, O(1) removal; does not preserve
    /// order.
    ///
    /// Returns `true` if an element was found and removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                self.swap_remove_with_last(index);
                true
            }
            None => false,
        }
    }

    /// Removes the element at `index` by replacing it with the last
    /// logical element and decrementing the count. O(1); does not preserve
    /// order.
    ///
    /// Fails with `IndexOutOfRange` when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        verify_index!(index, self.len);
        self.swap_remove_with_last(index);
        Ok(())
    }

    fn swap_remove_with_last(&mut self, index: usize) {
        let last = self.len - 1;
        let slice = self.as_mut_slice();
        slice[index] = slice[last];
        self.len = last;
    }

    /// Sets the logical count to `new_count`, growing the capacity first
    /// if needed.
    ///
    /// Slots exposed by growing the count hold unspecified contents (stale
    /// bytes or zeroes); use [`set_count`](NativeList::set_count) for the
    /// zero-filling variant. Shrinking only moves the logical window and
    /// never deallocates.
    pub fn resize(&mut self, new_count: usize) {
        if new_count > self.capacity() {
            self.grow_for(new_count);
        }
        self.len = new_count;
    }

    /// Sets the logical count to `new_count` like
    /// [`resize`](NativeList::resize), but zero-fills every newly exposed
    /// slot when growing.
    pub fn set_count(&mut self, new_count: usize) {
        let old_count = self.len;
        self.resize(new_count);
        if new_count > old_count {
            self.buf
                .zero_range(old_count * size_of::<T>()..new_count * size_of::<T>());
        }
    }

    /// Sets the logical count to zero without touching the storage.
    ///
    /// Contents of the previously used slots are unspecified until
    /// rewritten.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Returns the index of the first element equal to `value` under value
    /// equality, or `None` if no element matches.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|e| e == value)
    }

    /// Returns the index of the first element whose stored bytes match
    /// `value` bit for bit, or `None` if no element matches.
    ///
    /// Unlike [`index_of`](NativeList::index_of) this compares raw bit
    /// patterns: `-0.0` does not match `0.0`, and a NaN matches the
    /// identical NaN payload.
    pub fn index_of_bytes(&self, value: &T) -> Option<usize> {
        let pattern = bytemuck::bytes_of(value);
        self.as_slice()
            .iter()
            .position(|e| bytemuck::bytes_of(e) == pattern)
    }

    /// Returns a point-in-time read-only window over all logical elements.
    pub fn read_only_view(&self) -> ReadOnlyArrayView<'_, T> {
        ReadOnlyArrayView::new(self.as_slice())
    }

    /// Returns a point-in-time read-only window over
    /// `[start, start + length)`.
    ///
    /// Fails with `RangeOutOfBounds` when `start + length` exceeds the
    /// current count.
    pub fn read_only_view_range(
        &self,
        start: usize,
        length: usize,
    ) -> Result<ReadOnlyArrayView<'_, T>> {
        verify_range!(start, length, self.len);
        Ok(ReadOnlyArrayView::new(&self.as_slice()[start..start + length]))
    }

    /// Returns a reinterpretation view grouping every
    /// `size_of::<V>() / size_of::<T>()` consecutive elements into one `V`.
    ///
    /// Fails with `ViewSizeMismatch` unless `size_of::<V>()` is a nonzero
    /// exact multiple of `size_of::<T>()`.
    pub fn view<V: bytemuck::Pod>(&self) -> Result<TypedView<'_, T, V>> {
        TypedView::new(self)
    }

    /// Returns a restartable iterator over the logical elements in index
    /// order. See [`Iter::reset`].
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slice: self.as_slice(),
            pos: 0,
        }
    }

    /// Returns the logical elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        if self.len == 0 {
            return &[];
        }
        bytemuck::cast_slice(&self.buf.as_bytes()[..self.len * size_of::<T>()])
    }

    /// Returns the logical elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.len == 0 {
            return &mut [];
        }
        bytemuck::cast_slice_mut(&mut self.buf.as_bytes_mut()[..self.len * size_of::<T>()])
    }

    /// Returns a raw pointer to the backing storage.
    ///
    /// Any growth-triggering operation reallocates and invalidates the
    /// pointer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    /// Returns a mutable raw pointer to the backing storage.
    ///
    /// Any growth-triggering operation reallocates and invalidates the
    /// pointer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }

    /// Grows the capacity by doubling (minimum one element) until
    /// `required` elements fit.
    fn grow_for(&mut self, required: usize) {
        let mut new_cap = self.capacity().max(1);
        while new_cap < required {
            new_cap *= 2;
        }
        self.buf.grow_to(new_cap * size_of::<T>());
    }
}

impl<T: bytemuck::Pod> std::ops::Index<usize> for NativeList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T: bytemuck::Pod> std::ops::IndexMut<usize> for NativeList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: bytemuck::Pod> std::ops::Deref for NativeList<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T: bytemuck::Pod> std::ops::DerefMut for NativeList<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: bytemuck::Pod + std::fmt::Debug> std::fmt::Debug for NativeList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T: bytemuck::Pod> Clone for NativeList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len);
        list.extend_from_slice(self.as_slice());
        list
    }
}

impl<T: bytemuck::Pod> Default for NativeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: bytemuck::Pod> From<&[T]> for NativeList<T> {
    fn from(slice: &[T]) -> Self {
        let mut list = Self::with_capacity(slice.len());
        list.extend_from_slice(slice);
        list
    }
}

impl<T: bytemuck::Pod> From<Vec<T>> for NativeList<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from(vec.as_slice())
    }
}

impl<T: bytemuck::Pod> Extend<T> for NativeList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: bytemuck::Pod> IntoIterator for &'a NativeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A restartable iterator over a [`NativeList`]'s logical elements.
///
/// Holds a borrow of the list, so the list cannot mutate while the
/// iterator is alive.
pub struct Iter<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<T> Iter<'_, T> {
    /// Rewinds the iterator to the first element.
    pub fn reset(&mut self) {
        self.pos = 0;
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.slice.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slice.len() - self.pos.min(self.slice.len());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
