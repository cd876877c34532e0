//! Reinterpretation view over a [`NativeList`]'s storage.

use std::marker::PhantomData;

use contig_common::{Error, Result, verify_index};

use crate::native_list::NativeList;

/// A read-only lens that reinterprets every run of
/// `k = size_of::<V>() / size_of::<T>()` consecutive `T` elements of a
/// [`NativeList<T>`] as one logical `V`.
///
/// The view owns no storage and caches nothing: its count is derived from
/// the owner's current count by floor division on every call, so appending
/// exactly `k` elements to the owner raises the count of a freshly
/// obtained view by one, and appending fewer leaves it unchanged. The view
/// borrows the owner immutably; it is zero-cost to recreate via
/// [`NativeList::view`] after each mutation.
///
/// Reads are bit-for-bit reinterpretations performed by value, so `V`'s
/// alignment never constrains the owner's storage.
pub struct TypedView<'a, T, V> {
    owner: &'a NativeList<T>,
    ratio: usize,
    _marker: PhantomData<V>,
}

impl<'a, T: bytemuck::Pod, V: bytemuck::Pod> TypedView<'a, T, V> {
    /// Fails with `ViewSizeMismatch` unless `size_of::<V>()` is a nonzero
    /// exact multiple of `size_of::<T>()`. Always checked, in both
    /// validation modes.
    pub(crate) fn new(owner: &'a NativeList<T>) -> Result<TypedView<'a, T, V>> {
        let element_size = size_of::<T>();
        let view_size = size_of::<V>();
        if view_size == 0 || view_size % element_size != 0 {
            return Err(Error::view_size_mismatch(view_size, element_size));
        }
        Ok(TypedView {
            owner,
            ratio: view_size / element_size,
            _marker: PhantomData,
        })
    }

    /// Returns the number of complete `V` groups currently in the owner:
    /// `floor(owner.len() / k)`, evaluated at call time.
    #[inline]
    pub fn len(&self) -> usize {
        self.owner.len() / self.ratio
    }

    /// Returns `true` if the owner holds no complete group.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of owner elements per view element.
    #[inline]
    pub fn ratio(&self) -> usize {
        self.ratio
    }

    /// Returns the `index`-th group of `k` consecutive owner elements,
    /// reinterpreted bit-for-bit as a `V`.
    ///
    /// Fails with `IndexOutOfRange` when `index` is outside the current
    /// derived count.
    pub fn get(&self, index: usize) -> Result<V> {
        verify_index!(index, self.len());
        let start = index * self.ratio;
        let group = &self.owner.as_slice()[start..start + self.ratio];
        Ok(bytemuck::pod_read_unaligned(bytemuck::cast_slice(group)))
    }
}

impl<T, V> Clone for TypedView<'_, T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for TypedView<'_, T, V> {}
