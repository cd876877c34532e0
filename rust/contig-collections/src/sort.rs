//! Paired sorting of two correlated buffers.

use std::cmp::Ordering;

use contig_common::{Result, verify_range};

use crate::native_list::NativeList;

/// Sorts `keys[start..start + length]` by `compare` and applies the
/// identical permutation to the same sub-range of `items`, preserving the
/// key-to-item correspondence by index.
///
/// After the call, `items[i]` is the item that was originally paired with
/// the key now at `keys[i]`, for every `i` in the range. The sort is not
/// stable; ties break however the underlying unstable sort breaks them,
/// identically for both buffers (one index permutation drives both
/// reorders).
///
/// Fails with `RangeOutOfBounds` when `start + length` exceeds the count
/// of either buffer; nothing is reordered on a rejected call.
pub fn sort_paired<K, V, F>(
    keys: &mut NativeList<K>,
    items: &mut NativeList<V>,
    start: usize,
    length: usize,
    mut compare: F,
) -> Result<()>
where
    K: bytemuck::Pod,
    V: bytemuck::Pod,
    F: FnMut(&K, &K) -> Ordering,
{
    verify_range!(start, length, keys.len());
    verify_range!(start, length, items.len());
    if length < 2 {
        return Ok(());
    }

    let key_range = &mut keys.as_mut_slice()[start..start + length];
    let mut order: Vec<usize> = (0..length).collect();
    order.sort_unstable_by(|&a, &b| compare(&key_range[a], &key_range[b]));

    apply_permutation(key_range, &order);
    apply_permutation(&mut items.as_mut_slice()[start..start + length], &order);
    Ok(())
}

/// Reorders `slice` so that position `i` receives the element previously
/// at `order[i]`.
fn apply_permutation<T: Copy>(slice: &mut [T], order: &[usize]) {
    let gathered: Vec<T> = order.iter().map(|&i| slice[i]).collect();
    slice.copy_from_slice(&gathered);
}
