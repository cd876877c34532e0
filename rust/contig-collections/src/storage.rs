//! Aligned byte backing for [`NativeList`](crate::NativeList).
//!
//! Every capacity byte is initialized (zeroed at allocation, preserved on
//! growth), which is what lets the list expose a grown logical window with
//! "unspecified" contents without any `unsafe`: a reader sees stale bytes
//! or zeroes, never uninitialized memory.

/// Start-of-storage alignment, in bytes. Covers every practical POD
/// element type, SIMD vectors included.
pub(crate) const ALIGNMENT: usize = 64;

/// A fixed-capacity, 64-byte-aligned byte allocation.
///
/// The buffer tracks capacity only; the logical element count lives in the
/// owning collection. Growth reallocates, copies the old capacity region
/// and leaves the new tail zeroed.
pub(crate) struct AlignedBuf {
    /// Backing allocation, possibly with padding before `start`.
    /// Always fully initialized: `bytes.len() == start + cap` (or 0).
    bytes: Vec<u8>,
    /// Offset of the first aligned byte.
    start: usize,
    /// Usable capacity in bytes.
    cap: usize,
}

impl AlignedBuf {
    /// Creates a buffer with no allocation.
    pub fn empty() -> AlignedBuf {
        AlignedBuf {
            bytes: Vec::new(),
            start: 0,
            cap: 0,
        }
    }

    /// Creates a zero-filled buffer with the given capacity in bytes.
    pub fn with_capacity(cap: usize) -> AlignedBuf {
        if cap == 0 {
            return AlignedBuf::empty();
        }
        let bytes = vec![0u8; cap + ALIGNMENT];
        let misalign = bytes.as_ptr() as usize % ALIGNMENT;
        let start = if misalign == 0 { 0 } else { ALIGNMENT - misalign };
        AlignedBuf { bytes, start, cap }
    }

    /// Usable capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The full capacity region, immutable.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[self.start..self.start + self.cap]
    }

    /// The full capacity region, mutable.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[self.start..self.start + self.cap]
    }

    /// Grows the buffer to `new_cap` bytes, preserving the old capacity
    /// region. The newly added tail is zeroed. No-op if the buffer is
    /// already large enough.
    pub fn grow_to(&mut self, new_cap: usize) {
        if new_cap <= self.cap {
            return;
        }
        let mut grown = AlignedBuf::with_capacity(new_cap);
        grown.as_bytes_mut()[..self.cap].copy_from_slice(self.as_bytes());
        *self = grown;
    }

    /// Zero-fills the given byte range of the capacity region.
    pub fn zero_range(&mut self, range: std::ops::Range<usize>) {
        self.as_bytes_mut()[range].fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let buf = AlignedBuf::empty();
        assert_eq!(buf.capacity(), 0);
        assert!(buf.as_bytes().is_empty());
    }

    #[test]
    fn test_alignment() {
        for cap in [1, 7, 64, 1000] {
            let buf = AlignedBuf::with_capacity(cap);
            assert_eq!(buf.capacity(), cap);
            assert_eq!(buf.as_bytes().as_ptr() as usize % ALIGNMENT, 0);
            assert!(buf.as_bytes().iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_grow_preserves_content() {
        let mut buf = AlignedBuf::with_capacity(8);
        buf.as_bytes_mut().copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        buf.grow_to(32);
        assert_eq!(buf.capacity(), 32);
        assert_eq!(buf.as_bytes().as_ptr() as usize % ALIGNMENT, 0);
        assert_eq!(&buf.as_bytes()[..8], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(buf.as_bytes()[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_range() {
        let mut buf = AlignedBuf::with_capacity(4);
        buf.as_bytes_mut().copy_from_slice(&[9, 9, 9, 9]);
        buf.zero_range(1..3);
        assert_eq!(buf.as_bytes(), &[9, 0, 0, 9]);
    }
}
