pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Verifies that `index < count`, early-returning
/// [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
/// from the enclosing function on violation.
///
/// The check is governed by the `validate` feature of the expanding crate:
/// with `validate` enabled the violation is a checked error, without it the
/// same predicate becomes a `debug_assert!` and release builds skip it.
#[macro_export]
macro_rules! verify_index {
    ($index:expr, $count:expr) => {{
        let index = $index;
        let count = $count;
        #[cfg(feature = "validate")]
        if index >= count {
            return Err($crate::result::index_out_of_range(index, count));
        }
        #[cfg(not(feature = "validate"))]
        debug_assert!(
            index < count,
            "index (is {index}) should be < count (is {count})"
        );
    }};
}

/// Verifies that `start + length` does not exceed `count` (overflow-safe),
/// early-returning
/// [`ErrorKind::RangeOutOfBounds`](crate::error::ErrorKind::RangeOutOfBounds)
/// from the enclosing function on violation.
///
/// Governed by the `validate` feature the same way as [`verify_index!`].
#[macro_export]
macro_rules! verify_range {
    ($start:expr, $length:expr, $count:expr) => {{
        let start = $start;
        let length = $length;
        let count = $count;
        #[cfg(feature = "validate")]
        if $crate::result::range_exceeds(start, length, count) {
            return Err($crate::result::range_out_of_bounds(start, length, count));
        }
        #[cfg(not(feature = "validate"))]
        debug_assert!(
            !$crate::result::range_exceeds(start, length, count),
            "range [{start}, {start} + {length}) should be within count {count}"
        );
    }};
}

/// The shared range predicate behind [`verify_range!`]: true when
/// `start + length` overflows or exceeds `count`.
#[inline]
pub fn range_exceeds(start: usize, length: usize, count: usize) -> bool {
    start.checked_add(length).is_none_or(|end| end > count)
}

#[cold]
pub fn index_out_of_range(index: usize, count: usize) -> crate::error::Error {
    crate::error::Error::index_out_of_range(index, count)
}

#[cold]
pub fn range_out_of_bounds(start: usize, length: usize, count: usize) -> crate::error::Error {
    crate::error::Error::range_out_of_bounds(start, length, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_exceeds() {
        assert!(!range_exceeds(0, 0, 0));
        assert!(!range_exceeds(2, 3, 5));
        assert!(range_exceeds(2, 4, 5));
        assert!(range_exceeds(usize::MAX, 1, 5));
    }
}
