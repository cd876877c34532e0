//! Contiguous, index-addressed collections for high-frequency mutation.
//!
//! The crate is built around [`NativeList<T>`], a growable buffer that keeps
//! a logical element count distinct from its allocated capacity and exposes
//! its backing storage directly: bulk append from externally-owned slices,
//! in-place mutable access, swap-with-last removal, and read-only lenses
//! over the same memory. [`TypedView`] reinterprets runs of elements as a
//! wider element shape without copying, and [`sort_paired`] reorders two
//! independently-typed buffers under one ordering key.
//!
//! Two sibling variants cover the remaining removal policies:
//! [`RawList<T>`] preserves relative order on removal (shifting, O(n)) and
//! [`FastRemoveRawList<T>`] trades order for O(1) swap-with-last removal.
//!
//! # Element types
//!
//! `NativeList` stores `bytemuck::Pod` elements: no padding, every bit
//! pattern valid, `Copy` with no drop glue. This is what makes raw bulk
//! append and bit-for-bit reinterpretation sound. The two list variants
//! have no such bound.
//!
//! # Validation modes
//!
//! With the default `validate` feature, contract violations (out-of-range
//! indices, bad sub-ranges) surface as [`contig_common::Error`] values.
//! Without it, the same predicates become debug assertions and release
//! builds run unchecked.

mod array_view;
mod fast_remove_list;
mod native_list;
mod raw_list;
mod sort;
mod storage;
mod typed_view;

pub use array_view::ReadOnlyArrayView;
pub use fast_remove_list::FastRemoveRawList;
pub use native_list::{Iter, NativeList};
pub use raw_list::RawList;
pub use sort::sort_paired;
pub use typed_view::TypedView;

pub use contig_common::{Error, ErrorKind, Result};
