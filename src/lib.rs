//! # Idxsort
//!
//! `idxsort` is a type-agnostic sorting engine. Its algorithms never see elements: they sort a
//! range of **positions**, asking the caller to compare two positions and to swap two positions.
//! One implementation therefore sorts parallel arrays, columnar tables, permutation vectors or
//! off-heap buffers without knowing their element type or layout.
//!
//! ## Key Features
//!
//! - **Two algorithms**: [`quick_sort`], a tuned Bentley-McIlroy quicksort with three-way
//!   partitioning, and [`merge_sort`], a stable mergesort.
//! - **Zero allocation**: quicksort partitions in place and the mergesort merges by block
//!   rotation, so neither needs a buffer.
//! - **Duplicate friendly**: elements equal to the pivot are gathered once and never revisited,
//!   so inputs with few distinct keys sort in near-linear time.
//! - **Bounded stack**: quicksort recurses into the smaller partition only.
//!
//! ## Usage
//!
//! ### Closures
//!
//! The comparator and swapper are usually closures over shared state. [`Cell`](std::cell::Cell)
//! slices work well for `Copy` data:
//!
//! ```rust
//! use std::cell::Cell;
//! use idxsort::merge_sort;
//!
//! let mut keys = [5, 3, 3, 1, 4, 1];
//! let cells = Cell::from_mut(&mut keys[..]).as_slice_of_cells();
//!
//! merge_sort(
//!     0,
//!     cells.len(),
//!     &mut |a: usize, b: usize| cells[a].get().cmp(&cells[b].get()),
//!     &mut |a: usize, b: usize| cells[a].swap(&cells[b]),
//! );
//!
//! assert_eq!(keys, [1, 1, 3, 3, 4, 5]);
//! ```
//!
//! ### Custom Types
//!
//! When comparing and swapping need the same data mutably, implement [`IndexSortable`] and use
//! [`sort_stable`] or [`sort_unstable`]. Slices, `Vec` and `VecDeque` of `Ord` elements already
//! implement it.
//!
//! ```rust
//! use std::cmp::Ordering;
//! use idxsort::{IndexSortable, sort_stable};
//!
//! // Scores and names stored as separate columns.
//! struct Columns {
//!     scores: Vec<u32>,
//!     names: Vec<&'static str>,
//! }
//!
//! impl IndexSortable for Columns {
//!     fn compare(&self, a: usize, b: usize) -> Ordering {
//!         self.scores[a].cmp(&self.scores[b])
//!     }
//!
//!     fn swap(&mut self, a: usize, b: usize) {
//!         self.scores.swap(a, b);
//!         self.names.swap(a, b);
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.scores.len()
//!     }
//! }
//!
//! let mut table = Columns {
//!     scores: vec![30, 10, 20],
//!     names: vec!["carol", "alice", "bob"],
//! };
//! sort_stable(&mut table);
//!
//! assert_eq!(table.names, vec!["alice", "bob", "carol"]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Quicksort**: O(n log n) expected; O(n²) only on adversarially built inputs, which the
//!   pseudo-median-of-9 pivot makes unlikely.
//! - **Mergesort**: O(n log² n) comparisons and swaps worst case, O(n) on already sorted input.
//! - **Memory Overhead**: none beyond recursion bookkeeping.
//!
//! The engine trusts its range arguments. APIs that accept ranges from elsewhere should check
//! them with [`range::ensure_from_to`] or [`range::ensure_offset_length`] first.

pub mod algo;
pub mod core;
pub mod range;
pub use algo::{
    lower_bound, merge_sort, merge_sort_range, quick_sort, quick_sort_range, sort_stable,
    sort_unstable, sorted_indices, upper_bound,
};
pub use crate::core::{IndexComparator, IndexSortable, Swapper};
pub use range::{RangeError, RangeErrorKind, ensure_from_to, ensure_offset_length};

pub mod prelude {
    pub use crate::algo::{
        lower_bound, merge_sort, merge_sort_range, quick_sort, quick_sort_range, sort_stable,
        sort_unstable, sorted_indices, upper_bound,
    };
    pub use crate::core::{IndexComparator, IndexSortable, Swapper};
    pub use crate::range::{RangeError, RangeErrorKind, ensure_from_to, ensure_offset_length};
}
