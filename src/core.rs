//! Core traits and constants for idxsort.
//!
//! This module defines:
//! - [`IndexComparator`] and [`Swapper`]: the two operations the sorting engine drives.
//! - [`IndexSortable`]: a collection that can order and exchange its own positions.
//! - The size thresholds the algorithms switch strategy at.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// Ranges shorter than this are insertion sorted.
pub const SMALL_SORT_THRESHOLD: usize = 7;

/// Ranges longer than this pick the quicksort pivot as a pseudo-median of 9.
pub const PSEUDO_MEDIAN_THRESHOLD: usize = 40;

/// A three-way order over positions of some indexable structure.
///
/// The engine never sees elements, only the indices passed here. The order must be a
/// consistent total preorder for the duration of one sort call, and may only change as
/// a result of the engine's own [`Swapper::swap`] calls. A comparator that breaks this
/// contract yields an unspecified (but memory-safe) ordering.
///
/// Any `FnMut(usize, usize) -> Ordering` closure is an `IndexComparator`.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use idxsort::prelude::*;
///
/// let mut data = [3, 1, 2];
/// let cells = Cell::from_mut(&mut data[..]).as_slice_of_cells();
///
/// quick_sort(
///     0,
///     cells.len(),
///     &mut |a: usize, b: usize| cells[a].get().cmp(&cells[b].get()),
///     &mut |a: usize, b: usize| cells[a].swap(&cells[b]),
/// );
///
/// assert_eq!(data, [1, 2, 3]);
/// ```
pub trait IndexComparator {
    /// Compares the elements currently at positions `a` and `b`.
    fn compare(&mut self, a: usize, b: usize) -> Ordering;
}

impl<F> IndexComparator for F
where
    F: FnMut(usize, usize) -> Ordering,
{
    #[inline(always)]
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        self(a, b)
    }
}

/// Exchanges the contents of two positions.
///
/// Swapping `a, b` twice in a row must be the identity.
pub trait Swapper {
    /// Swaps whatever currently occupies positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);
}

impl<F> Swapper for F
where
    F: FnMut(usize, usize),
{
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self(a, b)
    }
}

/// A collection that knows how to order and exchange its own positions.
///
/// This is the single-object counterpart of an [`IndexComparator`] and [`Swapper`] pair.
/// Implement it for structures where both operations need the same data, such as parallel
/// arrays or columnar tables, and sort them with [`sort_stable`](crate::algo::sort_stable)
/// or [`sort_unstable`](crate::algo::sort_unstable).
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use idxsort::core::IndexSortable;
///
/// // Two columns kept in lockstep, ordered by `ids`.
/// struct Table {
///     ids: Vec<u32>,
///     names: Vec<String>,
/// }
///
/// impl IndexSortable for Table {
///     fn compare(&self, a: usize, b: usize) -> Ordering {
///         self.ids[a].cmp(&self.ids[b])
///     }
///
///     fn swap(&mut self, a: usize, b: usize) {
///         self.ids.swap(a, b);
///         self.names.swap(a, b);
///     }
///
///     fn len(&self) -> usize {
///         self.ids.len()
///     }
/// }
/// ```
pub trait IndexSortable {
    /// Compares the elements at positions `a` and `b`.
    fn compare(&self, a: usize, b: usize) -> Ordering;

    /// Exchanges the elements at positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);

    /// Returns the number of positions in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> IndexSortable for [T] {
    fn compare(&self, a: usize, b: usize) -> Ordering {
        self[a].cmp(&self[b])
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b)
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T: Ord> IndexSortable for Vec<T> {
    fn compare(&self, a: usize, b: usize) -> Ordering {
        self[a].cmp(&self[b])
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

// VecDeque has O(1) random access and its own swap, so it sorts without being made contiguous.
impl<T: Ord> IndexSortable for VecDeque<T> {
    fn compare(&self, a: usize, b: usize) -> Ordering {
        self[a].cmp(&self[b])
    }

    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}
