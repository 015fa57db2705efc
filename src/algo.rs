//! Core sorting algorithms (tuned quicksort and in-place stable mergesort).
//!
//! Both algorithms work on index ranges rather than slices. Elements are never read or moved
//! directly: ordering goes through an [`IndexComparator`] and movement through a [`Swapper`],
//! so the same code sorts parallel arrays, columnar tables, permutation vectors or anything
//! else with positional access.
//!
//! - [`quick_sort`]: Bentley-McIlroy three-way quicksort with a pseudo-median-of-9 pivot.
//!   Not stable.
//! - [`merge_sort`]: mergesort whose merge step rotates blocks instead of copying, so no
//!   auxiliary storage is allocated. Stable.
//! - **Insertion Sort**: both fall back to it below [`SMALL_SORT_THRESHOLD`] elements.
//!
//! None of these functions validate their range. See [`crate::range`] for the checks callers
//! should run first, or use the `*_range` entry points which run them.

use crate::core::{
    IndexComparator, IndexSortable, PSEUDO_MEDIAN_THRESHOLD, SMALL_SORT_THRESHOLD, Swapper,
};
use crate::range::{RangeError, check_bounds};
use std::cell::Cell;
use std::cmp::Ordering;

/// Sorts the positions `[from, to)` with a tuned quicksort.
///
/// The algorithm is adapted from Bentley and McIlroy's "Engineering a Sort Function": a
/// three-way partition collects elements equal to the pivot so they are never visited again,
/// and large ranges pick the pivot as a pseudo-median of 9. Recursion goes into the smaller
/// side only, so stack depth stays logarithmic.
///
/// Equal elements may be reordered. The range is not validated.
///
/// # Arguments
///
/// * `from` - First position to sort (inclusive).
/// * `to` - Last position to sort (exclusive).
/// * `comparator` - Orders two positions.
/// * `swapper` - Exchanges two positions.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use idxsort::quick_sort;
///
/// let data = RefCell::new(vec![5, 3, 9, 1]);
/// quick_sort(
///     0,
///     4,
///     &mut |a: usize, b: usize| {
///         let v = data.borrow();
///         v[a].cmp(&v[b])
///     },
///     &mut |a: usize, b: usize| data.borrow_mut().swap(a, b),
/// );
///
/// assert_eq!(data.into_inner(), vec![1, 3, 5, 9]);
/// ```
pub fn quick_sort<C, S>(from: usize, to: usize, comparator: &mut C, swapper: &mut S)
where
    C: IndexComparator + ?Sized,
    S: Swapper + ?Sized,
{
    let mut ops = Delegates {
        comparator,
        swapper,
    };
    quick_sort_impl(&mut ops, from, to);
}

/// Sorts the positions `[from, to)` stably, without allocating.
///
/// This is a mergesort where the merge step is skipped when the two halves are already in
/// order, which makes sorted and nearly-sorted inputs run in linear time. The merge itself
/// works in place by block rotation, costing O(n log² n) in the worst case.
///
/// Equal elements keep their relative order. The range is not validated.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use idxsort::merge_sort;
///
/// let mut pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// let cells = Cell::from_mut(&mut pairs[..]).as_slice_of_cells();
///
/// merge_sort(
///     0,
///     cells.len(),
///     &mut |a: usize, b: usize| cells[a].get().0.cmp(&cells[b].get().0),
///     &mut |a: usize, b: usize| cells[a].swap(&cells[b]),
/// );
///
/// assert_eq!(pairs, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn merge_sort<C, S>(from: usize, to: usize, comparator: &mut C, swapper: &mut S)
where
    C: IndexComparator + ?Sized,
    S: Swapper + ?Sized,
{
    let mut ops = Delegates {
        comparator,
        swapper,
    };
    merge_sort_impl(&mut ops, from, to);
}

/// Sorts a whole collection with [`quick_sort`].
///
/// # Examples
///
/// ```
/// use idxsort::sort_unstable;
///
/// let mut data = vec!["banana", "apple", "cherry"];
/// sort_unstable(&mut data);
///
/// assert_eq!(data, vec!["apple", "banana", "cherry"]);
/// ```
pub fn sort_unstable<T: IndexSortable + ?Sized>(data: &mut T) {
    let len = data.len();
    quick_sort_impl(&mut Collection(data), 0, len);
}

/// Sorts a whole collection with [`merge_sort`].
pub fn sort_stable<T: IndexSortable + ?Sized>(data: &mut T) {
    let len = data.len();
    merge_sort_impl(&mut Collection(data), 0, len);
}

/// Sorts the positions `[from, to)` of a collection with [`quick_sort`], after checking the
/// range fits.
///
/// # Errors
///
/// Returns the [`RangeError`] reported by [`ensure_from_to`](crate::range::ensure_from_to);
/// the collection is untouched in that case.
pub fn quick_sort_range<T: IndexSortable + ?Sized>(
    data: &mut T,
    from: usize,
    to: usize,
) -> Result<(), RangeError> {
    check_bounds(data.len(), from, to)?;
    quick_sort_impl(&mut Collection(data), from, to);
    Ok(())
}

/// Sorts the positions `[from, to)` of a collection with [`merge_sort`], after checking the
/// range fits.
///
/// # Errors
///
/// Returns the [`RangeError`] reported by [`ensure_from_to`](crate::range::ensure_from_to);
/// the collection is untouched in that case.
pub fn merge_sort_range<T: IndexSortable + ?Sized>(
    data: &mut T,
    from: usize,
    to: usize,
) -> Result<(), RangeError> {
    check_bounds(data.len(), from, to)?;
    merge_sort_impl(&mut Collection(data), from, to);
    Ok(())
}

/// Returns the stable sorted order of a collection's positions without modifying it.
///
/// A permutation vector is sorted with [`merge_sort`], comparing through `provider`.
///
/// # Returns
///
/// A vector of indices such that `provider.compare(indices[i], indices[i + 1])` is never
/// `Greater`, with ties kept in ascending index order.
///
/// # Examples
///
/// ```
/// use idxsort::sorted_indices;
///
/// let data = vec![30, 10, 20, 10];
/// assert_eq!(sorted_indices(&data), vec![1, 3, 2, 0]);
/// ```
pub fn sorted_indices<T: IndexSortable + ?Sized>(provider: &T) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..provider.len()).collect();
    let cells = Cell::from_mut(&mut permutation[..]).as_slice_of_cells();

    merge_sort(
        0,
        cells.len(),
        &mut |a: usize, b: usize| provider.compare(cells[a].get(), cells[b].get()),
        &mut |a: usize, b: usize| cells[a].swap(&cells[b]),
    );

    permutation
}

/// Returns the first position in `[low, high)` whose element is not less than the element at
/// `needle`, or `high` if there is none.
///
/// `[low, high)` must be sorted and must not contain `needle`. Inserting the needle's element
/// at the returned position keeps the range sorted and places it before any equal elements.
///
/// # Panics
///
/// Panics if `low > high`.
pub fn lower_bound<C>(mut low: usize, high: usize, needle: usize, comparator: &mut C) -> usize
where
    C: IndexComparator + ?Sized,
{
    assert!(low <= high, "window start ({}) is past its end ({})", low, high);
    let mut len = high - low;
    while len > 0 {
        let half = len / 2;
        let middle = low + half;
        if comparator.compare(middle, needle) == Ordering::Less {
            low = middle + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    low
}

/// Returns the first position in `[low, high)` whose element is greater than the element at
/// `needle`, or `high` if there is none.
///
/// Like [`lower_bound`], but the insertion point lies after any equal elements.
///
/// # Panics
///
/// Panics if `low > high`.
pub fn upper_bound<C>(mut low: usize, high: usize, needle: usize, comparator: &mut C) -> usize
where
    C: IndexComparator + ?Sized,
{
    assert!(low <= high, "window start ({}) is past its end ({})", low, high);
    let mut len = high - low;
    while len > 0 {
        let half = len / 2;
        let middle = low + half;
        if comparator.compare(needle, middle) == Ordering::Less {
            len = half;
        } else {
            low = middle + 1;
            len -= half + 1;
        }
    }
    low
}

/// Comparator and swapper supplied as two separate objects.
struct Delegates<'a, C: ?Sized, S: ?Sized> {
    comparator: &'a mut C,
    swapper: &'a mut S,
}

impl<C: IndexComparator + ?Sized, S: ?Sized> IndexComparator for Delegates<'_, C, S> {
    #[inline(always)]
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        C::compare(self.comparator, a, b)
    }
}

impl<C: ?Sized, S: Swapper + ?Sized> Swapper for Delegates<'_, C, S> {
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        S::swap(self.swapper, a, b)
    }
}

/// Both operations served by one [`IndexSortable`].
struct Collection<'a, T: ?Sized>(&'a mut T);

impl<T: IndexSortable + ?Sized> IndexComparator for Collection<'_, T> {
    #[inline(always)]
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        T::compare(self.0, a, b)
    }
}

impl<T: IndexSortable + ?Sized> Swapper for Collection<'_, T> {
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        T::swap(self.0, a, b)
    }
}

/// Stable insertion sort using adjacent swaps only.
fn insertion_sort<O>(ops: &mut O, from: usize, to: usize)
where
    O: IndexComparator + Swapper + ?Sized,
{
    for i in from + 1..to {
        let mut j = i;
        while j > from && ops.compare(j - 1, j) == Ordering::Greater {
            ops.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Returns whichever of `a`, `b`, `c` holds the median element.
#[inline]
pub(crate) fn med3<C>(comparator: &mut C, a: usize, b: usize, c: usize) -> usize
where
    C: IndexComparator + ?Sized,
{
    let ab = comparator.compare(a, b);
    let ac = comparator.compare(a, c);
    let bc = comparator.compare(b, c);

    if ab == Ordering::Less {
        if bc == Ordering::Less {
            b
        } else if ac == Ordering::Less {
            c
        } else {
            a
        }
    } else if bc == Ordering::Greater {
        b
    } else if ac == Ordering::Greater {
        c
    } else {
        a
    }
}

/// Swaps `[from, from + len)` with `[other, other + len)`. The ranges must not overlap.
#[inline]
pub(crate) fn vec_swap<S>(swapper: &mut S, from: usize, other: usize, len: usize)
where
    S: Swapper + ?Sized,
{
    for i in 0..len {
        swapper.swap(from + i, other + i);
    }
}

fn quick_sort_impl<O>(ops: &mut O, mut from: usize, mut to: usize)
where
    O: IndexComparator + Swapper + ?Sized,
{
    loop {
        let len = to - from;

        if len < SMALL_SORT_THRESHOLD {
            insertion_sort(ops, from, to);
            return;
        }

        // Choose the pivot position `m`. Middle element for the smallest ranges.
        let mut m = from + len / 2;
        if len > SMALL_SORT_THRESHOLD {
            let mut l = from;
            let mut n = to - 1;
            if len > PSEUDO_MEDIAN_THRESHOLD {
                let s = len / 8;
                l = med3(ops, l, l + s, l + 2 * s);
                m = med3(ops, m - s, m, m + s);
                n = med3(ops, n - 2 * s, n - s, n);
            }
            m = med3(ops, l, m, n);
        }

        // Establish `=* <* >* =*` over [from, to). `a` and `b` advance from the left; `c` and
        // `d` are one past the right-hand cursors so they never step below zero.
        //
        // The pivot is compared by position, and equal elements are swapped to the ends as they
        // are found. Whenever such a swap moves the element at `m`, `m` follows it.
        let mut a = from;
        let mut b = from;
        let mut c = to;
        let mut d = to;
        loop {
            while b < c {
                let order = ops.compare(b, m);
                if order == Ordering::Greater {
                    break;
                }
                if order == Ordering::Equal {
                    if a == m {
                        m = b;
                    } else if b == m {
                        m = a;
                    }
                    ops.swap(a, b);
                    a += 1;
                }
                b += 1;
            }
            while c > b {
                let order = ops.compare(c - 1, m);
                if order == Ordering::Less {
                    break;
                }
                if order == Ordering::Equal {
                    if c - 1 == m {
                        m = d - 1;
                    } else if d - 1 == m {
                        m = c - 1;
                    }
                    ops.swap(c - 1, d - 1);
                    d -= 1;
                }
                c -= 1;
            }
            if b >= c {
                break;
            }
            // Both elements compare strictly against the pivot, so neither is `m`.
            ops.swap(b, c - 1);
            b += 1;
            c -= 1;
        }

        // Swap the equal runs from both ends into the middle.
        let s = (a - from).min(b - a);
        vec_swap(ops, from, b - s, s);
        let s = (d - c).min(to - d);
        vec_swap(ops, b, to - s, s);

        let less = b - a;
        let greater = d - c;
        let (left, right) = ((from, from + less), (to - greater, to));

        // Recurse into the smaller side, loop on the larger one.
        let (small, large) = if less <= greater {
            (left, right)
        } else {
            (right, left)
        };
        if small.1 - small.0 > 1 {
            quick_sort_impl(ops, small.0, small.1);
        }
        if large.1 - large.0 <= 1 {
            return;
        }
        from = large.0;
        to = large.1;
    }
}

fn merge_sort_impl<O>(ops: &mut O, from: usize, to: usize)
where
    O: IndexComparator + Swapper + ?Sized,
{
    let len = to - from;

    if len < SMALL_SORT_THRESHOLD {
        insertion_sort(ops, from, to);
        return;
    }

    let mid = from + len / 2;
    merge_sort_impl(ops, from, mid);
    merge_sort_impl(ops, mid, to);

    // Halves already in order: nothing to merge.
    if ops.compare(mid - 1, mid) != Ordering::Greater {
        return;
    }

    in_place_merge(ops, from, mid, to);
}

/// Merges the sorted runs `[from, mid)` and `[mid, to)` into `[from, to)` without a buffer.
///
/// Elements of the first run precede equal elements of the second.
pub(crate) fn in_place_merge<O>(ops: &mut O, from: usize, mid: usize, to: usize)
where
    O: IndexComparator + Swapper + ?Sized,
{
    if from >= mid || mid >= to {
        return;
    }
    if to - from == 2 {
        if ops.compare(mid, from) == Ordering::Less {
            ops.swap(from, mid);
        }
        return;
    }

    // Cut the longer run, then find where the cut element splits the other run.
    let (first_cut, second_cut) = if mid - from > to - mid {
        let first_cut = from + ((mid - from) >> 2).max(1);
        (first_cut, lower_bound(mid, to, first_cut, ops))
    } else {
        let second_cut = mid + (to - mid) / 2;
        (upper_bound(from, mid, second_cut, ops), second_cut)
    };
    debug_assert!(from <= first_cut && first_cut <= mid);
    debug_assert!(mid <= second_cut && second_cut <= to);

    rotate(ops, first_cut, mid, second_cut);

    let new_mid = first_cut + (second_cut - mid);
    in_place_merge(ops, from, first_cut, new_mid);
    in_place_merge(ops, new_mid, second_cut, to);
}

/// Moves `[mid, last)` in front of `[first, mid)` with three reversals.
fn rotate<S>(swapper: &mut S, first: usize, mid: usize, last: usize)
where
    S: Swapper + ?Sized,
{
    if mid == first || mid == last {
        return;
    }
    reverse(swapper, first, mid);
    reverse(swapper, mid, last);
    reverse(swapper, first, last);
}

fn reverse<S>(swapper: &mut S, mut low: usize, mut high: usize)
where
    S: Swapper + ?Sized,
{
    while low + 1 < high {
        high -= 1;
        swapper.swap(low, high);
        low += 1;
    }
}
