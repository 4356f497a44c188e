//! Stable merge sort, top-down recursive and bottom-up iterative.
//!
//! The crate level functions forward to [`stable::top_down`]. Both implementation modules expose a
//! `SortImpl` for the shared test suite in `sort_test_tools` and the benchmarks.

use std::cmp::Ordering;
use std::ops::{Bound, RangeBounds};

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod error;
pub mod listing;
pub mod merge;
pub mod stable;

pub use error::{RunSide, SortError};
pub use merge::merge_runs;

/// Sorts the slice, preserving the initial order of equal elements.
///
/// *O*(*n* \* log(*n*)) time and *O*(*n*) auxiliary memory per merge, released as soon as each
/// merge returns.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable::top_down::sort(v);
}

/// Sorts the slice with a comparator function, preserving the initial order of equal elements.
///
/// If `compare` does not implement a total order the resulting order is unspecified, but `v` still
/// holds all its original elements. The same holds if `compare` panics.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable::top_down::sort_by(v, compare);
}

/// Sorts only the elements of `v` inside `range`, leaving the rest untouched.
///
/// An inverted range such as `3..=1` is empty and sorting it is a no-op.
///
/// ```ignore
/// let mut v = [9, 3, 2, 1, 0];
/// merge_sort::sort_range(&mut v, 1..=3)?;
/// assert_eq!(v, [9, 1, 2, 3, 0]);
/// ```
pub fn sort_range<T, R>(v: &mut [T], range: R) -> Result<(), SortError>
where
    T: Ord,
    R: RangeBounds<usize>,
{
    let len = v.len();

    tracing::trace!(start = ?range.start_bound(), end = ?range.end_bound(), len, "sort_range");

    // Both bounds are resolved to inclusive indices, `None` means the range can't contain any
    // index. Converting to an exclusive end could overflow for `..=usize::MAX`.
    let first = match range.start_bound() {
        Bound::Included(&start) => Some(start),
        Bound::Excluded(&start) => start.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let last = match range.end_bound() {
        Bound::Included(&end) => Some(end),
        Bound::Excluded(&end) => end.checked_sub(1),
        Bound::Unbounded => len.checked_sub(1),
    };

    let (first, last) = match (first, last) {
        (Some(first), Some(last)) if first <= last => (first, last),
        _ => return Ok(()),
    };

    if last >= len {
        return Err(SortError::OutOfBounds { index: last, len });
    }

    sort(&mut v[first..=last]);

    Ok(())
}
