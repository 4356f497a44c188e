//! Iterative bottom-up merge sort.
//!
//! Merges adjacent runs of width 1, 2, 4, ... until a single run covers the whole slice. Uses the
//! same merge step as the top-down variant and is stable for the same reason, but needs no
//! recursion and so only constant stack space.

use std::cmp::Ordering;
use std::mem;

use crate::merge::merge;

sort_impl!("rust_merge_bottom_up_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    merge_sort(v, &mut is_less);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // All runs of length `width` are sorted at the start of each pass. The last run of a pass may
    // be shorter, it is merged once a full run to its left exists.
    let mut width = 1;
    while width < len {
        let mut start = 0;

        // A right run exists as long as `start + width < len`.
        while width < len - start {
            let end = start + (len - start).min(width * 2);
            merge(&mut v[start..end], width, is_less);
            start = end;
        }

        // `width < len <= isize::MAX`, doubling can't overflow.
        width *= 2;
    }
}
