//! Recursive top-down merge sort.
//!
//! Every call splits its slice into a left half of `len - len / 2` elements and a right half of
//! `len / 2` elements, sorts both halves recursively and then merges them. There is no small-sort
//! cutoff and no shortcut for already sorted input, every input takes the full `log2(len)` levels
//! of recursion.

use std::cmp::Ordering;
use std::mem;

use crate::merge::merge;

sort_impl!("rust_merge_top_down_stable");

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

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    // Equivalent to `left + (right - left) / 2` on inclusive bounds, the left half gets the extra
    // element for odd lengths. Can't overflow and always yields `1 <= mid < len`.
    let mid = len - len / 2;

    let (left, right) = v.split_at_mut(mid);
    merge_sort(left, is_less);
    merge_sort(right, is_less);

    merge(v, mid, is_less);
}
