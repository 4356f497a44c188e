//! The merge step shared by every merge sort variant in this crate.

use std::mem;
use std::ptr;

use crate::error::{RunSide, SortError};

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` and stores the result into `v[..]`.
///
/// Both runs are copied into a scratch buffer, `L` at the front and `R` behind it. The buffer is
/// then traced front to back, each step writing the lesser of the two next unconsumed elements
/// back into `v`. If they compare equal the element from `L` is written first, this is what makes
/// every sort built on top of this function stable.
///
/// Panics if `mid == 0` or `mid >= v.len()`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(mid > 0 && mid < len);

    if mem::size_of::<T>() == 0 {
        // Zero-sized values carry no information, any order is sorted.
        return;
    }

    // The buffer is only ever used as raw storage, its len stays 0 so dropping it frees the memory
    // without dropping any element.
    let mut buf: Vec<T> = Vec::with_capacity(len);
    let buf_ptr = buf.as_mut_ptr();
    let v_ptr = v.as_mut_ptr();

    // Panic safety:
    //
    // After the copy every element is logically owned by `buf`, and `v` is a hole that gets
    // filled from the front. `run` tracks what is left of `L` and `R` plus the next free slot in
    // `v`. If `is_less` panics, `run` gets dropped and moves the unconsumed tails of `L` and `R`
    // into the remaining hole, so `v` still holds every object it initially held exactly once.
    let mut run;

    // SAFETY: `buf` has capacity for `len` elements and can't overlap with `v`. `mid < len` so all
    // pointers below stay within, or one past the end of, the allocation.
    unsafe {
        ptr::copy_nonoverlapping(v_ptr, buf_ptr, len);

        run = MergeRun {
            left: buf_ptr,
            left_end: buf_ptr.add(mid),
            right: buf_ptr.add(mid),
            right_end: buf_ptr.add(len),
            dest: v_ptr,
        };
    }

    while run.left < run.left_end && run.right < run.right_end {
        // SAFETY: Both cursors point to initialized, unconsumed elements. `dest` trails behind by
        // exactly the number of consumed elements, so it always points into the hole.
        unsafe {
            // Consume the lesser side.
            // If equal, prefer the left run to maintain stability.
            let take_right = is_less(&*run.right, &*run.left);
            let src = if take_right { run.right } else { run.left };
            ptr::copy_nonoverlapping(src, run.dest, 1);

            if take_right {
                run.right = run.right.add(1);
            } else {
                run.left = run.left.add(1);
            }
            run.dest = run.dest.add(1);
        }
    }

    // Finally, `run` gets dropped, flushing whatever remains of `L` and then `R` into `v`. This
    // happens before `buf` gets dropped, locals drop in reverse declaration order.
}

/// Unconsumed parts of the two buffered runs, and the next slot to write to.
struct MergeRun<T> {
    left: *mut T,
    left_end: *mut T,
    right: *mut T,
    right_end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeRun<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type. The remaining `L` and `R` elements exactly fill
        // the hole that starts at `dest`.
        unsafe {
            let left_len = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_len);

            let right_len = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_len), right_len);
        }
    }
}

/// Checked merge of the inclusive runs `v[left..=mid]` and `v[mid + 1..=right]`.
///
/// Unlike [`merge`] this validates every precondition first, including that both runs are
/// already sorted, and reports violations instead of panicking.
pub fn merge_runs<T: Ord>(
    v: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
) -> Result<(), SortError> {
    tracing::trace!(left, mid, right, len = v.len(), "merge_runs");

    if right >= v.len() {
        return Err(SortError::OutOfBounds {
            index: right,
            len: v.len(),
        });
    }

    if !(left <= mid && mid < right) {
        return Err(SortError::InvalidMidpoint { left, mid, right });
    }

    check_run_sorted(v, left, mid, RunSide::Left)?;
    check_run_sorted(v, mid + 1, right, RunSide::Right)?;

    merge(&mut v[left..=right], mid - left + 1, &mut |a, b| a.lt(b));

    Ok(())
}

fn check_run_sorted<T: Ord>(
    v: &[T],
    start: usize,
    end: usize,
    run: RunSide,
) -> Result<(), SortError> {
    match v[start..=end].windows(2).position(|w| w[1] < w[0]) {
        Some(pos) => Err(SortError::UnsortedRun {
            run,
            index: start + pos + 1,
        }),
        None => Ok(()),
    }
}
