use std::fmt;

use thiserror::Error;

/// Which of the two runs handed to a merge is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSide {
    Left,
    Right,
}

impl fmt::Display for RunSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunSide::Left => f.write_str("left"),
            RunSide::Right => f.write_str("right"),
        }
    }
}

/// Precondition violations reported by the checked entry points [`crate::sort_range`] and
/// [`crate::merge_runs`].
///
/// The unchecked core never produces these, it asserts instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SortError {
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("midpoint {mid} violates {left} <= mid < {right}")]
    InvalidMidpoint {
        left: usize,
        mid: usize,
        right: usize,
    },

    #[error("{run} run is not sorted, element at index {index} is less than its predecessor")]
    UnsortedRun { run: RunSide, index: usize },
}
