//! Shared test and benchmark tooling for sort implementations.
//!
//! An implementation plugs in by implementing [`Sort`] and invoking [`instantiate_sort_tests!`]
//! from an integration test.

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
