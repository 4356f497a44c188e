//! Input patterns for testing and benchmarking sort implementations.
//!
//! Every random pattern draws from an `StdRng` seeded by [`random_init_seed`]. The seed is picked
//! once per process, so all patterns of one test run are reproducible together, and
//! `OVERRIDE_SEED=<u64>` replays a previous run.

use std::collections::HashMap;
use std::env;
use std::sync::Mutex;

use rand::distributions::Uniform;
use rand::prelude::*;

use zipf::ZipfDistribution;

/// Uniformly random values over the full `i32` range, so duplicates are rare.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly random values drawn from `range`.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    new_rng().sample_iter(dist).take(len).collect()
}

/// Values in `0..=100 * log2(len)`, a domain that grows with the input so that duplicates stay
/// common at every length.
pub fn random_narrow(len: usize) -> Vec<i32> {
    // log2 of 0 and 1 is not positive, the bound is clamped so the domain is never empty.
    let log_len = ((len as f64).log2().round() as i32).max(1);
    random_uniform(len, 0..=log_len * 100)
}

/// Zipf distributed values in `1..=len`, a few values make up most of the input.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let dist = match ZipfDistribution::new(len, exponent) {
        Ok(dist) => dist,
        // Only rejected for `len == 0`.
        Err(()) => return Vec::new(),
    };

    new_rng()
        .sample_iter(dist)
        .take(len)
        .map(|val: usize| val as i32)
        .collect()
}

/// A sorted prefix of `sorted_percent` percent of `len`, followed by random values.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut vals = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    vals[..sorted_len.min(len)].sort_unstable();

    vals
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// `saw_count` ascending runs of random values.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, saw_count, |_| Direction::Up)
}

/// `saw_count` descending runs of random values.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, saw_count, |_| Direction::Down)
}

/// `saw_count` runs of random values, each one randomly ascending or descending.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let run_count = len / saw_run_len(len, saw_count) + 1;
    let coin_flips = random_uniform(run_count, 0..=1);

    saws(len, saw_count, |run_idx| {
        if coin_flips[run_idx] == 0 {
            Direction::Up
        } else {
            Direction::Down
        }
    })
}

/// An ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut vals = random(len);

    let (rising, falling) = vals.split_at_mut(len / 2);
    Direction::Up.sort(rising);
    Direction::Down.sort(falling);

    vals
}

/// Pairs every value with its occurrence count, `[6, 5, 6]` becomes `[(6, 1), (5, 1), (6, 2)]`.
///
/// Sorting the result by the first element only must leave the second elements of equal keys in
/// ascending order, if the sort is stable.
pub fn tagged(vals: &[i32]) -> Vec<(i32, u32)> {
    let mut seen = HashMap::<i32, u32>::new();

    vals.iter()
        .map(|&val| {
            let count = seen.entry(val).or_insert(0);
            *count += 1;
            (val, *count)
        })
        .collect()
}

/// Makes every following call to a random pattern use a fresh seed.
///
/// Benchmarks call this so they don't measure the same input over and over. Panics if
/// `OVERRIDE_SEED` is set, the two contradict each other.
pub fn use_random_seed_each_time() {
    let mut seed = SEED.lock().unwrap_or_else(|e| e.into_inner());

    if let Seed::Fixed { from_env: true, .. } = seed.get_or_insert_with(Seed::from_env) {
        panic!("use_random_seed_each_time conflicts with OVERRIDE_SEED");
    }

    *seed = Some(Seed::Fresh);
}

/// The seed the next random pattern will use.
pub fn random_init_seed() -> u64 {
    let mut seed = SEED.lock().unwrap_or_else(|e| e.into_inner());

    match seed.get_or_insert_with(Seed::from_env) {
        Seed::Fixed { value, .. } => *value,
        Seed::Fresh => thread_rng().gen(),
    }
}

// --- Private ---

enum Seed {
    /// One seed for the whole process, either random or taken from `OVERRIDE_SEED`.
    Fixed { value: u64, from_env: bool },
    Fresh,
}

impl Seed {
    fn from_env() -> Self {
        match env::var("OVERRIDE_SEED").ok().and_then(|s| s.parse().ok()) {
            Some(value) => Seed::Fixed {
                value,
                from_env: true,
            },
            None => Seed::Fixed {
                value: thread_rng().gen(),
                from_env: false,
            },
        }
    }
}

static SEED: Mutex<Option<Seed>> = Mutex::new(None);

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

impl Direction {
    fn sort(self, run: &mut [i32]) {
        match self {
            Direction::Up => run.sort_unstable(),
            Direction::Down => run.sort_unstable_by(|a, b| b.cmp(a)),
        }
    }
}

fn saws(len: usize, saw_count: usize, direction: impl Fn(usize) -> Direction) -> Vec<i32> {
    let mut vals = random(len);

    for (run_idx, run) in vals.chunks_mut(saw_run_len(len, saw_count)).enumerate() {
        direction(run_idx).sort(run);
    }

    vals
}

fn saw_run_len(len: usize, saw_count: usize) -> usize {
    (len / saw_count.max(1)).max(1)
}
