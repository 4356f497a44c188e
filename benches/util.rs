use std::env;

use criterion::{black_box, BatchSize, Criterion};
use once_cell::sync::OnceCell;
use regex::Regex;

/// One benchmark input, an element type applied to a pattern at a length.
pub struct Input<'a, T> {
    pub len: usize,
    pub type_name: &'a str,
    pub transform: fn(Vec<i32>) -> Vec<T>,
    pub pattern_name: &'a str,
    pub pattern: fn(usize) -> Vec<i32>,
}

impl<T> Input<'_, T> {
    pub fn generate(&self) -> Vec<T> {
        (self.transform)((self.pattern)(self.len))
    }

    pub fn bench_name(&self, sort_name: &str, kind: &str) -> String {
        format!(
            "{sort_name}-{kind}-{}-{}-{}",
            self.type_name, self.pattern_name, self.len
        )
    }
}

/// Keeps the measuring thread on one core, criterion may use other threads for its analysis.
pub fn pin_thread_to_core() {
    use std::cell::Cell;

    const PIN_CORE: usize = 2;

    thread_local! { static PINNED: Cell<bool> = const { Cell::new(false) }; }

    if PINNED.get() {
        return;
    }

    let core = core_affinity::get_core_ids().and_then(|ids| ids.get(PIN_CORE).copied());
    if let Some(core) = core {
        core_affinity::set_for_current(core);
    }

    PINNED.set(true);
}

/// `CUSTOM_BENCH_REGEX` restricts which benchmark names run, all run if unset.
pub fn should_run_benchmark(name: &str) -> bool {
    static FILTER: OnceCell<Option<Regex>> = OnceCell::new();

    let filter = FILTER.get_or_init(|| {
        env::var("CUSTOM_BENCH_REGEX")
            .ok()
            .map(|pattern| Regex::new(&pattern).expect("CUSTOM_BENCH_REGEX is not a valid regex"))
    });

    filter.as_ref().map_or(true, |filter| filter.is_match(name))
}

#[inline(never)]
pub fn bench_fn<T>(c: &mut Criterion, input: &Input<T>, sort_name: &str, sort_fn: impl Fn(&mut [T])) {
    let name = input.bench_name(sort_name, "hot");
    if !should_run_benchmark(&name) {
        return;
    }

    pin_thread_to_core();

    // Large inputs are generated one at a time so the batch doesn't dominate memory.
    let batch_size = if input.len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&name, |b| {
        b.iter_batched_ref(
            || input.generate(),
            |v| sort_fn(black_box(v.as_mut_slice())),
            batch_size,
        )
    });
}
