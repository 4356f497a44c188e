use std::cmp::Ordering;
use std::env;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use merge_sort::stable;
use sort_test_tools::{patterns, Sort};

mod util;

use util::Input;

/// `slice::sort` as the reference point for every input.
struct SliceSortStable;

impl Sort for SliceSortStable {
    fn name() -> String {
        "rust_std_stable".into()
    }

    #[inline]
    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        arr.sort();
    }

    #[inline]
    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        arr.sort_by(compare);
    }
}

/// Prints the mean number of comparisons `S` needs for `input`.
///
/// Counted through `sort_by` so the element type keeps its properties, a `Copy` type stays `Copy`.
fn print_comp_count<S: Sort, T: Ord>(name: &str, input: &Input<T>) {
    let runs: u64 = match input.len {
        0..=20 => 100_000,
        21..=9_999 => 3_000,
        10_000..=99_999 => 1_000,
        _ => 100,
    };

    let mut comp_count = 0u64;
    for _ in 0..runs {
        let mut v = input.generate();
        S::sort_by(black_box(v.as_mut_slice()), |a, b| {
            comp_count += 1;
            a.cmp(b)
        });
    }

    println!("{name}: mean comparisons: {}", comp_count / runs);
}

fn bench_sort<S: Sort, T: Ord>(c: &mut Criterion, input: &Input<T>) {
    let sort_name = S::name();

    if env::var("MEASURE_COMP").is_err() {
        util::bench_fn(c, input, &sort_name, S::sort);
        return;
    }

    // Comparison counts only depend on the pattern, not on the element type.
    if input.type_name == "i32" && input.len <= 100_000 {
        let name = input.bench_name(&sort_name, "comp");
        if util::should_run_benchmark(&name) {
            print_comp_count::<S, T>(&name, input);
        }
    }
}

fn bench_patterns<T: Ord>(
    c: &mut Criterion,
    len: usize,
    type_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    if len > 100_000 && type_name != "i32" {
        // Takes too long to be useful.
        return;
    }

    let mut pattern_list: Vec<(&str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_d20", |len| patterns::random_uniform(len, 0..20)),
        ("random_binary", |len| patterns::random_uniform(len, 0..=1)),
        ("random_s95", |len| patterns::random_sorted(len, 95.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |len| {
            patterns::saw_mixed(len, (len as f64).log2().round() as usize)
        }),
    ];

    // There are no pattern dependent fast paths, these mostly show how much branch prediction
    // helps the merge loop.
    if env::var("EXTRA_PATTERNS").is_ok() {
        let extra: Vec<(&str, fn(usize) -> Vec<i32>)> = vec![
            ("saws_short", |len| patterns::saw_mixed(len, len / 22)),
            ("pipe_organ", patterns::pipe_organ),
            ("random_narrow", patterns::random_narrow),
            ("random_z1", |len| patterns::random_zipf(len, 1.0)),
            ("all_equal", patterns::all_equal),
        ];
        pattern_list.extend(extra);
    }

    for (pattern_name, pattern) in pattern_list {
        if len < 3 && pattern_name != "random" {
            continue;
        }

        let input = Input {
            len,
            type_name,
            transform,
            pattern_name,
            pattern,
        };

        bench_sort::<stable::top_down::SortImpl, T>(c, &input);
        bench_sort::<stable::bottom_up::SortImpl, T>(c, &input);
        bench_sort::<SliceSortStable, T>(c, &input);
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let lens = [
        0, 1, 2, 3, 5, 7, 8, 9, 15, 16, 17, 31, 32, 33, 64, 100, 128, 500, 1_000, 1_024, 4_096,
        10_000, 100_000, 1_000_000,
    ];

    patterns::use_random_seed_each_time();

    // Otherwise every iteration would sort the same input.
    assert_ne!(patterns::random(8), patterns::random(8));

    for len in lens {
        bench_patterns(c, len, "i32", |vals| vals);

        // Order preserving mapping spread over 63 bits, like sorting indices.
        bench_patterns(c, len, "u64", |vals| {
            vals.into_iter()
                .map(|val| ((val as i64 - i32::MIN as i64) as u64) << 31)
                .collect()
        });

        // Not Copy and compared through a pointer. Every merge level moves each element through
        // the scratch buffer.
        bench_patterns::<String>(c, len, "string", |vals| {
            vals.into_iter().map(|val| format!("{val:011}")).collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
