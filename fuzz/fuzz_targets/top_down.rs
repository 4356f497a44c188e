#![no_main]

use libfuzzer_sys::fuzz_target;

use merge_sort::stable::top_down as test_sort;

fuzz_target!(|data: &[u8]| {
    // Keys only use the upper nibble so there are plenty of equal keys, the position makes every
    // element distinguishable.
    let mut v: Vec<(u8, usize)> = data.iter().enumerate().map(|(i, b)| (b >> 4, i)).collect();

    let mut expected = v.clone();
    expected.sort_by(|a, b| a.0.cmp(&b.0));

    test_sort::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
    assert_eq!(v, expected);
});
