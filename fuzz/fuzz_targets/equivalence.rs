#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_test_tools::Sort;

use classic_sorts::{bubble, insertion, quicksort, selection};

fn check<I: Sort, R: Sort>(data: &[i32], expected: &[i32]) {
    let mut iterative = data.to_vec();
    I::sort(&mut iterative);
    assert_eq!(iterative, expected, "{}", I::name());

    let mut recursive = data.to_vec();
    R::sort(&mut recursive);
    assert_eq!(recursive, iterative, "{}", R::name());
}

fuzz_target!(|data: Vec<i32>| {
    // The recursive variants go up to `len` frames deep.
    if data.len() > 4_096 {
        return;
    }

    let mut expected = data.clone();
    expected.sort();

    check::<bubble::SortImpl, bubble::SortRecursiveImpl>(&data, &expected);
    check::<insertion::SortImpl, insertion::SortRecursiveImpl>(&data, &expected);
    check::<selection::SortImpl, selection::SortRecursiveImpl>(&data, &expected);
    check::<quicksort::SortImpl, quicksort::SortRecursiveImpl>(&data, &expected);
});
