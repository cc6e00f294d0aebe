//! Runs the shared tests against the standard library sorts, to check the harness itself.

use std::cmp::Ordering;

use sort_test_tools::Sort;

struct StdStable;

impl Sort for StdStable {
    fn name() -> String {
        "rust_std_stable".into()
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        arr.sort();
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        arr.sort_by(compare);
    }
}

struct StdUnstable;

impl Sort for StdUnstable {
    fn name() -> String {
        "rust_std_unstable".into()
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        arr.sort_unstable();
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        arr.sort_unstable_by(compare);
    }
}

mod stable {
    sort_test_tools::instantiate_sort_tests!(super::StdStable);
}

mod unstable {
    sort_test_tools::instantiate_sort_tests!(super::StdUnstable);
}

mod stable_vs_stable {
    sort_test_tools::instantiate_equivalence_tests!(super::StdStable, super::StdStable);
}
