use std::cmp::Ordering;

/// Uniform view on a single sort entry point, used to instantiate the shared tests, benchmarks
/// and fuzz targets.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
