//! Classic in-place comparison sorts, each available as an iterative and a recursive variant that
//! produce identical results.
//!
//! Every algorithm module exposes `sort`, `sort_by`, `sort_recursive` and `sort_recursive_by`.
//! They take the sequence as `Option<&mut [T]>` and reject `None` with
//! [`SortError::InvalidArgument`] before touching anything.
//!
//! The recursive variants use call stack proportional to the input length. Prefer the iterative
//! variants for large inputs or on threads with a small stack.

/// Generates the public entry points and the `sort_test_tools::Sort` impls of an algorithm module
/// from its two private drivers `<algo>_sort` and `<algo>_sort_recursive`.
macro_rules! sort_impl {
    ($algo:ident, $stability:literal) => {
        paste::paste! {
            /// Sorts `v` in place in ascending order.
            ///
            /// Returns [`SortError::InvalidArgument`](crate::SortError) if `v` is `None`.
            #[inline]
            pub fn sort<T>(v: Option<&mut [T]>) -> $crate::SortResult
            where
                T: Ord,
            {
                let v = $crate::error::required(v, "v")?;
                [<$algo _sort>](v, &mut |a: &T, b: &T| a.lt(b));
                Ok(())
            }

            /// Sorts `v` in place with a comparator function.
            ///
            /// Returns [`SortError::InvalidArgument`](crate::SortError) if `v` is `None`.
            #[inline]
            pub fn sort_by<T, F>(v: Option<&mut [T]>, mut compare: F) -> $crate::SortResult
            where
                F: FnMut(&T, &T) -> core::cmp::Ordering,
            {
                let v = $crate::error::required(v, "v")?;
                [<$algo _sort>](v, &mut |a: &T, b: &T| {
                    compare(a, b) == core::cmp::Ordering::Less
                });
                Ok(())
            }

            /// Recursive form of [`sort`], same result.
            ///
            /// Returns [`SortError::InvalidArgument`](crate::SortError) if `v` is `None`.
            #[inline]
            pub fn sort_recursive<T>(v: Option<&mut [T]>) -> $crate::SortResult
            where
                T: Ord,
            {
                let v = $crate::error::required(v, "v")?;
                [<$algo _sort_recursive>](v, &mut |a: &T, b: &T| a.lt(b));
                Ok(())
            }

            /// Recursive form of [`sort_by`], same result.
            ///
            /// Returns [`SortError::InvalidArgument`](crate::SortError) if `v` is `None`.
            #[inline]
            pub fn sort_recursive_by<T, F>(v: Option<&mut [T]>, mut compare: F) -> $crate::SortResult
            where
                F: FnMut(&T, &T) -> core::cmp::Ordering,
            {
                let v = $crate::error::required(v, "v")?;
                [<$algo _sort_recursive>](v, &mut |a: &T, b: &T| {
                    compare(a, b) == core::cmp::Ordering::Less
                });
                Ok(())
            }

            pub struct SortImpl;

            impl sort_test_tools::Sort for SortImpl {
                fn name() -> String {
                    concat!(stringify!($algo), "_", $stability).into()
                }

                #[inline]
                fn sort<T>(arr: &mut [T])
                where
                    T: Ord,
                {
                    [<$algo _sort>](arr, &mut |a: &T, b: &T| a.lt(b));
                }

                #[inline]
                fn sort_by<T, F>(arr: &mut [T], mut compare: F)
                where
                    F: FnMut(&T, &T) -> core::cmp::Ordering,
                {
                    [<$algo _sort>](arr, &mut |a: &T, b: &T| {
                        compare(a, b) == core::cmp::Ordering::Less
                    });
                }
            }

            pub struct SortRecursiveImpl;

            impl sort_test_tools::Sort for SortRecursiveImpl {
                fn name() -> String {
                    concat!(stringify!($algo), "_recursive_", $stability).into()
                }

                #[inline]
                fn sort<T>(arr: &mut [T])
                where
                    T: Ord,
                {
                    [<$algo _sort_recursive>](arr, &mut |a: &T, b: &T| a.lt(b));
                }

                #[inline]
                fn sort_by<T, F>(arr: &mut [T], mut compare: F)
                where
                    F: FnMut(&T, &T) -> core::cmp::Ordering,
                {
                    [<$algo _sort_recursive>](arr, &mut |a: &T, b: &T| {
                        compare(a, b) == core::cmp::Ordering::Less
                    });
                }
            }
        } // paste
    };
}

pub mod error;

pub mod bubble;
pub mod insertion;
pub mod quicksort;
pub mod selection;

// Row ordering of jagged arrays, built on the selection sort scheme.
pub mod jagged;

pub use error::{SortError, SortResult};
