//! Quicksort with a deterministic last-element pivot and Lomuto partitioning.
//!
//! Unstable, *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst case, which already sorted and
//! reverse sorted inputs hit. Both drivers use the same partition routine, so they perform the
//! same partitions and produce the same result, only the order in which sub-ranges are visited
//! differs.

mod partition;

use partition::partition;

sort_impl!(quicksort, "unstable");

fn quicksort_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    quicksort_explicit_stack(v, is_less);
}

fn quicksort_sort_recursive<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let pivot_pos = partition(v, is_less);
    let (left, right) = v.split_at_mut(pivot_pos);

    quicksort_sort_recursive(left, is_less);
    quicksort_sort_recursive(&mut right[1..], is_less);
}

/// Simulates the recursion with a LIFO stack of half-open `(begin, end)` ranges. Returns the peak
/// stack depth.
fn quicksort_explicit_stack<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    // Ranges on the stack are disjoint and hold at least two elements each, so this never grows.
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(len);
    stack.push((0, len));

    let mut peak_depth = stack.len();

    while let Some((begin, end)) = stack.pop() {
        let pivot_pos = begin + partition(&mut v[begin..end], is_less);

        if pivot_pos - begin > 1 {
            stack.push((begin, pivot_pos));
        }

        if end - (pivot_pos + 1) > 1 {
            stack.push((pivot_pos + 1, end));
        }

        peak_depth = peak_depth.max(stack.len());
    }

    tracing::trace!(len, peak_depth, "explicit stack drained");

    peak_depth
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn stack_stays_within_capacity() {
        let inputs: [Vec<i32>; 4] = [
            (0..1_000).collect(),
            (0..1_000).rev().collect(),
            vec![7; 1_000],
            (0..1_000).map(|x| (x * 7_919) % 1_009).collect(),
        ];

        for mut v in inputs {
            let len = v.len();
            let peak_depth = quicksort_explicit_stack(&mut v, &mut lt);

            assert!(peak_depth <= len / 2);
            assert!(v.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn reverse_sorted_worst_case() {
        let mut iterative = [5, 4, 3, 2, 1];
        let mut recursive = iterative;

        quicksort_explicit_stack(&mut iterative, &mut lt);
        quicksort_sort_recursive(&mut recursive, &mut lt);

        assert_eq!(iterative, [1, 2, 3, 4, 5]);
        assert_eq!(recursive, iterative);
    }

    #[test]
    fn tiny_inputs_leave_stack_unused() {
        let mut empty: [i32; 0] = [];
        assert_eq!(quicksort_explicit_stack(&mut empty, &mut lt), 0);

        let mut single = [1];
        assert_eq!(quicksort_explicit_stack(&mut single, &mut lt), 0);
    }
}
