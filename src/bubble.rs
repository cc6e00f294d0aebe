//! Bubble sort.
//!
//! Stable, *O*(*n*^2) worst and average case, *O*(*n*) on already sorted input where the first pass
//! doesn't swap anything.

sort_impl!(bubble, "stable");

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Each pass moves the largest unsorted element to its final place, so this runs at most `len`
    // passes.
    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 0..len - 1 {
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                swapped = true;
            }
        }
    }
}

/// One pass per call, recursing only while the pass swapped something.
fn bubble_sort_recursive<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    if bubble_pass(v, 0, false, is_less) {
        bubble_sort_recursive(v, is_less);
    }
}

/// Swaps every out of order adjacent pair from `i` onwards and returns whether any swap happened,
/// including the ones reported by `swapped`.
fn bubble_pass<T, F>(v: &mut [T], i: usize, swapped: bool, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if i + 1 >= v.len() {
        return swapped;
    }

    let swapped = if is_less(&v[i + 1], &v[i]) {
        v.swap(i, i + 1);
        true
    } else {
        swapped
    };

    bubble_pass(v, i + 1, swapped, is_less)
}
