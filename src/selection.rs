//! Selection sort.
//!
//! Unstable, always *O*(*n*^2) comparisons but at most `n - 1` swaps. Of several equal minima the
//! leftmost one is selected.

sort_impl!(selection, "unstable");

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        v.swap(i, min);
    }
}

fn selection_sort_recursive<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.is_empty() {
        return;
    }

    select_from(v, 0, is_less);
}

fn select_from<T, F>(v: &mut [T], i: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let min = min_index(v, i, i + 1, is_less);
    v.swap(i, min);

    if i + 1 < v.len() {
        select_from(v, i + 1, is_less);
    }
}

/// Index of the leftmost minimum of `v[search..]` and `v[best]`.
fn min_index<T, F>(v: &[T], best: usize, search: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if search >= v.len() {
        return best;
    }

    let best = if is_less(&v[search], &v[best]) {
        search
    } else {
        best
    };

    min_index(v, best, search + 1, is_less)
}

/// Selection sort over `keys`, applying every swap to `values` as well.
pub(crate) fn selection_sort_paired<K, V, F>(keys: &mut [K], values: &mut [V], is_less: &mut F)
where
    F: FnMut(&K, &K) -> bool,
{
    debug_assert_eq!(keys.len(), values.len());

    let len = keys.len();

    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&keys[j], &keys[min]) {
                min = j;
            }
        }

        keys.swap(i, min);
        values.swap(i, min);
    }
}
