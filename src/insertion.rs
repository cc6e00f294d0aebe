//! Insertion sort.
//!
//! Stable, *O*(*n*^2) worst case. Grows a sorted prefix `v[..i]` one element at a time.

sort_impl!(insertion, "stable");

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        // Shift the new element left past every greater element of the sorted prefix.
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn insertion_sort_recursive<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    insert_tail(v, 1, is_less);
}

/// Inserts `v[boundary]` into the sorted prefix `v[..boundary]`, then advances the boundary.
fn insert_tail<T, F>(v: &mut [T], boundary: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    find_insert_index(v, boundary, is_less);

    if boundary + 1 < v.len() {
        insert_tail(v, boundary + 1, is_less);
    }
}

/// Moves the element at `i` one position left per call until its predecessor is not greater, and
/// returns where it came to rest.
fn find_insert_index<T, F>(v: &mut [T], i: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if i > 0 && is_less(&v[i], &v[i - 1]) {
        v.swap(i - 1, i);
        return find_insert_index(v, i - 1, is_less);
    }

    i
}
