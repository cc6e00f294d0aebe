/// Lomuto partition of `v` around its last element.
///
/// Returns the final position `p` of the pivot. Afterwards every element in `v[..p]` is `<=` the
/// pivot and every element in `v[p + 1..]` compared greater than it during the scan. Empty input
/// returns 0 without comparing anything.
pub(crate) fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let Some(last) = v.len().checked_sub(1) else {
        return 0;
    };

    let (rest, pivot) = v.split_at_mut(last);
    let pivot = &pivot[0];

    let mut le_count = 0;
    for i in 0..rest.len() {
        if !is_less(pivot, &rest[i]) {
            rest.swap(le_count, i);
            le_count += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(le_count, last);

    le_count
}
