use crate::order::Comparator;

/// Orders first, middle and last so the median sits in the middle, then
/// parks it at the end as the pivot.
fn place_median3_pivot<T, C>(data: &mut [T], cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    let last = data.len() - 1;
    let mid = last / 2;

    if cmp.is_less(&data[mid], &data[0])? {
        data.swap(0, mid);
    }
    if cmp.is_less(&data[last], &data[0])? {
        data.swap(0, last);
    }
    if cmp.is_less(&data[last], &data[mid])? {
        data.swap(mid, last);
    }

    data.swap(mid, last);
    Ok(())
}

/// Lomuto partition around a median-of-three pivot.
///
/// Returns the pivot's final index: everything before it is `<=` the pivot,
/// everything after it is `>` the pivot.
pub fn partition_median3<T, C>(data: &mut [T], cmp: &mut C) -> Result<usize, C::Error>
where
    C: Comparator<T>,
{
    debug_assert!(data.len() >= 3);

    place_median3_pivot(data, cmp)?;

    let last = data.len() - 1;
    let (rest, pivot) = data.split_at_mut(last);
    let pivot = &pivot[0];

    let mut store = 0usize;
    for scan in 0..rest.len() {
        if cmp.is_less_or_equal(&rest[scan], pivot)? {
            rest.swap(store, scan);
            store += 1;
        }
    }

    data.swap(store, last);
    Ok(store)
}
