use crate::TUNED_PARAMS;
use crate::order::Comparator;

/// Stable insertion sort of the whole slice.
///
/// An empty or single-element slice is a no-op.
#[inline]
pub fn insertion_sort<T, C>(data: &mut [T], cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    for end in 2..=data.len() {
        insert_tail(&mut data[..end], cmp)?;
    }
    Ok(())
}

/// Moves the last element of `data` into place, assuming `data[..len - 1]`
/// is already sorted.
///
/// The element goes after every element it is not less than, so equal keys
/// keep their order.
#[inline]
pub fn insert_tail<T, C>(data: &mut [T], cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    let Some(last) = data.len().checked_sub(1) else {
        return Ok(());
    };

    let mut pos = last;
    while pos > 0 && cmp.is_less(&data[last], &data[pos - 1])? {
        pos -= 1;
    }
    data[pos..].rotate_right(1);
    Ok(())
}

#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

#[inline]
pub fn introsort_depth_limit(n: usize) -> usize {
    floor_log2(n).saturating_mul(TUNED_PARAMS.introsort_depth_factor)
}

pub fn min_run_length(mut n: usize) -> usize {
    let mut r = 0usize;
    while n >= TUNED_PARAMS.min_run_limit {
        r |= n & 1;
        n >>= 1;
    }
    (n + r).min(TUNED_PARAMS.max_min_run)
}

#[cfg(test)]
mod tests {
    use crate::order::{NaturalOrder, OrderBy};

    use super::*;

    #[test]
    fn insertion_sort_small_cases() {
        let cases: [&[i32]; 6] = [
            &[],
            &[1],
            &[2, 1],
            &[3, 1, 2],
            &[5, 4, 3, 2, 1, 0],
            &[1, 1, 0, 0, 1, 0],
        ];

        for case in cases {
            let mut actual = case.to_vec();
            let Ok(()) = insertion_sort(&mut actual, &mut NaturalOrder);

            let mut expected = case.to_vec();
            expected.sort();
            assert_eq!(actual, expected, "input={case:?}");
        }
    }

    #[test]
    fn insert_tail_goes_after_equal_keys() {
        let mut data = vec![(1, 'a'), (2, 'b'), (2, 'c'), (3, 'd'), (2, 'e')];
        let mut by_key = OrderBy(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        let Ok(()) = insert_tail(&mut data, &mut by_key);
        assert_eq!(data, [(1, 'a'), (2, 'b'), (2, 'c'), (2, 'e'), (3, 'd')]);
    }

    #[test]
    fn insertion_sort_is_stable() {
        let mut data = vec![(3, 0), (1, 1), (3, 2), (1, 3), (2, 4), (1, 5)];
        let mut by_key = OrderBy(|a: &(i32, i32), b: &(i32, i32)| a.0.cmp(&b.0));
        let Ok(()) = insertion_sort(&mut data, &mut by_key);
        assert_eq!(data, [(1, 1), (1, 3), (1, 5), (2, 4), (3, 0), (3, 2)]);
    }

    #[test]
    fn floor_log2_values() {
        assert_eq!(floor_log2(0), 0);
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(2), 1);
        assert_eq!(floor_log2(7), 2);
        assert_eq!(floor_log2(8), 3);
        assert_eq!(floor_log2(usize::MAX), usize::BITS as usize - 1);
    }

    #[test]
    fn depth_limit_is_twice_log2() {
        assert_eq!(introsort_depth_limit(1), 0);
        assert_eq!(introsort_depth_limit(7), 4);
        assert_eq!(introsort_depth_limit(1024), 20);
    }

    #[test]
    fn min_run_values() {
        assert_eq!(min_run_length(0), 0);
        assert_eq!(min_run_length(5), 5);
        assert_eq!(min_run_length(16), 16);
        assert_eq!(min_run_length(63), 32);
        assert_eq!(min_run_length(64), 32);
        // 65 -> 32 with the dropped low bit set -> 33, capped.
        assert_eq!(min_run_length(65), 32);
        assert_eq!(min_run_length(1 << 20), 32);
    }
}
