use log::debug;

use crate::TUNED_PARAMS;
use crate::order::Comparator;

use super::{common, heap_sort, partition};

pub fn sort<T, C>(data: &mut [T], cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    if data.len() < 2 {
        return Ok(());
    }
    let depth_limit = common::introsort_depth_limit(data.len());
    debug!("introsort: len={} depth_limit={}", data.len(), depth_limit);
    introsort_recursive(data, depth_limit, cmp)
}

// Each side of a split gets `depth_limit - 1`. The smaller side recurses, the
// larger one is handled by the loop, which bounds the call stack.
fn introsort_recursive<T, C>(
    mut data: &mut [T],
    mut depth_limit: usize,
    cmp: &mut C,
) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    while data.len() > TUNED_PARAMS.insertion_threshold {
        if depth_limit == 0 {
            debug!("introsort: depth budget spent, heap sorting {} keys", data.len());
            return heap_sort::heap_sort(data, cmp);
        }
        depth_limit -= 1;

        let split = partition::partition_median3(data, cmp)?;
        let (left, rest) = data.split_at_mut(split);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            introsort_recursive(left, depth_limit, cmp)?;
            data = right;
        } else {
            introsort_recursive(right, depth_limit, cmp)?;
            data = left;
        }
    }

    common::insertion_sort(data, cmp)
}
