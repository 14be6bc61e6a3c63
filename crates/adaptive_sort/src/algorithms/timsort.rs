use log::{debug, trace};

use crate::order::Comparator;

use super::merge;
use super::runs::{Run, RunDetector};

pub fn sort<T, C>(data: &[T], cmp: &mut C) -> Result<Vec<T>, C::Error>
where
    T: Clone,
    C: Comparator<T>,
{
    let n = data.len();
    if n < 2 {
        return Ok(data.to_vec());
    }

    let mut detector = RunDetector::new(data);
    debug!("timsort: len={} min_run={}", n, detector.min_run());

    let mut runs: Vec<Run<T>> = Vec::with_capacity(64);
    while let Some(run) = detector.next_run(cmp)? {
        trace!("timsort: push run len={} depth={}", run.len(), runs.len());
        runs.push(run);
        merge_collapse(&mut runs, cmp)?;
    }

    merge_force_collapse(&mut runs, cmp)?;
    Ok(runs.pop().map(Run::into_keys).unwrap_or_default())
}

/// Restores `len(runs[n - 2]) > len(runs[n - 1])` after a push.
fn merge_collapse<T, C>(runs: &mut Vec<Run<T>>, cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    while let [.., second, top] = runs.as_slice() {
        if second.len() > top.len() {
            break;
        }
        merge_top(runs, cmp)?;
    }
    Ok(())
}

fn merge_force_collapse<T, C>(runs: &mut Vec<Run<T>>, cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    while runs.len() > 1 {
        merge_top(runs, cmp)?;
    }
    Ok(())
}

fn merge_top<T, C>(runs: &mut Vec<Run<T>>, cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    debug_assert!(runs.len() >= 2);
    let (Some(right), Some(left)) = (runs.pop(), runs.pop()) else {
        return Ok(());
    };
    trace!("timsort: merge {} + {}", left.len(), right.len());

    let merged = merge::merge(left.into_keys(), right.into_keys(), cmp)?;
    runs.push(Run::new(merged));
    Ok(())
}
