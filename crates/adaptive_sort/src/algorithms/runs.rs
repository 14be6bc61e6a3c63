use crate::order::Comparator;

use super::common;

/// An ascending, owned slice of the input waiting on the merge stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run<T> {
    keys: Vec<T>,
}

impl<T> Run<T> {
    pub fn new(keys: Vec<T>) -> Self {
        Self { keys }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn into_keys(self) -> Vec<T> {
        self.keys
    }
}

/// Cuts the input into natural runs, each extended to at least `min_run`
/// keys while input remains.
///
/// The input slice is only read; every run is a fresh buffer.
pub struct RunDetector<'a, T> {
    data: &'a [T],
    cursor: usize,
    min_run: usize,
}

impl<'a, T: Clone> RunDetector<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            cursor: 0,
            min_run: common::min_run_length(data.len()),
        }
    }

    pub fn min_run(&self) -> usize {
        self.min_run
    }

    /// Next run, or `None` once every key has been handed out.
    pub fn next_run<C>(&mut self, cmp: &mut C) -> Result<Option<Run<T>>, C::Error>
    where
        C: Comparator<T>,
    {
        let data = self.data;
        let start = self.cursor;
        if start >= data.len() {
            return Ok(None);
        }

        let (end, descending) = find_run_end(data, start, cmp)?;
        let mut keys = data[start..end].to_vec();
        if descending {
            // Strict descent has no ties, so reversing keeps stability.
            keys.reverse();
        }

        let mut next = end;
        while keys.len() < self.min_run && next < data.len() {
            keys.push(data[next].clone());
            common::insert_tail(&mut keys, cmp)?;
            next += 1;
        }

        self.cursor = next;
        Ok(Some(Run::new(keys)))
    }
}

/// End of the maximal run starting at `start`, and whether it is strictly
/// descending. Equal neighbours always continue an ascending run.
fn find_run_end<T, C>(data: &[T], start: usize, cmp: &mut C) -> Result<(usize, bool), C::Error>
where
    C: Comparator<T>,
{
    let len = data.len();
    let mut end = start + 1;
    if end >= len {
        return Ok((len, false));
    }

    if cmp.is_less(&data[end], &data[start])? {
        end += 1;
        while end < len && cmp.is_less(&data[end], &data[end - 1])? {
            end += 1;
        }
        Ok((end, true))
    } else {
        end += 1;
        while end < len && cmp.is_less_or_equal(&data[end - 1], &data[end])? {
            end += 1;
        }
        Ok((end, false))
    }
}

#[cfg(test)]
mod tests {
    use crate::order::{NaturalOrder, OrderBy};

    use super::*;

    fn collect_runs<T: Clone + Ord>(data: &[T]) -> Vec<Vec<T>> {
        let mut detector = RunDetector::new(data);
        let mut runs = Vec::new();
        while let Ok(Some(run)) = detector.next_run(&mut NaturalOrder) {
            runs.push(run.into_keys());
        }
        runs
    }

    #[test]
    fn plateaus_stay_ascending() {
        let data = [3, 3, 2, 2, 1];
        let Ok((end, descending)) = find_run_end(&data, 0, &mut NaturalOrder);
        assert_eq!((end, descending), (2, false));

        let Ok((end, descending)) = find_run_end(&data, 1, &mut NaturalOrder);
        assert_eq!((end, descending), (3, true));
    }

    #[test]
    fn single_trailing_key_is_a_run() {
        let data = [1, 2, 0];
        let Ok((end, descending)) = find_run_end(&data, 2, &mut NaturalOrder);
        assert_eq!((end, descending), (3, false));
    }

    #[test]
    fn short_input_becomes_one_extended_run() {
        let data = [10, 9, 8, 7, 15, 16, 17, 3, 2, 1, 12, 13, 14, 18, 19, 20];
        let runs = collect_runs(&data);
        assert_eq!(
            runs,
            [vec![1, 2, 3, 7, 8, 9, 10, 12, 13, 14, 15, 16, 17, 18, 19, 20]]
        );
    }

    #[test]
    fn descending_run_is_reversed() {
        assert_eq!(collect_runs(&[5, 4, 3, 2, 1]), [vec![1, 2, 3, 4, 5]]);
    }

    #[test]
    fn long_input_is_cut_at_min_run() {
        let data: Vec<u32> = (0..100).map(|i| (i * 37) % 101).collect();
        let runs = collect_runs(&data);

        assert_eq!(RunDetector::new(&data).min_run(), 32);
        assert!(runs.iter().all(|run| run.is_sorted()));
        assert!(runs[..runs.len() - 1].iter().all(|run| run.len() >= 32));
        assert_eq!(runs.iter().map(Vec::len).sum::<usize>(), data.len());
    }

    #[test]
    fn natural_runs_longer_than_min_run_are_kept_whole() {
        let data: Vec<u32> = (0..80).chain((0..40).rev()).collect();
        let runs = collect_runs(&data);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 80);
        assert_eq!(runs[1], (0..40).collect::<Vec<_>>());
    }

    #[test]
    fn extension_keeps_equal_keys_in_order() {
        let mut by_key = OrderBy(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
        let data = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let mut detector = RunDetector::new(&data);
        let Ok(Some(run)) = detector.next_run(&mut by_key) else {
            panic!("expected a run");
        };
        assert_eq!(run.into_keys(), [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
        assert_eq!(detector.next_run(&mut by_key), Ok(None));
    }
}
