mod algorithms;
pub mod order;

use std::cmp::Ordering;

pub use order::{Comparator, Incomparable, NaturalOrder, OrderBy, PartialOrder, TryOrderBy};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    /// Median-of-three quicksort with a heap sort fallback under a depth
    /// budget and insertion sort for short ranges. Not stable.
    Hybrid,
    /// Natural-run merge sort with minrun extension and a size-ordered run
    /// stack. Stable.
    StableAdaptive,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] =
    [SortAlgorithm::Hybrid, SortAlgorithm::StableAdaptive];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::Hybrid => "hybrid",
        SortAlgorithm::StableAdaptive => "stable_adaptive",
    }
}

pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(algo, SortAlgorithm::StableAdaptive)
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Ranges of at most this many keys go straight to insertion sort.
    pub insertion_threshold: usize,
    /// Depth budget is `introsort_depth_factor * floor(log2 n)`.
    pub introsort_depth_factor: usize,
    pub min_run_limit: usize,
    pub max_min_run: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 16,
    introsort_depth_factor: 2,
    min_run_limit: 64,
    max_min_run: 32,
};

/// Sorted copy of `data` under `cmp`, using `algo`.
///
/// The first comparator error aborts the sort and is returned as is; `data`
/// is never modified.
pub fn sort_with<T, C>(algo: SortAlgorithm, data: &[T], mut cmp: C) -> Result<Vec<T>, C::Error>
where
    T: Clone,
    C: Comparator<T>,
{
    match algo {
        SortAlgorithm::Hybrid => {
            let mut sorted = data.to_vec();
            algorithms::introsort::sort(&mut sorted, &mut cmp)?;
            Ok(sorted)
        }
        SortAlgorithm::StableAdaptive => algorithms::timsort::sort(data, &mut cmp),
    }
}

pub fn sort<T: Ord + Clone>(algo: SortAlgorithm, data: &[T]) -> Vec<T> {
    let Ok(sorted) = sort_with(algo, data, NaturalOrder);
    sorted
}

pub fn hybrid_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    sort(SortAlgorithm::Hybrid, data)
}

pub fn hybrid_sort_by<T, F>(data: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let Ok(sorted) = sort_with(SortAlgorithm::Hybrid, data, OrderBy(compare));
    sorted
}

pub fn hybrid_sort_by_key<T, K, F>(data: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    hybrid_sort_by(data, |a, b| key(a).cmp(&key(b)))
}

/// Hybrid sort of a caller-owned slice; no `Clone` needed.
pub fn hybrid_sort_in_place<T: Ord>(data: &mut [T]) {
    let Ok(()) = algorithms::introsort::sort(data, &mut NaturalOrder);
}

pub fn hybrid_sort_in_place_by<T, F>(data: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let Ok(()) = algorithms::introsort::sort(data, &mut OrderBy(compare));
}

/// Hybrid sort of keys that are only partially ordered.
///
/// ```
/// use adaptive_sort::{Incomparable, try_hybrid_sort};
///
/// assert_eq!(try_hybrid_sort(&[2.5, -1.0, 0.0]), Ok(vec![-1.0, 0.0, 2.5]));
/// assert_eq!(try_hybrid_sort(&[1.0, f64::NAN]), Err(Incomparable));
/// ```
pub fn try_hybrid_sort<T>(data: &[T]) -> Result<Vec<T>, Incomparable>
where
    T: PartialOrd + Clone,
{
    sort_with(SortAlgorithm::Hybrid, data, PartialOrder)
}

pub fn try_hybrid_sort_by<T, E, F>(data: &[T], compare: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    sort_with(SortAlgorithm::Hybrid, data, TryOrderBy(compare))
}

pub fn stable_adaptive_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    sort(SortAlgorithm::StableAdaptive, data)
}

pub fn stable_adaptive_sort_by<T, F>(data: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let Ok(sorted) = sort_with(SortAlgorithm::StableAdaptive, data, OrderBy(compare));
    sorted
}

/// Stable sort by an extracted key; equal keys keep their input order.
///
/// ```
/// use adaptive_sort::stable_adaptive_sort_by_key;
///
/// let tagged = [(2, 'A'), (1, 'B'), (2, 'C'), (1, 'D')];
/// let sorted = stable_adaptive_sort_by_key(&tagged, |&(key, _)| key);
/// assert_eq!(sorted, [(1, 'B'), (1, 'D'), (2, 'A'), (2, 'C')]);
/// ```
pub fn stable_adaptive_sort_by_key<T, K, F>(data: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    stable_adaptive_sort_by(data, |a, b| key(a).cmp(&key(b)))
}

pub fn try_stable_adaptive_sort<T>(data: &[T]) -> Result<Vec<T>, Incomparable>
where
    T: PartialOrd + Clone,
{
    sort_with(SortAlgorithm::StableAdaptive, data, PartialOrder)
}

pub fn try_stable_adaptive_sort_by<T, E, F>(data: &[T], compare: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    sort_with(SortAlgorithm::StableAdaptive, data, TryOrderBy(compare))
}
