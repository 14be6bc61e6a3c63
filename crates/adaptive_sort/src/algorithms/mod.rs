pub mod common;
pub mod heap_sort;
pub mod introsort;
pub mod merge;
pub mod partition;
pub mod runs;
pub mod timsort;
