use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const LARGE_INPUT_THRESHOLD: usize = 16384;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Auto);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the small or large preset from the input length.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= LARGE_INPUT_THRESHOLD {
        apply_small_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes the sorts are measured and tested on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pattern {
    RandomUniform,
    Ascending,
    Descending,
    NearlySorted1pctSwaps,
    /// Alternating ascending and descending stretches of random length.
    SawTooth,
    /// Uniform over a handful of values.
    FewDistinct,
    AllEqual,
}

pub const ALL_PATTERNS: [Pattern; 7] = [
    Pattern::RandomUniform,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::NearlySorted1pctSwaps,
    Pattern::SawTooth,
    Pattern::FewDistinct,
    Pattern::AllEqual,
];

pub fn all_patterns() -> &'static [Pattern] {
    &ALL_PATTERNS
}

pub fn pattern_name(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::RandomUniform => "random_uniform",
        Pattern::Ascending => "ascending",
        Pattern::Descending => "descending",
        Pattern::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        Pattern::SawTooth => "saw_tooth",
        Pattern::FewDistinct => "few_distinct",
        Pattern::AllEqual => "all_equal",
    }
}

pub fn generate_pattern(pattern: Pattern, size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(mix_seed(seed));

    match pattern {
        Pattern::RandomUniform => (0..size).map(|_| rng.random::<u64>()).collect(),
        Pattern::Ascending => (0..size as u64).collect(),
        Pattern::Descending => (0..size as u64).rev().collect(),
        Pattern::NearlySorted1pctSwaps => {
            let mut data: Vec<u64> = (0..size as u64).collect();
            if size > 1 {
                let swaps = (size / 100).max(1);
                for _ in 0..swaps {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
        Pattern::SawTooth => {
            let mut data = Vec::with_capacity(size);
            let mut ascending = true;
            while data.len() < size {
                let stretch = rng.random_range(1..=64).min(size - data.len());
                let base = rng.random_range(0..1_u64 << 32);
                if ascending {
                    data.extend((0..stretch as u64).map(|i| base + i));
                } else {
                    data.extend((0..stretch as u64).rev().map(|i| base + i));
                }
                ascending = !ascending;
            }
            data
        }
        Pattern::FewDistinct => (0..size).map(|_| rng.random_range(0..4_u64)).collect(),
        Pattern::AllEqual => vec![42; size],
    }
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
