//! Shared benchmark settings for the fast-minmax experiments.
//!
//! Sizes, widths and seeds live here so every experiment measures the same
//! inputs.

#![allow(dead_code)]

use std::time::Duration;

// ============================================================================
// Standard Data Sizes
// ============================================================================

/// 1,000 samples: a handful of spectral frames.
pub const SIZE_1K: usize = 1_000;

/// 10,000 samples.
pub const SIZE_10K: usize = 10_000;

/// 100,000 samples: about a minute of hop-sized spectral frames.
pub const SIZE_100K: usize = 100_000;

/// 1,000,000 samples, for stress runs.
pub const SIZE_1M: usize = 1_000_000;

/// Sizes used by default; the brute-force variant is skipped above 10K.
pub const QUICK_DATA_SIZES: [usize; 3] = [SIZE_1K, SIZE_10K, SIZE_100K];

/// Largest input the brute-force variant is benchmarked on.
pub const NAIVE_SIZE_LIMIT: usize = SIZE_10K;

// ============================================================================
// Window Widths
// ============================================================================

/// Widths for the scaling sweep: small, typical peak-picking, around the
/// bitmask word limit, and wide.
pub const SCALING_WIDTHS: [usize; 6] = [3, 15, 31, 63, 64, 255];

/// Width used when only the input size varies.
pub const DEFAULT_WIDTH: usize = 31;

// ============================================================================
// Criterion Configuration
// ============================================================================

/// Default measurement time.
pub const DEFAULT_MEASUREMENT_TIME: Duration = Duration::from_secs(5);

/// Measurement time for inputs above 10K samples.
pub const EXTENDED_MEASUREMENT_TIME: Duration = Duration::from_secs(10);

/// Default sample size.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Sample size for inputs above 10K samples.
pub const REDUCED_SAMPLE_SIZE: usize = 50;

/// Seed for every generated series.
pub const DEFAULT_SEED: u64 = 42;

// ============================================================================
// Benchmark Group Names
// ============================================================================

/// Group name for the E01 variant comparison.
pub const GROUP_E01_VARIANTS: &str = "e01_variants";

/// Group name for the E02 bitmask ceiling comparison.
pub const GROUP_E02_BITMASK_CEILING: &str = "e02_bitmask_ceiling";

// ============================================================================
// Helper Functions
// ============================================================================

/// Sample count for a given input size.
#[inline]
pub const fn sample_size_for_data_size(data_size: usize) -> usize {
    if data_size <= SIZE_10K {
        DEFAULT_SAMPLE_SIZE
    } else {
        REDUCED_SAMPLE_SIZE
    }
}

/// Measurement time for a given input size.
#[inline]
pub const fn measurement_time_for_data_size(data_size: usize) -> Duration {
    if data_size <= SIZE_10K {
        DEFAULT_MEASUREMENT_TIME
    } else {
        EXTENDED_MEASUREMENT_TIME
    }
}

/// Formats a data size for benchmark IDs: 1000 -> "1K", 1000000 -> "1M".
pub fn format_size(size: usize) -> String {
    match size {
        s if s >= 1_000_000 => format!("{}M", s / 1_000_000),
        s if s >= 1_000 => format!("{}K", s / 1_000),
        s => s.to_string(),
    }
}
