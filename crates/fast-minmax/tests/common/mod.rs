//! Shared test utilities for fast-minmax tests.

use fast_minmax::{ExtremaOutput, Variant};

/// Brute-force window extrema written independently of the crate's kernels.
///
/// Uses `f64::max`/`f64::min` folds, so it must only be fed NaN-free data.
#[allow(dead_code)]
pub fn brute_force(data: &[f64], width: usize) -> ExtremaOutput<f64> {
    let max = data
        .windows(width)
        .map(|w| w.iter().copied().fold(f64::NEG_INFINITY, f64::max))
        .collect();
    let min = data
        .windows(width)
        .map(|w| w.iter().copied().fold(f64::INFINITY, f64::min))
        .collect();
    ExtremaOutput { max, min }
}

/// Variants able to run a window of `width` samples.
#[allow(dead_code)]
pub fn variants_for(width: usize) -> impl Iterator<Item = Variant> {
    Variant::ALL.into_iter().filter(move |v| v.supports(width))
}

/// Deterministic sawtooth with plateaus, used where proptest is overkill.
#[allow(dead_code)]
pub fn sawtooth_with_plateaus(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let phase = (i % 23) as f64;
            if i % 11 < 3 {
                5.0
            } else {
                phase - 11.0
            }
        })
        .collect()
}

/// Scenario table: input, width, expected max, expected min.
#[allow(dead_code)]
pub const SCENARIOS: &[(&[f64], usize, &[f64], &[f64])] = &[
    (
        &[1.0, 3.0, 2.0, 5.0, 4.0],
        3,
        &[3.0, 5.0, 5.0],
        &[1.0, 2.0, 2.0],
    ),
    (
        &[5.0, 4.0, 3.0, 2.0, 1.0],
        2,
        &[5.0, 4.0, 3.0, 2.0],
        &[4.0, 3.0, 2.0, 1.0],
    ),
    (&[7.0], 1, &[7.0], &[7.0]),
    (
        &[2.0, 2.0, 2.0, 2.0],
        2,
        &[2.0, 2.0, 2.0],
        &[2.0, 2.0, 2.0],
    ),
    (
        &[0.0, 10.0, 0.0, 10.0, 0.0, 10.0],
        2,
        &[10.0, 10.0, 10.0, 10.0, 10.0],
        &[0.0, 0.0, 0.0, 0.0, 0.0],
    ),
    (
        &[-1.0, -5.0, 3.0, 9.0, -2.0, 4.0, 4.0, 0.0],
        4,
        &[9.0, 9.0, 9.0, 9.0, 4.0],
        &[-5.0, -5.0, -2.0, -2.0, -2.0],
    ),
];
