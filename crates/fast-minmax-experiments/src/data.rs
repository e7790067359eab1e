//! Synthetic data generators for reproducible benchmarks.
//!
//! Every generator takes a seed and feeds a `ChaCha8Rng`, so the same seed
//! always yields the same series on every platform. The shapes are chosen to
//! stress different parts of the filters:
//!
//! - [`generate_random_walk`]: smooth drift, long monotone runs that keep the
//!   deques full
//! - [`generate_spectral_frames`]: magnitude spectra with a few sharp peaks
//!   over a noise floor, the input a peak picker feeds through a max filter
//! - [`generate_plateaus`]: runs of repeated values, so most comparisons tie
//!
//! # Example Usage
//!
//! ```
//! use fast_minmax_experiments::data::generate_spectral_frames;
//!
//! let frames = generate_spectral_frames(4, 256, 42);
//! assert_eq!(frames.len(), 4 * 256);
//! assert!(frames.iter().all(|&x| x >= 0.0));
//! ```

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Random Walk
// ============================================================================

/// Generates a Gaussian random walk starting at zero.
///
/// # Arguments
///
/// * `n` - Number of samples
/// * `seed` - Seed for the random number generator
///
/// # Example
///
/// ```
/// use fast_minmax_experiments::data::generate_random_walk;
///
/// let a = generate_random_walk(100, 42);
/// let b = generate_random_walk(100, 123);
/// assert_ne!(a, b);
/// ```
#[must_use]
pub fn generate_random_walk(n: usize, seed: u64) -> Vec<f64> {
    generate_random_walk_with_step(n, seed, 1.0)
}

/// Generates a Gaussian random walk with step standard deviation `step`.
#[must_use]
pub fn generate_random_walk_with_step(n: usize, seed: u64, step: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut series = Vec::with_capacity(n);
    let mut level = 0.0;

    for _ in 0..n {
        series.push(level);
        level += step * standard_normal(&mut rng);
    }

    series
}

// ============================================================================
// Spectral Frames
// ============================================================================

/// Generates `frames` consecutive magnitude spectra of `bins` bins each.
///
/// Each frame is an exponential noise floor plus three to six Gaussian-shaped
/// peaks at random bins. Frames are concatenated into a single series.
#[must_use]
pub fn generate_spectral_frames(frames: usize, bins: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut series = Vec::with_capacity(frames * bins);

    for _ in 0..frames {
        let start = series.len();
        for _ in 0..bins {
            // exponential noise floor
            let u: f64 = rng.random();
            series.push(-0.05 * (1.0 - u).ln());
        }

        if bins == 0 {
            continue;
        }
        let peaks = rng.random_range(3..=6);
        for _ in 0..peaks {
            let centre = rng.random_range(0..bins);
            let height: f64 = rng.random_range(1.0..10.0);
            let spread: f64 = rng.random_range(0.5..3.0);
            let frame = &mut series[start..start + bins];
            for (bin, value) in frame.iter_mut().enumerate() {
                let distance = bin.abs_diff(centre) as f64 / spread;
                *value += height * (-0.5 * distance * distance).exp();
            }
        }
    }

    series
}

// ============================================================================
// Plateaus
// ============================================================================

/// Generates runs of repeated integer levels in `-8..=8`.
///
/// Run lengths are uniform in `1..=32`, so a large share of neighbouring
/// samples compare equal.
#[must_use]
pub fn generate_plateaus(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut series = Vec::with_capacity(n);

    while series.len() < n {
        let level = f64::from(rng.random_range(-8_i32..=8));
        let run = rng.random_range(1_usize..=32).min(n - series.len());
        series.extend(std::iter::repeat(level).take(run));
    }

    series
}

/// Box-Muller standard normal sample.
fn standard_normal(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    // 1 - u1 lies in (0, 1], keeping ln finite
    (-2.0 * (1.0 - u1).ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_walk_deterministic() {
        assert_eq!(generate_random_walk(500, 42), generate_random_walk(500, 42));
        assert_ne!(generate_random_walk(500, 42), generate_random_walk(500, 43));
    }

    #[test]
    fn test_random_walk_starts_at_zero() {
        let walk = generate_random_walk(10, 7);
        assert_eq!(walk.len(), 10);
        assert!(walk[0].abs() < f64::EPSILON);
        assert!(walk.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_random_walk_empty() {
        assert!(generate_random_walk(0, 1).is_empty());
    }

    #[test]
    fn test_spectral_frames_shape() {
        let frames = generate_spectral_frames(8, 128, 42);
        assert_eq!(frames.len(), 1024);
        assert!(frames.iter().all(|&x| x.is_finite() && x >= 0.0));

        // every frame carries at least one peak well above the noise floor
        for frame in frames.chunks(128) {
            let peak = frame.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert!(peak >= 1.0);
        }
    }

    #[test]
    fn test_spectral_frames_deterministic() {
        assert_eq!(
            generate_spectral_frames(3, 64, 9),
            generate_spectral_frames(3, 64, 9)
        );
    }

    #[test]
    fn test_plateaus_have_ties() {
        let series = generate_plateaus(2_000, 42);
        assert_eq!(series.len(), 2_000);
        assert!(series.iter().all(|x| (-8.0..=8.0).contains(x)));

        let ties = series.windows(2).filter(|w| w[0] == w[1]).count();
        assert!(ties > series.len() / 2);
    }

    #[test]
    fn test_plateaus_feed_every_variant() {
        use fast_minmax::{compute_extrema, Variant};

        let series = generate_plateaus(300, 3);
        let reference = compute_extrema(Variant::Naive, &series, 17).unwrap();
        for variant in Variant::ALL {
            assert_eq!(
                compute_extrema(variant, &series, 17).unwrap(),
                reference,
                "{variant}"
            );
        }
    }
}
