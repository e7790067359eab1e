//! Streaming sliding-window extrema with the deques packed into machine words.
//!
//! The algorithm is the one in [`super::monotonic_deque`], but instead of a
//! `VecDeque<usize>` each queue is a single unsigned word. Every step shifts
//! both words left by one, so a candidate's bit position is its age:
//!
//! ```text
//! step i, after the shift:   bit c set  <=>  index i - 1 - c is a candidate
//!
//!   bit:  w-1 ............ 2   1   0
//!   idx:  i-w ........... i-3 i-2 i-1
//!         ^ front (oldest)         ^ back (newest)
//! ```
//!
//! - push back: set bit 0
//! - peek back: `trailing_zeros`
//! - pop back: clear the lowest set bit
//! - peek front: `leading_zeros`, i.e. the highest set bit
//! - eviction: the window mask, applied at every shift, clears the bit that
//!   just aged past `w - 1`
//!
//! The mask is `(1 << w) - 1`, or all ones when `w` equals the word width
//! (a full-width shift is not expressible). A candidate at bit `w - 1` is index
//! `i - w`, the oldest sample of the window `[i - w, i - 1]`, so it must stay;
//! the shift itself discards anything older when `w` is the full word width.
//!
//! The word type is a type parameter. [`bitmask_deque_extrema`] uses `u64`,
//! [`bitmask_deque_extrema_with`] accepts any [`BitWord`].
//!
//! # Example
//!
//! ```
//! use fast_minmax::kernels::{bitmask_deque_extrema, bitmask_deque_extrema_with};
//!
//! let data = [1.0_f64, 3.0, 2.0, 5.0, 4.0];
//! let out = bitmask_deque_extrema(&data, 3).unwrap();
//! assert_eq!(out.max, vec![3.0, 5.0, 5.0]);
//!
//! // an 8-bit word caps the window at 8 samples
//! let long = vec![0.0_f64; 16];
//! assert!(bitmask_deque_extrema_with::<u8, _>(&long, 8).is_ok());
//! assert!(bitmask_deque_extrema_with::<u8, _>(&long, 9).is_err());
//! ```

use super::{run_checked, ExtremaOutput};
use crate::error::{Error, Result};
use crate::traits::{BitWord, SeriesElement, ValidatedInput};

/// Widest window supported by [`bitmask_deque_extrema`] (the bit width of `u64`).
pub const BITMASK_MAX_WIDTH: usize = u64::BITS as usize;

/// Computes sliding-window max and min with `u64` bit-set deques.
///
/// # Errors
///
/// - [`Error::InvalidWindow`] if `width` is zero, larger than `data`, or
///   `data` is empty
/// - [`Error::UnsupportedWidth`] if `width` exceeds [`BITMASK_MAX_WIDTH`]
pub fn bitmask_deque_extrema<T: SeriesElement>(
    data: &[T],
    width: usize,
) -> Result<ExtremaOutput<T>> {
    bitmask_deque_extrema_with::<u64, T>(data, width)
}

/// Computes sliding-window max and min with bit-set deques of word type `W`.
///
/// # Errors
///
/// - [`Error::InvalidWindow`] if `width` is zero, larger than `data`, or
///   `data` is empty
/// - [`Error::UnsupportedWidth`] if `width` exceeds the bit width of `W`
pub fn bitmask_deque_extrema_with<W: BitWord, T: SeriesElement>(
    data: &[T],
    width: usize,
) -> Result<ExtremaOutput<T>> {
    run_checked(
        data,
        width,
        |data, width| {
            data.validate_window(width)?;
            check_width::<W>(width)
        },
        fill_with::<W, T>,
    )
}

/// Rejects widths that do not fit in a `W` bit set.
pub(crate) fn check_width<W: BitWord>(width: usize) -> Result<()> {
    let max = W::bit_width();
    if width > max {
        return Err(Error::UnsupportedWidth { width, max });
    }
    Ok(())
}

/// The mask keeping the `width` youngest candidate bits.
///
/// Returns all ones when `width` is at least the bit width of `W`.
///
/// ```
/// use fast_minmax::kernels::window_mask;
///
/// assert_eq!(window_mask::<u64>(3), 0b111);
/// assert_eq!(window_mask::<u64>(64), u64::MAX);
/// assert_eq!(window_mask::<u8>(8), 0xff);
/// ```
#[must_use]
pub fn window_mask<W: BitWord>(width: usize) -> W {
    if width >= W::bit_width() {
        W::max_value()
    } else {
        (W::one() << width) - W::one()
    }
}

/// Kernel entry used by the dispatcher; the width has already been checked
/// against `u64`.
pub(crate) fn fill<T: SeriesElement>(data: &[T], width: usize, max_out: &mut [T], min_out: &mut [T]) {
    fill_with::<u64, T>(data, width, max_out, min_out);
}

pub(crate) fn fill_with<W: BitWord, T: SeriesElement>(
    data: &[T],
    width: usize,
    max_out: &mut [T],
    min_out: &mut [T],
) {
    debug_assert!(width <= W::bit_width());

    let n = data.len();
    let mask = window_mask::<W>(width);
    let mut max_bits = W::zero();
    let mut min_bits = W::zero();

    for i in 1..n {
        max_bits = (max_bits << 1_usize) & mask;
        min_bits = (min_bits << 1_usize) & mask;

        if i >= width {
            max_out[i - width] = data[front(max_bits, i)];
            min_out[i - width] = data[front(min_bits, i)];
        }

        let current = data[i];
        let previous = data[i - 1];
        if current > previous {
            // overshoot
            min_bits = min_bits | W::one();
            max_bits = retire_dominated(max_bits, data, i, |back| current <= back);
        } else if current < previous {
            max_bits = max_bits | W::one();
            min_bits = retire_dominated(min_bits, data, i, |back| current >= back);
        } else {
            max_bits = max_bits | W::one();
            min_bits = min_bits | W::one();
        }
    }

    max_bits = (max_bits << 1_usize) & mask;
    min_bits = (min_bits << 1_usize) & mask;
    max_out[n - width] = data[front(max_bits, n)];
    min_out[n - width] = data[front(min_bits, n)];
}

/// Index of the oldest candidate, or `i - 1` when the queue is empty.
#[inline]
fn front<W: BitWord>(bits: W, i: usize) -> usize {
    if bits.is_zero() {
        return i - 1;
    }
    let highest = W::bit_width() - 1 - bits.leading_zeros() as usize;
    i - 1 - highest
}

/// Clears candidates from the low end until one survives `keeps`.
#[inline]
fn retire_dominated<W: BitWord, T: SeriesElement>(
    mut bits: W,
    data: &[T],
    i: usize,
    keeps: impl Fn(T) -> bool,
) -> W {
    while !bits.is_zero() {
        let age = bits.trailing_zeros() as usize;
        if keeps(data[i - 1 - age]) {
            break;
        }
        bits = bits & (bits - W::one());
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::naive::naive_extrema;

    fn wave(len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| {
                let x = i as f64;
                (x * 0.37).sin().mul_add(8.0, (x * 0.05).cos() * 3.0).round()
            })
            .collect()
    }

    #[test]
    fn test_bitmask_basic() {
        let out = bitmask_deque_extrema(&[1.0_f64, 3.0, 2.0, 5.0, 4.0], 3).unwrap();
        assert_eq!(out.max, vec![3.0, 5.0, 5.0]);
        assert_eq!(out.min, vec![1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_bitmask_ties_keep_earliest_sample() {
        // -0.0 == 0.0, so the sign shows which sample was reported
        let data = [-0.0_f64, 0.0, -0.0, 0.0, 1.0];
        let out = bitmask_deque_extrema(&data, 3).unwrap();
        let max_neg: Vec<bool> = out.max.iter().map(|v| v.is_sign_negative()).collect();
        let min_neg: Vec<bool> = out.min.iter().map(|v| v.is_sign_negative()).collect();
        assert_eq!(max_neg, vec![true, false, false]);
        assert_eq!(min_neg, vec![true, false, true]);

        let pair = bitmask_deque_extrema(&[-0.0_f64, 0.0], 2).unwrap();
        assert!(pair.max[0].is_sign_negative());
        assert!(pair.min[0].is_sign_negative());
    }

    #[test]
    fn test_window_mask() {
        assert_eq!(window_mask::<u64>(1), 1);
        assert_eq!(window_mask::<u64>(63), u64::MAX >> 1);
        assert_eq!(window_mask::<u64>(64), u64::MAX);
        assert_eq!(window_mask::<u32>(32), u32::MAX);
        assert_eq!(window_mask::<u128>(128), u128::MAX);
        assert_eq!(window_mask::<u8>(5), 0b1_1111);
    }

    #[test]
    fn test_bitmask_width_one() {
        let data = wave(40);
        let out = bitmask_deque_extrema(&data, 1).unwrap();
        assert_eq!(out.max, data);
        assert_eq!(out.min, data);
    }

    #[test]
    fn test_bitmask_unsupported_width() {
        let data = wave(100);
        assert_eq!(
            bitmask_deque_extrema(&data, 65),
            Err(Error::UnsupportedWidth { width: 65, max: 64 })
        );
        assert_eq!(
            bitmask_deque_extrema_with::<u32, _>(&data, 33),
            Err(Error::UnsupportedWidth { width: 33, max: 32 })
        );
    }

    #[test]
    fn test_bitmask_invalid_window_checked_first() {
        let data = wave(10);
        assert!(matches!(
            bitmask_deque_extrema(&data, 80),
            Err(Error::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_bitmask_full_word_width_u64() {
        // the oldest sample of a 64-wide window sits on bit 63
        let mut data = vec![0.0_f64; 130];
        data[0] = 10.0;
        data[1] = -10.0;
        data[64] = 7.0;
        let out = bitmask_deque_extrema(&data, 64).unwrap();
        assert_eq!(out, naive_extrema(&data, 64).unwrap());
        assert_eq!(out.max[0], 10.0);
        assert_eq!(out.max[1], 7.0);
        assert_eq!(out.min[1], -10.0);
        assert_eq!(out.min[2], 0.0);
    }

    #[test]
    fn test_bitmask_word_width_boundaries() {
        let data = wave(300);
        for width in [62, 63, 64] {
            assert_eq!(
                bitmask_deque_extrema(&data, width).unwrap(),
                naive_extrema(&data, width).unwrap(),
                "u64 mismatch for width {width}"
            );
        }
        for width in [7, 8] {
            assert_eq!(
                bitmask_deque_extrema_with::<u8, _>(&data, width).unwrap(),
                naive_extrema(&data, width).unwrap(),
                "u8 mismatch for width {width}"
            );
        }
        for width in [65, 127, 128] {
            assert_eq!(
                bitmask_deque_extrema_with::<u128, _>(&data, width).unwrap(),
                naive_extrema(&data, width).unwrap(),
                "u128 mismatch for width {width}"
            );
        }
    }

    #[test]
    fn test_bitmask_full_width_decreasing_run() {
        // every sample stays a max candidate, filling all 64 bits
        let data: Vec<f64> = (0..100).rev().map(f64::from).collect();
        let out = bitmask_deque_extrema(&data, 64).unwrap();
        assert_eq!(out, naive_extrema(&data, 64).unwrap());
        assert_eq!(out.max[0], 99.0);
        assert_eq!(out.min[0], 36.0);
    }

    #[test]
    fn test_bitmask_width_equals_length() {
        let data = wave(64);
        let out = bitmask_deque_extrema(&data, 64).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out, naive_extrema(&data, 64).unwrap());
    }

    #[test]
    fn test_bitmask_matches_naive() {
        let data = wave(257);
        for width in 1..=BITMASK_MAX_WIDTH {
            assert_eq!(
                bitmask_deque_extrema(&data, width).unwrap(),
                naive_extrema(&data, width).unwrap(),
                "mismatch for width {width}"
            );
        }
    }
}
