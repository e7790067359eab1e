//! Block prefix/suffix sliding-window extrema (van Herk / Gil-Werman).
//!
//! The input is walked in blocks of `w` window starts. For the block starting
//! at `j`, the anchor `a = j + w - 1` is the last sample shared by every window
//! of the block. Two running scans leave the anchor in opposite directions:
//!
//! ```text
//!            R (right to left)       S (left to right)
//!   j ............................ a ............................ j + 2w - 2
//!   R[k] = ext(data[a - k ..= a])    S[k] = ext(data[a ..= a + k])
//! ```
//!
//! The window starting at `j + k` covers `[j + k, a]` and `[a, a + k]`, so its
//! extremum is `ext(R[w - 1 - k], S[k])`, the older half first so ties keep the
//! earliest sample. Max and min each take one full pass.
//!
//! # Complexity
//!
//! - Time: O(n), about three comparisons per element per direction
//! - Space: two scratch arrays of length `w`

use super::extremum::{Extremum, Max, Min};
use super::{run_kernel, ExtremaOutput};
use crate::error::Result;
use crate::traits::SeriesElement;

/// Computes sliding-window max and min with the block prefix/suffix method.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidWindow`] if `width` is zero, larger than
/// `data`, or `data` is empty.
///
/// # Example
///
/// ```
/// use fast_minmax::kernels::block_prefix_suffix_extrema;
///
/// let out = block_prefix_suffix_extrema(&[2.0_f64, 7.0, 1.0, 8.0, 2.0, 8.0], 4).unwrap();
/// assert_eq!(out.max, vec![8.0, 8.0, 8.0]);
/// assert_eq!(out.min, vec![1.0, 1.0, 1.0]);
/// ```
pub fn block_prefix_suffix_extrema<T: SeriesElement>(
    data: &[T],
    width: usize,
) -> Result<ExtremaOutput<T>> {
    run_kernel(data, width, fill)
}

pub(crate) fn fill<T: SeriesElement>(data: &[T], width: usize, max_out: &mut [T], min_out: &mut [T]) {
    let mut suffix = vec![T::nan(); width];
    let mut prefix = vec![T::nan(); width];
    sweep::<Max, T>(data, width, &mut suffix, &mut prefix, max_out);
    sweep::<Min, T>(data, width, &mut suffix, &mut prefix, min_out);
}

fn sweep<E: Extremum, T: SeriesElement>(
    data: &[T],
    width: usize,
    suffix: &mut [T],
    prefix: &mut [T],
    out: &mut [T],
) {
    let n = data.len();

    for start in (0..=n - width).step_by(width) {
        let anchor = start + width - 1;
        let stop = (start + 2 * width - 1).min(n);

        suffix[0] = data[anchor];
        for i in (start..anchor).rev() {
            suffix[anchor - i] = E::pick(data[i], suffix[anchor - i - 1]);
        }

        prefix[0] = data[anchor];
        for i in anchor + 1..stop {
            prefix[i - anchor] = E::pick(prefix[i - anchor - 1], data[i]);
        }

        for k in 0..stop - anchor {
            out[start + k] = E::pick(suffix[width - 1 - k], prefix[k]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::naive::naive_extrema;

    #[test]
    fn test_block_prefix_suffix_basic() {
        let out = block_prefix_suffix_extrema(&[1.0_f64, 3.0, 2.0, 5.0, 4.0], 3).unwrap();
        assert_eq!(out.max, vec![3.0, 5.0, 5.0]);
        assert_eq!(out.min, vec![1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_block_prefix_suffix_partial_last_block() {
        // 10 samples, width 4: windows 0..=6, blocks start at 0 and 4, the
        // second block only has three window starts
        let data = [4.0_f64, 9.0, 1.0, 3.0, 7.0, 2.0, 8.0, 0.0, 5.0, 6.0];
        let out = block_prefix_suffix_extrema(&data, 4).unwrap();
        assert_eq!(out.max, vec![9.0, 9.0, 7.0, 8.0, 8.0, 8.0, 8.0]);
        assert_eq!(out.min, vec![1.0, 1.0, 1.0, 2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_block_prefix_suffix_ties_keep_earliest_sample() {
        // -0.0 == 0.0, so the sign shows which sample was reported
        let data = [-0.0_f64, 0.0, -0.0, 0.0, 1.0];
        let out = block_prefix_suffix_extrema(&data, 3).unwrap();
        let max_neg: Vec<bool> = out.max.iter().map(|v| v.is_sign_negative()).collect();
        let min_neg: Vec<bool> = out.min.iter().map(|v| v.is_sign_negative()).collect();
        assert_eq!(max_neg, vec![true, false, false]);
        assert_eq!(min_neg, vec![true, false, true]);

        let pair = block_prefix_suffix_extrema(&[-0.0_f64, 0.0], 2).unwrap();
        assert!(pair.max[0].is_sign_negative());
        assert!(pair.min[0].is_sign_negative());
    }

    #[test]
    fn test_block_prefix_suffix_width_one() {
        let data = [0.5_f64, -0.5, 2.0];
        let out = block_prefix_suffix_extrema(&data, 1).unwrap();
        assert_eq!(out.max, data.to_vec());
        assert_eq!(out.min, data.to_vec());
    }

    #[test]
    fn test_block_prefix_suffix_matches_naive() {
        let data: Vec<f64> = (0..131)
            .map(|i| (f64::from(i) * 2.1).sin().mul_add(20.0, f64::from(i % 7)))
            .collect();

        for width in 1..=data.len() {
            assert_eq!(
                block_prefix_suffix_extrema(&data, width).unwrap(),
                naive_extrema(&data, width).unwrap(),
                "mismatch for width {width}"
            );
        }
    }
}
