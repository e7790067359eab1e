//! Brute-force sliding-window extrema.
//!
//! Every window is scanned in full, so the cost is O(n·w). This kernel defines
//! the expected output of all the others and is what the property tests check
//! them against.
//!
//! # Example
//!
//! ```
//! use fast_minmax::kernels::naive_extrema;
//!
//! let out = naive_extrema(&[1.0_f64, 3.0, 2.0, 5.0, 4.0], 3).unwrap();
//! assert_eq!(out.max, vec![3.0, 5.0, 5.0]);
//! assert_eq!(out.min, vec![1.0, 2.0, 2.0]);
//! ```

use super::{run_kernel, ExtremaOutput};
use crate::error::Result;
use crate::traits::SeriesElement;

/// Computes sliding-window max and min by scanning every window.
///
/// Comparisons are strict, so when several samples share the extremal value
/// the earliest one is kept.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidWindow`] if `width` is zero, larger than
/// `data`, or `data` is empty.
///
/// # Performance
///
/// - Time complexity: O(n·w)
/// - Space complexity: O(n) for the outputs
pub fn naive_extrema<T: SeriesElement>(data: &[T], width: usize) -> Result<ExtremaOutput<T>> {
    run_kernel(data, width, fill)
}

pub(crate) fn fill<T: SeriesElement>(data: &[T], width: usize, max_out: &mut [T], min_out: &mut [T]) {
    let outputs = max_out.iter_mut().zip(min_out.iter_mut());
    for (window, (max_slot, min_slot)) in data.windows(width).zip(outputs) {
        let mut max_val = window[0];
        let mut min_val = window[0];

        for &value in &window[1..] {
            if max_val < value {
                max_val = value;
            }
            if min_val > value {
                min_val = value;
            }
        }

        *max_slot = max_val;
        *min_slot = min_val;
    }
}
