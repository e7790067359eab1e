//! Divide-and-conquer sliding-window extrema (Gil-Kimmel).
//!
//! The input is split into blocks of `w` samples. For every sample two running
//! extrema are kept: `prefix[i]` over its block up to `i`, and `suffix[i]` from
//! `i` to the end of its block. A window starting at `j` spans the tail of one
//! block and the head of the next, so its extremum is
//! `ext(suffix[j], prefix[j + w - 1])`.
//!
//! Two refinements cut the comparison count:
//!
//! - **Cut in the middle.** Each block is scanned from both ends towards its
//!   midpoint first. Whichever half holds the block extremum decides which
//!   scan has to be finished; the other one is constant past the midpoint.
//!   On a tie the lower half wins, so the earliest sample is reported.
//! - **Merge by bisection.** Inside a block of window starts, `suffix[j]`
//!   never improves as `j` grows while `prefix[j + w - 1]` never worsens, so
//!   the windows split at a single cut. It is found by binary search; windows
//!   before the cut take the suffix, the rest take the prefix.
//!
//! # Complexity
//!
//! - Time: O(n), about 1.5 + log(w)/w comparisons per element per direction
//! - Space: two scratch arrays of length `n`

use super::extremum::{Extremum, Max, Min};
use super::{run_kernel, ExtremaOutput};
use crate::error::Result;
use crate::traits::SeriesElement;

/// Computes sliding-window max and min with the Gil-Kimmel method.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidWindow`] if `width` is zero, larger than
/// `data`, or `data` is empty.
///
/// # Example
///
/// ```
/// use fast_minmax::kernels::divide_conquer_extrema;
///
/// let out = divide_conquer_extrema(&[1.0_f64, 3.0, 2.0, 5.0, 4.0], 3).unwrap();
/// assert_eq!(out.max, vec![3.0, 5.0, 5.0]);
/// assert_eq!(out.min, vec![1.0, 2.0, 2.0]);
/// ```
pub fn divide_conquer_extrema<T: SeriesElement>(
    data: &[T],
    width: usize,
) -> Result<ExtremaOutput<T>> {
    run_kernel(data, width, fill)
}

pub(crate) fn fill<T: SeriesElement>(data: &[T], width: usize, max_out: &mut [T], min_out: &mut [T]) {
    let mut prefix = vec![T::nan(); data.len()];
    let mut suffix = vec![T::nan(); data.len()];

    scan_blocks::<Max, T>(data, width, &mut prefix, &mut suffix);
    merge_windows::<Max, T>(width, &prefix, &suffix, max_out);

    scan_blocks::<Min, T>(data, width, &mut prefix, &mut suffix);
    merge_windows::<Min, T>(width, &prefix, &suffix, min_out);
}

fn scan_blocks<E: Extremum, T: SeriesElement>(
    data: &[T],
    width: usize,
    prefix: &mut [T],
    suffix: &mut [T],
) {
    let blocks = data
        .chunks(width)
        .zip(prefix.chunks_mut(width))
        .zip(suffix.chunks_mut(width));

    for ((block, prefix), suffix) in blocks {
        cut_in_the_middle::<E, T>(block, prefix, suffix);
    }
}

/// Fills one block's prefix and suffix scans, finishing only the half that
/// can still change.
fn cut_in_the_middle<E: Extremum, T: SeriesElement>(block: &[T], prefix: &mut [T], suffix: &mut [T]) {
    let len = block.len();
    if len == 1 {
        prefix[0] = block[0];
        suffix[0] = block[0];
        return;
    }

    // 1 <= mid < len
    let mid = (len + 1) / 2;

    prefix[0] = block[0];
    for k in 1..mid {
        prefix[k] = E::pick(prefix[k - 1], block[k]);
    }
    suffix[len - 1] = block[len - 1];
    for k in (mid..len - 1).rev() {
        suffix[k] = E::pick(block[k], suffix[k + 1]);
    }

    if !E::covers(prefix[mid - 1], suffix[mid]) {
        // block extremum lies strictly in the upper half
        for k in mid..len {
            prefix[k] = E::pick(prefix[k - 1], block[k]);
        }
        let upper = suffix[mid];
        suffix[..mid].fill(upper);
    } else {
        for k in (0..mid).rev() {
            suffix[k] = E::pick(block[k], suffix[k + 1]);
        }
        let lower = prefix[mid - 1];
        prefix[mid..].fill(lower);
    }
}

fn merge_windows<E: Extremum, T: SeriesElement>(
    width: usize,
    prefix: &[T],
    suffix: &[T],
    out: &mut [T],
) {
    let windows = out.len();

    for start in (0..windows).step_by(width) {
        let stop = (start + width).min(windows);
        let cut = search_cut::<E, T>(start, stop, width, prefix, suffix);

        out[start..cut].copy_from_slice(&suffix[start..cut]);
        out[cut..stop].copy_from_slice(&prefix[cut + width - 1..stop + width - 1]);
    }
}

/// First window start in `(lo, hi]` whose prefix part beats its suffix part,
/// or `hi` if none does.
fn search_cut<E: Extremum, T: SeriesElement>(
    mut lo: usize,
    mut hi: usize,
    width: usize,
    prefix: &[T],
    suffix: &[T],
) -> usize {
    let mut mid = (hi - lo + 1) / 2 + lo;
    while mid != hi {
        if E::covers(suffix[mid], prefix[mid + width - 1]) {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = (hi - lo + 1) / 2 + lo;
    }
    hi
}
