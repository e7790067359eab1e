//! Streaming sliding-window extrema with two monotonic deques.
//!
//! This is Lemire's "Streaming Maximum-Minimum Filter Using No More than Three
//! Comparisons per Element" (2006). Two deques of indices are kept:
//!
//! - `max_fifo`: candidate maxima, values decreasing from front to back
//! - `min_fifo`: candidate minima, values increasing from front to back
//!
//! On each new sample `i` the kernel compares `data[i]` with `data[i - 1]`.
//! When the series overshoots upward, `i - 1` can no longer be a maximum but
//! may still be a minimum, so it goes to `min_fifo` and `max_fifo` sheds every
//! candidate strictly below `data[i]`. A downward step is the mirror image. On
//! a flat step `i - 1` joins both deques, so equal values keep the earliest
//! index. The newest sample itself is never queued: when a deque is empty the
//! window's extremum is the sample just before the current one.
//!
//! Eviction of the front index happens inline, in the same branch that touches
//! the queue, and only ever for the single index that just left the window.
//!
//! # Complexity
//!
//! - Time: O(n), at most three comparisons per element
//! - Space: O(w) for the deques
//!
//! # Example
//!
//! ```
//! use fast_minmax::kernels::monotonic_deque_extrema;
//!
//! let out = monotonic_deque_extrema(&[5.0_f64, 4.0, 3.0, 2.0, 1.0], 2).unwrap();
//! assert_eq!(out.max, vec![5.0, 4.0, 3.0, 2.0]);
//! assert_eq!(out.min, vec![4.0, 3.0, 2.0, 1.0]);
//! ```

use std::collections::VecDeque;

use super::{run_kernel, ExtremaOutput};
use crate::error::Result;
use crate::traits::SeriesElement;

/// Computes sliding-window max and min with Lemire's monotonic deque algorithm.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidWindow`] if `width` is zero, larger than
/// `data`, or `data` is empty.
///
/// # Performance
///
/// - Time complexity: O(n), amortized O(1) per element
/// - Space complexity: O(n) for the outputs + O(w) for the deques
pub fn monotonic_deque_extrema<T: SeriesElement>(
    data: &[T],
    width: usize,
) -> Result<ExtremaOutput<T>> {
    run_kernel(data, width, fill)
}

pub(crate) fn fill<T: SeriesElement>(data: &[T], width: usize, max_out: &mut [T], min_out: &mut [T]) {
    let n = data.len();
    let mut max_fifo: VecDeque<usize> = VecDeque::with_capacity(width);
    let mut min_fifo: VecDeque<usize> = VecDeque::with_capacity(width);

    for i in 1..n {
        if i >= width {
            // window [i - width, i - 1]
            max_out[i - width] = data[max_fifo.front().copied().unwrap_or(i - 1)];
            min_out[i - width] = data[min_fifo.front().copied().unwrap_or(i - 1)];
        }

        let current = data[i];
        let previous = data[i - 1];
        if current > previous {
            // overshoot
            min_fifo.push_back(i - 1);
            evict_expired(&mut min_fifo, i, width);
            retire_dominated(&mut max_fifo, data, i, width, |back| current <= back);
        } else if current < previous {
            max_fifo.push_back(i - 1);
            evict_expired(&mut max_fifo, i, width);
            retire_dominated(&mut min_fifo, data, i, width, |back| current >= back);
        } else {
            // flat step: the older sample stays a candidate both ways
            max_fifo.push_back(i - 1);
            evict_expired(&mut max_fifo, i, width);
            min_fifo.push_back(i - 1);
            evict_expired(&mut min_fifo, i, width);
        }
    }

    let last = n - width;
    max_out[last] = data[max_fifo.front().copied().unwrap_or(n - 1)];
    min_out[last] = data[min_fifo.front().copied().unwrap_or(n - 1)];
}

/// Drops the front index if it is exactly one window behind `i`.
#[inline]
fn evict_expired(fifo: &mut VecDeque<usize>, i: usize, width: usize) {
    if fifo.front().is_some_and(|&front| front + width == i) {
        fifo.pop_front();
    }
}

/// Pops candidates off the back until one survives `keeps`, then evicts an
/// expired front.
#[inline]
fn retire_dominated<T: SeriesElement>(
    fifo: &mut VecDeque<usize>,
    data: &[T],
    i: usize,
    width: usize,
    keeps: impl Fn(T) -> bool,
) {
    while let Some(&back) = fifo.back() {
        if keeps(data[back]) {
            evict_expired(fifo, i, width);
            return;
        }
        fifo.pop_back();
    }
}
