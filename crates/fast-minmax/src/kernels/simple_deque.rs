//! A plainer monotonic deque filter.
//!
//! Same family as [`super::monotonic_deque`], written for readability rather
//! than comparison count: every index is pushed onto both deques and the
//! sample just overtaken is popped without a comparison. A flat step pops
//! nothing, so equal values keep the earliest index. Expired fronts are
//! removed in a separate step at the end of each iteration. The deques are
//! never empty, so the fronts can be read directly.

use std::collections::VecDeque;

use super::{run_kernel, ExtremaOutput};
use crate::error::Result;
use crate::traits::SeriesElement;

/// Computes sliding-window max and min with the simplified deque algorithm.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidWindow`] if `width` is zero, larger than
/// `data`, or `data` is empty.
pub fn simple_deque_extrema<T: SeriesElement>(
    data: &[T],
    width: usize,
) -> Result<ExtremaOutput<T>> {
    run_kernel(data, width, fill)
}

pub(crate) fn fill<T: SeriesElement>(data: &[T], width: usize, max_out: &mut [T], min_out: &mut [T]) {
    let n = data.len();
    let mut max_fifo: VecDeque<usize> = VecDeque::with_capacity(width + 1);
    let mut min_fifo: VecDeque<usize> = VecDeque::with_capacity(width + 1);
    max_fifo.push_back(0);
    min_fifo.push_back(0);

    for i in 1..n {
        if i >= width {
            max_out[i - width] = data[max_fifo[0]];
            min_out[i - width] = data[min_fifo[0]];
        }

        let current = data[i];
        if current > data[i - 1] {
            max_fifo.pop_back();
            while let Some(&back) = max_fifo.back() {
                if current <= data[back] {
                    break;
                }
                max_fifo.pop_back();
            }
        } else if current < data[i - 1] {
            min_fifo.pop_back();
            while let Some(&back) = min_fifo.back() {
                if current >= data[back] {
                    break;
                }
                min_fifo.pop_back();
            }
        }
        max_fifo.push_back(i);
        min_fifo.push_back(i);

        if max_fifo[0] + width == i {
            max_fifo.pop_front();
        }
        if min_fifo[0] + width == i {
            min_fifo.pop_front();
        }
    }

    max_out[n - width] = data[max_fifo[0]];
    min_out[n - width] = data[min_fifo[0]];
}
