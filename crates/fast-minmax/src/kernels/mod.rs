//! Sliding-window extrema kernels.
//!
//! Each submodule implements one strategy for the same problem: for every
//! window of `width` consecutive samples, report its maximum and minimum.
//! All kernels agree elementwise on every valid input; see [`crate::filter`]
//! for the dispatching front end.
//!
//! # Kernels
//!
//! - [`naive`]: brute-force O(n·w) reference
//! - [`divide_conquer`]: block prefix/suffix arrays built by cutting each block
//!   in the middle, merged with a binary search per block
//! - [`block_prefix_suffix`]: van Herk / Gil-Werman two-pass block scan
//! - [`monotonic_deque`]: Lemire's streaming algorithm over two index deques
//! - [`bitmask_deque`]: the same streaming algorithm with the deques packed
//!   into machine words
//! - [`simple_deque`]: a plainer monotonic deque used as a second reference

pub mod bitmask_deque;
pub mod block_prefix_suffix;
pub mod divide_conquer;
pub mod monotonic_deque;
pub mod naive;
pub mod simple_deque;

mod extremum;

pub use bitmask_deque::{
    bitmask_deque_extrema, bitmask_deque_extrema_with, window_mask, BITMASK_MAX_WIDTH,
};
pub use block_prefix_suffix::block_prefix_suffix_extrema;
pub use divide_conquer::divide_conquer_extrema;
pub use monotonic_deque::monotonic_deque_extrema;
pub use naive::naive_extrema;
pub use simple_deque::simple_deque_extrema;

use crate::error::Result;
use crate::traits::{window_count, SeriesElement, ValidatedInput};

/// Output of a sliding-window extrema filter.
///
/// Both vectors hold one value per window, so their length is
/// `input.len() - width + 1` (or `input.len()` in clamped mode).
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremaOutput<T> {
    /// Maximum of each window.
    pub max: Vec<T>,
    /// Minimum of each window.
    pub min: Vec<T>,
}

impl<T> ExtremaOutput<T> {
    /// Number of windows in the output.
    #[must_use]
    pub fn len(&self) -> usize {
        self.max.len()
    }

    /// Returns true if the output holds no windows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max.is_empty()
    }
}

/// Kernel signature shared by every strategy.
///
/// Kernels assume a validated `(data, width)` pair and output slices of exactly
/// `data.len() - width + 1` elements.
pub(crate) type Kernel<T> = fn(&[T], usize, &mut [T], &mut [T]);

/// Validates the window, allocates both outputs and runs `kernel`.
pub(crate) fn run_kernel<T: SeriesElement>(
    data: &[T],
    width: usize,
    kernel: Kernel<T>,
) -> Result<ExtremaOutput<T>> {
    run_checked(data, width, |data, width| data.validate_window(width), kernel)
}

/// Runs `check`, then allocates both outputs and runs `kernel`.
///
/// `check` must reject every `(data, width)` pair the kernel cannot take,
/// starting with the window validation.
pub(crate) fn run_checked<T, C>(
    data: &[T],
    width: usize,
    check: C,
    kernel: Kernel<T>,
) -> Result<ExtremaOutput<T>>
where
    T: SeriesElement,
    C: FnOnce(&[T], usize) -> Result<()>,
{
    check(data, width)?;

    let windows = window_count(data.len(), width);
    let mut max = vec![T::nan(); windows];
    let mut min = vec![T::nan(); windows];
    kernel(data, width, &mut max, &mut min);

    Ok(ExtremaOutput { max, min })
}
