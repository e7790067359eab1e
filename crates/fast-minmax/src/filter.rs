//! Variant selection and dispatch.
//!
//! [`Variant`] names the six filter strategies. The free functions in this
//! module validate a request once, then hand the input to the selected kernel:
//!
//! - [`compute_extrema`]: freshly allocated outputs of `N - W + 1` windows
//! - [`compute_extrema_into`]: the same, written into caller-owned buffers
//! - [`compute_extrema_clamped`]: one centred window per sample, with the
//!   series edges repeated to fill the windows that overhang it
//!
//! # Example
//!
//! ```
//! use fast_minmax::filter::{compute_extrema, Variant};
//!
//! let data = [1.0_f64, 3.0, 2.0, 5.0, 4.0];
//! for variant in Variant::ALL {
//!     let out = compute_extrema(variant, &data, 3).unwrap();
//!     assert_eq!(out.max, vec![3.0, 5.0, 5.0], "{variant}");
//!     assert_eq!(out.min, vec![1.0, 2.0, 2.0], "{variant}");
//! }
//! ```

use std::fmt;
use std::iter;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::kernels::{
    bitmask_deque, block_prefix_suffix, divide_conquer, monotonic_deque, naive, run_checked,
    simple_deque, ExtremaOutput, Kernel, BITMASK_MAX_WIDTH,
};
use crate::traits::{window_count, SeriesElement, ValidatedInput};

/// One of the sliding-window extrema strategies.
///
/// All variants produce identical outputs for the same `(input, width)`. They
/// differ only in cost and, for [`Variant::BitmaskDeque`], in the widest
/// window they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Brute-force scan of every window, O(n·w).
    Naive,
    /// Gil-Kimmel block prefix/suffix arrays with a binary-searched merge.
    DivideConquer,
    /// Van Herk / Gil-Werman two-pass block scan.
    BlockPrefixSuffix,
    /// Lemire's streaming filter over two index deques.
    #[default]
    MonotonicDeque,
    /// Lemire's streaming filter with `u64` bit-set deques.
    BitmaskDeque,
    /// A plainer monotonic deque filter.
    SimpleDeque,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Naive,
        Self::DivideConquer,
        Self::BlockPrefixSuffix,
        Self::MonotonicDeque,
        Self::BitmaskDeque,
        Self::SimpleDeque,
    ];

    /// Stable kebab-case name, accepted back by [`Variant::from_str`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::DivideConquer => "divide-conquer",
            Self::BlockPrefixSuffix => "block-prefix-suffix",
            Self::MonotonicDeque => "monotonic-deque",
            Self::BitmaskDeque => "bitmask-deque",
            Self::SimpleDeque => "simple-deque",
        }
    }

    /// One-line description of the strategy.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Naive => "brute-force scan of every window",
            Self::DivideConquer => "Gil-Kimmel blocks cut in the middle with a bisected merge",
            Self::BlockPrefixSuffix => "van Herk / Gil-Werman block prefix and suffix scans",
            Self::MonotonicDeque => "Lemire streaming filter over two index deques",
            Self::BitmaskDeque => "Lemire streaming filter over two u64 bit sets",
            Self::SimpleDeque => "plain monotonic deques with separate eviction",
        }
    }

    /// Widest window this variant accepts, or `None` when only the input
    /// length limits it.
    #[must_use]
    pub const fn max_width(self) -> Option<usize> {
        match self {
            Self::BitmaskDeque => Some(BITMASK_MAX_WIDTH),
            _ => None,
        }
    }

    /// Returns true if this variant can run a window of `width` samples.
    ///
    /// Input-independent: `width` must still fit the input.
    #[must_use]
    pub const fn supports(self, width: usize) -> bool {
        match self.max_width() {
            Some(max) => width >= 1 && width <= max,
            None => width >= 1,
        }
    }

    /// Shorthand for [`compute_extrema`] with this variant.
    ///
    /// # Errors
    ///
    /// See [`compute_extrema`].
    pub fn compute<T: SeriesElement>(self, data: &[T], width: usize) -> Result<ExtremaOutput<T>> {
        compute_extrema(self, data, width)
    }

    /// Shorthand for [`compute_extrema_into`] with this variant.
    ///
    /// # Errors
    ///
    /// See [`compute_extrema_into`].
    pub fn compute_into<T: SeriesElement>(
        self,
        data: &[T],
        width: usize,
        max_out: &mut [T],
        min_out: &mut [T],
    ) -> Result<usize> {
        compute_extrema_into(self, data, width, max_out, min_out)
    }

    fn kernel<T: SeriesElement>(self) -> Kernel<T> {
        match self {
            Self::Naive => naive::fill,
            Self::DivideConquer => divide_conquer::fill,
            Self::BlockPrefixSuffix => block_prefix_suffix::fill,
            Self::MonotonicDeque => monotonic_deque::fill,
            Self::BitmaskDeque => bitmask_deque::fill,
            Self::SimpleDeque => simple_deque::fill,
        }
    }

    /// Validates a request: window first, then the variant's own width limit.
    fn check<T: SeriesElement>(self, data: &[T], width: usize) -> Result<()> {
        let checked = data.validate_window(width).and_then(|()| match self.max_width() {
            Some(max) if width > max => Err(Error::UnsupportedWidth { width, max }),
            _ => Ok(()),
        });

        if let Err(err) = &checked {
            tracing::debug!(variant = %self, len = data.len(), width, %err, "request rejected");
        }
        checked
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Parses a variant name. Case is ignored and `_` may stand in for `-`.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == wanted)
            .ok_or_else(|| Error::UnknownVariant { name: s.to_string() })
    }
}

/// Computes the max and min of every window of `width` consecutive samples.
///
/// # Errors
///
/// - [`Error::InvalidWindow`] if `width` is zero, larger than `data`, or
///   `data` is empty
/// - [`Error::UnsupportedWidth`] if `variant` is [`Variant::BitmaskDeque`] and
///   `width` exceeds [`BITMASK_MAX_WIDTH`]
///
/// # Example
///
/// ```
/// use fast_minmax::filter::{compute_extrema, Variant};
/// use fast_minmax::Error;
///
/// let data = vec![0.0_f64; 100];
/// assert!(compute_extrema(Variant::DivideConquer, &data, 80).is_ok());
/// assert_eq!(
///     compute_extrema(Variant::BitmaskDeque, &data, 80),
///     Err(Error::UnsupportedWidth { width: 80, max: 64 })
/// );
/// ```
pub fn compute_extrema<T: SeriesElement>(
    variant: Variant,
    data: &[T],
    width: usize,
) -> Result<ExtremaOutput<T>> {
    tracing::trace!(variant = %variant, len = data.len(), width, "computing extrema");
    run_checked(data, width, |data, width| variant.check(data, width), variant.kernel())
}

/// Computes window extrema into caller-provided buffers.
///
/// Only the first `data.len() - width + 1` elements of each buffer are
/// written; the rest are left untouched. Returns the number of windows
/// written.
///
/// # Errors
///
/// As [`compute_extrema`], plus [`Error::InsufficientOutput`] if either buffer
/// is shorter than the number of windows.
///
/// # Example
///
/// ```
/// use fast_minmax::filter::{compute_extrema_into, Variant};
///
/// let data = [5.0_f64, 4.0, 3.0, 2.0, 1.0];
/// let mut max = [0.0; 4];
/// let mut min = [0.0; 4];
/// let written = compute_extrema_into(Variant::SimpleDeque, &data, 2, &mut max, &mut min).unwrap();
/// assert_eq!(written, 4);
/// assert_eq!(max, [5.0, 4.0, 3.0, 2.0]);
/// assert_eq!(min, [4.0, 3.0, 2.0, 1.0]);
/// ```
pub fn compute_extrema_into<T: SeriesElement>(
    variant: Variant,
    data: &[T],
    width: usize,
    max_out: &mut [T],
    min_out: &mut [T],
) -> Result<usize> {
    tracing::trace!(variant = %variant, len = data.len(), width, "computing extrema into buffers");
    variant.check(data, width)?;

    let required = window_count(data.len(), width);
    let actual = max_out.len().min(min_out.len());
    if actual < required {
        tracing::debug!(required, actual, "output buffer too short");
        return Err(Error::InsufficientOutput { required, actual });
    }

    variant.kernel()(data, width, &mut max_out[..required], &mut min_out[..required]);
    Ok(required)
}

/// Computes one centred window per sample, repeating the edge samples.
///
/// The input is padded with `width / 2` copies of its first sample in front
/// and of its last sample behind, so `max[i]` and `min[i]` describe the window
/// `[i - width / 2, i + width / 2]` and both outputs have `data.len()`
/// elements. `width` may exceed the input length; widths above `2N - 1` give
/// the same result as `2N - 1`, every window spanning the whole series.
///
/// # Errors
///
/// - [`Error::InvalidWindow`] if `data` is empty or `width` is zero or even
/// - [`Error::UnsupportedWidth`] as for [`compute_extrema`]
///
/// # Example
///
/// ```
/// use fast_minmax::filter::{compute_extrema_clamped, Variant};
///
/// let data = [1.0_f64, 2.0, 3.0, 7.0, 8.0, -7.0, 12.0, 13.0, 7.0];
/// let out = compute_extrema_clamped(Variant::MonotonicDeque, &data, 3).unwrap();
/// assert_eq!(out.max, vec![2.0, 3.0, 7.0, 8.0, 8.0, 12.0, 13.0, 13.0, 13.0]);
/// assert_eq!(out.min, vec![1.0, 1.0, 2.0, 3.0, -7.0, -7.0, -7.0, 7.0, 7.0]);
/// ```
pub fn compute_extrema_clamped<T: SeriesElement>(
    variant: Variant,
    data: &[T],
    width: usize,
) -> Result<ExtremaOutput<T>> {
    let len = data.len();
    let (Some(&first), Some(&last)) = (data.first(), data.last()) else {
        return Err(Error::invalid_window(width, len, "input is empty"));
    };
    if width == 0 {
        return Err(Error::invalid_window(width, len, "width must be at least 1"));
    }
    if width % 2 == 0 {
        tracing::debug!(variant = %variant, len, width, "even width rejected in clamped mode");
        return Err(Error::invalid_window(width, len, "width must be odd in clamped mode"));
    }

    if let Some(max) = variant.max_width().filter(|&max| width > max) {
        tracing::debug!(variant = %variant, len, width, "width above variant limit in clamped mode");
        return Err(Error::UnsupportedWidth { width, max });
    }

    // any window of 2N - 1 samples centred on the series already covers all of it
    let width = width.min(len.saturating_mul(2) - 1);
    let half = width / 2;
    let mut padded = Vec::with_capacity(len + width - 1);
    padded.extend(iter::repeat(first).take(half));
    padded.extend_from_slice(data);
    padded.extend(iter::repeat(last).take(half));

    compute_extrema(variant, &padded, width)
}
