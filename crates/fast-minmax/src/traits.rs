//! Core traits for fast-minmax numeric operations.
//!
//! [`SeriesElement`] abstracts over the float types a filter can run on and
//! [`BitWord`] over the unsigned words the bitmask filter packs its candidate
//! queues into. Window validation lives here as well, through the
//! [`ValidatedInput`] extension trait and [`window_from_signed`].
//!
//! # Example
//!
//! ```
//! use fast_minmax::traits::{ValidatedInput, window_from_signed};
//!
//! let data = vec![1.0_f64, 2.0, 3.0];
//! assert!(data.validate_window(3).is_ok());
//! assert!(data.validate_window(4).is_err());
//!
//! assert_eq!(window_from_signed(2, data.len()).unwrap(), 2);
//! assert!(window_from_signed(-1, data.len()).is_err());
//! ```

use num_traits::{Float, PrimInt, Unsigned};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements of a filtered series.
///
/// Implemented for every `num_traits::Float` type that is also `Send + Sync`,
/// which in practice means `f32` and `f64`.
///
/// # Example
///
/// ```
/// use fast_minmax::traits::SeriesElement;
///
/// fn peak<T: SeriesElement>(data: &[T]) -> T {
///     data.iter().copied().fold(T::neg_infinity(), T::max)
/// }
///
/// assert_eq!(peak(&[1.0_f32, 4.0, 2.0]), 4.0);
/// ```
pub trait SeriesElement: Float + Copy + Default + Send + Sync + 'static {}

impl<T: Float + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// An unsigned machine word usable as a bit-set of window candidates.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
pub trait BitWord: PrimInt + Unsigned + Send + Sync + 'static {
    /// Number of bits in the word.
    #[inline]
    #[must_use]
    fn bit_width() -> usize {
        Self::zero().count_zeros() as usize
    }
}

impl<W: PrimInt + Unsigned + Send + Sync + 'static> BitWord for W {}

/// Extension trait validating a series against a window width.
pub trait ValidatedInput {
    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that `width` describes at least one full window of the series.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] if the series is empty, the width is
    /// zero, or the width is larger than the series.
    #[inline]
    fn validate_window(&self, width: usize) -> Result<()> {
        let len = self.len();
        if len == 0 {
            Err(Error::invalid_window(width, len, "input is empty"))
        } else if width == 0 {
            Err(Error::invalid_window(width, len, "width must be at least 1"))
        } else if width > len {
            Err(Error::invalid_window(width, len, "width exceeds input length"))
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Converts a signed width (as typed by a user) into a validated window width.
///
/// # Errors
///
/// Returns [`Error::InvalidWindow`] for negative or zero widths, and for
/// widths larger than `len`.
pub fn window_from_signed(width: i64, len: usize) -> Result<usize> {
    let unsigned = usize::try_from(width).map_err(|_| Error::InvalidWindow {
        width,
        len,
        reason: "width must be at least 1",
    })?;
    if len == 0 {
        return Err(Error::invalid_window(unsigned, len, "input is empty"));
    }
    if unsigned == 0 {
        return Err(Error::invalid_window(unsigned, len, "width must be at least 1"));
    }
    if unsigned > len {
        return Err(Error::invalid_window(unsigned, len, "width exceeds input length"));
    }
    Ok(unsigned)
}

/// Number of windows produced for an input of `len` samples.
///
/// Returns 0 when `width` is 0 or larger than `len`.
#[inline]
#[must_use]
pub const fn window_count(len: usize, width: usize) -> usize {
    if width == 0 || width > len {
        0
    } else {
        len - width + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_window_ok() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0];
        assert!(data.validate_window(1).is_ok());
        assert!(data.validate_window(4).is_ok());
        assert!(data.as_slice().validate_window(2).is_ok());
    }

    #[test]
    fn test_validate_window_zero() {
        let data = vec![1.0_f64, 2.0];
        assert!(matches!(
            data.validate_window(0),
            Err(Error::InvalidWindow { width: 0, len: 2, .. })
        ));
    }

    #[test]
    fn test_validate_window_too_wide() {
        let data = vec![1.0_f32, 2.0];
        assert!(matches!(
            data.validate_window(3),
            Err(Error::InvalidWindow { width: 3, len: 2, .. })
        ));
    }

    #[test]
    fn test_validate_window_empty() {
        let data: Vec<f64> = vec![];
        let err = data.validate_window(1).unwrap_err();
        assert!(err.to_string().contains("input is empty"));
    }

    #[test]
    fn test_window_from_signed() {
        assert_eq!(window_from_signed(3, 5).unwrap(), 3);
        assert!(matches!(
            window_from_signed(-2, 5),
            Err(Error::InvalidWindow { width: -2, len: 5, .. })
        ));
        assert!(matches!(
            window_from_signed(0, 5),
            Err(Error::InvalidWindow { width: 0, .. })
        ));
        assert!(matches!(
            window_from_signed(6, 5),
            Err(Error::InvalidWindow { width: 6, .. })
        ));
    }

    #[test]
    fn test_window_count() {
        assert_eq!(window_count(5, 3), 3);
        assert_eq!(window_count(5, 5), 1);
        assert_eq!(window_count(5, 1), 5);
        assert_eq!(window_count(5, 0), 0);
        assert_eq!(window_count(5, 6), 0);
    }

    #[test]
    fn test_bit_width() {
        assert_eq!(u8::bit_width(), 8);
        assert_eq!(u32::bit_width(), 32);
        assert_eq!(u64::bit_width(), 64);
        assert_eq!(u128::bit_width(), 128);
    }
}
