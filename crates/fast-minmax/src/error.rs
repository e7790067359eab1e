//! Error types for fast-minmax.
//!
//! Every filter validates its window before touching the input, so an error
//! always means no output was produced.

use thiserror::Error;

/// The main error type for fast-minmax operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The window width does not fit the input.
    ///
    /// Returned when the width is below 1, larger than the input, or the input
    /// is empty. The width is kept signed so that negative requests coming
    /// from user input can be reported as-is.
    #[error("invalid window width {width} for input of length {len}: {reason}")]
    InvalidWindow {
        /// The requested width.
        width: i64,
        /// Length of the input sequence.
        len: usize,
        /// Why the width was rejected.
        reason: &'static str,
    },

    /// The width exceeds what a fixed-capacity filter can represent.
    ///
    /// Only the bitmask deque filter returns this, when the window is wider
    /// than the bit width of its candidate word.
    #[error("unsupported window width {width}: this filter handles at most {max}")]
    UnsupportedWidth {
        /// The requested width.
        width: usize,
        /// The largest width the filter supports.
        max: usize,
    },

    /// A caller-provided output buffer is too short.
    #[error("output buffer too short: required {required} elements, got {actual}")]
    InsufficientOutput {
        /// Number of windows that must be written.
        required: usize,
        /// Length of the buffer provided.
        actual: usize,
    },

    /// A variant name did not match any known filter.
    #[error("unknown filter variant '{name}'")]
    UnknownVariant {
        /// The name that failed to parse.
        name: String,
    },
}

impl Error {
    /// Builds an [`Error::InvalidWindow`] from an unsigned width.
    #[must_use]
    pub fn invalid_window(width: usize, len: usize, reason: &'static str) -> Self {
        Self::InvalidWindow {
            width: i64::try_from(width).unwrap_or(i64::MAX),
            len,
            reason,
        }
    }
}

/// Convenience type alias for Results using the fast-minmax Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_window_error() {
        let err = Error::invalid_window(0, 5, "width must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid window width 0 for input of length 5: width must be at least 1"
        );
    }

    #[test]
    fn test_invalid_window_negative_width() {
        let err = Error::InvalidWindow {
            width: -3,
            len: 10,
            reason: "width must be at least 1",
        };
        assert!(err.to_string().contains("width -3"));
    }

    #[test]
    fn test_invalid_window_saturates_huge_width() {
        let err = Error::invalid_window(usize::MAX, 4, "width exceeds input length");
        assert!(matches!(err, Error::InvalidWindow { width: i64::MAX, .. }));
    }

    #[test]
    fn test_unsupported_width_error() {
        let err = Error::UnsupportedWidth { width: 65, max: 64 };
        assert_eq!(
            err.to_string(),
            "unsupported window width 65: this filter handles at most 64"
        );
    }

    #[test]
    fn test_insufficient_output_error() {
        let err = Error::InsufficientOutput {
            required: 8,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "output buffer too short: required 8 elements, got 3"
        );
    }

    #[test]
    fn test_unknown_variant_error() {
        let err = Error::UnknownVariant {
            name: "fft".to_string(),
        };
        assert_eq!(err.to_string(), "unknown filter variant 'fft'");
    }

    #[test]
    fn test_error_equality() {
        let a = Error::UnsupportedWidth { width: 70, max: 64 };
        let b = Error::UnsupportedWidth { width: 70, max: 64 };
        let c = Error::UnsupportedWidth { width: 71, max: 64 };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_std_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        accepts_std_error(Error::invalid_window(9, 3, "width exceeds input length"));
    }
}
