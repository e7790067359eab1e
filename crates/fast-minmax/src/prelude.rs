//! Commonly used types and functions for convenient importing.
//!
//! ```
//! use fast_minmax::prelude::*;
//!
//! let data = vec![5.0_f64, 4.0, 3.0, 2.0, 1.0];
//! let out = compute_extrema(Variant::default(), &data, 2).unwrap();
//! assert_eq!(out.max, vec![5.0, 4.0, 3.0, 2.0]);
//!
//! let direct = monotonic_deque_extrema(&data, 2).unwrap();
//! assert_eq!(out, direct);
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{window_from_signed, BitWord, SeriesElement, ValidatedInput};

// Dispatching front end
pub use crate::filter::{compute_extrema, compute_extrema_clamped, compute_extrema_into, Variant};

// Per-variant entry points
pub use crate::kernels::{
    bitmask_deque_extrema, bitmask_deque_extrema_with, block_prefix_suffix_extrema,
    divide_conquer_extrema, monotonic_deque_extrema, naive_extrema, simple_deque_extrema,
};

// Output type and limits
pub use crate::kernels::{ExtremaOutput, BITMASK_MAX_WIDTH};
