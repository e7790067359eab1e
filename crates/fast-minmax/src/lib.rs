//! fast-minmax: sliding-window maximum and minimum filters
//!
//! For every window of `width` consecutive samples, report the largest and the
//! smallest value. Six strategies compute exactly the same outputs and can be
//! swapped freely:
//!
//! - [`Variant::Naive`]: brute-force reference, O(n·w)
//! - [`Variant::DivideConquer`]: Gil-Kimmel block scans cut in the middle
//! - [`Variant::BlockPrefixSuffix`]: van Herk / Gil-Werman block scans
//! - [`Variant::MonotonicDeque`]: Lemire's streaming filter, the default
//! - [`Variant::BitmaskDeque`]: the streaming filter over `u64` bit sets,
//!   limited to windows of at most [`BITMASK_MAX_WIDTH`] samples
//! - [`Variant::SimpleDeque`]: a plainer monotonic deque filter
//!
//! # Quick Start
//!
//! ```
//! use fast_minmax::prelude::*;
//!
//! let data = vec![1.0_f64, 3.0, 2.0, 5.0, 4.0];
//! let out = compute_extrema(Variant::MonotonicDeque, &data, 3).unwrap();
//!
//! // one value per window: [1, 3, 2], [3, 2, 5], [2, 5, 4]
//! assert_eq!(out.max, vec![3.0, 5.0, 5.0]);
//! assert_eq!(out.min, vec![1.0, 2.0, 2.0]);
//! ```
//!
//! # Error Handling
//!
//! Every entry point validates the window before computing anything:
//!
//! ```
//! use fast_minmax::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0];
//! assert!(matches!(
//!     compute_extrema(Variant::Naive, &data, 3),
//!     Err(Error::InvalidWindow { .. })
//! ));
//!
//! let long = vec![0.0_f64; 100];
//! assert!(matches!(
//!     compute_extrema(Variant::BitmaskDeque, &long, 65),
//!     Err(Error::UnsupportedWidth { width: 65, max: 64 })
//! ));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_range_loop)]

pub mod error;
pub mod filter;
pub mod kernels;
pub mod prelude;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use filter::{compute_extrema, compute_extrema_clamped, compute_extrema_into, Variant};
pub use kernels::{ExtremaOutput, BITMASK_MAX_WIDTH};
pub use traits::{window_from_signed, BitWord, SeriesElement, ValidatedInput};
