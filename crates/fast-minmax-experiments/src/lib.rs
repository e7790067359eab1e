//! fast-minmax-experiments: benchmark data and variant comparisons
//!
//! This crate holds the seeded generators used by the benchmarks under
//! `benches/`:
//!
//! - `e01_variants`: all six filters across input sizes and widths
//! - `e02_bitmask_ceiling`: the bitmask filter against the index deque around
//!   the 64-sample word limit
//!
//! # Example
//!
//! ```
//! use fast_minmax_experiments::data::{generate_plateaus, generate_random_walk};
//!
//! let walk = generate_random_walk(1000, 42);
//! assert_eq!(walk, generate_random_walk(1000, 42));
//!
//! let flat = generate_plateaus(500, 7);
//! assert_eq!(flat.len(), 500);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod data;
