//! Direction markers shared by the block kernels.
//!
//! The block strategies run the same scan twice, once per direction. `Max` and
//! `Min` carry the comparison so a single generic routine serves both passes.

use crate::traits::SeriesElement;

/// A comparison direction.
pub(crate) trait Extremum {
    /// True when `a` is at least as extreme as `b` in this direction.
    fn covers<T: SeriesElement>(a: T, b: T) -> bool;

    /// The more extreme of `a` and `b`; `a` wins ties.
    ///
    /// Callers pass the older sample as `a`, so ties keep the earliest index.
    #[inline]
    fn pick<T: SeriesElement>(a: T, b: T) -> T {
        if Self::covers(a, b) {
            a
        } else {
            b
        }
    }
}

/// Larger values win.
pub(crate) struct Max;

/// Smaller values win.
pub(crate) struct Min;

impl Extremum for Max {
    #[inline]
    fn covers<T: SeriesElement>(a: T, b: T) -> bool {
        a >= b
    }
}

impl Extremum for Min {
    #[inline]
    fn covers<T: SeriesElement>(a: T, b: T) -> bool {
        a <= b
    }
}
