//! Closed numeric ranges.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{CoverError, Result};

/// A closed range `[lo, hi]` over an ordered domain.
///
/// Any `PartialOrd + Copy` type works: `f32`, `f64`, the integer types.
/// Well-formed intervals satisfy `lo <= hi`; the cover routines reject the
/// rest rather than guessing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval<T> {
    pub lo: T,
    pub hi: T,
}

impl<T: PartialOrd + Copy> Interval<T> {
    pub fn new(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }

    /// `true` when `lo <= x <= hi`.
    pub fn contains(&self, x: T) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// `true` when `lo <= hi`. NaN bounds are never well-formed.
    pub fn is_well_formed(&self) -> bool {
        self.lo <= self.hi
    }
}

impl<T> From<(T, T)> for Interval<T> {
    fn from((lo, hi): (T, T)) -> Self {
        Self { lo, hi }
    }
}

/// Total order over values already known to be comparable.
///
/// Only called after [`validate`] has ruled out NaN, so the fallback arm is
/// unreachable in practice.
pub(crate) fn compare<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Sort key shared by the sweep and the gap merge: `lo`, then `hi`.
pub(crate) fn compare_bounds<T: PartialOrd>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    compare(&a.lo, &b.lo).then_with(|| compare(&a.hi, &b.hi))
}

pub(crate) fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

pub(crate) fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Reject a malformed target range or the first malformed interval.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub(crate) fn validate<T: PartialOrd + Copy>(
    intervals: &[Interval<T>],
    begin: T,
    end: T,
) -> Result<()> {
    if !(begin <= end) {
        return Err(CoverError::MalformedRange);
    }
    match intervals.iter().position(|iv| !iv.is_well_formed()) {
        Some(index) => Err(CoverError::MalformedInterval { index }),
        None => Ok(()),
    }
}
