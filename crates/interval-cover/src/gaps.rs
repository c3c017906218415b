//! Report the parts of a target range that a set of intervals leaves uncovered.
//!
//! Clips the intervals to the target, sorts them by `lo`, merges overlapping
//! or touching ranges, then walks the merged union collecting the holes. A
//! target is coverable exactly when this finds no holes, which makes it the
//! diagnostic companion to [`cover`](crate::cover()).

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interval::{compare_bounds, max_of, min_of, validate, Interval};

/// A stretch of the target range not contained in any input interval.
///
/// `start` and `end` are the covered boundaries on either side of the hole
/// (or the target's own bounds). For a point target, an uncovered point is
/// reported as `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gap<T> {
    pub start: T,
    pub end: T,
}

/// Merge overlapping or touching intervals, clipped to `[begin, end]`.
///
/// Returns a sorted, non-overlapping list of ranges.
fn merge_covered<T>(intervals: &[Interval<T>], begin: T, end: T) -> Vec<Interval<T>>
where
    T: PartialOrd + Copy,
{
    let mut clipped: Vec<Interval<T>> = intervals
        .iter()
        .filter(|iv| iv.lo <= end && iv.hi >= begin)
        .map(|iv| Interval::new(max_of(iv.lo, begin), min_of(iv.hi, end)))
        .collect();

    if clipped.is_empty() {
        return Vec::new();
    }

    clipped.sort_by(compare_bounds);

    let mut merged: Vec<Interval<T>> = Vec::new();
    for iv in clipped {
        if let Some(last) = merged.last_mut() {
            // Closed ranges: touching endpoints leave no hole.
            if iv.lo <= last.hi {
                last.hi = max_of(last.hi, iv.hi);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}

/// Find the stretches of `[begin, end]` not covered by any interval.
///
/// Returns gaps sorted by `start`. An empty result means the target is
/// coverable.
///
/// # Errors
/// Same validation as [`cover`](crate::cover()): `MalformedRange` and
/// `MalformedInterval`. Never returns `Infeasible`.
pub fn find_gaps<T>(intervals: &[Interval<T>], begin: T, end: T) -> Result<Vec<Gap<T>>>
where
    T: PartialOrd + Copy,
{
    validate(intervals, begin, end)?;

    if begin == end {
        return Ok(if intervals.iter().any(|iv| iv.contains(begin)) {
            Vec::new()
        } else {
            vec![Gap { start: begin, end }]
        });
    }

    let merged = merge_covered(intervals, begin, end);

    let mut gaps = Vec::new();
    let mut cursor = begin;

    for covered in &merged {
        if cursor < covered.lo {
            gaps.push(Gap {
                start: cursor,
                end: covered.lo,
            });
        }
        cursor = max_of(cursor, covered.hi);
    }

    // Trailing hole after the last covered range.
    if cursor < end {
        gaps.push(Gap { start: cursor, end });
    }

    Ok(gaps)
}

/// `true` when the union of `intervals` contains `[begin, end]`.
pub fn is_coverable<T>(intervals: &[Interval<T>], begin: T, end: T) -> Result<bool>
where
    T: PartialOrd + Copy,
{
    Ok(find_gaps(intervals, begin, end)?.is_empty())
}
