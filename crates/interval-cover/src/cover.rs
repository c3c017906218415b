//! Greedy minimum interval cover.
//!
//! Sorts a permutation of the input by `(lo, hi)`, then sweeps a cursor from
//! `begin` to `end`. At each step the interval reaching furthest among those
//! starting at or before the cursor is selected and the cursor jumps to its
//! `hi`. Every interval is examined at most once, so the whole run costs one
//! sort plus one linear pass.

use log::{debug, trace};

use crate::error::{CoverError, Result};
use crate::interval::{compare_bounds, validate, Interval};

/// Choose a minimum set of intervals whose union contains `[begin, end]`.
///
/// Returns the chosen intervals as positions into `intervals`, in selection
/// order (left to right along the target). The input slice is never
/// reordered.
///
/// A point target (`begin == end`) is answered by the first interval, in
/// input order, that contains the point.
///
/// Among intervals tied on reach, the one earliest in `(lo, hi)` order wins,
/// and on a full tie the one earliest in the input.
///
/// # Errors
/// - `CoverError::MalformedRange` if `begin > end` or either bound is NaN.
/// - `CoverError::MalformedInterval` for the first interval with `lo > hi`
///   or a NaN bound.
/// - `CoverError::Infeasible` if no subset of `intervals` covers the target.
pub fn cover<T>(intervals: &[Interval<T>], begin: T, end: T) -> Result<Vec<usize>>
where
    T: PartialOrd + Copy,
{
    validate(intervals, begin, end)?;

    if begin == end {
        return cover_point(intervals, begin);
    }

    // Stable sort keeps input order among identical intervals.
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by(|&a, &b| compare_bounds(&intervals[a], &intervals[b]));

    let mut chosen = Vec::new();
    let mut point = begin;
    let mut next = 0;

    while point < end {
        let mut best: Option<usize> = None;
        while let Some(&idx) = order.get(next) {
            let candidate = &intervals[idx];
            if candidate.lo > point {
                break;
            }
            if best.is_none_or(|b| candidate.hi > intervals[b].hi) {
                best = Some(idx);
            }
            next += 1;
        }

        let Some(best) = best else {
            debug!(
                "cover stalled after {} selections: no interval starts at or before the cursor",
                chosen.len()
            );
            return Err(CoverError::Infeasible);
        };

        let reach = intervals[best].hi;
        if reach <= point {
            debug!(
                "cover stalled after {} selections: interval {} does not advance the cursor",
                chosen.len(),
                best
            );
            return Err(CoverError::Infeasible);
        }

        trace!("selected interval {}", best);
        chosen.push(best);
        point = reach;
    }

    Ok(chosen)
}

fn cover_point<T>(intervals: &[Interval<T>], point: T) -> Result<Vec<usize>>
where
    T: PartialOrd + Copy,
{
    intervals
        .iter()
        .position(|iv| iv.contains(point))
        .map(|idx| vec![idx])
        .ok_or(CoverError::Infeasible)
}
