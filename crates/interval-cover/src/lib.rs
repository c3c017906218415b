//! # interval-cover
//!
//! Greedy minimum interval cover over closed ranges.
//!
//! Given a collection of closed intervals `[lo, hi]` and a target range
//! `[begin, end]`, [`cover`] picks a smallest subset of the intervals whose
//! union contains the target, or reports that no such subset exists.
//! Results are positions into the caller's original slice, in the order the
//! sweep selected them (left to right along the target).
//!
//! ## Quick start
//!
//! ```rust
//! use interval_cover::{cover, CoverError, Interval};
//!
//! let intervals = [
//!     Interval::new(0.0, 0.25),
//!     Interval::new(0.25, 0.75),
//!     Interval::new(0.75, 1.0),
//! ];
//! assert_eq!(cover(&intervals, 0.0, 1.0).unwrap(), vec![0, 1, 2]);
//!
//! let short = [Interval::new(0.0, 0.5)];
//! assert!(matches!(cover(&short, 0.0, 1.0), Err(CoverError::Infeasible)));
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — `Interval<T>` closed range
//! - [`cover`](mod@cover) — the greedy sweep
//! - [`gaps`] — which parts of a target the intervals leave uncovered
//! - [`error`] — Error types

pub mod cover;
pub mod error;
pub mod gaps;
pub mod interval;

pub use cover::cover;
pub use error::CoverError;
pub use gaps::{find_gaps, is_coverable, Gap};
pub use interval::Interval;
