//! Error types for interval cover operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// The intervals cannot cover the requested range. An expected outcome,
    /// not a fault.
    #[error("target range cannot be covered by the given intervals")]
    Infeasible,

    /// `begin > end`, or a bound is not comparable (NaN).
    #[error("malformed target range: begin must not exceed end")]
    MalformedRange,

    /// An input interval has `lo > hi`, or a bound is not comparable (NaN).
    #[error("malformed interval at index {index}: lo must not exceed hi")]
    MalformedInterval { index: usize },
}

pub type Result<T> = std::result::Result<T, CoverError>;
