//! Error types for ELL assembly

use thiserror::Error;

/// Precondition violations detected before any row is processed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EllError {
    /// The row count (thread count) must be at least one
    #[error("number of threads must be non-zero")]
    ZeroThreads,

    /// The input length does not split into equal rows
    #[error("input length {len} is not divisible by the number of threads {num_threads}")]
    IndivisibleLength { len: usize, num_threads: usize },

    /// Points and chunk labels must be paired one to one
    #[error("points.len() ({points}) must equal labels.len() ({labels})")]
    LengthMismatch { points: usize, labels: usize },

    /// The arrays handed to the ELL constructor are inconsistent
    #[error("invalid ELL matrix: {0}")]
    InvalidMatrix(String),
}
