//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Observations are not in chronological order.
    #[error("negative day gap {gap} at position {index}")]
    NonChronological {
        /// Position of the offending pair.
        index: usize,
        /// Day gap found there.
        gap: i64,
    },
}
