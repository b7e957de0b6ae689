//! Imputation errors.

/// Errors raised while filling feature columns.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Constant fill value is NaN or infinite.
    #[error("fill value for {column} must be finite, got {value}")]
    NonFiniteFill {
        /// Column being filled.
        column: String,
        /// Rejected value.
        value: f64,
    },

    /// Column to fill is absent from the frame.
    #[error("missing column: {0}")]
    MissingColumn(String),
}
