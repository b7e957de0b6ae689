//! Error types for sample assembly and prediction.

use railcast_features::FeatureError;
use railcast_primitives::{Date, WagonId};
use railcast_traits::ClassifierError;
use railcast_utils::UtilsError;

/// Errors that can occur while building or scoring the feature table.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Feature extraction error.
    #[error("feature error: {0}")]
    Feature(#[from] FeatureError),

    /// Imputation error.
    #[error("imputation error: {0}")]
    Utils(#[from] UtilsError),

    /// Classifier error.
    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Missing required column.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// Training-mode observation without labels.
    #[error("missing labels for wagon {wagon} at {date}")]
    MissingLabels {
        /// Wagon identifier.
        wagon: WagonId,
        /// Target date.
        date: Date,
    },

    /// Missing value where a complete table is required.
    #[error("missing value in column {column} at row {row}")]
    MissingValue {
        /// Column name.
        column: String,
        /// Row index.
        row: usize,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ModelError {
    /// Returns whether this error is recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Feature(err) => err.is_recoverable(),
            _ => false,
        }
    }
}
