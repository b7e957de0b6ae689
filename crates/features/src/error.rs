//! Error types for feature extraction.

use railcast_primitives::WagonId;

/// Errors that can occur while building indexes or ingesting tables.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// Wagon absent from the parameters table.
    #[error("unknown wagon: {0}")]
    UnknownWagon(WagonId),

    /// Wagon listed more than once in the parameters table.
    #[error("duplicate wagon in parameters table: {0}")]
    DuplicateWagon(WagonId),

    /// History slice is not in ascending date order.
    #[error("{table} history of wagon {wagon} is not sorted at position {index}")]
    UnsortedHistory {
        /// Wagon the slice belongs to.
        wagon: WagonId,
        /// Which history table.
        table: &'static str,
        /// First out-of-order position.
        index: usize,
    },

    /// Record of another wagon inside a history slice.
    #[error("record of wagon {found} in history of wagon {expected}")]
    ForeignRecord {
        /// Wagon the slice belongs to.
        expected: WagonId,
        /// Wagon of the offending record.
        found: WagonId,
    },

    /// Missing required column.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// Missing value in a required cell.
    #[error("missing value in column {column} at row {row}")]
    MissingValue {
        /// Column name.
        column: String,
        /// Row index.
        row: usize,
    },

    /// Present cell that cannot be read as the column's type.
    #[error("cannot parse value in column {column} at row {row} as {dtype}")]
    Unparseable {
        /// Column name.
        column: String,
        /// Row index.
        row: usize,
        /// Expected type.
        dtype: polars::prelude::DataType,
    },

    /// Label that does not fit the label type.
    #[error("label {value} in column {column} at row {row} is out of range")]
    LabelOutOfRange {
        /// Column name.
        column: String,
        /// Row index.
        row: usize,
        /// Offending value.
        value: i64,
    },

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl FeatureError {
    /// Returns whether this error is recoverable.
    ///
    /// Unknown wagons can be pre-screened out of the target list.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownWagon(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeatureError::UnknownWagon(WagonId::new(12));
        assert_eq!(err.to_string(), "unknown wagon: 12");

        let err = FeatureError::UnsortedHistory { wagon: WagonId::new(3), table: "repair", index: 4 };
        assert!(err.to_string().contains("repair history of wagon 3"));

        let err = FeatureError::Unparseable {
            column: "plan_date".to_string(),
            row: 2,
            dtype: polars::prelude::DataType::Date,
        };
        assert_eq!(err.to_string(), "cannot parse value in column plan_date at row 2 as date");
    }

    #[test]
    fn error_is_recoverable() {
        assert!(FeatureError::UnknownWagon(WagonId::new(1)).is_recoverable());
        assert!(!FeatureError::MissingColumn("wagnum".to_string()).is_recoverable());
    }
}
