//! Repair prediction from the feature table.

use ndarray::{Array1, Array2};
use polars::prelude::*;
use railcast_primitives::columns;
use railcast_traits::{ClassifierError, RepairClassifier};
use tracing::{debug, info};

use crate::ModelError;

/// Configuration for repair prediction.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// A wagon is flagged when the positive-class probability exceeds this.
    pub threshold: f64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

/// Stack feature columns into a row-major matrix.
///
/// # Arguments
/// * `df` - Imputed feature table
/// * `names` - Columns to stack, in classifier order
///
/// # Errors
/// Returns `ModelError::MissingColumn` if a column is absent,
/// `ModelError::MissingValue` if a cell is missing or NaN.
pub fn feature_matrix(df: &DataFrame, names: &[&str]) -> Result<Array2<f64>, ModelError> {
    let n_rows = df.height();
    let mut matrix = Array2::zeros((n_rows, names.len()));

    for (j, name) in names.iter().enumerate() {
        let column = df.column(name).map_err(|_| ModelError::MissingColumn((*name).to_string()))?;
        let values = column.cast(&DataType::Float64)?;
        for (i, value) in values.f64()?.into_iter().enumerate() {
            match value {
                Some(v) if !v.is_nan() => matrix[[i, j]] = v,
                _ => {
                    return Err(ModelError::MissingValue { column: (*name).to_string(), row: i });
                }
            }
        }
    }

    Ok(matrix)
}

/// Scores the feature table with a month and a day classifier.
#[derive(Debug, Clone)]
pub struct RepairPredictor<M, D> {
    month: M,
    day: D,
    config: PredictorConfig,
}

impl<M: RepairClassifier, D: RepairClassifier> RepairPredictor<M, D> {
    /// Create a predictor with the default threshold.
    #[must_use]
    pub fn new(month: M, day: D) -> Self {
        Self::with_config(month, day, PredictorConfig::default())
    }

    /// Create a predictor with custom configuration.
    #[must_use]
    pub const fn with_config(month: M, day: D, config: PredictorConfig) -> Self {
        Self { month, day, config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &PredictorConfig {
        &self.config
    }

    fn classify<C: RepairClassifier>(
        &self,
        classifier: &C,
        features: &Array2<f64>,
    ) -> Result<Vec<i32>, ModelError> {
        if classifier.n_features() != features.ncols() {
            return Err(ClassifierError::FeatureMismatch {
                expected: classifier.n_features(),
                actual: features.ncols(),
                model: classifier.name().to_string(),
            }
            .into());
        }

        let proba: Array1<f64> = classifier.predict_proba(features)?;
        if proba.len() != features.nrows() {
            return Err(ClassifierError::OutputMismatch {
                expected: features.nrows(),
                actual: proba.len(),
                model: classifier.name().to_string(),
            }
            .into());
        }

        let flags: Vec<i32> = proba.iter().map(|&p| i32::from(p > self.config.threshold)).collect();
        debug!(
            model = classifier.name(),
            flagged = flags.iter().filter(|&&f| f == 1).count(),
            "classified rows"
        );
        Ok(flags)
    }

    /// Predict repair flags for every row of the feature table.
    ///
    /// # Returns
    /// DataFrame with `wagnum`, `month`, `target_month` and `target_day`,
    /// one row per input row, in input order.
    ///
    /// # Errors
    /// Returns an error if a selected feature is missing or a classifier
    /// rejects the input.
    pub fn predict(&self, features: &DataFrame) -> Result<DataFrame, ModelError> {
        if !(0.0..=1.0).contains(&self.config.threshold) {
            return Err(ModelError::InvalidConfig(format!(
                "threshold must be in [0, 1], got {}",
                self.config.threshold
            )));
        }

        let matrix = feature_matrix(features, &columns::SELECTED_FEATURES)?;
        let month = self.classify(&self.month, &matrix)?;
        let day = self.classify(&self.day, &matrix)?;

        let wagnum = features
            .column(columns::WAGNUM)
            .map_err(|_| ModelError::MissingColumn(columns::WAGNUM.to_string()))?
            .clone();
        let dates = features
            .column(columns::DATE)
            .map_err(|_| ModelError::MissingColumn(columns::DATE.to_string()))?
            .clone()
            .with_name(columns::MONTH.into());

        info!(rows = features.height(), "predicted repair flags");

        Ok(DataFrame::new(vec![
            wagnum,
            dates,
            Column::new(columns::TARGET_MONTH.into(), month),
            Column::new(columns::TARGET_DAY.into(), day),
        ])?)
    }
}
