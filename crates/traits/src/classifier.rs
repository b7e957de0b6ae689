//! Pre-trained classifier trait definitions.

use ndarray::{Array1, Array2};

/// Errors that can occur during classifier inference.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// Feature matrix has the wrong number of columns.
    #[error("feature count mismatch for {model}: expected {expected}, got {actual}")]
    FeatureMismatch {
        /// Expected number of features.
        expected: usize,
        /// Actual number of features.
        actual: usize,
        /// Classifier name.
        model: String,
    },

    /// Classifier returned the wrong number of probabilities.
    #[error("{model} returned {actual} probabilities for {expected} rows")]
    OutputMismatch {
        /// Number of input rows.
        expected: usize,
        /// Number of probabilities returned.
        actual: usize,
        /// Classifier name.
        model: String,
    },

    /// Inference backend failure.
    #[error("inference failed: {0}")]
    Inference(String),
}

/// A pre-trained binary classifier.
///
/// Training and artifact loading happen elsewhere; implementations only score.
pub trait RepairClassifier: Send + Sync {
    /// Returns the name of this classifier.
    fn name(&self) -> &str;

    /// Number of feature columns the classifier was trained on.
    fn n_features(&self) -> usize;

    /// Positive-class probability for each row.
    ///
    /// # Arguments
    /// * `features` - Feature matrix (n_rows x n_features)
    ///
    /// # Returns
    /// Probabilities (n_rows,)
    ///
    /// # Errors
    /// Returns `ClassifierError` if the input shape is wrong or inference fails.
    fn predict_proba(&self, features: &Array2<f64>) -> Result<Array1<f64>, ClassifierError>;
}
