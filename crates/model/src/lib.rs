#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/railcast/railcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod sample;
pub use sample::{SampleBuilder, SampleConfig, SampleMode, feature_fills, rows_to_frame};

mod predict;
pub use predict::{PredictorConfig, RepairPredictor, feature_matrix};

mod error;
pub use error::ModelError;

/// Re-export commonly used types.
pub mod prelude {
    pub use railcast_traits::{FeatureExtractor, RepairClassifier};

    pub use super::{ModelError, RepairPredictor, SampleBuilder, SampleConfig, SampleMode};
}
