#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/railcast/railcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod params;
pub use params::StaticParameterIndex;

mod history;
pub use history::{HistoryIndex, WagonHistory};

mod extractor;
pub use extractor::{ExtractorConfig, HistoryFeatureExtractor};

mod tables;
pub use tables::{
    date_from_epoch_days, date_to_epoch_days, dispositions_from_frame, parameters_from_frame,
    repairs_from_frame, targets_from_frame,
};

mod error;
pub use error::FeatureError;
