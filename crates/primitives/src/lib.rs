#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/railcast/railcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod wagon;
pub use wagon::{KUZOV_FLAG_CODE, StaticAttributes, WagonId, WagonParameters};

mod records;
pub use records::{DispositionRecord, RepairRecord};

mod observation;
pub use observation::{Labels, TargetObservation};

mod features;
pub use features::{FeatureRow, N_TIME_FEATURES, TimeFeatures};

pub mod columns;

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
