#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/railcast/railcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod mode;
pub use mode::{mode, mode_f64};

mod rates;
pub use rates::{RateSummary, decrease_rates};

mod error;
pub use error::MathError;
