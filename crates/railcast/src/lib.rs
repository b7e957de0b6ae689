//! # railcast
//!
//! Feature engineering and repair prediction for railway freight wagons.
//!
//! This crate provides a unified interface to the railcast crates.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions and column schema
//! - `traits`: Extractor and classifier abstractions
//! - `math`: Mode and mileage-rate statistics
//! - `features`: Parameter index, history index and feature extractor
//! - `model`: Sample assembly and repair prediction
//! - `utils`: Imputation utilities
//! - `cli`: The `railcast-features` binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use railcast::features::{HistoryIndex, StaticParameterIndex};
//! use railcast::model::SampleBuilder;
//!
//! let history = HistoryIndex::build(dispositions, repairs)?;
//! let params = StaticParameterIndex::build(parameters)?;
//! let table = SampleBuilder::new().build(&targets, &history, &params)?;
//! ```

#![doc(issue_tracker_base_url = "https://github.com/railcast/railcast/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use railcast_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use railcast_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use railcast_math as math;
#[cfg(feature = "features")]
#[doc(inline)]
pub use railcast_features as features;
#[cfg(feature = "model")]
#[doc(inline)]
pub use railcast_model as model;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use railcast_utils as utils;

