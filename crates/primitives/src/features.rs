//! Engineered feature type definitions.

use serde::{Deserialize, Serialize};

use crate::{Date, Labels, StaticAttributes, WagonId};

/// Number of time-dependent features per observation.
pub const N_TIME_FEATURES: usize = 11;

/// Time-dependent features for one (wagon, date) observation.
///
/// Every field is optional: a quantity that cannot be derived from the
/// available history is missing and gets repaired by imputation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeFeatures {
    /// Days since the last capital repair.
    pub days_since_last_kaprep: Option<i64>,
    /// Days since the last depot repair.
    pub days_since_last_deprep: Option<i64>,
    /// Days until the next planned repair.
    pub days_to_planrep: Option<i64>,
    /// Latest remaining probability/mileage metric.
    pub ost_prob: Option<f64>,
    /// Latest load-state flag.
    pub isload: Option<i64>,
    /// Maximum mileage decrease rate per day.
    pub probeg_changes_max: Option<f64>,
    /// Mean mileage decrease rate per day.
    ///
    /// The name is kept as-is: the trained classifiers were fit against it.
    pub probeg_changes_min: Option<f64>,
    /// Latest freight route.
    pub last_fr: Option<i64>,
    /// Most frequent freight route in the lookback window.
    pub most_freq_fr: Option<i64>,
    /// Number of repairs before the target date.
    pub num_rem: Option<i64>,
    /// Days since the latest repair.
    pub days_since_last_trem: Option<i64>,
}

impl TimeFeatures {
    /// Features for an observation without usable history.
    #[must_use]
    pub const fn missing() -> Self {
        Self {
            days_since_last_kaprep: None,
            days_since_last_deprep: None,
            days_to_planrep: None,
            ost_prob: None,
            isload: None,
            probeg_changes_max: None,
            probeg_changes_min: None,
            last_fr: None,
            most_freq_fr: None,
            num_rem: None,
            days_since_last_trem: None,
        }
    }

    /// Whether every feature is missing.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.to_array().iter().all(Option::is_none)
    }

    /// Convert to the canonical column order as floats.
    #[must_use]
    pub fn to_array(&self) -> [Option<f64>; N_TIME_FEATURES] {
        let float = |v: Option<i64>| v.map(|x| x as f64);
        [
            float(self.days_since_last_kaprep),
            float(self.days_since_last_deprep),
            float(self.days_to_planrep),
            self.ost_prob,
            float(self.isload),
            self.probeg_changes_max,
            self.probeg_changes_min,
            float(self.last_fr),
            float(self.most_freq_fr),
            float(self.num_rem),
            float(self.days_since_last_trem),
        ]
    }
}

/// One assembled row of the feature table, before imputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Wagon identifier.
    pub wagon: WagonId,
    /// Prediction date.
    pub date: Date,
    /// Time-dependent features.
    pub features: TimeFeatures,
    /// Ground truth or sentinels.
    pub labels: Labels,
    /// Static wagon attributes.
    pub statics: StaticAttributes,
}
