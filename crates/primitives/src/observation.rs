//! Target observations and their labels.

use serde::{Deserialize, Serialize};

use crate::{Date, WagonId};

/// Ground-truth labels for one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Labels {
    /// Repair required during the month.
    pub month: i32,
    /// Repair required on a specific day of the month.
    pub day: i32,
}

impl Labels {
    /// Sentinel value used in prediction mode.
    pub const SENTINEL: i32 = -1;

    /// Labels for an observation whose outcome is unknown.
    pub const UNKNOWN: Self = Self { month: Self::SENTINEL, day: Self::SENTINEL };

    /// Create new labels.
    #[must_use]
    pub const fn new(month: i32, day: i32) -> Self {
        Self { month, day }
    }

    /// Whether these are the prediction-mode sentinels.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.month == Self::SENTINEL && self.day == Self::SENTINEL
    }
}

/// A (wagon, target month) pair to build features for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetObservation {
    /// Wagon identifier.
    pub wagon: WagonId,
    /// Prediction date (first day of the target month).
    pub date: Date,
    /// Ground truth, present in training mode only.
    pub labels: Option<Labels>,
}

impl TargetObservation {
    /// Create an unlabeled observation.
    #[must_use]
    pub const fn new(wagon: WagonId, date: Date) -> Self {
        Self { wagon, date, labels: None }
    }

    /// Create a labeled observation.
    #[must_use]
    pub const fn labeled(wagon: WagonId, date: Date, labels: Labels) -> Self {
        Self { wagon, date, labels: Some(labels) }
    }
}
