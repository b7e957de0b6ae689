//! Historical event records.

use serde::{Deserialize, Serialize};

use crate::{Date, WagonId};

/// A logged inspection or repair-planning event for one wagon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispositionRecord {
    /// Wagon identifier.
    pub wagon: WagonId,
    /// Date of the planning event.
    pub plan_date: Date,
    /// Date of the last capital repair.
    pub date_kap: Option<Date>,
    /// Date of the last depot repair.
    pub date_dep: Option<Date>,
    /// Date of the next planned repair.
    pub date_pl_rem: Option<Date>,
    /// Remaining probability/mileage metric.
    pub ost_prob: Option<f64>,
    /// Load-state flag.
    pub isload: Option<i64>,
    /// Freight route identifier.
    pub fr_id: Option<i64>,
}

impl DispositionRecord {
    /// Create a record with every optional field missing.
    #[must_use]
    pub const fn new(wagon: WagonId, plan_date: Date) -> Self {
        Self {
            wagon,
            plan_date,
            date_kap: None,
            date_dep: None,
            date_pl_rem: None,
            ost_prob: None,
            isload: None,
            fr_id: None,
        }
    }

    /// Set the repair dates (capital, depot, planned).
    #[must_use]
    pub const fn with_repair_dates(
        mut self,
        date_kap: Option<Date>,
        date_dep: Option<Date>,
        date_pl_rem: Option<Date>,
    ) -> Self {
        self.date_kap = date_kap;
        self.date_dep = date_dep;
        self.date_pl_rem = date_pl_rem;
        self
    }

    /// Set the remaining probability/mileage metric.
    #[must_use]
    pub const fn with_ost_prob(mut self, ost_prob: f64) -> Self {
        self.ost_prob = Some(ost_prob);
        self
    }

    /// Set the load-state flag.
    #[must_use]
    pub const fn with_isload(mut self, isload: i64) -> Self {
        self.isload = Some(isload);
        self
    }

    /// Set the freight route identifier.
    #[must_use]
    pub const fn with_fr_id(mut self, fr_id: i64) -> Self {
        self.fr_id = Some(fr_id);
        self
    }
}

/// An executed repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairRecord {
    /// Wagon identifier.
    pub wagon: WagonId,
    /// Repair month.
    pub date: Date,
}

impl RepairRecord {
    /// Create a new repair record.
    #[must_use]
    pub const fn new(wagon: WagonId, date: Date) -> Self {
        Self { wagon, date }
    }
}
