//! Per-wagon history slices.

use std::collections::HashMap;

use railcast_primitives::{Date, DispositionRecord, RepairRecord, TimeFeatures, WagonId};
use railcast_traits::FeatureExtractor;
use tracing::debug;

use crate::FeatureError;

/// The full event history of one wagon, ascending by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WagonHistory {
    dispositions: Vec<DispositionRecord>,
    repairs: Vec<RepairRecord>,
}

impl WagonHistory {
    /// Create a history slice.
    ///
    /// # Errors
    /// Returns `FeatureError::ForeignRecord` if a record belongs to another
    /// wagon, `FeatureError::UnsortedHistory` if either slice is not in
    /// ascending date order.
    pub fn new(
        wagon: WagonId,
        dispositions: Vec<DispositionRecord>,
        repairs: Vec<RepairRecord>,
    ) -> Result<Self, FeatureError> {
        let wagons = dispositions.iter().map(|r| r.wagon).chain(repairs.iter().map(|r| r.wagon));
        for found in wagons {
            if found != wagon {
                return Err(FeatureError::ForeignRecord { expected: wagon, found });
            }
        }

        check_sorted(wagon, "disposition", dispositions.iter().map(|r| r.plan_date))?;
        check_sorted(wagon, "repair", repairs.iter().map(|r| r.date))?;

        Ok(Self { dispositions, repairs })
    }

    /// Disposition records, ascending by plan date.
    #[must_use]
    pub fn dispositions(&self) -> &[DispositionRecord] {
        &self.dispositions
    }

    /// Repair records, ascending by date.
    #[must_use]
    pub fn repairs(&self) -> &[RepairRecord] {
        &self.repairs
    }

    /// Check if the wagon has no recorded events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dispositions.is_empty() && self.repairs.is_empty()
    }

    /// Compute features for one target date.
    pub fn features_at<E>(&self, extractor: &E, date: Date) -> TimeFeatures
    where
        E: FeatureExtractor + ?Sized,
    {
        extractor.extract(date, &self.dispositions, &self.repairs)
    }
}

fn check_sorted<I>(wagon: WagonId, table: &'static str, dates: I) -> Result<(), FeatureError>
where
    I: IntoIterator<Item = Date>,
{
    let mut prev: Option<Date> = None;
    for (index, date) in dates.into_iter().enumerate() {
        if prev.is_some_and(|p| date < p) {
            return Err(FeatureError::UnsortedHistory { wagon, table, index });
        }
        prev = Some(date);
    }
    Ok(())
}

/// Histories of all wagons, grouped once per run.
#[derive(Debug, Clone, Default)]
pub struct HistoryIndex {
    histories: HashMap<WagonId, WagonHistory>,
    empty: WagonHistory,
}

impl HistoryIndex {
    /// Group records by wagon and sort each slice by date.
    ///
    /// Sorting is stable: records sharing a date keep their input order.
    ///
    /// # Errors
    /// Propagates `WagonHistory::new` errors.
    pub fn build(
        dispositions: Vec<DispositionRecord>,
        repairs: Vec<RepairRecord>,
    ) -> Result<Self, FeatureError> {
        let mut grouped: HashMap<WagonId, (Vec<DispositionRecord>, Vec<RepairRecord>)> =
            HashMap::new();
        for record in dispositions {
            grouped.entry(record.wagon).or_default().0.push(record);
        }
        for record in repairs {
            grouped.entry(record.wagon).or_default().1.push(record);
        }

        let mut histories = HashMap::with_capacity(grouped.len());
        for (wagon, (mut dispositions, mut repairs)) in grouped {
            dispositions.sort_by_key(|r| r.plan_date);
            repairs.sort_by_key(|r| r.date);
            histories.insert(wagon, WagonHistory::new(wagon, dispositions, repairs)?);
        }

        debug!(wagons = histories.len(), "built history index");
        Ok(Self { histories, empty: WagonHistory::default() })
    }

    /// History of a wagon; empty if the wagon has no recorded events.
    #[must_use]
    pub fn wagon(&self, wagon: WagonId) -> &WagonHistory {
        self.histories.get(&wagon).unwrap_or(&self.empty)
    }

    /// Number of wagons with at least one event.
    #[must_use]
    pub fn n_wagons(&self) -> usize {
        self.histories.len()
    }
}
