//! History feature extractor implementation.

use chrono::Days;
use railcast_math::{RateSummary, decrease_rates, mode};
use railcast_primitives::{Date, DispositionRecord, RepairRecord, TimeFeatures};
use railcast_traits::FeatureExtractor;
use tracing::warn;

/// Configuration for the history feature extractor.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Lookback window in days for recently active wagons.
    pub lookback_days: u32,
    /// `days_since_last_trem` reported when no repair is on record.
    pub no_repair_days: i64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self { lookback_days: 180, no_repair_days: 1_000_000 }
    }
}

/// Extracts the 11 time-dependent features from a wagon's history.
///
/// Only events strictly before the target date are visible. If the latest
/// visible disposition is younger than the lookback window, the window is
/// narrowed to records newer than `date - lookback_days`; a wagon that went
/// quiet keeps its full history, however old.
#[derive(Debug, Clone)]
pub struct HistoryFeatureExtractor {
    config: ExtractorConfig,
}

impl HistoryFeatureExtractor {
    /// Create a new extractor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create a new extractor with custom configuration.
    #[must_use]
    pub const fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Dispositions that feed the aggregates.
    ///
    /// `visible` is non-empty and sorted; the result always ends with its last record.
    fn window<'a>(&self, date: Date, visible: &'a [DispositionRecord]) -> &'a [DispositionRecord] {
        let Some(last) = visible.last() else {
            return visible;
        };
        if days_between(date, last.plan_date) >= i64::from(self.config.lookback_days) {
            return visible;
        }

        let start = date
            .checked_sub_days(Days::new(u64::from(self.config.lookback_days)))
            .unwrap_or(Date::MIN);
        let from = visible.partition_point(|r| r.plan_date <= start);
        &visible[from..]
    }

    fn mileage_rates(&self, window: &[DispositionRecord]) -> Option<RateSummary> {
        let values: Vec<Option<f64>> = window.iter().map(|r| r.ost_prob).collect();
        let gaps: Vec<i64> =
            window.windows(2).map(|pair| days_between(pair[1].plan_date, pair[0].plan_date)).collect();

        match decrease_rates(&values, &gaps) {
            Ok(rates) => RateSummary::from_rates(&rates),
            Err(err) => {
                warn!(%err, "skipping mileage rates");
                None
            }
        }
    }
}

impl Default for HistoryFeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor for HistoryFeatureExtractor {
    fn extract(
        &self,
        date: Date,
        dispositions: &[DispositionRecord],
        repairs: &[RepairRecord],
    ) -> TimeFeatures {
        let visible = &dispositions[..dispositions.partition_point(|r| r.plan_date < date)];
        let past_repairs = &repairs[..repairs.partition_point(|r| r.date < date)];

        let window = self.window(date, visible);
        let Some(last) = window.last() else {
            return TimeFeatures::missing();
        };

        let rates = self.mileage_rates(window);

        let (num_rem, days_since_last_trem) = match past_repairs.last() {
            Some(latest) => (past_repairs.len() as i64, days_between(date, latest.date)),
            None => (0, self.config.no_repair_days),
        };

        TimeFeatures {
            days_since_last_kaprep: last.date_kap.map(|d| days_between(date, d)),
            days_since_last_deprep: last.date_dep.map(|d| days_between(date, d)),
            days_to_planrep: last.date_pl_rem.map(|d| days_between(d, date)),
            ost_prob: last.ost_prob,
            isload: last.isload,
            probeg_changes_max: rates.map(|r| r.max),
            probeg_changes_min: rates.map(|r| r.mean),
            last_fr: last.fr_id,
            most_freq_fr: mode(window.iter().filter_map(|r| r.fr_id)),
            num_rem: Some(num_rem),
            days_since_last_trem: Some(days_since_last_trem),
        }
    }

    fn name(&self) -> &str {
        "history"
    }
}

/// Whole days from `earlier` to `later`.
fn days_between(later: Date, earlier: Date) -> i64 {
    later.signed_duration_since(earlier).num_days()
}
