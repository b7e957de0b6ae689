//! Feature sample assembly.

use std::collections::BTreeMap;

use polars::prelude::*;
use railcast_features::{HistoryFeatureExtractor, HistoryIndex, StaticParameterIndex};
use railcast_primitives::{
    FeatureRow, Labels, N_TIME_FEATURES, TargetObservation, WagonId, columns,
};
use railcast_traits::FeatureExtractor;
use railcast_utils::{ColumnFill, impute_columns};
use tracing::{debug, info};

use crate::ModelError;

/// Whether observations carry ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// Labels are read from the observations.
    Training,
    /// Labels are the -1 sentinel.
    #[default]
    Prediction,
}

/// Configuration for sample assembly.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Label handling.
    pub mode: SampleMode,
    /// Fill value for `days_since_last_trem`.
    pub no_repair_fill: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self { mode: SampleMode::Prediction, no_repair_fill: 1_000_000.0 }
    }
}

/// Imputation rules for the time-dependent feature columns.
///
/// Recency and mileage columns take the batch mean, categorical columns the
/// batch mode. A missing repair count means no repair.
#[must_use]
pub fn feature_fills(no_repair_fill: f64) -> Vec<ColumnFill> {
    vec![
        ColumnFill::mean(columns::DAYS_SINCE_LAST_KAPREP),
        ColumnFill::mean(columns::DAYS_SINCE_LAST_DEPREP),
        ColumnFill::mean(columns::DAYS_TO_PLANREP),
        ColumnFill::mean(columns::OST_PROB),
        ColumnFill::mean(columns::PROBEG_CHANGES_MAX),
        ColumnFill::mean(columns::PROBEG_CHANGES_MIN),
        ColumnFill::mode(columns::ISLOAD),
        ColumnFill::constant(columns::NUM_REM, 0.0),
        ColumnFill::constant(columns::DAYS_SINCE_LAST_TREM, no_repair_fill),
        ColumnFill::mode(columns::LAST_FR),
        ColumnFill::mode(columns::MOST_FREQ_FR),
    ]
}

/// Builds the feature table from target observations.
///
/// Observations are grouped by wagon; each wagon's history is sliced once and
/// reused for all of its target dates. Output rows are ordered by wagon ID,
/// then by the original order of that wagon's observations.
#[derive(Debug, Clone)]
pub struct SampleBuilder<E = HistoryFeatureExtractor> {
    config: SampleConfig,
    extractor: E,
}

impl SampleBuilder {
    /// Create a builder with the default extractor and configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_extractor(SampleConfig::default(), HistoryFeatureExtractor::new())
    }

    /// Create a builder with the default extractor.
    #[must_use]
    pub fn with_config(config: SampleConfig) -> Self {
        Self::with_extractor(config, HistoryFeatureExtractor::new())
    }
}

impl Default for SampleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: FeatureExtractor> SampleBuilder<E> {
    /// Create a builder with a custom extractor.
    #[must_use]
    pub const fn with_extractor(config: SampleConfig, extractor: E) -> Self {
        Self { config, extractor }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// Extract feature rows, before imputation.
    ///
    /// # Errors
    /// Returns `ModelError::Feature` if a wagon is missing from `params`,
    /// `ModelError::MissingLabels` if a training observation has no labels.
    pub fn rows(
        &self,
        targets: &[TargetObservation],
        history: &HistoryIndex,
        params: &StaticParameterIndex,
    ) -> Result<Vec<FeatureRow>, ModelError> {
        let mut by_wagon: BTreeMap<WagonId, Vec<&TargetObservation>> = BTreeMap::new();
        for target in targets {
            by_wagon.entry(target.wagon).or_default().push(target);
        }
        info!(
            observations = targets.len(),
            wagons = by_wagon.len(),
            extractor = self.extractor.name(),
            "building feature rows"
        );

        let mut rows = Vec::with_capacity(targets.len());
        for (wagon, observations) in by_wagon {
            let statics = params.lookup(wagon)?;
            let wagon_history = history.wagon(wagon);
            debug!(
                %wagon,
                dates = observations.len(),
                dispositions = wagon_history.dispositions().len(),
                repairs = wagon_history.repairs().len(),
                "extracting wagon features"
            );

            for target in observations {
                let labels = match self.config.mode {
                    SampleMode::Training => target
                        .labels
                        .ok_or(ModelError::MissingLabels { wagon, date: target.date })?,
                    SampleMode::Prediction => Labels::UNKNOWN,
                };
                rows.push(FeatureRow {
                    wagon,
                    date: target.date,
                    features: wagon_history.features_at(&self.extractor, target.date),
                    labels,
                    statics,
                });
            }
        }

        let without_history = rows.iter().filter(|r| r.features.is_missing()).count();
        info!(rows = rows.len(), without_history, "assembled feature rows");
        Ok(rows)
    }

    /// Build the imputed feature table.
    ///
    /// # Errors
    /// Propagates `rows`, frame construction and imputation errors.
    pub fn build(
        &self,
        targets: &[TargetObservation],
        history: &HistoryIndex,
        params: &StaticParameterIndex,
    ) -> Result<DataFrame, ModelError> {
        let rows = self.rows(targets, history, params)?;
        let frame = rows_to_frame(&rows)?;
        let filled = impute_columns(frame, &feature_fills(self.config.no_repair_fill))?;
        Ok(filled)
    }
}

/// Lay out feature rows as a frame in feature table column order.
///
/// # Errors
/// Returns a polars error if the frame cannot be constructed.
pub fn rows_to_frame(rows: &[FeatureRow]) -> Result<DataFrame, ModelError> {
    let features: Vec<[Option<f64>; N_TIME_FEATURES]> =
        rows.iter().map(|r| r.features.to_array()).collect();

    let mut cols = Vec::with_capacity(columns::feature_table().len());
    cols.push(Column::new(
        columns::WAGNUM.into(),
        rows.iter().map(|r| r.wagon.get()).collect::<Vec<i64>>(),
    ));
    cols.push(Column::new(columns::DATE.into(), rows.iter().map(|r| r.date).collect::<Vec<_>>()));

    for (j, name) in columns::TIME_FEATURES.iter().enumerate() {
        let values: Vec<Option<f64>> = features.iter().map(|f| f[j]).collect();
        cols.push(Column::new((*name).into(), values));
    }

    cols.push(Column::new(
        columns::TARGET_MONTH.into(),
        rows.iter().map(|r| r.labels.month).collect::<Vec<i32>>(),
    ));
    cols.push(Column::new(
        columns::TARGET_DAY.into(),
        rows.iter().map(|r| r.labels.day).collect::<Vec<i32>>(),
    ));

    cols.push(Column::new(
        columns::RODID.into(),
        rows.iter().map(|r| r.statics.rodid).collect::<Vec<Option<i64>>>(),
    ));
    cols.push(Column::new(
        columns::GRUZ.into(),
        rows.iter().map(|r| r.statics.gruz).collect::<Vec<Option<f64>>>(),
    ));
    cols.push(Column::new(
        columns::TARA.into(),
        rows.iter().map(|r| r.statics.tara).collect::<Vec<Option<f64>>>(),
    ));
    cols.push(Column::new(
        columns::CNSI_VOLUMEK.into(),
        rows.iter().map(|r| r.statics.cnsi_volumek).collect::<Vec<Option<f64>>>(),
    ));
    cols.push(Column::new(
        columns::KUZOV.into(),
        rows.iter().map(|r| i32::from(r.statics.kuzov)).collect::<Vec<i32>>(),
    ));
    cols.push(Column::new(
        columns::NORMA_KM.into(),
        rows.iter().map(|r| r.statics.norma_km).collect::<Vec<Option<f64>>>(),
    ));

    Ok(DataFrame::new(cols)?)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use railcast_primitives::{
        Date, DispositionRecord, RepairRecord, TimeFeatures, WagonParameters,
    };

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    fn params(ids: &[i64]) -> StaticParameterIndex {
        StaticParameterIndex::build(ids.iter().map(|&id| WagonParameters {
            rod_id: Some(1),
            gruz: Some(70.0),
            tara: Some(24.0),
            cnsi_volumek: Some(88.0),
            kuzov: Some(2),
            norma_km: Some(160_000.0),
            ..WagonParameters::new(WagonId::new(id))
        }))
        .unwrap()
    }

    fn f64_column(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
        df.column(name).unwrap().f64().unwrap().into_iter().collect()
    }

    #[test]
    fn sample_config_defaults() {
        let config = SampleConfig::default();
        assert_eq!(config.mode, SampleMode::Prediction);
        assert_relative_eq!(config.no_repair_fill, 1_000_000.0);
    }

    #[test]
    fn feature_fills_cover_time_features() {
        let fills = feature_fills(1_000_000.0);
        assert_eq!(fills.len(), N_TIME_FEATURES);
        for name in columns::TIME_FEATURES {
            assert!(fills.iter().any(|f| f.column == name), "no fill for {name}");
        }
    }

    #[test]
    fn rows_grouped_by_wagon_in_original_order() {
        let history = HistoryIndex::default();
        let targets = [
            TargetObservation::new(WagonId::new(2), d(2023, 3, 1)),
            TargetObservation::new(WagonId::new(1), d(2023, 2, 1)),
            TargetObservation::new(WagonId::new(2), d(2023, 1, 1)),
        ];

        let rows = SampleBuilder::new().rows(&targets, &history, &params(&[1, 2])).unwrap();
        let order: Vec<(i64, Date)> = rows.iter().map(|r| (r.wagon.get(), r.date)).collect();
        assert_eq!(
            order,
            vec![(1, d(2023, 2, 1)), (2, d(2023, 3, 1)), (2, d(2023, 1, 1))]
        );
        assert!(rows.iter().all(|r| r.labels.is_unknown()));
        assert!(rows.iter().all(|r| r.statics.kuzov == 1));
    }

    #[test]
    fn unknown_wagon_is_hard_error() {
        let targets = [TargetObservation::new(WagonId::new(9), d(2023, 1, 1))];
        let err = SampleBuilder::new()
            .rows(&targets, &HistoryIndex::default(), &params(&[1]))
            .unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn training_requires_labels() {
        let targets = [TargetObservation::new(WagonId::new(1), d(2023, 1, 1))];
        let builder = SampleBuilder::with_config(SampleConfig {
            mode: SampleMode::Training,
            ..SampleConfig::default()
        });

        let err = builder.rows(&targets, &HistoryIndex::default(), &params(&[1])).unwrap_err();
        assert!(matches!(err, ModelError::MissingLabels { .. }));
    }

    #[test]
    fn training_keeps_labels() {
        let targets =
            [TargetObservation::labeled(WagonId::new(1), d(2023, 1, 1), Labels::new(1, 0))];
        let builder = SampleBuilder::with_config(SampleConfig {
            mode: SampleMode::Training,
            ..SampleConfig::default()
        });

        let rows = builder.rows(&targets, &HistoryIndex::default(), &params(&[1])).unwrap();
        assert_eq!(rows[0].labels, Labels::new(1, 0));
    }

    #[test]
    fn frame_layout_matches_schema() {
        let row = FeatureRow {
            wagon: WagonId::new(1),
            date: d(2023, 1, 1),
            features: TimeFeatures::missing(),
            labels: Labels::UNKNOWN,
            statics: params(&[1]).lookup(WagonId::new(1)).unwrap(),
        };

        let df = rows_to_frame(&[row]).unwrap();
        let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, columns::feature_table());
        assert_eq!(df.column(columns::DATE).unwrap().dtype(), &DataType::Date);
        assert_eq!(df.column(columns::TARGET_MONTH).unwrap().i32().unwrap().get(0), Some(-1));
    }

    #[test]
    fn imputation_uses_batch_statistics() {
        let w = [WagonId::new(1), WagonId::new(2), WagonId::new(3)];
        let dispositions = vec![
            DispositionRecord::new(w[0], d(2022, 12, 1)).with_ost_prob(10.0).with_fr_id(4),
            DispositionRecord::new(w[1], d(2022, 12, 1)).with_ost_prob(20.0).with_fr_id(4),
            DispositionRecord::new(w[2], d(2022, 12, 1)).with_fr_id(6),
        ];
        let repairs = vec![RepairRecord::new(w[0], d(2022, 6, 1))];
        let history = HistoryIndex::build(dispositions, repairs).unwrap();
        let targets = [
            TargetObservation::new(w[0], d(2023, 1, 1)),
            TargetObservation::new(w[1], d(2023, 1, 1)),
            TargetObservation::new(w[2], d(2023, 1, 1)),
            TargetObservation::new(w[2], d(2022, 1, 1)),
        ];

        let df = SampleBuilder::new().build(&targets, &history, &params(&[1, 2, 3])).unwrap();

        let ost = f64_column(&df, columns::OST_PROB);
        assert_relative_eq!(ost[2].unwrap(), 15.0, epsilon = 1e-12);
        assert_relative_eq!(ost[3].unwrap(), 15.0, epsilon = 1e-12);

        let last_fr = f64_column(&df, columns::LAST_FR);
        assert_eq!(last_fr[3], Some(4.0));

        let num_rem = f64_column(&df, columns::NUM_REM);
        assert_eq!(num_rem, vec![Some(1.0), Some(0.0), Some(0.0), Some(0.0)]);

        let trem = f64_column(&df, columns::DAYS_SINCE_LAST_TREM);
        assert_eq!(trem[0], Some(214.0));
        assert_eq!(trem[3], Some(1_000_000.0));
    }
}
