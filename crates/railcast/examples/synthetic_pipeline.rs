//! Example: feature table and predictions for a small synthetic fleet
//!
//! Generates disposition and repair histories for a handful of wagons, builds
//! the imputed feature table, and scores it with a toy mileage classifier.
//!
//! Run with: `cargo run --example synthetic_pipeline`

use ndarray::{Array1, Array2};
use railcast::{
    features::{HistoryIndex, StaticParameterIndex},
    model::{RepairPredictor, SampleBuilder},
    primitives::{
        Date, DispositionRecord, RepairRecord, TargetObservation, WagonId, WagonParameters,
        columns,
    },
    traits::{ClassifierError, RepairClassifier},
};

/// Number of wagons in the fleet.
const N_WAGONS: i64 = 5;

/// Days between consecutive dispositions.
const STEP_DAYS: u64 = 7;

/// Flags wagons with little residual mileage.
struct LowMileage {
    /// Column of `ost_prob` in the selected features.
    column: usize,
    /// Residual mileage at which the probability reaches one half.
    pivot: f64,
}

impl RepairClassifier for LowMileage {
    fn name(&self) -> &str {
        "low_mileage"
    }

    fn n_features(&self) -> usize {
        columns::SELECTED_FEATURES.len()
    }

    fn predict_proba(&self, features: &Array2<f64>) -> Result<Array1<f64>, ClassifierError> {
        Ok(features.column(self.column).mapv(|km| self.pivot / (self.pivot + km.max(0.0))))
    }
}

fn start() -> Date {
    Date::from_ymd_opt(2022, 1, 3).unwrap()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut dispositions = Vec::new();
    let mut repairs = Vec::new();
    let mut parameters = Vec::new();

    for id in 1..=N_WAGONS {
        let wagon = WagonId::new(id);
        let mut mileage = 40_000.0 * id as f64;
        let mut date = start();

        // Wagon 5 never reports: its rows rely on imputation.
        let n_events = if id == N_WAGONS { 0 } else { 50 };
        for step in 0..n_events {
            date = date + chrono::Days::new(STEP_DAYS);
            mileage -= 150.0 * (1 + step % 3) as f64;
            if mileage < 5_000.0 {
                repairs.push(RepairRecord::new(wagon, date));
                mileage = 160_000.0;
            }
            dispositions.push(
                DispositionRecord::new(wagon, date)
                    .with_repair_dates(
                        Date::from_ymd_opt(2014, 5, id as u32),
                        Date::from_ymd_opt(2021, 3, id as u32),
                        Date::from_ymd_opt(2023, 6 + id as u32, 1),
                    )
                    .with_ost_prob(mileage)
                    .with_isload(step % 2)
                    .with_fr_id(id % 3 + step % 2),
            );
        }

        parameters.push(WagonParameters {
            rod_id: Some(id % 2),
            gruz: Some(69.0 + id as f64 * 0.5),
            tara: Some(24.0),
            cnsi_volumek: Some(88.0),
            kuzov: Some(1 + id % 2),
            norma_km: Some(160_000.0),
            ..WagonParameters::new(wagon)
        });
    }

    let targets: Vec<TargetObservation> = (1..=N_WAGONS)
        .flat_map(|id| {
            [(2022, 12), (2023, 1)].map(|(y, m)| {
                TargetObservation::new(WagonId::new(id), Date::from_ymd_opt(y, m, 1).unwrap())
            })
        })
        .collect();

    let history = HistoryIndex::build(dispositions, repairs)?;
    let params = StaticParameterIndex::build(parameters)?;

    let table = SampleBuilder::new().build(&targets, &history, &params)?;
    println!("Feature table ({} rows):\n{table}", table.height());

    let ost_prob = columns::SELECTED_FEATURES
        .iter()
        .position(|&c| c == columns::OST_PROB)
        .ok_or("ost_prob not selected")?;
    let predictor = RepairPredictor::new(
        LowMileage { column: ost_prob, pivot: 30_000.0 },
        LowMileage { column: ost_prob, pivot: 5_000.0 },
    );
    let predictions = predictor.predict(&table)?;
    println!("\nPredictions:\n{predictions}");

    Ok(())
}
