//! Conversion of input tables into typed records.
//!
//! Numeric columns are cast to the expected type; date columns may be
//! `Date`, `Datetime` or ISO-8601 strings.

use chrono::Datelike;
use polars::prelude::*;
use railcast_primitives::{
    Date, DispositionRecord, Labels, RepairRecord, TargetObservation, WagonId, WagonParameters,
    columns,
};
use tracing::debug;

use crate::FeatureError;

/// Days from 0001-01-01 (day 1 of the common era) to 1970-01-01.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Convert days since the Unix epoch (polars `Date` physical value) to a date.
#[must_use]
pub fn date_from_epoch_days(days: i32) -> Option<Date> {
    days.checked_add(EPOCH_DAYS_FROM_CE).and_then(Date::from_num_days_from_ce_opt)
}

/// Convert a date to days since the Unix epoch.
#[must_use]
pub fn date_to_epoch_days(date: Date) -> i32 {
    date.num_days_from_ce() - EPOCH_DAYS_FROM_CE
}

fn require<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, FeatureError> {
    df.column(name).map_err(|_| FeatureError::MissingColumn(name.to_string()))
}

/// Cast a column, rejecting present cells that the cast turns into nulls.
fn cast_column(df: &DataFrame, name: &str, dtype: &DataType) -> Result<Column, FeatureError> {
    let raw = require(df, name)?;
    let cast = raw.cast(dtype)?;

    let present = raw.is_not_null();
    let nulls = cast.is_null();
    let lost = present
        .into_iter()
        .zip(&nulls)
        .position(|(present, null)| present == Some(true) && null == Some(true));
    if let Some(row) = lost {
        return Err(FeatureError::Unparseable {
            column: name.to_string(),
            row,
            dtype: dtype.clone(),
        });
    }
    Ok(cast)
}

fn i64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>, FeatureError> {
    let cast = cast_column(df, name, &DataType::Int64)?;
    Ok(cast.i64()?.into_iter().collect())
}

fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, FeatureError> {
    let cast = cast_column(df, name, &DataType::Float64)?;
    Ok(cast.f64()?.into_iter().map(|v| v.filter(|x| !x.is_nan())).collect())
}

fn date_values(df: &DataFrame, name: &str) -> Result<Vec<Option<Date>>, FeatureError> {
    let days = cast_column(df, name, &DataType::Date)?.cast(&DataType::Int32)?;
    Ok(days.i32()?.into_iter().map(|d| d.and_then(date_from_epoch_days)).collect())
}

fn label(value: Option<i64>, column: &str, row: usize) -> Result<i32, FeatureError> {
    let value = required(value, column, row)?;
    i32::try_from(value).map_err(|_| FeatureError::LabelOutOfRange {
        column: column.to_string(),
        row,
        value,
    })
}

fn required<T>(value: Option<T>, column: &str, row: usize) -> Result<T, FeatureError> {
    value.ok_or_else(|| FeatureError::MissingValue { column: column.to_string(), row })
}

/// Read disposition records.
///
/// Rows without a wagon number or plan date carry no usable signal and are
/// skipped.
///
/// # Errors
/// Returns `FeatureError::MissingColumn` if a column is absent,
/// `FeatureError::Unparseable` if a present cell cannot be cast.
pub fn dispositions_from_frame(df: &DataFrame) -> Result<Vec<DispositionRecord>, FeatureError> {
    let wagons = i64_values(df, columns::WAGNUM)?;
    let plan_dates = date_values(df, columns::PLAN_DATE)?;
    let date_kap = date_values(df, columns::DATE_KAP)?;
    let date_dep = date_values(df, columns::DATE_DEP)?;
    let date_pl_rem = date_values(df, columns::DATE_PL_REM)?;
    let ost_prob = f64_values(df, columns::OST_PROB)?;
    let isload = i64_values(df, columns::ISLOAD)?;
    let fr_id = i64_values(df, columns::FR_ID)?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let (Some(wagon), Some(plan_date)) = (wagons[i], plan_dates[i]) else {
            continue;
        };
        records.push(DispositionRecord {
            wagon: WagonId::new(wagon),
            plan_date,
            date_kap: date_kap[i],
            date_dep: date_dep[i],
            date_pl_rem: date_pl_rem[i],
            ost_prob: ost_prob[i],
            isload: isload[i],
            fr_id: fr_id[i],
        });
    }

    let skipped = df.height() - records.len();
    if skipped > 0 {
        debug!(skipped, "skipped disposition rows without wagon or plan date");
    }
    Ok(records)
}

/// Read repair records, skipping rows without a wagon number or date.
///
/// # Errors
/// Returns `FeatureError::MissingColumn` if a column is absent.
pub fn repairs_from_frame(df: &DataFrame) -> Result<Vec<RepairRecord>, FeatureError> {
    let wagons = i64_values(df, columns::WAGNUM)?;
    let dates = date_values(df, columns::REM_MONTH)?;

    let records: Vec<RepairRecord> = wagons
        .into_iter()
        .zip(dates)
        .filter_map(|(w, d)| Some(RepairRecord::new(WagonId::new(w?), d?)))
        .collect();

    let skipped = df.height() - records.len();
    if skipped > 0 {
        debug!(skipped, "skipped repair rows without wagon or date");
    }
    Ok(records)
}

/// Read the wagon parameters table, skipping rows without a wagon number.
///
/// # Errors
/// Returns `FeatureError::MissingColumn` if a column is absent.
pub fn parameters_from_frame(df: &DataFrame) -> Result<Vec<WagonParameters>, FeatureError> {
    let wagons = i64_values(df, columns::WAGNUM)?;
    let rod_id = i64_values(df, columns::ROD_ID)?;
    let gruz = f64_values(df, columns::GRUZ)?;
    let tara = f64_values(df, columns::TARA)?;
    let volume = f64_values(df, columns::CNSI_VOLUMEK)?;
    let kuzov = i64_values(df, columns::KUZOV)?;
    let norma_km = f64_values(df, columns::NORMA_KM)?;

    let params = (0..df.height())
        .filter_map(|i| {
            Some(WagonParameters {
                wagon: WagonId::new(wagons[i]?),
                rod_id: rod_id[i],
                gruz: gruz[i],
                tara: tara[i],
                cnsi_volumek: volume[i],
                kuzov: kuzov[i],
                norma_km: norma_km[i],
            })
        })
        .collect();
    Ok(params)
}

/// Read the target list.
///
/// # Arguments
/// * `df` - Frame with `wagnum`, `month` and, with labels, `target_month`
///   and `target_day`
/// * `with_labels` - Whether to read ground-truth labels
///
/// # Errors
/// Returns `FeatureError::MissingValue` if a wagon, month or requested label
/// is missing: every target must produce exactly one output row.
/// `FeatureError::Unparseable` if a cell cannot be read, and
/// `FeatureError::LabelOutOfRange` for labels beyond `i32`.
pub fn targets_from_frame(
    df: &DataFrame,
    with_labels: bool,
) -> Result<Vec<TargetObservation>, FeatureError> {
    let wagons = i64_values(df, columns::WAGNUM)?;
    let months = date_values(df, columns::MONTH)?;
    let labels = if with_labels {
        Some((i64_values(df, columns::TARGET_MONTH)?, i64_values(df, columns::TARGET_DAY)?))
    } else {
        None
    };

    let mut targets = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let wagon = WagonId::new(required(wagons[i], columns::WAGNUM, i)?);
        let date = required(months[i], columns::MONTH, i)?;
        let target = match &labels {
            Some((month, day)) => {
                let month = label(month[i], columns::TARGET_MONTH, i)?;
                let day = label(day[i], columns::TARGET_DAY, i)?;
                TargetObservation::labeled(wagon, date, Labels::new(month, day))
            }
            None => TargetObservation::new(wagon, date),
        };
        targets.push(target);
    }
    Ok(targets)
}
