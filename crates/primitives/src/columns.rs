//! Column names of the input tables and the feature table.
//!
//! Orders here must match the classifiers' training-time schema.

use crate::N_TIME_FEATURES;

/// Wagon identifier column, shared by every table.
pub const WAGNUM: &str = "wagnum";
/// Target month column of the target list.
pub const MONTH: &str = "month";
/// Prediction date column of the feature table.
pub const DATE: &str = "date";

/// Disposition table: plan date.
pub const PLAN_DATE: &str = "plan_date";
/// Disposition table: capital repair date.
pub const DATE_KAP: &str = "date_kap";
/// Disposition table: depot repair date.
pub const DATE_DEP: &str = "date_dep";
/// Disposition table: planned repair date.
pub const DATE_PL_REM: &str = "date_pl_rem";
/// Disposition table and feature table: remaining probability/mileage.
pub const OST_PROB: &str = "ost_prob";
/// Disposition table and feature table: load-state flag.
pub const ISLOAD: &str = "isload";
/// Disposition table: freight route.
pub const FR_ID: &str = "fr_id";

/// Repair table: repair month.
pub const REM_MONTH: &str = "rem_month";

/// Parameters table: rod identifier.
pub const ROD_ID: &str = "rod_id";
/// Parameters table and feature table: load capacity.
pub const GRUZ: &str = "gruz";
/// Parameters table and feature table: tare weight.
pub const TARA: &str = "tara";
/// Parameters table and feature table: body volume.
pub const CNSI_VOLUMEK: &str = "cnsi_volumek";
/// Parameters table and feature table: body type.
pub const KUZOV: &str = "kuzov";
/// Parameters table and feature table: distance norm.
pub const NORMA_KM: &str = "norma_km";

/// Feature table: days since capital repair.
pub const DAYS_SINCE_LAST_KAPREP: &str = "days_since_last_kaprep";
/// Feature table: days since depot repair.
pub const DAYS_SINCE_LAST_DEPREP: &str = "days_since_last_deprep";
/// Feature table: days to planned repair.
pub const DAYS_TO_PLANREP: &str = "days_to_planrep";
/// Feature table: maximum mileage rate.
pub const PROBEG_CHANGES_MAX: &str = "probeg_changes_max";
/// Feature table: mean mileage rate.
pub const PROBEG_CHANGES_MIN: &str = "probeg_changes_min";
/// Feature table: latest freight route.
pub const LAST_FR: &str = "last_fr";
/// Feature table: most frequent freight route.
pub const MOST_FREQ_FR: &str = "most_freq_fr";
/// Feature table: repair count.
pub const NUM_REM: &str = "num_rem";
/// Feature table: days since latest repair.
pub const DAYS_SINCE_LAST_TREM: &str = "days_since_last_trem";
/// Feature table: rod identifier.
pub const RODID: &str = "rodid";

/// Label: repair during the month.
pub const TARGET_MONTH: &str = "target_month";
/// Label: repair on a specific day.
pub const TARGET_DAY: &str = "target_day";

/// Time-dependent feature columns, in `TimeFeatures::to_array` order.
pub const TIME_FEATURES: [&str; N_TIME_FEATURES] = [
    DAYS_SINCE_LAST_KAPREP,
    DAYS_SINCE_LAST_DEPREP,
    DAYS_TO_PLANREP,
    OST_PROB,
    ISLOAD,
    PROBEG_CHANGES_MAX,
    PROBEG_CHANGES_MIN,
    LAST_FR,
    MOST_FREQ_FR,
    NUM_REM,
    DAYS_SINCE_LAST_TREM,
];

/// Label columns.
pub const LABELS: [&str; 2] = [TARGET_MONTH, TARGET_DAY];

/// Static attribute columns.
pub const STATIC_FEATURES: [&str; 6] = [RODID, GRUZ, TARA, CNSI_VOLUMEK, KUZOV, NORMA_KM];

/// Columns consumed by the trained month and day classifiers, in order.
pub const SELECTED_FEATURES: [&str; 13] = [
    DAYS_SINCE_LAST_DEPREP,
    DAYS_TO_PLANREP,
    OST_PROB,
    ISLOAD,
    PROBEG_CHANGES_MIN,
    LAST_FR,
    MOST_FREQ_FR,
    NUM_REM,
    DAYS_SINCE_LAST_TREM,
    RODID,
    CNSI_VOLUMEK,
    KUZOV,
    NORMA_KM,
];

/// Full feature table column order.
#[must_use]
pub fn feature_table() -> Vec<&'static str> {
    let mut cols = vec![WAGNUM, DATE];
    cols.extend(TIME_FEATURES);
    cols.extend(LABELS);
    cols.extend(STATIC_FEATURES);
    cols
}
