//! Feature filling utilities.

use polars::prelude::*;
use railcast_math::mode_f64;

use crate::UtilsError;

/// How to fill missing values in one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillStrategy {
    /// Mean of the non-missing values.
    Mean,
    /// Most frequent non-missing value, smallest on ties.
    Mode,
    /// A fixed value.
    Constant(f64),
}

/// Fill rule for a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFill {
    /// Column to fill.
    pub column: String,
    /// Fill strategy.
    pub strategy: FillStrategy,
}

impl ColumnFill {
    /// Fill with the column mean.
    #[must_use]
    pub fn mean(column: impl Into<String>) -> Self {
        Self { column: column.into(), strategy: FillStrategy::Mean }
    }

    /// Fill with the column mode.
    #[must_use]
    pub fn mode(column: impl Into<String>) -> Self {
        Self { column: column.into(), strategy: FillStrategy::Mode }
    }

    /// Fill with a fixed value.
    #[must_use]
    pub fn constant(column: impl Into<String>, value: f64) -> Self {
        Self { column: column.into(), strategy: FillStrategy::Constant(value) }
    }
}

/// Fill missing values in feature columns.
///
/// Filled columns are cast to float. Statistics are taken over the whole
/// frame, before any column is filled. A column with no observed values
/// stays missing under `Mean` and `Mode`.
///
/// # Arguments
/// * `df` - Input DataFrame
/// * `fills` - One rule per column to fill
///
/// # Returns
/// DataFrame with filled columns, other columns untouched.
///
/// # Errors
/// Returns `UtilsError::MissingColumn` if a column is absent,
/// `UtilsError::NonFiniteFill` for a non-finite constant.
pub fn impute_columns(df: DataFrame, fills: &[ColumnFill]) -> Result<DataFrame, UtilsError> {
    let mut exprs = Vec::with_capacity(fills.len());

    for fill in fills {
        let name = fill.column.as_str();
        let column = df.column(name).map_err(|_| UtilsError::MissingColumn(name.to_string()))?;
        let target = col(name).cast(DataType::Float64);

        let value = match fill.strategy {
            FillStrategy::Mean => target.clone().mean(),
            FillStrategy::Mode => {
                let values = column.cast(&DataType::Float64)?;
                match mode_f64(values.f64()?.into_iter().flatten()) {
                    Some(m) => lit(m),
                    None => {
                        exprs.push(target.alias(name));
                        continue;
                    }
                }
            }
            FillStrategy::Constant(v) if v.is_finite() => lit(v),
            FillStrategy::Constant(value) => {
                return Err(UtilsError::NonFiniteFill { column: name.to_string(), value });
            }
        };

        exprs.push(target.fill_null(value).alias(name));
    }

    Ok(df.lazy().with_columns(exprs).collect()?)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    fn values(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
        df.column(name).unwrap().f64().unwrap().into_iter().collect()
    }

    #[test]
    fn mean_fill_uses_whole_frame() {
        let df = df! {
            "ost_prob" => &[Some(10.0), None, Some(20.0)],
        }
        .unwrap();

        let result = impute_columns(df, &[ColumnFill::mean("ost_prob")]).unwrap();
        let filled = values(&result, "ost_prob");
        assert_relative_eq!(filled[1].unwrap(), 15.0, epsilon = 1e-12);
        assert_eq!(filled[0], Some(10.0));
    }

    #[test]
    fn mode_fill_prefers_smallest_on_tie() {
        let df = df! {
            "last_fr" => &[Some(7i64), Some(3), None, Some(7), Some(3)],
        }
        .unwrap();

        let result = impute_columns(df, &[ColumnFill::mode("last_fr")]).unwrap();
        assert_eq!(values(&result, "last_fr")[2], Some(3.0));
    }

    #[test]
    fn mode_fill_ignores_missing_cells() {
        let df = df! {
            "last_fr" => &[Some(7i64), None, None, None, Some(3)],
            "isload" => &[None, None, None, Some(1i64), None],
        }
        .unwrap();

        let fills = [ColumnFill::mode("last_fr"), ColumnFill::mode("isload")];
        let result = impute_columns(df, &fills).unwrap();
        assert_eq!(
            values(&result, "last_fr"),
            vec![Some(7.0), Some(3.0), Some(3.0), Some(3.0), Some(3.0)]
        );
        assert_eq!(values(&result, "isload"), vec![Some(1.0); 5]);
    }

    #[rstest]
    #[case(0.0)]
    #[case(1_000_000.0)]
    fn constant_fill(#[case] value: f64) {
        let df = df! {
            "num_rem" => &[None, Some(2i64)],
        }
        .unwrap();

        let result = impute_columns(df, &[ColumnFill::constant("num_rem", value)]).unwrap();
        assert_eq!(values(&result, "num_rem"), vec![Some(value), Some(2.0)]);
    }

    #[test]
    fn multiple_columns_and_untouched() {
        let df = df! {
            "wagnum" => &[1i64, 2, 3],
            "a" => &[Some(1.0), None, Some(5.0)],
            "b" => &[None, Some(2.0), Some(2.0)],
        }
        .unwrap();

        let fills = [ColumnFill::mean("a"), ColumnFill::mode("b")];
        let result = impute_columns(df, &fills).unwrap();

        assert_eq!(values(&result, "a"), vec![Some(1.0), Some(3.0), Some(5.0)]);
        assert_eq!(values(&result, "b"), vec![Some(2.0), Some(2.0), Some(2.0)]);
        assert_eq!(result.column("wagnum").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn all_missing_column_stays_missing() {
        let df = df! {
            "a" => &[None::<f64>, None],
            "b" => &[None::<i64>, None],
        }
        .unwrap();

        let result = impute_columns(df, &[ColumnFill::mean("a"), ColumnFill::mode("b")]).unwrap();
        assert_eq!(result.column("a").unwrap().null_count(), 2);
        assert_eq!(result.column("b").unwrap().null_count(), 2);
    }

    #[test]
    fn missing_column_errors() {
        let df = df! { "a" => &[1.0] }.unwrap();
        let err = impute_columns(df, &[ColumnFill::mean("b")]).unwrap_err();
        assert!(matches!(err, UtilsError::MissingColumn(ref c) if c == "b"));
    }

    #[test]
    fn non_finite_constant_errors() {
        let df = df! { "a" => &[1.0] }.unwrap();
        let err = impute_columns(df, &[ColumnFill::constant("a", f64::NAN)]).unwrap_err();
        assert!(matches!(err, UtilsError::NonFiniteFill { ref column, .. } if column == "a"));
    }
}
