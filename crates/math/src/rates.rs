//! Rates of decrease between adjacent observations.

use ndarray::Array1;

use crate::MathError;

/// Per-day rates of positive decreases between adjacent observations.
///
/// For each adjacent pair `(values[i], values[i + 1])` separated by
/// `gaps[i]` days, the decrease `values[i] - values[i + 1]` is kept only when
/// both values are present and the decrease is strictly positive. Kept
/// decreases are divided by their gap. Pairs on the same day carry no rate
/// and are skipped.
///
/// # Arguments
/// * `values` - Observations in chronological order
/// * `gaps` - Day gaps between adjacent observations (`values.len() - 1`)
///
/// # Returns
/// Rates in chronological order.
///
/// # Errors
/// Returns `MathError::DimensionMismatch` if `gaps` has the wrong length,
/// `MathError::NonChronological` if any gap is negative.
pub fn decrease_rates(values: &[Option<f64>], gaps: &[i64]) -> Result<Array1<f64>, MathError> {
    let expected = values.len().saturating_sub(1);
    if gaps.len() != expected {
        return Err(MathError::DimensionMismatch { expected, actual: gaps.len() });
    }

    let mut rates = Vec::with_capacity(expected);
    for (index, (pair, &gap)) in values.windows(2).zip(gaps).enumerate() {
        if gap < 0 {
            return Err(MathError::NonChronological { index, gap });
        }
        let (Some(prev), Some(next)) = (pair[0], pair[1]) else {
            continue;
        };
        let decrease = prev - next;
        if decrease.is_nan() || decrease <= 0.0 || gap == 0 {
            continue;
        }
        rates.push(decrease / gap as f64);
    }

    Ok(Array1::from_vec(rates))
}

/// Maximum and mean of a set of rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSummary {
    /// Largest rate.
    pub max: f64,
    /// Arithmetic mean of the rates.
    pub mean: f64,
}

impl RateSummary {
    /// Summarize rates.
    ///
    /// # Returns
    /// `None` if `rates` is empty.
    #[must_use]
    pub fn from_rates(rates: &Array1<f64>) -> Option<Self> {
        let mean = rates.mean()?;
        let max = rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self { max, mean })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn keeps_only_positive_decreases() {
        let values = [Some(100.0), Some(80.0), Some(80.0), Some(50.0)];
        let rates = decrease_rates(&values, &[10, 10, 10]).unwrap();
        assert_eq!(rates, array![2.0, 3.0]);

        let summary = RateSummary::from_rates(&rates).unwrap();
        assert_relative_eq!(summary.max, 3.0, epsilon = 1e-12);
        assert_relative_eq!(summary.mean, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn increases_are_discarded() {
        let values = [Some(10.0), Some(20.0), Some(30.0)];
        let rates = decrease_rates(&values, &[5, 5]).unwrap();
        assert!(rates.is_empty());
        assert!(RateSummary::from_rates(&rates).is_none());
    }

    #[test]
    fn missing_values_break_pairs() {
        let values = [Some(50.0), None, Some(30.0), Some(20.0)];
        let rates = decrease_rates(&values, &[1, 1, 4]).unwrap();
        assert_eq!(rates, array![2.5]);
    }

    #[test]
    fn rates_use_their_own_gap() {
        let values = [Some(100.0), Some(100.0), Some(70.0)];
        let rates = decrease_rates(&values, &[1, 30]).unwrap();
        assert_eq!(rates, array![1.0]);
    }

    #[test]
    fn same_day_pairs_are_skipped() {
        let values = [Some(100.0), Some(90.0)];
        let rates = decrease_rates(&values, &[0]).unwrap();
        assert!(rates.is_empty());
    }

    #[test]
    fn single_and_empty_inputs() {
        assert!(decrease_rates(&[Some(1.0)], &[]).unwrap().is_empty());
        assert!(decrease_rates(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn gap_length_must_match() {
        let err = decrease_rates(&[Some(1.0), Some(0.5)], &[1, 2]).unwrap_err();
        assert!(matches!(err, MathError::DimensionMismatch { expected: 1, actual: 2 }));
    }

    #[test]
    fn negative_gap_is_rejected() {
        let err = decrease_rates(&[Some(5.0), Some(1.0)], &[-3]).unwrap_err();
        assert!(matches!(err, MathError::NonChronological { index: 0, gap: -3 }));
    }
}
