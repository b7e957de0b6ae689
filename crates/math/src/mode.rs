//! Most-frequent-value statistics.

use std::{cmp::Ordering, collections::BTreeMap};

/// Most frequent value.
///
/// Ties resolve to the smallest value, so the result does not depend on
/// input order.
///
/// # Returns
/// `None` if `values` is empty.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord + Copy,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Most frequent float value, ignoring NaN.
///
/// Values are ordered with `f64::total_cmp`; ties resolve to the smallest.
///
/// # Returns
/// `None` if no non-NaN value is present.
pub fn mode_f64<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sorted: Vec<f64> = values.into_iter().filter(|x| !x.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);

    let mut best: Option<(f64, usize)> = None;
    let mut run: Option<(f64, usize)> = None;

    for v in sorted {
        run = match run {
            Some((current, n)) if current.total_cmp(&v) == Ordering::Equal => Some((current, n + 1)),
            _ => Some((v, 1)),
        };
        if let Some((value, n)) = run
            && best.is_none_or(|(_, c)| n > c)
        {
            best = Some((value, n));
        }
    }

    best.map(|(value, _)| value)
}
