//! Small slice helpers used by the indicator functions.

/// The trailing `n` values, or the whole slice when it is shorter.
pub fn tail(values: &[f64], n: usize) -> &[f64] {
    &values[values.len().saturating_sub(n)..]
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Minimum value; `None` for an empty slice or when a NaN is present.
pub fn min(values: &[f64]) -> Option<f64> {
    fold_finite(values, f64::min)
}

/// Maximum value; `None` for an empty slice or when a NaN is present.
pub fn max(values: &[f64]) -> Option<f64> {
    fold_finite(values, f64::max)
}

fn fold_finite(values: &[f64], f: fn(f64, f64) -> f64) -> Option<f64> {
    if values.iter().any(|v| v.is_nan()) {
        return None;
    }
    let (first, rest) = values.split_first()?;
    Some(rest.iter().copied().fold(*first, f))
}

/// Successive differences `values[i] - values[i - 1]`.
pub fn deltas(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Percentage change from `base` to `value`; `None` when `base` is not positive.
pub fn pct_change(base: f64, value: f64) -> Option<f64> {
    if base > 0.0 {
        let pct = (value - base) / base * 100.0;
        pct.is_finite().then_some(pct)
    } else {
        None
    }
}
