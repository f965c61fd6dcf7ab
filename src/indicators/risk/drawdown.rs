//! Maximum drawdown over a trailing window

use crate::common::math;
use crate::models::indicators::DrawdownIndicator;

pub const DEFAULT_MDD_WINDOW: usize = 60;

/// Largest percentage decline from the running peak within the trailing
/// `window` closes (the whole series when shorter).
///
/// The result is never positive: the first point of the window has a
/// drawdown of 0.
pub fn calculate_max_drawdown(closes: &[f64], window: usize) -> Option<DrawdownIndicator> {
    let recent = math::tail(closes, window);
    let (&first, _) = recent.split_first()?;

    let mut peak = first;
    let mut worst = f64::INFINITY;
    for &close in recent {
        peak = peak.max(close);
        let drawdown = (close - peak) / peak * 100.0;
        worst = worst.min(drawdown);
    }

    if !worst.is_finite() {
        return None;
    }

    Some(DrawdownIndicator {
        value_pct: worst,
        window: recent.len(),
    })
}

pub fn calculate_max_drawdown_default(closes: &[f64]) -> Option<DrawdownIndicator> {
    calculate_max_drawdown(closes, DEFAULT_MDD_WINDOW)
}
