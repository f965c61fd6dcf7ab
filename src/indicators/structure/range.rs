//! Recent lows/highs and where the current price sits between them

use crate::common::math;
use crate::models::indicators::{CyclePosition, RangeLevel};

pub const DEFAULT_LOW_LOOKBACK: usize = 500;

/// Lowest close among the trailing `lookback` observations.
pub fn recent_low(closes: &[f64], lookback: usize) -> Option<RangeLevel> {
    let recent = math::tail(closes, lookback);
    math::min(recent).map(|value| RangeLevel {
        value,
        lookback: recent.len(),
    })
}

/// Highest close among the trailing `lookback` observations.
pub fn recent_high(closes: &[f64], lookback: usize) -> Option<RangeLevel> {
    let recent = math::tail(closes, lookback);
    math::max(recent).map(|value| RangeLevel {
        value,
        lookback: recent.len(),
    })
}

/// Position of `current` inside `[low, high]`, in percent.
///
/// Only defined when `high` is strictly above `low`. Prices outside the
/// band give values below 0 or above 100.
pub fn cycle_position(current: f64, low: f64, high: f64) -> Option<CyclePosition> {
    if low.is_nan() || high.is_nan() || high <= low {
        return None;
    }
    let pct = (current - low) / (high - low) * 100.0;
    pct.is_finite().then_some(CyclePosition { pct, low, high })
}

/// Percentage of `current` above `low`; `None` when `low` is not positive.
pub fn pct_above_low(current: f64, low: f64) -> Option<f64> {
    math::pct_change(low, current)
}
