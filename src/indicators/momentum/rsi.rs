//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::RsiIndicator;

pub const DEFAULT_RSI_PERIOD: u32 = 14;

/// Floor applied to a zero average loss so the ratio stays finite.
pub const RSI_LOSS_FLOOR: f64 = 1e-10;

/// Calculate RSI over the trailing `period` price changes.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = SMA(gains, period) / SMA(losses, period)
///
/// Needs at least `period + 1` closes. A window without losses yields a
/// value just under 100; a window without gains yields 0.
pub fn calculate_rsi(closes: &[f64], period: u32) -> Option<RsiIndicator> {
    let period_len = period as usize;
    if period_len == 0 || closes.len() < period_len + 1 {
        return None;
    }

    let changes = math::deltas(math::tail(closes, period_len + 1));

    let mut gains = Vec::with_capacity(changes.len());
    let mut losses = Vec::with_capacity(changes.len());
    for change in changes {
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    let avg_gain = math::mean(&gains)?;
    let avg_loss = math::mean(&losses)?;
    let divisor = if avg_loss == 0.0 { RSI_LOSS_FLOOR } else { avg_loss };

    let rs = avg_gain / divisor;
    let rsi = 100.0 - (100.0 / (1.0 + rs));

    if rsi.is_nan() {
        return None;
    }

    Some(RsiIndicator {
        value: rsi,
        period,
    })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Option<RsiIndicator> {
    calculate_rsi(closes, DEFAULT_RSI_PERIOD)
}
