use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

/// Most negative peak-to-point decline inside a trailing window, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawdownIndicator {
    pub value_pct: f64,
    /// Number of observations actually used.
    pub window: usize,
}

/// Extreme close over a trailing lookback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeLevel {
    pub value: f64,
    pub lookback: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CyclePosition {
    pub pct: f64,
    pub low: f64,
    pub high: f64,
}

/// Qualitative RSI reading used for the report summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiZone {
    Oversold,
    Neutral,
    Overbought,
}

impl RsiZone {
    pub const OVERSOLD_BELOW: f64 = 30.0;
    pub const OVERBOUGHT_ABOVE: f64 = 70.0;

    pub fn classify(rsi: f64) -> Self {
        if rsi < Self::OVERSOLD_BELOW {
            RsiZone::Oversold
        } else if rsi > Self::OVERBOUGHT_ABOVE {
            RsiZone::Overbought
        } else {
            RsiZone::Neutral
        }
    }
}
