use crate::config::{ReportConfig, SymbolSpec};
use crate::indicators::{
    calculate_max_drawdown, calculate_rsi, cycle_position, pct_above_low, recent_high, recent_low,
};
use crate::models::indicators::{CyclePosition, DrawdownIndicator, RangeLevel, RsiIndicator};
use crate::models::series::PriceSeries;

/// Everything the report needs to know about one symbol.
///
/// Each derived field is `None` when it cannot be computed from the data.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSnapshot {
    pub symbol: SymbolSpec,
    pub current: Option<f64>,
    pub recent_low: Option<RangeLevel>,
    pub recent_high: Option<RangeLevel>,
    /// Percentage of the current price above the recent low.
    pub pct_above_low: Option<f64>,
    pub rsi: Option<RsiIndicator>,
    pub drawdown: Option<DrawdownIndicator>,
    pub cycle: Option<CyclePosition>,
}

impl SymbolSnapshot {
    /// Snapshot using the last close as the current price.
    pub fn from_series(symbol: &SymbolSpec, series: &PriceSeries, config: &ReportConfig) -> Self {
        Self::compute(symbol, &series.closes(), series.current(), config)
    }

    pub fn compute(
        symbol: &SymbolSpec,
        closes: &[f64],
        current: Option<f64>,
        config: &ReportConfig,
    ) -> Self {
        let current = current.filter(|c| c.is_finite());
        let low = recent_low(closes, config.low_lookback);
        let high = recent_high(closes, config.low_lookback);

        let pct_above_low = match (current, low) {
            (Some(price), Some(low)) => pct_above_low(price, low.value),
            _ => None,
        };

        // The historical fallback only stands in for a missing recent low.
        let reference_low = low.map(|l| l.value).unwrap_or(symbol.fallback_low);
        let cycle = match (current, high) {
            (Some(price), Some(high)) => cycle_position(price, reference_low, high.value),
            _ => None,
        };

        Self {
            symbol: symbol.clone(),
            current,
            recent_low: low,
            recent_high: high,
            pct_above_low,
            rsi: calculate_rsi(closes, config.rsi_period),
            drawdown: calculate_max_drawdown(closes, config.mdd_window),
            cycle,
        }
    }

    pub fn format_price(&self, price: f64) -> String {
        format!(
            "{}{:.*}",
            self.symbol.price_prefix, self.symbol.price_decimals, price
        )
    }
}
