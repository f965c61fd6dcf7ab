//! Value types shared across the data, indicator and report layers.

pub mod indicators;
pub mod series;

pub use indicators::{CyclePosition, DrawdownIndicator, RangeLevel, RsiIndicator, RsiZone};
pub use series::{PricePoint, PriceSeries};
