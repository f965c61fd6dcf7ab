//! Market data provider interface.

use crate::error::DataFetchError;
use crate::models::series::PriceSeries;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily closes for `symbol` over a provider period string such as `2y`.
    async fn get_price_series(
        &self,
        symbol: &str,
        range: &str,
    ) -> Result<PriceSeries, DataFetchError>;
}

/// Serves pre-built series from memory. Unknown symbols are an empty-series error.
#[derive(Debug, Default, Clone)]
pub struct StaticMarketDataProvider {
    series: HashMap<String, PriceSeries>,
}

impl StaticMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.series.insert(series.symbol().to_string(), series);
        self
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn get_price_series(
        &self,
        symbol: &str,
        _range: &str,
    ) -> Result<PriceSeries, DataFetchError> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| DataFetchError::EmptySeries {
                symbol: symbol.to_string(),
            })
    }
}
