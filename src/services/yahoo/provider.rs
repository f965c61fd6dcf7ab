//! Yahoo-backed market data provider

use crate::config::MarketDataConfig;
use crate::error::DataFetchError;
use crate::models::series::PriceSeries;
use crate::services::market_data::MarketDataProvider;
use async_trait::async_trait;

use super::client::YahooClient;

pub struct YahooMarketDataProvider {
    client: YahooClient,
}

impl YahooMarketDataProvider {
    pub fn new(config: &MarketDataConfig) -> Result<Self, DataFetchError> {
        Ok(Self::with_client(YahooClient::new(config)?))
    }

    pub fn with_client(client: YahooClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &YahooClient {
        &self.client
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_price_series(
        &self,
        symbol: &str,
        range: &str,
    ) -> Result<PriceSeries, DataFetchError> {
        self.client.fetch_daily_closes(symbol, range).await
    }
}
