//! HTTP client for the Yahoo Finance chart endpoint.

use crate::config::MarketDataConfig;
use crate::error::DataFetchError;
use crate::models::series::{PricePoint, PriceSeries};
use chrono::DateTime;
use tracing::{debug, info, warn};
use url::Url;

use super::messages::{ChartResponse, ChartResult};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko)";

pub struct YahooClient {
    base_url: String,
    http: reqwest::Client,
}

impl YahooClient {
    pub fn new(config: &MarketDataConfig) -> Result<Self, DataFetchError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self::with_client(config.api_base_url.clone(), http))
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// `{base}/v8/finance/chart/{symbol}?range={range}&interval=1d`, symbol percent-encoded.
    pub fn chart_url(&self, symbol: &str, range: &str) -> Result<Url, DataFetchError> {
        if symbol.trim().is_empty() {
            return Err(DataFetchError::InvalidRequest(
                "symbol must not be empty".to_string(),
            ));
        }
        let encoded: String = url::form_urlencoded::byte_serialize(symbol.as_bytes()).collect();
        let mut url = Url::parse(&format!("{}/v8/finance/chart/{}", self.base_url, encoded))
            .map_err(|e| DataFetchError::InvalidRequest(format!("bad chart url: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("range", range)
            .append_pair("interval", "1d");
        Ok(url)
    }

    /// Daily closes for `symbol`. Sessions without a close are skipped.
    pub async fn fetch_daily_closes(
        &self,
        symbol: &str,
        range: &str,
    ) -> Result<PriceSeries, DataFetchError> {
        let url = self.chart_url(symbol, range)?;
        debug!(symbol = %symbol, range = %range, url = %url, "Yahoo: fetching chart");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Unknown symbols come back as 404 with a chart.error body.
        let parsed = serde_json::from_str::<ChartResponse>(&body);
        if let Ok(ChartResponse { chart }) = &parsed {
            if let Some(error) = &chart.error {
                warn!(symbol = %symbol, code = %error.code, "Yahoo: chart error");
                return Err(DataFetchError::Provider {
                    code: error.code.clone(),
                    description: error.description.clone(),
                });
            }
        }
        if !status.is_success() {
            warn!(symbol = %symbol, status = status.as_u16(), "Yahoo: HTTP error");
            return Err(DataFetchError::Status {
                status: status.as_u16(),
            });
        }

        let chart = parsed
            .map_err(|e| DataFetchError::Decode(e.to_string()))?
            .chart;

        let result = chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| DataFetchError::EmptySeries {
                symbol: symbol.to_string(),
            })?;

        let series = series_from_result(symbol, result);
        if series.is_empty() {
            return Err(DataFetchError::EmptySeries {
                symbol: symbol.to_string(),
            });
        }

        info!(
            symbol = %symbol,
            count = series.len(),
            last_date = ?series.last_date(),
            "Yahoo: fetched {} closes for {}",
            series.len(),
            symbol
        );
        Ok(series)
    }
}

/// Pair timestamps with closes, dating each session in exchange time.
pub fn series_from_result(symbol: &str, result: ChartResult) -> PriceSeries {
    let offset = result.meta.as_ref().map(|m| m.gmtoffset).unwrap_or(0);
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    let points = result
        .timestamp
        .iter()
        .zip(closes)
        .filter_map(|(&ts, close)| {
            let close = close?;
            let date = DateTime::from_timestamp(ts + offset, 0)?.date_naive();
            Some(PricePoint::new(date, close))
        })
        .collect();

    PriceSeries::new(symbol, points)
}
