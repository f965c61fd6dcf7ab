//! Report pipeline: fetch both series, compute snapshots, assemble text.

use crate::config::ReportConfig;
use crate::error::DataFetchError;
use crate::report::{build_report, SymbolSnapshot, DATA_UNAVAILABLE};
use crate::services::market_data::MarketDataProvider;
use chrono::{Local, NaiveDate};
use tracing::{error, info};

/// Text to deliver, plus the fetch failure that replaced the report, if any.
#[derive(Debug)]
pub struct ReportOutcome {
    pub text: String,
    pub fetch_error: Option<DataFetchError>,
}

impl ReportOutcome {
    pub fn is_complete(&self) -> bool {
        self.fetch_error.is_none()
    }
}

pub struct ReportPipeline<P> {
    provider: P,
    config: ReportConfig,
}

impl<P: MarketDataProvider> ReportPipeline<P> {
    pub fn new(provider: P, config: ReportConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Fetch the leveraged instrument, then the underlying index.
    pub async fn fetch_snapshots(
        &self,
    ) -> Result<(SymbolSnapshot, SymbolSnapshot), DataFetchError> {
        let leveraged = &self.config.leveraged;
        let underlying = &self.config.underlying;

        let leveraged_series = self
            .provider
            .get_price_series(&leveraged.ticker, &self.config.range)
            .await?;
        let underlying_series = self
            .provider
            .get_price_series(&underlying.ticker, &self.config.range)
            .await?;

        for series in [&leveraged_series, &underlying_series] {
            if series.is_empty() {
                return Err(DataFetchError::EmptySeries {
                    symbol: series.symbol().to_string(),
                });
            }
        }

        Ok((
            SymbolSnapshot::from_series(leveraged, &leveraged_series, &self.config),
            SymbolSnapshot::from_series(underlying, &underlying_series, &self.config),
        ))
    }

    /// Build the report dated `date`. A fetch failure yields [`DATA_UNAVAILABLE`].
    pub async fn run_for(&self, date: NaiveDate) -> ReportOutcome {
        match self.fetch_snapshots().await {
            Ok((leveraged, underlying)) => {
                info!(
                    symbol = %leveraged.symbol.ticker,
                    rsi = ?leveraged.rsi.map(|r| r.value),
                    mdd = ?leveraged.drawdown.map(|d| d.value_pct),
                    cycle = ?leveraged.cycle.map(|c| c.pct),
                    "Report: indicators computed"
                );
                ReportOutcome {
                    text: build_report(&self.config, date, &leveraged, &underlying),
                    fetch_error: None,
                }
            }
            Err(e) => {
                error!(error = %e, "Report: data fetch failed");
                ReportOutcome {
                    text: DATA_UNAVAILABLE.to_string(),
                    fetch_error: Some(e),
                }
            }
        }
    }

    /// Build the report dated today (local time).
    pub async fn run(&self) -> ReportOutcome {
        self.run_for(Local::now().date_naive()).await
    }
}
