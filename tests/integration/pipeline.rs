//! Report pipeline: fetch, compute, format, deliver.

use chrono::NaiveDate;
use signal_vault::config::ReportConfig;
use signal_vault::core::notify::deliver;
use signal_vault::core::pipeline::ReportPipeline;
use signal_vault::models::PriceSeries;
use signal_vault::report::DATA_UNAVAILABLE;
use signal_vault::services::market_data::StaticMarketDataProvider;
use signal_vault::services::yahoo::YahooMarketDataProvider;
use signal_vault::DataFetchError;
use wiremock::MockServer;

use crate::test_utils::{chart_body, closes, mock_chart, mock_send_message, telegram_client, yahoo_client};

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

fn rising(from: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| from + step * i as f64).collect()
}

#[tokio::test]
async fn static_provider_builds_full_report() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let provider = StaticMarketDataProvider::new()
        .with_series(PriceSeries::from_closes("SOXL", start, &rising(10.0, 1.0, 20)))
        .with_series(PriceSeries::from_closes("^SOX", start, &rising(2000.0, 10.0, 21)));

    let outcome = ReportPipeline::new(provider, ReportConfig::default())
        .run_for(report_date())
        .await;

    assert!(outcome.is_complete());
    assert!(outcome
        .text
        .starts_with("📊 [Undercurrent] SOXL cycle report 2026-10-15"));
    assert!(outcome.text.contains("• SOXL: $29.0 (low $10.0, +190%)"));
    assert!(outcome.text.contains("• SOX: 2200 (low 2000, +10%)"));
    assert!(outcome.text.contains("• MDD(60d): 0.0%"));
}

#[tokio::test]
async fn missing_series_degrades_to_data_unavailable() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let provider = StaticMarketDataProvider::new()
        .with_series(PriceSeries::from_closes("SOXL", start, &rising(10.0, 1.0, 20)));

    let outcome = ReportPipeline::new(provider, ReportConfig::default())
        .run_for(report_date())
        .await;

    assert_eq!(outcome.text, DATA_UNAVAILABLE);
    assert!(matches!(
        outcome.fetch_error,
        Some(DataFetchError::EmptySeries { ref symbol }) if symbol == "^SOX"
    ));
}

#[tokio::test]
async fn empty_fetched_series_degrades_to_data_unavailable() {
    let provider = StaticMarketDataProvider::new()
        .with_series(PriceSeries::new("SOXL", Vec::new()))
        .with_series(PriceSeries::new("^SOX", Vec::new()));

    let outcome = ReportPipeline::new(provider, ReportConfig::default())
        .run_for(report_date())
        .await;

    assert!(!outcome.is_complete());
    assert_eq!(outcome.text, DATA_UNAVAILABLE);
}

#[tokio::test]
async fn yahoo_to_telegram_end_to_end() {
    let yahoo = MockServer::start().await;
    mock_chart(&yahoo, "SOXL", chart_body("SOXL", &closes(&rising(10.0, 1.0, 20)))).await;
    mock_chart(&yahoo, "%5ESOX", chart_body("^SOX", &closes(&rising(2000.0, 10.0, 21)))).await;

    let telegram = MockServer::start().await;
    mock_send_message(&telegram, 314).await;

    let provider = YahooMarketDataProvider::with_client(yahoo_client(&yahoo));
    let outcome = ReportPipeline::new(provider, ReportConfig::default())
        .run_for(report_date())
        .await;
    assert!(outcome.is_complete(), "fetch failed: {:?}", outcome.fetch_error);
    assert!(outcome.text.contains("• RSI(14): 100"));
    assert!(outcome.text.contains("💡 RSI overbought"));

    let receipt = deliver(&telegram_client(&telegram), &outcome.text)
        .await
        .expect("report delivered");
    assert_eq!(receipt.message_id, 314);

    let sent = telegram.received_requests().await.unwrap();
    assert_eq!(sent.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&sent[0].body).unwrap();
    assert_eq!(body["text"], outcome.text.as_str());

    // Leveraged symbol first, then the index; one request each.
    let fetched: Vec<String> = yahoo
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(fetched, vec!["/v8/finance/chart/SOXL", "/v8/finance/chart/%5ESOX"]);
}
