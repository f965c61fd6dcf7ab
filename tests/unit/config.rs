//! Unit tests for environment-sourced configuration

use signal_vault::config::{
    mask_token, ReportConfig, TelegramConfig, DEFAULT_TELEGRAM_API_URL, TELEGRAM_BOT_TOKEN,
    TELEGRAM_CHAT_ID,
};
use signal_vault::ConfigError;
use std::collections::HashMap;

const TOKEN: &str = "123456789:AAFakeTokenForUnitTests";

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_telegram_config_resolves() {
    let config = TelegramConfig::from_lookup(lookup(&[
        (TELEGRAM_BOT_TOKEN, TOKEN),
        (TELEGRAM_CHAT_ID, " 6475054244 "),
    ]))
    .unwrap();

    assert_eq!(config.bot_token, TOKEN);
    assert_eq!(config.chat_id, "6475054244");
    assert_eq!(config.api_base_url, DEFAULT_TELEGRAM_API_URL);
}

#[test]
fn test_missing_token() {
    let err = TelegramConfig::from_lookup(lookup(&[(TELEGRAM_CHAT_ID, "1")])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingVar(TELEGRAM_BOT_TOKEN)));
    assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
}

#[test]
fn test_blank_chat_id_counts_as_missing() {
    let err = TelegramConfig::from_lookup(lookup(&[
        (TELEGRAM_BOT_TOKEN, TOKEN),
        (TELEGRAM_CHAT_ID, "   "),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::MissingVar(TELEGRAM_CHAT_ID)));
}

#[test]
fn test_chat_id_with_whitespace_is_invalid() {
    let err = TelegramConfig::from_lookup(lookup(&[
        (TELEGRAM_BOT_TOKEN, TOKEN),
        (TELEGRAM_CHAT_ID, "12 34"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: TELEGRAM_CHAT_ID, .. }));
}

#[test]
fn test_api_url_override_trims_slash() {
    let config = TelegramConfig::from_lookup(lookup(&[
        (TELEGRAM_BOT_TOKEN, TOKEN),
        (TELEGRAM_CHAT_ID, "1"),
        ("TELEGRAM_API_URL", "http://localhost:8081/"),
    ]))
    .unwrap();
    assert_eq!(config.api_base_url, "http://localhost:8081");
}

#[test]
fn test_debug_masks_token() {
    let config = TelegramConfig::new(TOKEN, "1");
    let debug = format!("{:?}", config);
    assert!(!debug.contains(TOKEN));
    assert!(debug.contains("123456789:...Tests"));
}

#[test]
fn test_mask_short_token() {
    assert_eq!(mask_token("abcdef"), "abc...");
    assert!(!mask_token("abcdef").contains("abcdef"));
}

#[test]
fn test_report_config_defaults() {
    let config = ReportConfig::default();
    assert_eq!(config.leveraged.ticker, "SOXL");
    assert_eq!(config.underlying.ticker, "^SOX");
    assert_eq!(config.underlying.label, "SOX");
    assert_eq!(config.range, "2y");
    assert_eq!(config.rsi_period, 14);
    assert_eq!(config.mdd_window, 60);
    assert_eq!(config.low_lookback, 500);
}

#[test]
fn test_report_range_override() {
    let config = ReportConfig::from_lookup(lookup(&[("REPORT_RANGE", "5y")])).unwrap();
    assert_eq!(config.range, "5y");

    let err = ReportConfig::from_lookup(lookup(&[("REPORT_RANGE", "2 years")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}
