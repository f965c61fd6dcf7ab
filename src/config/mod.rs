//! Environment-sourced configuration.
//!
//! Credentials never have a literal fallback: a missing bot token or chat id
//! is a [`ConfigError`] and the caller must stop before any network call.

use crate::error::ConfigError;
use std::env;
use std::time::Duration;

pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const TELEGRAM_API_URL: &str = "TELEGRAM_API_URL";
pub const YAHOO_API_URL: &str = "YAHOO_API_URL";
pub const REPORT_RANGE: &str = "REPORT_RANGE";

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_YAHOO_API_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| "sandbox".to_string())
        .to_lowercase()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn base_url(value: Option<String>, default: &str) -> String {
    non_blank(value)
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Credentials and endpoint for the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base_url: String,
    pub timeout: Duration,
}

impl TelegramConfig {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            api_base_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve through an arbitrary key lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = non_blank(lookup(TELEGRAM_BOT_TOKEN))
            .ok_or(ConfigError::MissingVar(TELEGRAM_BOT_TOKEN))?;
        let chat_id = non_blank(lookup(TELEGRAM_CHAT_ID))
            .ok_or(ConfigError::MissingVar(TELEGRAM_CHAT_ID))?;

        if chat_id.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid {
                var: TELEGRAM_CHAT_ID,
                reason: "chat id must not contain whitespace".to_string(),
            });
        }

        Ok(Self {
            bot_token,
            chat_id,
            api_base_url: base_url(lookup(TELEGRAM_API_URL), DEFAULT_TELEGRAM_API_URL),
            timeout: DEFAULT_HTTP_TIMEOUT,
        })
    }

    /// Token safe for logs: first 10 and last 5 characters.
    pub fn masked_token(&self) -> String {
        mask_token(&self.bot_token)
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &self.masked_token())
            .field("chat_id", &self.chat_id)
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() >= 15 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        let head: String = chars.iter().take(chars.len().min(10) / 2).collect();
        format!("{}...", head)
    }
}

/// Endpoint for the market data provider.
#[derive(Debug, Clone)]
pub struct MarketDataConfig {
    pub api_base_url: String,
    pub timeout: Duration,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_YAHOO_API_URL.to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl MarketDataConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_base_url: base_url(lookup(YAHOO_API_URL), DEFAULT_YAHOO_API_URL),
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

/// How one ticker is fetched and rendered in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSpec {
    /// Provider ticker, e.g. `^SOX`.
    pub ticker: String,
    /// Label printed in the report, e.g. `SOX`.
    pub label: String,
    /// Prefix printed before prices (`$` or empty).
    pub price_prefix: String,
    pub price_decimals: usize,
    /// Reference low used when no recent low can be computed.
    pub fallback_low: f64,
}

impl SymbolSpec {
    pub fn new(ticker: &str, label: &str, price_prefix: &str, price_decimals: usize, fallback_low: f64) -> Self {
        Self {
            ticker: ticker.to_string(),
            label: label.to_string(),
            price_prefix: price_prefix.to_string(),
            price_decimals,
            fallback_low,
        }
    }
}

/// Parameters of the cycle report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub leveraged: SymbolSpec,
    pub underlying: SymbolSpec,
    /// Provider period string, e.g. `2y`.
    pub range: String,
    pub rsi_period: u32,
    pub mdd_window: usize,
    pub low_lookback: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            // October 2022 cycle lows.
            leveraged: SymbolSpec::new("SOXL", "SOXL", "$", 1, 8.20),
            underlying: SymbolSpec::new("^SOX", "SOX", "", 0, 2030.0),
            range: "2y".to_string(),
            rsi_period: 14,
            mdd_window: 60,
            low_lookback: 500,
        }
    }
}

impl ReportConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(range) = non_blank(lookup(REPORT_RANGE)) {
            if !is_valid_range(&range) {
                return Err(ConfigError::Invalid {
                    var: REPORT_RANGE,
                    reason: format!("unsupported period '{}'", range),
                });
            }
            config.range = range;
        }
        Ok(config)
    }
}

/// Period strings accepted by the chart endpoint.
pub fn is_valid_range(range: &str) -> bool {
    matches!(
        range,
        "1d" | "5d" | "1mo" | "3mo" | "6mo" | "1y" | "2y" | "5y" | "10y" | "ytd" | "max"
    )
}
