//! Error taxonomy shared by the binaries.

use thiserror::Error;

/// Missing or malformed process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set; add it to the environment or .env")]
    MissingVar(&'static str),
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Failure while retrieving a price series from the market data provider.
#[derive(Debug, Error)]
pub enum DataFetchError {
    #[error("market data request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("market data provider returned HTTP {status}")]
    Status { status: u16 },
    #[error("market data provider error: {code} - {description}")]
    Provider { code: String, description: String },
    #[error("malformed market data response: {0}")]
    Decode(String),
    #[error("no price data for {symbol}")]
    EmptySeries { symbol: String },
    #[error("invalid market data request: {0}")]
    InvalidRequest(String),
}

/// Failure while talking to the messaging provider.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to messaging provider failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("messaging provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("messaging provider rejected the call: {description}")]
    Api {
        code: Option<i64>,
        description: String,
    },
    #[error("malformed response from messaging provider: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("data fetch error: {0}")]
    DataFetch(#[from] DataFetchError),
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, Error>;
