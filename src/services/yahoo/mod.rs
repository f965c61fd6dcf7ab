//! Yahoo Finance chart API

pub mod client;
pub mod messages;
pub mod provider;

pub use client::YahooClient;
pub use provider::YahooMarketDataProvider;
