//! Signal Vault: Telegram notifier and the Undercurrent cycle report.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;

pub use error::{ConfigError, DataFetchError, Error, TransportError};
