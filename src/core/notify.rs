//! Notifier flows: resolve credentials, build the client, deliver.
//!
//! Credential resolution always happens before the client exists, so a
//! configuration error never reaches the network.

use crate::config::TelegramConfig;
use crate::error::{Error, TransportError};
use crate::services::notifier::{DeliveryReceipt, Notifier};
use crate::services::telegram::TelegramClient;
use std::env;
use tracing::info;

pub const TEST_SIGNAL_MESSAGE: &str =
    "🔬 [SV Intelligence] test-signal run: connection test succeeded.";

pub const ANNOUNCEMENT_MESSAGE: &str =
    "🚨 [SV Intelligence] System online. The first data pipeline connection succeeded.";

/// Resolve credentials through `lookup` and build a client.
pub fn connect<F>(lookup: F) -> Result<TelegramClient, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let config = TelegramConfig::from_lookup(lookup)?;
    info!(
        token = %config.masked_token(),
        chat_id = %config.chat_id,
        "Telegram: credentials resolved"
    );
    Ok(TelegramClient::new(config)?)
}

pub fn connect_from_env() -> Result<TelegramClient, Error> {
    connect(|key| env::var(key).ok())
}

/// One delivery attempt through any notifier.
pub async fn deliver<N>(notifier: &N, text: &str) -> Result<DeliveryReceipt, TransportError>
where
    N: Notifier + ?Sized,
{
    notifier.send_text(text).await
}

/// Resolve credentials, then send `text` once.
pub async fn send_with_lookup<F>(lookup: F, text: &str) -> Result<DeliveryReceipt, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let client = connect(lookup)?;
    Ok(deliver(&client, text).await?)
}
