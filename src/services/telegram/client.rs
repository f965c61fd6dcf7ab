//! Telegram Bot API client over HTTPS.
//!
//! The bot token is part of every request path, so transport errors are
//! stripped of their URL before they leave this module.

use crate::config::TelegramConfig;
use crate::error::TransportError;
use crate::services::notifier::{DeliveryReceipt, Notifier};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::messages::{ApiResponse, BotUser, ChatId, SendMessageRequest, SentMessage};

pub struct TelegramClient {
    config: TelegramConfig,
    chat_id: ChatId,
    http: reqwest::Client,
}

impl TelegramClient {
    pub fn new(config: TelegramConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Request(e.without_url()))?;
        Ok(Self::with_client(config, http))
    }

    pub fn with_client(config: TelegramConfig, http: reqwest::Client) -> Self {
        let chat_id = ChatId::parse(&config.chat_id);
        Self {
            config,
            chat_id,
            http,
        }
    }

    pub fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.config.api_base_url, self.config.bot_token, method
        )
    }

    /// `getMe`: confirms the token is valid and returns the bot identity.
    pub async fn get_me(&self) -> Result<BotUser, TransportError> {
        debug!(token = %self.config.masked_token(), "Telegram: getMe");
        let response = self
            .http
            .get(self.method_url("getMe"))
            .send()
            .await
            .map_err(|e| TransportError::Request(e.without_url()))?;
        let user: BotUser = decode(response).await?;
        info!(bot_id = user.id, username = ?user.username, "Telegram: bot identity confirmed");
        Ok(user)
    }

    /// `sendMessage` to the configured chat.
    pub async fn send_message(&self, text: &str) -> Result<SentMessage, TransportError> {
        debug!(chat_id = %self.chat_id, chars = text.chars().count(), "Telegram: sendMessage");
        let body = SendMessageRequest {
            chat_id: self.chat_id.clone(),
            text,
        };
        let response = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.without_url()))?;
        let sent: SentMessage = decode(response).await?;
        info!(chat_id = %self.chat_id, message_id = sent.message_id, "Telegram: message sent");
        Ok(sent)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, TransportError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Request(e.without_url()))?;

    if !status.is_success() {
        // Error responses usually still carry the JSON envelope with a description.
        let detail = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.description)
            .unwrap_or(body);
        warn!(status = status.as_u16(), detail = %detail, "Telegram: HTTP error");
        return Err(TransportError::Status {
            status: status.as_u16(),
            body: detail,
        });
    }

    let envelope: ApiResponse<T> =
        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))?;

    if !envelope.ok {
        return Err(TransportError::Api {
            code: envelope.error_code,
            description: envelope
                .description
                .unwrap_or_else(|| "no description".to_string()),
        });
    }

    envelope
        .result
        .ok_or_else(|| TransportError::Decode("response has ok=true but no result".to_string()))
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn send_text(&self, text: &str) -> Result<DeliveryReceipt, TransportError> {
        let sent = self.send_message(text).await?;
        Ok(DeliveryReceipt {
            chat_id: self.chat_id.to_string(),
            message_id: sent.message_id,
        })
    }
}
