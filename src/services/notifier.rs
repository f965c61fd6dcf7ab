//! Delivery interface: send a text to the configured destination.

use crate::error::TransportError;
use async_trait::async_trait;

/// Confirmation returned by a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub chat_id: String,
    pub message_id: i64,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// One delivery attempt. No retry.
    async fn send_text(&self, text: &str) -> Result<DeliveryReceipt, TransportError>;
}
