//! Telegram Bot API client

pub mod client;
pub mod messages;

pub use client::TelegramClient;
pub use messages::{ApiResponse, BotUser, ChatId, SendMessageRequest, SentMessage};
