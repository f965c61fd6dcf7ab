//! Sends one message to the configured Telegram chat.
//!
//! Without arguments the fixed system announcement is sent.

use clap::Parser;
use dotenvy::dotenv;
use signal_vault::core::notify::{self, ANNOUNCEMENT_MESSAGE};
use signal_vault::logging;
use std::process::ExitCode;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "send-message", about = "Send a text message through the Signal Vault bot")]
struct Args {
    /// Message text; words are joined with spaces.
    text: Vec<String>,
}

impl Args {
    fn message(&self) -> String {
        let joined = self.text.join(" ");
        if joined.trim().is_empty() {
            ANNOUNCEMENT_MESSAGE.to_string()
        } else {
            joined
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv().ok();
    logging::init_logging();

    match notify::send_with_lookup(|key| std::env::var(key).ok(), &args.message()).await {
        Ok(receipt) => {
            println!(
                "✅ Telegram message sent (chat {}, message {}). Check your phone.",
                receipt.chat_id, receipt.message_id
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "send-message failed");
            eprintln!("⚠️ {}", e);
            ExitCode::FAILURE
        }
    }
}
