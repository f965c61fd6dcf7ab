//! Signal Vault connection test
//!
//! Confirms the bot token with `getMe`, then sends a fixed test message to
//! the configured chat.

use dotenvy::dotenv;
use signal_vault::core::notify::{self, TEST_SIGNAL_MESSAGE};
use signal_vault::logging;
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    logging::init_logging();

    let client = match notify::connect_from_env() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "test-signal: setup failed");
            eprintln!("⚠️ {}", e);
            return ExitCode::FAILURE;
        }
    };

    match client.get_me().await {
        Ok(me) => println!("✅ Bot connected: {}", me.display()),
        Err(e) => {
            error!(error = %e, "test-signal: getMe failed");
            eprintln!("❌ Connection failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    match notify::deliver(&client, TEST_SIGNAL_MESSAGE).await {
        Ok(receipt) => {
            println!(
                "✅ Test message sent (chat {}, message {}). Check your phone.",
                receipt.chat_id, receipt.message_id
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "test-signal: sendMessage failed");
            eprintln!("❌ Send failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
