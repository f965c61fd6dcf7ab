//! Undercurrent SOXL / SOX cycle report
//!
//! Fetches two years of daily closes, prints the report, then sends it to
//! the Signal Vault chat.

use clap::Parser;
use dotenvy::dotenv;
use signal_vault::config::{MarketDataConfig, ReportConfig};
use signal_vault::core::notify;
use signal_vault::core::pipeline::ReportPipeline;
use signal_vault::logging;
use signal_vault::services::yahoo::YahooMarketDataProvider;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "soxl-report", about = "Build and send the SOXL cycle report")]
struct Args {
    /// Print the report without sending it; credentials are not required.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv().ok();
    logging::init_logging();

    let report_config = match ReportConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "soxl-report: invalid configuration");
            eprintln!("⚠️ {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Credentials are checked before any market data is fetched.
    let client = if args.dry_run {
        None
    } else {
        match notify::connect_from_env() {
            Ok(client) => Some(client),
            Err(e) => {
                error!(error = %e, "soxl-report: setup failed");
                eprintln!("⚠️ {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    let provider = match YahooMarketDataProvider::new(&MarketDataConfig::from_env()) {
        Ok(provider) => provider,
        Err(e) => {
            error!(error = %e, "soxl-report: market data client failed");
            eprintln!("⚠️ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let pipeline = ReportPipeline::new(provider, report_config);
    let outcome = pipeline.run().await;
    if let Some(e) = &outcome.fetch_error {
        warn!(error = %e, "soxl-report: sending data-unavailable notice");
    }

    println!("{}", outcome.text);
    println!("\n---");

    let Some(client) = client else {
        info!("soxl-report: dry run, nothing sent");
        return ExitCode::SUCCESS;
    };

    match notify::deliver(&client, &outcome.text).await {
        Ok(receipt) => {
            println!("✅ Telegram delivery complete (message {}).", receipt.message_id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "soxl-report: delivery failed");
            eprintln!("❌ Send failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
