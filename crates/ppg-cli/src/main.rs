//! # persian-pay
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or put them in .env)
//! export ZARINPAL_MERCHANT_ID=xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
//!
//! # Create a payment link for 5000 Toman
//! persian-pay create --amount 5000 --convert-to-rial \
//!     --description "order #1" --callback-url https://shop.example/cb
//!
//! # Verify it after the payer returns
//! persian-pay verify --amount 5000 --convert-to-rial --authority A000000000000000000000000000000000
//! ```

use clap::Parser;
use ppg_cli::{run, Cli};
use std::process::ExitCode;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    debug!("Parsed arguments: {:?}", cli.command);

    let outcome = run(&cli).await?;
    println!("{}", outcome.to_json()?);

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
