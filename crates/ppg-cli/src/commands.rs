//! # Commands
//!
//! Argument parsing and dispatch for `persian-pay`.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use ppg_core::{
    Outcome, PaymentGateway, PaymentLink, PaymentLinkRequest, VerificationRequest,
    DEFAULT_MAX_AMOUNT, DEFAULT_MIN_AMOUNT,
};
use ppg_zarinpal::config::DEFAULT_TIMEOUT_SECS;
use ppg_zarinpal::{ZarinpalConfig, ZarinpalGateway};
use tracing::info;

/// Create and verify Zarinpal payments from the command line.
#[derive(Parser, Debug)]
#[command(name = "persian-pay", version, about)]
pub struct Cli {
    /// Merchant id issued by Zarinpal.
    #[arg(long, env = "ZARINPAL_MERCHANT_ID", global = true, hide_env_values = true)]
    pub merchant_id: Option<String>,

    /// Override the API base URL (sandbox or mock server).
    #[arg(long, env = "ZARINPAL_API_BASE_URL", global = true)]
    pub api_base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "ZARINPAL_TIMEOUT_SECS", global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Request a payment link.
    Create(CreateArgs),
    /// Verify a completed payment.
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub amount: u64,

    #[arg(long)]
    pub description: String,

    /// `/payment-redirect` is appended before it is sent.
    #[arg(long)]
    pub callback_url: String,

    /// Amount is in Toman; multiply by ten.
    #[arg(long)]
    pub convert_to_rial: bool,

    #[arg(long, default_value_t = DEFAULT_MIN_AMOUNT)]
    pub min_amount: u64,

    #[arg(long, default_value_t = DEFAULT_MAX_AMOUNT)]
    pub max_amount: u64,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[arg(long)]
    pub amount: u64,

    /// Authority returned by `create`.
    #[arg(long)]
    pub authority: String,

    #[arg(long)]
    pub convert_to_rial: bool,
}

impl Cli {
    pub fn gateway_config(&self) -> anyhow::Result<ZarinpalConfig> {
        let merchant_id = self
            .merchant_id
            .clone()
            .context("merchant id missing: pass --merchant-id or set ZARINPAL_MERCHANT_ID")?;

        let mut config = ZarinpalConfig::new(merchant_id).with_timeout_secs(self.timeout_secs);
        if let Some(ref url) = self.api_base_url {
            config = config.with_api_base_url(url.clone());
        }
        Ok(config)
    }
}

/// Result of one command, ready to print
#[derive(Debug)]
pub enum CommandOutcome {
    Link(Outcome<PaymentLink>),
    Verification(Outcome<String>),
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            CommandOutcome::Link(o) => o.is_success(),
            CommandOutcome::Verification(o) => o.is_success(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        match self {
            CommandOutcome::Link(o) => serde_json::to_string_pretty(o),
            CommandOutcome::Verification(o) => serde_json::to_string_pretty(o),
        }
    }
}

/// Build the gateway and run the selected command.
///
/// Local errors (bad amount, bad config) are returned as `Err`; everything
/// the gateway says comes back as an `Outcome`.
pub async fn run(cli: &Cli) -> anyhow::Result<CommandOutcome> {
    let gateway = ZarinpalGateway::with_config(cli.gateway_config()?)?;

    match &cli.command {
        Command::Create(args) => {
            let request = PaymentLinkRequest::new(args.amount, &args.description, &args.callback_url)
                .convert_to_smallest_unit(args.convert_to_rial)
                .with_bounds(args.min_amount, args.max_amount);

            info!("Requesting {} payment link", gateway.portal_name());
            let outcome = Outcome::from_result(gateway.create_payment_link(&request).await)?;
            Ok(CommandOutcome::Link(outcome))
        }
        Command::Verify(args) => {
            let request = VerificationRequest::new(args.amount, &args.authority)
                .convert_to_smallest_unit(args.convert_to_rial);

            info!("Verifying {} payment", gateway.portal_name());
            let outcome = Outcome::from_result(gateway.verify_payment(&request).await)?;
            Ok(CommandOutcome::Verification(outcome))
        }
    }
}
