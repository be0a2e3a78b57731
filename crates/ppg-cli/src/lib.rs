//! # ppg-cli
//!
//! Command-line driver for persian-payment-gateway.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `persian-pay create` | Request a payment link and print it with its authority |
//! | `persian-pay verify` | Verify a payment by authority and print the reference id |
//!
//! Results are printed to stdout as JSON tagged with `status`
//! (`success`, `rejected` or `transport_error`); logs go to stderr.

pub mod commands;

pub use commands::{run, Cli, Command, CommandOutcome, CreateArgs, VerifyArgs};
