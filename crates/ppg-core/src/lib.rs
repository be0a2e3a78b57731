//! # ppg-core
//!
//! Core types and traits for Persian payment gateway clients.
//!
//! This crate provides:
//! - `PaymentGateway` trait for implementing gateway clients
//! - `GatewayIdentity` and `EndpointMap`, fixed at construction
//! - `AmountOptions` for Toman/Rial conversion and bounds
//! - `PaymentLinkRequest`, `PaymentLink` and `VerificationRequest`
//! - `GatewayError` for typed error handling, plus `Outcome` and
//!   `LegacyResultExt` for callers that want a tagged or null-collapsed view
//!
//! ## Example
//!
//! ```rust,ignore
//! use ppg_core::{PaymentGateway, PaymentLinkRequest, VerificationRequest};
//!
//! let link = gateway
//!     .create_payment_link(&PaymentLinkRequest::new(5000, "order #1", "https://app.test/cb"))
//!     .await?;
//!
//! // Persist link.authorization_token, redirect the payer to link.redirect_url
//!
//! let ref_id = gateway
//!     .verify_payment(&VerificationRequest::new(5000, &link.authorization_token))
//!     .await?;
//! ```

pub mod amount;
pub mod error;
pub mod gateway;
pub mod identity;
pub mod outcome;
pub mod payment;

// Re-exports for convenience
pub use amount::{AmountOptions, AmountUnit, DEFAULT_MAX_AMOUNT, DEFAULT_MIN_AMOUNT};
pub use error::{GatewayError, GatewayResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use identity::{Endpoint, EndpointMap, GatewayIdentity};
pub use outcome::{LegacyResultExt, Outcome};
pub use payment::{PaymentLink, PaymentLinkRequest, VerificationRequest};
