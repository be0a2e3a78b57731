//! # ppg-zarinpal
//!
//! Zarinpal client for persian-payment-gateway.
//!
//! Implements `ppg_core::PaymentGateway` against Zarinpal's v4 API:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | `create_payment_link` | `POST /pg/v4/payment/request.json` |
//! | `verify_payment` | `POST /pg/v4/payment/verify.json` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ppg_core::{LegacyResultExt, PaymentGateway, PaymentLinkRequest, VerificationRequest};
//! use ppg_zarinpal::ZarinpalGateway;
//!
//! let gateway = ZarinpalGateway::new("your-merchant-id")?;
//!
//! // Amount in Toman; sent to Zarinpal as Rial
//! let request = PaymentLinkRequest::new(5000, "order #1", "https://shop.example/cb")
//!     .convert_to_smallest_unit(true);
//! let link = gateway.create_payment_link(&request).await?;
//!
//! // ... payer returns to https://shop.example/cb/payment-redirect ...
//!
//! let ref_id = gateway
//!     .verify_payment(
//!         &VerificationRequest::new(5000, &link.authorization_token).convert_to_smallest_unit(true),
//!     )
//!     .await
//!     .or_absent()?;
//! ```

pub mod api;
pub mod client;
pub mod config;

// Re-exports
pub use api::{callback_redirect_url, CALLBACK_SUFFIX, SUCCESS_CODE};
pub use client::ZarinpalGateway;
pub use config::ZarinpalConfig;
