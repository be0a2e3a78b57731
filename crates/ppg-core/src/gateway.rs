//! # Payment Gateway Trait
//!
//! The capability set every gateway client provides.
//! Implementations: Zarinpal (more gateways slot in as additional impls).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PaymentGateway (trait)                   │
//! │  ├── create_payment_link()                                  │
//! │  ├── verify_payment()                                       │
//! │  ├── identity() / endpoints()                               │
//! │  └── portal_name()                                          │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                    ┌───────┴───────┐
//!                    │ZarinpalGateway│
//!                    └───────────────┘
//! ```

use crate::error::{GatewayError, GatewayResult};
use crate::identity::{EndpointMap, GatewayIdentity};
use crate::payment::{PaymentLink, PaymentLinkRequest, VerificationRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for gateway client implementations.
///
/// Both operations have a default body that fails with
/// `GatewayError::NotImplemented`, so a gateway can be brought up one
/// operation at a time.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Portal label and merchant account this client acts for.
    fn identity(&self) -> &GatewayIdentity;

    /// Upstream URL for each operation.
    fn endpoints(&self) -> &EndpointMap;

    /// Create a hosted payment page and return where to send the payer.
    ///
    /// # Returns
    /// A `PaymentLink` whose `authorization_token` the caller must keep for
    /// `verify_payment`.
    async fn create_payment_link(&self, request: &PaymentLinkRequest) -> GatewayResult<PaymentLink> {
        let _ = request;
        Err(GatewayError::NotImplemented {
            portal: self.portal_name().to_string(),
            operation: "create_payment_link",
        })
    }

    /// Confirm that a payment created earlier was completed for `request.amount`.
    ///
    /// # Returns
    /// The gateway's reference id for the settled transaction.
    async fn verify_payment(&self, request: &VerificationRequest) -> GatewayResult<String> {
        let _ = request;
        Err(GatewayError::NotImplemented {
            portal: self.portal_name().to_string(),
            operation: "verify_payment",
        })
    }

    /// Get the portal name (for logging).
    fn portal_name(&self) -> &str {
        self.identity().portal_name()
    }
}

/// Type alias for a boxed gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
