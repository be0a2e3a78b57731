//! # Gateway Identity and Endpoints
//!
//! Which gateway a client talks to, on behalf of which merchant, and where.
//! Both are fixed when the client is built.

use std::fmt;

/// Portal label plus the merchant account used with it
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayIdentity {
    portal_name: String,
    merchant_id: String,
}

impl GatewayIdentity {
    pub fn new(portal_name: impl Into<String>, merchant_id: impl Into<String>) -> Self {
        Self {
            portal_name: portal_name.into(),
            merchant_id: merchant_id.into(),
        }
    }

    pub fn portal_name(&self) -> &str {
        &self.portal_name
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }
}

// Merchant ids are credentials; keep them out of logs.
impl fmt::Debug for GatewayIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayIdentity")
            .field("portal_name", &self.portal_name)
            .field("merchant_id", &"<redacted>")
            .finish()
    }
}

/// Logical gateway operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CreateLink,
    VerifyPayment,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::CreateLink => "create_link",
            Endpoint::VerifyPayment => "verify_payment",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute URL for each logical operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointMap {
    create_link: String,
    verify_payment: String,
}

impl EndpointMap {
    pub fn new(create_link: impl Into<String>, verify_payment: impl Into<String>) -> Self {
        Self {
            create_link: create_link.into(),
            verify_payment: verify_payment.into(),
        }
    }

    pub fn get(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::CreateLink => &self.create_link,
            Endpoint::VerifyPayment => &self.verify_payment,
        }
    }
}
