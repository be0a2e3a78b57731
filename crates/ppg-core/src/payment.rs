//! # Payment Requests and Results
//!
//! Value types exchanged with a `PaymentGateway`.

use crate::amount::AmountOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input to link creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLinkRequest {
    /// Amount in the caller's unit (see `options`)
    pub amount: u64,
    /// Shown to the payer on the gateway page
    pub description: String,
    /// Where the gateway sends the payer afterwards
    pub callback_url: String,
    #[serde(default)]
    pub options: AmountOptions,
}

impl PaymentLinkRequest {
    pub fn new(amount: u64, description: impl Into<String>, callback_url: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
            callback_url: callback_url.into(),
            options: AmountOptions::default(),
        }
    }

    /// Builder: amount is in Toman and must be multiplied by ten
    pub fn convert_to_smallest_unit(mut self, convert: bool) -> Self {
        self.options = self.options.converting(convert);
        self
    }

    /// Builder: override the accepted amount range
    pub fn with_bounds(mut self, min_amount: u64, max_amount: u64) -> Self {
        self.options = self.options.with_bounds(min_amount, max_amount);
        self
    }
}

/// Hosted payment page reference returned by link creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLink {
    /// Send the payer here
    pub redirect_url: String,
    /// Must be stored by the caller and passed back unchanged on verification
    pub authorization_token: String,
    pub created_at: DateTime<Utc>,
}

/// Input to payment verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// Same value and unit convention as used for link creation
    pub amount: u64,
    pub authorization_token: String,
    #[serde(default)]
    pub convert_to_smallest_unit: bool,
}

impl VerificationRequest {
    pub fn new(amount: u64, authorization_token: impl Into<String>) -> Self {
        Self {
            amount,
            authorization_token: authorization_token.into(),
            convert_to_smallest_unit: false,
        }
    }

    pub fn convert_to_smallest_unit(mut self, convert: bool) -> Self {
        self.convert_to_smallest_unit = convert;
        self
    }

    pub fn amount_options(&self) -> AmountOptions {
        AmountOptions::new().converting(self.convert_to_smallest_unit)
    }
}
