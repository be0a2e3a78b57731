//! # Gateway Error Types
//!
//! Typed error handling for payment gateway clients.
//! All gateway operations return `Result<T, GatewayError>`.

use thiserror::Error;

/// Core error type for all gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Amount outside the caller-declared bounds (checked before any network call)
    #[error("Invalid amount {amount}: must be between {min} and {max}")]
    InvalidAmount { amount: u64, min: u64, max: u64 },

    /// Operation not provided by this gateway
    #[error("Operation `{operation}` is not implemented by gateway {portal}")]
    NotImplemented {
        portal: String,
        operation: &'static str,
    },

    /// Gateway answered but did not report success
    #[error("Rejected by {portal}: code={code:?}, message={message:?}")]
    Rejected {
        portal: String,
        code: Option<i64>,
        message: Option<String>,
    },

    /// Network/HTTP error communicating with the gateway
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not JSON or lacked a required field
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration errors (missing merchant id, bad base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GatewayError {
    /// Returns true if the error was raised locally, before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            GatewayError::InvalidAmount { .. }
                | GatewayError::NotImplemented { .. }
                | GatewayError::Configuration(_)
        )
    }

    /// Returns true if the error came out of the upstream round trip
    pub fn is_upstream(&self) -> bool {
        !self.is_local()
    }

    /// Gateway status code carried by a rejection, if any
    pub fn gateway_code(&self) -> Option<i64> {
        match self {
            GatewayError::Rejected { code, .. } => *code,
            _ => None,
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_errors() {
        assert!(GatewayError::InvalidAmount {
            amount: 5,
            min: 1000,
            max: 2000
        }
        .is_local());
        assert!(GatewayError::NotImplemented {
            portal: "zarinpal".into(),
            operation: "verify_payment"
        }
        .is_local());
        assert!(GatewayError::Network("timeout".into()).is_upstream());
        assert!(GatewayError::MalformedResponse("not json".into()).is_upstream());
    }

    #[test]
    fn test_gateway_code() {
        let err = GatewayError::Rejected {
            portal: "zarinpal".into(),
            code: Some(-9),
            message: None,
        };
        assert_eq!(err.gateway_code(), Some(-9));
        assert_eq!(GatewayError::Network("reset".into()).gateway_code(), None);
    }

    #[test]
    fn test_invalid_amount_message() {
        let err = GatewayError::InvalidAmount {
            amount: 10,
            min: 1000,
            max: 1_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "Invalid amount 10: must be between 1000 and 1000000000"
        );
    }
}
