//! # Outcomes
//!
//! Gateway calls either settle or they don't. `Outcome` keeps the reason
//! apart (rejected by the gateway vs. never got a usable answer), while
//! `LegacyResultExt::or_absent` flattens everything upstream to `None` for
//! callers that only check for a value.

use crate::error::{GatewayError, GatewayResult};
use serde::Serialize;

/// Tagged result of one gateway round trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    Success { value: T },
    Rejected {
        code: Option<i64>,
        message: Option<String>,
    },
    TransportError { cause: String },
}

impl<T> Outcome<T> {
    /// Classify a gateway result. Errors raised before the request was sent
    /// stay errors.
    pub fn from_result(result: GatewayResult<T>) -> GatewayResult<Self> {
        match result {
            Ok(value) => Ok(Outcome::Success { value }),
            Err(GatewayError::Rejected { code, message, .. }) => {
                Ok(Outcome::Rejected { code, message })
            }
            Err(GatewayError::Network(cause)) | Err(GatewayError::MalformedResponse(cause)) => {
                Ok(Outcome::TransportError { cause })
            }
            Err(err) => Err(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Success { value } => Some(value),
            _ => None,
        }
    }
}

/// Null-on-failure view of a gateway result
pub trait LegacyResultExt<T> {
    /// `Ok(Some)` on success, `Ok(None)` for any upstream failure, `Err` only
    /// for local validation and configuration errors.
    fn or_absent(self) -> GatewayResult<Option<T>>;
}

impl<T> LegacyResultExt<T> for GatewayResult<T> {
    fn or_absent(self) -> GatewayResult<Option<T>> {
        Outcome::from_result(self).map(Outcome::into_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected() -> GatewayResult<String> {
        Err(GatewayError::Rejected {
            portal: "zarinpal".into(),
            code: Some(-9),
            message: Some("validation error".into()),
        })
    }

    #[test]
    fn test_success() {
        let outcome = Outcome::from_result(Ok("R456".to_string())).unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.into_option().as_deref(), Some("R456"));
    }

    #[test]
    fn test_rejection_is_tagged() {
        let outcome = Outcome::from_result(rejected()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Rejected {
                code: Some(-9),
                message: Some("validation error".into())
            }
        );
    }

    #[test]
    fn test_transport_faults_are_tagged() {
        let outcome =
            Outcome::<String>::from_result(Err(GatewayError::MalformedResponse("eof".into())))
                .unwrap();
        assert_eq!(outcome, Outcome::TransportError { cause: "eof".into() });
    }

    #[test]
    fn test_local_errors_pass_through() {
        let result = Outcome::<String>::from_result(Err(GatewayError::InvalidAmount {
            amount: 1,
            min: 1_000,
            max: 2_000,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_or_absent() {
        assert_eq!(rejected().or_absent().unwrap(), None);
        assert_eq!(
            Err::<String, _>(GatewayError::Network("refused".into()))
                .or_absent()
                .unwrap(),
            None
        );
        assert_eq!(
            Ok::<_, GatewayError>("R1".to_string()).or_absent().unwrap(),
            Some("R1".to_string())
        );
        assert!(Err::<String, _>(GatewayError::Configuration("x".into()))
            .or_absent()
            .is_err());
    }

    #[test]
    fn test_serialized_tag() {
        let json = serde_json::to_value(Outcome::<String>::TransportError {
            cause: "timeout".into(),
        })
        .unwrap();
        assert_eq!(json["status"], "transport_error");
    }
}
