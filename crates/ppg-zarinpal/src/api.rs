//! # Zarinpal API Types
//!
//! Form bodies sent to Zarinpal and defensive readers for its replies.
//!
//! A successful reply looks like `{"data": {"code": 100, ...}, "errors": []}`.
//! A failed one flips that around: `data` is an empty array and `errors`
//! carries `code` and `message`. Neither shape is guaranteed, so replies are
//! read as loose JSON and every field is optional until checked.

use ppg_core::{GatewayError, GatewayResult};
use serde::Serialize;
use serde_json::{Map, Value};

/// Gateway code meaning the operation succeeded
pub const SUCCESS_CODE: i64 = 100;

/// Appended to every callback URL before it is sent upstream
pub const CALLBACK_SUFFIX: &str = "/payment-redirect";

pub const PORTAL_NAME: &str = "zarinpal";

// =============================================================================
// Request bodies
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct CreateLinkForm<'a> {
    pub merchant_id: &'a str,
    pub amount: u64,
    pub description: &'a str,
    pub callback_url: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifyForm<'a> {
    pub merchant_id: &'a str,
    pub authority: &'a str,
    pub amount: u64,
}

/// Callback URL as Zarinpal receives it
pub fn callback_redirect_url(callback_url: &str) -> String {
    format!("{callback_url}{CALLBACK_SUFFIX}")
}

// =============================================================================
// Response readers
// =============================================================================

/// Parse a reply and return its `data` object if it reports success.
///
/// Anything else becomes `Rejected`, carrying whatever code and message
/// could be found in `data` or `errors`.
pub(crate) fn success_data(body: &str) -> GatewayResult<Map<String, Value>> {
    let reply: Value = serde_json::from_str(body).map_err(|e| {
        GatewayError::MalformedResponse(format!("Failed to parse Zarinpal response: {}", e))
    })?;

    let data = reply.get("data").and_then(Value::as_object);
    let errors = reply.get("errors").and_then(Value::as_object);

    let data_code = data.and_then(|d| d.get("code")).and_then(Value::as_i64);

    if let (Some(SUCCESS_CODE), Some(data)) = (data_code, data) {
        return Ok(data.clone());
    }

    let code = data_code.or_else(|| errors.and_then(|e| e.get("code")).and_then(Value::as_i64));
    let message = data
        .and_then(|d| d.get("message"))
        .or_else(|| errors.and_then(|e| e.get("message")))
        .and_then(Value::as_str)
        .map(String::from);

    Err(GatewayError::Rejected {
        portal: PORTAL_NAME.to_string(),
        code,
        message,
    })
}

/// Read the authority from a successful link-creation reply
pub(crate) fn read_authority(body: &str) -> GatewayResult<String> {
    let data = success_data(body)?;

    data.get("authority")
        .and_then(Value::as_str)
        .filter(|a| !a.is_empty())
        .map(String::from)
        .ok_or_else(|| {
            GatewayError::MalformedResponse("success reply without authority".to_string())
        })
}

/// Read the reference id from a successful verification reply.
///
/// Zarinpal sends `ref_id` as a number; older sandboxes send a string.
pub(crate) fn read_ref_id(body: &str) -> GatewayResult<String> {
    let data = success_data(body)?;

    match data.get("ref_id") {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(GatewayError::MalformedResponse(
            "success reply without ref_id".to_string(),
        )),
    }
}
