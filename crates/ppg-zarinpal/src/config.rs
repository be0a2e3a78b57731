//! # Zarinpal Configuration
//!
//! The merchant id comes from the caller or the environment; everything
//! else has a production default and is only overridden for sandbox or
//! mock servers.

use ppg_core::{EndpointMap, GatewayError, GatewayResult};
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "https://api.zarinpal.com";
pub const DEFAULT_START_PAY_URL: &str = "https://www.zarinpal.com/pg/StartPay/";
pub const REQUEST_PATH: &str = "/pg/v4/payment/request.json";
pub const VERIFY_PATH: &str = "/pg/v4/payment/verify.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Zarinpal API configuration
#[derive(Debug, Clone)]
pub struct ZarinpalConfig {
    /// Merchant id issued by Zarinpal (not validated for format)
    pub merchant_id: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// Hosted payment page prefix; the authority is appended
    pub start_pay_url: String,

    /// Per-request timeout
    pub timeout_secs: u64,
}

impl ZarinpalConfig {
    /// Create config for a merchant against the production API
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            start_pay_url: DEFAULT_START_PAY_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `ZARINPAL_MERCHANT_ID`
    ///
    /// Optional:
    /// - `ZARINPAL_API_BASE_URL`
    /// - `ZARINPAL_TIMEOUT_SECS`
    pub fn from_env() -> GatewayResult<Self> {
        dotenvy::dotenv().ok();

        let merchant_id = env::var("ZARINPAL_MERCHANT_ID").map_err(|_| {
            GatewayError::Configuration("ZARINPAL_MERCHANT_ID not set".to_string())
        })?;

        let mut config = Self::new(merchant_id);

        if let Ok(url) = env::var("ZARINPAL_API_BASE_URL") {
            config = config.with_api_base_url(url);
        }

        if let Ok(secs) = env::var("ZARINPAL_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|_| {
                GatewayError::Configuration(format!(
                    "ZARINPAL_TIMEOUT_SECS must be a whole number of seconds, got {secs:?}"
                ))
            })?;
            config = config.with_timeout_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn validate(&self) -> GatewayResult<()> {
        for url in [&self.api_base_url, &self.start_pay_url] {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(GatewayError::Configuration(format!(
                    "{url} is not an http(s) URL"
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(GatewayError::Configuration(
                "timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    /// Endpoint URLs derived from the API base
    pub fn endpoints(&self) -> EndpointMap {
        let base = self.api_base_url.trim_end_matches('/');
        EndpointMap::new(
            format!("{base}{REQUEST_PATH}"),
            format!("{base}{VERIFY_PATH}"),
        )
    }
}
