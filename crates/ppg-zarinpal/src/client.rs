//! # Zarinpal Gateway
//!
//! Payment requests and verification against Zarinpal's v4 REST API.
//! One form-encoded POST per operation; no retries.

use crate::api::{self, CreateLinkForm, VerifyForm, PORTAL_NAME};
use crate::config::ZarinpalConfig;
use async_trait::async_trait;
use chrono::Utc;
use ppg_core::{
    Endpoint, EndpointMap, GatewayError, GatewayIdentity, GatewayResult, PaymentGateway,
    PaymentLink, PaymentLinkRequest, VerificationRequest,
};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

/// Zarinpal gateway client
///
/// Holds only immutable state, so one instance can be shared across tasks.
pub struct ZarinpalGateway {
    identity: GatewayIdentity,
    endpoints: EndpointMap,
    config: ZarinpalConfig,
    client: Client,
}

impl ZarinpalGateway {
    /// Create a client for a merchant against the production API
    pub fn new(merchant_id: impl Into<String>) -> GatewayResult<Self> {
        Self::with_config(ZarinpalConfig::new(merchant_id))
    }

    /// Create a client from explicit configuration
    pub fn with_config(config: ZarinpalConfig) -> GatewayResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                GatewayError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            identity: GatewayIdentity::new(PORTAL_NAME, config.merchant_id.clone()),
            endpoints: config.endpoints(),
            config,
            client,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        let config = ZarinpalConfig::from_env()?;
        Self::with_config(config)
    }

    /// Hosted payment page for an authority
    pub fn start_pay_url(&self, authority: &str) -> String {
        format!("{}{}", self.config.start_pay_url, authority)
    }

    /// POST a form to one endpoint and return the raw body.
    ///
    /// The HTTP status is not checked here: Zarinpal answers rejections with
    /// 4xx plus a JSON body, and the body decides the outcome.
    async fn post_form<F: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        form: &F,
    ) -> GatewayResult<String> {
        let url = self.endpoints.get(endpoint);

        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .form(form)
            .send()
            .await
            .map_err(|e| {
                error!("Zarinpal {} request failed: {}", endpoint, e);
                GatewayError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| {
                error!("Zarinpal {} reply could not be read: {}", endpoint, e);
                GatewayError::Network(e.to_string())
            })?;

        debug!("Zarinpal {} replied: status={}", endpoint, status);

        Ok(body)
    }
}

#[async_trait]
impl PaymentGateway for ZarinpalGateway {
    fn identity(&self) -> &GatewayIdentity {
        &self.identity
    }

    fn endpoints(&self) -> &EndpointMap {
        &self.endpoints
    }

    #[instrument(skip(self, request), fields(portal = PORTAL_NAME, amount = request.amount))]
    async fn create_payment_link(&self, request: &PaymentLinkRequest) -> GatewayResult<PaymentLink> {
        let amount = request.options.normalize(request.amount)?;

        debug!(
            "Creating Zarinpal payment: amount={} rial, converted={}",
            amount, request.options.convert_to_smallest_unit
        );

        let form = CreateLinkForm {
            merchant_id: self.identity.merchant_id(),
            amount,
            description: &request.description,
            callback_url: api::callback_redirect_url(&request.callback_url),
        };

        let body = self.post_form(Endpoint::CreateLink, &form).await?;

        let authority = api::read_authority(&body).map_err(|e| {
            warn!("Zarinpal payment request not accepted: {}", e);
            e
        })?;

        info!("Created Zarinpal payment: authority={}", authority);

        Ok(PaymentLink {
            redirect_url: self.start_pay_url(&authority),
            authorization_token: authority,
            created_at: Utc::now(),
        })
    }

    #[instrument(skip(self, request), fields(portal = PORTAL_NAME, amount = request.amount))]
    async fn verify_payment(&self, request: &VerificationRequest) -> GatewayResult<String> {
        let amount = request.amount_options().convert(request.amount)?;

        let form = VerifyForm {
            merchant_id: self.identity.merchant_id(),
            authority: &request.authorization_token,
            amount,
        };

        let body = self.post_form(Endpoint::VerifyPayment, &form).await?;

        let ref_id = api::read_ref_id(&body).map_err(|e| {
            warn!(
                "Zarinpal verification failed: authority={}, {}",
                request.authorization_token, e
            );
            e
        })?;

        info!(
            "Verified Zarinpal payment: authority={}, ref_id={}",
            request.authorization_token, ref_id
        );

        Ok(ref_id)
    }
}
