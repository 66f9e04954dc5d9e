//! # Acima Gateway
//!
//! The adapter between the host platform's billing operations and the Acima
//! lease-financing HTTP API. Every operation follows the same three-phase
//! shape: build request, send, normalize.
//!
//! Construction performs the one-time authentication call; every later
//! operation reuses the cached bearer token and issues exactly one HTTP
//! request. The token is set once and only read afterwards, so a gateway
//! instance can be shared across tasks without locking.

use crate::config::AcimaConfig;
use crate::token::fetch_bearer_token;
use acima_core::{
    BillingResponse, GatewayError, GatewayResult, LeaseGateway, OperationContext, PaymentSource,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{debug, error, info, instrument, warn};

/// Acima lease-financing gateway
///
/// One instance per logical session/configuration. Authentication happens
/// in [`AcimaGateway::connect`]; a gateway that failed to authenticate is
/// never handed out.
#[derive(Debug)]
pub struct AcimaGateway {
    config: AcimaConfig,
    client: Client,
    bearer_token: String,
}

impl AcimaGateway {
    /// Authenticate against the Acima API and return a ready gateway.
    ///
    /// A single auth attempt, no retry: a rejection here means bad
    /// credentials or the wrong environment, and the error carries the
    /// remote status and body for diagnostics.
    pub async fn connect(config: AcimaConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;

        let bearer_token = fetch_bearer_token(&client, &config).await?;

        info!(test_mode = config.test_mode, "Acima gateway connected");

        Ok(Self {
            config,
            client,
            bearer_token,
        })
    }

    /// Connect using configuration from environment variables
    pub async fn from_env() -> GatewayResult<Self> {
        let config = AcimaConfig::from_env()?;
        Self::connect(config).await
    }

    /// The cached bearer token for this instance
    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    /// Shared PUT flow for capture and purchase: both transmit the
    /// originator's amount against a checkout-token endpoint, and both
    /// report a remote decline as a failed response rather than an error.
    async fn charge(
        &self,
        operation: &'static str,
        checkout_token: &str,
        ctx: &OperationContext,
    ) -> GatewayResult<BillingResponse> {
        let url = format!(
            "{}/api/v2/checkouts/{}/{}",
            self.config.api_base_url, checkout_token, operation
        );
        let body = ChargeRequest::from_context(ctx);

        debug!(
            "Sending Acima {}: amount={} {}",
            operation, body.amount, body.currency
        );

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.bearer_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let params = raw_response_params(&text);
        let envelope = RemoteEnvelope::from_params(&params);

        if status.is_success() && envelope.success {
            let authorization = envelope
                .transaction_id
                .unwrap_or_else(|| checkout_token.to_string());
            info!("Acima {} approved: authorization={}", operation, authorization);
            Ok(BillingResponse::approved(
                authorization,
                "Transaction approved",
                params,
            ))
        } else {
            warn!("Acima {} declined: status={}, body={}", operation, status, text);
            Ok(BillingResponse::declined(
                decline_message(operation, status),
                params,
            ))
        }
    }

    /// Shared POST flow for void and credit: money is leaving or re-entering
    /// a customer's account, so a remote rejection is an error the caller
    /// must handle, never a quiet `success == false`.
    async fn reversal(
        &self,
        operation: &'static str,
        endpoint: &'static str,
        checkout_token: &str,
        body: Option<ChargeRequest>,
    ) -> GatewayResult<BillingResponse> {
        let url = format!(
            "{}/api/v2/checkouts/{}/{}",
            self.config.api_base_url, checkout_token, endpoint
        );

        let mut request = self.client.post(&url).bearer_auth(&self.bearer_token);
        if let Some(ref body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let params = raw_response_params(&text);
        let envelope = RemoteEnvelope::from_params(&params);

        if status.is_success() && envelope.success {
            info!("Acima {} approved", operation);
            let authorization = envelope
                .transaction_id
                .unwrap_or_else(|| checkout_token.to_string());
            Ok(BillingResponse::approved(
                authorization,
                "Transaction approved",
                params,
            ))
        } else {
            error!("Acima {} rejected: status={}, body={}", operation, status, text);
            Err(GatewayError::RemoteRejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }

    /// Reverse a payment whose capture state is unknown: refunds it when the
    /// lease's payment is already captured, voids the authorization
    /// otherwise. Issues the lease-status pre-check plus one reversal call.
    #[instrument(skip_all, fields(checkout_token = %checkout_token, lease_id = %lease_id))]
    pub async fn cancel(
        &self,
        checkout_token: &str,
        lease_id: &str,
        ctx: &OperationContext,
    ) -> GatewayResult<BillingResponse> {
        if self.payment_captured(lease_id).await {
            self.credit(checkout_token, ctx).await
        } else {
            self.void(checkout_token, ctx).await
        }
    }
}

#[async_trait]
impl LeaseGateway for AcimaGateway {
    /// Local-only: the approved lease already implies authorization on the
    /// Acima side, so no request is issued and the call cannot fail.
    #[instrument(skip_all, fields(lease_id = %source.lease_id))]
    async fn authorize(
        &self,
        source: &PaymentSource,
        _ctx: &OperationContext,
    ) -> GatewayResult<BillingResponse> {
        let mut params = Map::new();
        params.insert("lease_id".to_string(), json!(source.lease_id));
        params.insert("lease_number".to_string(), json!(source.lease_number));
        params.insert("checkout_token".to_string(), json!(source.checkout_token));

        debug!("Acima authorize synthesized locally");

        Ok(BillingResponse::approved(
            source.authorization_reference(),
            "Transaction approved",
            params,
        ))
    }

    #[instrument(skip_all, fields(checkout_token = %checkout_token))]
    async fn capture(
        &self,
        checkout_token: &str,
        ctx: &OperationContext,
    ) -> GatewayResult<BillingResponse> {
        self.charge("capture", checkout_token, ctx).await
    }

    #[instrument(skip_all, fields(checkout_token = %checkout_token))]
    async fn purchase(
        &self,
        checkout_token: &str,
        ctx: &OperationContext,
    ) -> GatewayResult<BillingResponse> {
        self.charge("purchase", checkout_token, ctx).await
    }

    #[instrument(skip_all, fields(checkout_token = %checkout_token))]
    async fn void(
        &self,
        checkout_token: &str,
        _ctx: &OperationContext,
    ) -> GatewayResult<BillingResponse> {
        self.reversal("void", "void", checkout_token, None).await
    }

    #[instrument(skip_all, fields(checkout_token = %checkout_token))]
    async fn credit(
        &self,
        checkout_token: &str,
        ctx: &OperationContext,
    ) -> GatewayResult<BillingResponse> {
        let body = ChargeRequest::from_context(ctx);
        self.reversal("credit", "refund", checkout_token, Some(body))
            .await
    }

    /// Best-effort lease-status probe for reconciliation and UI; every
    /// failure mode (network, auth, remote 4xx/5xx) collapses to `false`.
    #[instrument(skip_all, fields(lease_id = %lease_id))]
    async fn payment_captured(&self, lease_id: &str) -> bool {
        let url = format!("{}/api/v2/leases/{}", self.config.api_base_url, lease_id);

        let response = match self
            .client
            .get(&url)
            .bearer_auth(&self.bearer_token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!("Acima lease status unreachable: {}", e);
                return false;
            }
        };

        if !response.status().is_success() {
            debug!("Acima lease status failed: status={}", response.status());
            return false;
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                debug!("Acima lease status body unreadable: {}", e);
                return false;
            }
        };
        let params = raw_response_params(&text);
        RemoteEnvelope::from_params(&params).success
    }

    fn provider_name(&self) -> &'static str {
        "acima"
    }
}

// =============================================================================
// Acima API Types
// =============================================================================

/// Body for capture/purchase/refund: amount in major units (dollars), as
/// the Acima API expects. The minor-to-major conversion happens in
/// `Amount::as_major_units`; the host supplies minor units.
#[derive(Debug, Serialize)]
struct ChargeRequest {
    amount: f64,
    currency: &'static str,
}

impl ChargeRequest {
    fn from_context(ctx: &OperationContext) -> Self {
        let amount = ctx.amount();
        Self {
            amount: amount.as_major_units(),
            currency: amount.currency.as_str(),
        }
    }
}

/// The fields the adapter actually reads out of an Acima response. Parsed
/// defensively: an absent success flag on a 2xx means success, an absent
/// transaction id means no remote reference.
#[derive(Debug)]
struct RemoteEnvelope {
    success: bool,
    transaction_id: Option<String>,
}

impl RemoteEnvelope {
    fn from_params(params: &Map<String, Value>) -> Self {
        let success = params
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(true);
        let transaction_id = params
            .get("transaction_id")
            .and_then(Value::as_str)
            .map(String::from);

        Self {
            success,
            transaction_id,
        }
    }
}

/// Flatten a remote body into the audit-trail params map. Non-object and
/// non-JSON bodies are kept verbatim under `raw_body` so the host can still
/// persist whatever the remote side sent.
fn raw_response_params(body: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => {
            let mut map = Map::new();
            if !body.is_empty() {
                map.insert("raw_body".to_string(), Value::String(body.to_string()));
            }
            map
        }
    }
}

fn decline_message(operation: &str, status: StatusCode) -> String {
    format!("Acima {} declined: HTTP {}", operation, status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use acima_core::{Amount, Currency, PaymentRecord};

    #[test]
    fn test_raw_response_params_object_body() {
        let params = raw_response_params(r#"{"success": true, "transaction_id": "txn_9"}"#);

        assert_eq!(params.get("success"), Some(&json!(true)));
        assert_eq!(params.get("transaction_id"), Some(&json!("txn_9")));
    }

    #[test]
    fn test_raw_response_params_non_json_body() {
        let params = raw_response_params("Unsupported Media Type");

        assert_eq!(
            params.get("raw_body"),
            Some(&json!("Unsupported Media Type"))
        );
    }

    #[test]
    fn test_raw_response_params_empty_body() {
        assert!(raw_response_params("").is_empty());
    }

    #[test]
    fn test_envelope_defaults() {
        let envelope = RemoteEnvelope::from_params(&Map::new());

        assert!(envelope.success);
        assert!(envelope.transaction_id.is_none());
    }

    #[test]
    fn test_envelope_explicit_failure() {
        let params = raw_response_params(r#"{"success": false}"#);
        let envelope = RemoteEnvelope::from_params(&params);

        assert!(!envelope.success);
    }

    #[test]
    fn test_charge_request_converts_to_major_units() {
        let payment = PaymentRecord::new(Amount::from_minor_units(1050, Currency::USD));
        let ctx = OperationContext::for_payment(payment);
        let body = ChargeRequest::from_context(&ctx);

        assert_eq!(body.amount, 10.5);
        assert_eq!(body.currency, "USD");
    }

    #[test]
    fn test_decline_message_carries_status() {
        let message = decline_message("capture", StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(message.contains("415"));
    }
}
