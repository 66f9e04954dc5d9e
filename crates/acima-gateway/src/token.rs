//! # Token Provider
//!
//! Bearer-token acquisition for the Acima API. One POST with client
//! credentials at gateway construction; the token is cached for the
//! lifetime of the gateway instance.
//!
//! No retry, no backoff: an authentication failure means misconfiguration
//! (bad credentials or wrong environment), not a transient fault, so it
//! fails the construction immediately rather than surfacing on the first
//! payment operation.

use crate::config::AcimaConfig;
use acima_core::{GatewayError, GatewayResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: String,
    #[serde(default)]
    success: Option<bool>,
}

/// Fetch a bearer token with a single authentication call.
///
/// Returns the remote `token` field verbatim. An absent token field yields
/// an empty token that will fail later operations with an auth error from
/// the remote side; that degraded mode is accepted rather than guessed at.
pub(crate) async fn fetch_bearer_token(
    client: &Client,
    config: &AcimaConfig,
) -> GatewayResult<String> {
    let url = format!("{}/api/v2/oauth/tokens", config.api_base_url);

    let response = client
        .post(&url)
        .json(&TokenRequest {
            client_id: &config.client_id,
            client_secret: &config.client_secret,
        })
        .send()
        .await
        .map_err(|e| GatewayError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GatewayError::Network(e.to_string()))?;

    if !status.is_success() {
        error!("Acima auth rejected: status={}, body={}", status, body);
        return Err(GatewayError::Authentication {
            status: status.as_u16(),
            body,
        });
    }

    // Lenient parse: only the token field matters, and even that may be
    // absent on a 2xx.
    let token_response: TokenResponse = serde_json::from_str(&body).unwrap_or_default();

    if token_response.success == Some(false) {
        error!("Acima auth returned success=false: body={}", body);
        return Err(GatewayError::Authentication {
            status: status.as_u16(),
            body,
        });
    }

    debug!("Acima bearer token acquired");
    Ok(token_response.token)
}
