//! # Acima Configuration
//!
//! Configuration for the Acima API integration. Credentials are loaded from
//! environment variables once, into an explicit struct handed to the
//! gateway constructor; nothing reads the environment after that.

use acima_core::{GatewayError, GatewayResult};
use std::env;

/// Sandbox base URL, selected when `test_mode` is on
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.acimacredit.com";

/// Production base URL
pub const PRODUCTION_BASE_URL: &str = "https://api.acimacredit.com";

/// Acima API configuration
#[derive(Debug, Clone)]
pub struct AcimaConfig {
    /// OAuth client id
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// Sandbox vs production
    pub test_mode: bool,

    /// API base URL (overridable for tests)
    pub api_base_url: String,
}

impl AcimaConfig {
    /// Create config with explicit values; the base URL follows `test_mode`
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        test_mode: bool,
    ) -> Self {
        let api_base_url = if test_mode {
            SANDBOX_BASE_URL.to_string()
        } else {
            PRODUCTION_BASE_URL.to_string()
        };

        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            test_mode,
            api_base_url,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `ACIMA_CLIENT_ID`
    /// - `ACIMA_CLIENT_SECRET`
    ///
    /// Optional:
    /// - `ACIMA_TEST_MODE` ("true"/"1"; defaults to false)
    pub fn from_env() -> GatewayResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let client_id = env::var("ACIMA_CLIENT_ID")
            .map_err(|_| GatewayError::Configuration("ACIMA_CLIENT_ID not set".to_string()))?;

        let client_secret = env::var("ACIMA_CLIENT_SECRET")
            .map_err(|_| GatewayError::Configuration("ACIMA_CLIENT_SECRET not set".to_string()))?;

        let test_mode = env::var("ACIMA_TEST_MODE")
            .map(|v| matches!(v.as_str(), "true" | "1"))
            .unwrap_or(false);

        Ok(Self::new(client_id, client_secret, test_mode))
    }

    /// Check if pointed at the sandbox
    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    /// Builder: set custom API base URL (for testing against a mock server)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_follows_test_mode() {
        let sandbox = AcimaConfig::new("id", "secret", true);
        assert_eq!(sandbox.api_base_url, SANDBOX_BASE_URL);
        assert!(sandbox.is_test_mode());

        let live = AcimaConfig::new("id", "secret", false);
        assert_eq!(live.api_base_url, PRODUCTION_BASE_URL);
        assert!(!live.is_test_mode());
    }

    #[test]
    fn test_base_url_override() {
        let config = AcimaConfig::new("id", "secret", true).with_api_base_url("http://localhost:1");
        assert_eq!(config.api_base_url, "http://localhost:1");
    }

    #[test]
    fn test_from_env_missing_credentials() {
        env::remove_var("ACIMA_CLIENT_ID");

        let result = AcimaConfig::from_env();
        assert!(result.is_err());
    }
}
