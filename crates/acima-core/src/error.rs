//! # Gateway Error Types
//!
//! Typed error handling for the Acima gateway adapter.
//! All fallible gateway operations return `Result<T, GatewayError>`.

use thiserror::Error;

/// Core error type for gateway operations.
///
/// The variants split along the failure taxonomy the adapter exposes to the
/// host platform:
///
/// - `Authentication` is fatal at construction: the adapter never comes up.
/// - `RemoteRejected` is fatal per operation: void and credit move money, so
///   a remote rejection surfaces as an error the caller must handle rather
///   than as a declined result.
/// - Capture and purchase declines never appear here at all; they come back
///   as a `BillingResponse` with `success == false`.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration errors (missing credentials, invalid settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Authentication rejected by the Acima API at construction time
    #[error("Acima Server Response Error: authentication failed, HTTP {status}: {body}")]
    Authentication { status: u16, body: String },

    /// Void or credit rejected by the Acima API
    #[error("Acima Server Response Error: HTTP {status}: {body}")]
    RemoteRejected { status: u16, body: String },

    /// Network/HTTP transport error before a remote response was received
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GatewayError {
    /// Returns true if this error must stop the caller's flow (an un-voided
    /// authorization or an unissued refund has financial consequences).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GatewayError::Authentication { .. } | GatewayError::RemoteRejected { .. }
        )
    }

    /// The remote HTTP status carried by this error, when one was received.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            GatewayError::Authentication { status, .. }
            | GatewayError::RemoteRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
