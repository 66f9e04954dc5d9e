//! # acima-gateway
//!
//! Acima lease-financing gateway adapter.
//!
//! Translates the host platform's billing operations — authorize, capture,
//! purchase, void, credit, and a capture-status check — into calls against
//! the Acima HTTP API, and normalizes the responses into the uniform
//! [`BillingResponse`](acima_core::BillingResponse) shape.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use acima_gateway::{AcimaConfig, AcimaGateway};
//! use acima_core::{Amount, Currency, LeaseGateway, OperationContext, PaymentRecord};
//!
//! // Authentication happens at construction; a gateway that failed to
//! // authenticate is never handed out.
//! let gateway = AcimaGateway::connect(AcimaConfig::from_env()?).await?;
//!
//! let payment = PaymentRecord::new(Amount::from_minor_units(2999, Currency::USD));
//! let ctx = OperationContext::for_payment(payment);
//!
//! let response = gateway.capture(&source.checkout_token, &ctx).await?;
//! if response.success {
//!     // persist response.authorization and response.params
//! }
//! ```
//!
//! ## Failure semantics
//!
//! Capture and purchase declines come back as `Ok` with `success == false`;
//! void and credit rejections come back as
//! [`GatewayError::RemoteRejected`](acima_core::GatewayError) carrying the
//! remote status and body; the lease-status probe collapses every failure
//! to `false`.

pub mod config;
pub mod gateway;
mod token;

// Re-exports
pub use config::{AcimaConfig, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use gateway::AcimaGateway;
