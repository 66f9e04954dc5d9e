//! # acima-core
//!
//! Core types and traits for the Acima lease-financing gateway adapter.
//!
//! This crate provides:
//! - `LeaseGateway` trait, the seam between the host platform and a provider
//! - `BillingResponse`, the normalized result for every billing operation
//! - `PaymentSource`, `OperationContext`, and `Originator` for per-call input
//! - `Currency` and `Amount` with the minor/major-unit conversion contract
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use acima_core::{Amount, Currency, OperationContext, PaymentRecord};
//!
//! let payment = PaymentRecord::new(Amount::from_minor_units(2999, Currency::USD));
//! let ctx = OperationContext::for_payment(payment);
//!
//! let response = gateway.capture(&source.checkout_token, &ctx).await?;
//! if !response.success {
//!     tracing::warn!("capture declined: {}", response.message);
//! }
//! ```

pub mod billing;
pub mod error;
pub mod gateway;
pub mod money;

// Re-exports for convenience
pub use billing::{
    BillingResponse, OperationContext, Originator, PaymentRecord, PaymentSource, RefundRecord,
};
pub use error::{GatewayError, GatewayResult};
pub use gateway::{BoxedLeaseGateway, LeaseGateway};
pub use money::{Amount, Currency};
