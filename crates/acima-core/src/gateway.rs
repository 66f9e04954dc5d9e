//! # Lease Gateway Trait
//!
//! The provider seam between the host commerce platform and a
//! lease-financing backend. The host holds a [`BoxedLeaseGateway`] and never
//! sees provider-specific request or response shapes.

use crate::billing::{BillingResponse, OperationContext, PaymentSource};
use crate::error::GatewayResult;
use async_trait::async_trait;
use std::sync::Arc;

/// The six operations a lease-financing gateway exposes.
///
/// Failure semantics differ deliberately per operation:
///
/// - `authorize` never fails and never touches the network.
/// - `capture`/`purchase` report remote declines as an `Ok` response with
///   `success == false`; reconciliation jobs probe these routinely and must
///   not crash on a decline.
/// - `void`/`credit` return `Err(RemoteRejected)` on a remote decline; money
///   is moving and a silent failure is dangerous.
/// - `payment_captured` is a best-effort query that collapses every failure
///   mode to `false`.
#[async_trait]
pub trait LeaseGateway: Send + Sync {
    /// Authorize a payment against an approved lease.
    ///
    /// Local-only: lease approval on the Acima side already implies
    /// authorization, so this synthesizes a successful response with a
    /// reference derived from the payment source.
    async fn authorize(
        &self,
        source: &PaymentSource,
        ctx: &OperationContext,
    ) -> GatewayResult<BillingResponse>;

    /// Capture a previously authorized amount for a checkout session.
    async fn capture(
        &self,
        checkout_token: &str,
        ctx: &OperationContext,
    ) -> GatewayResult<BillingResponse>;

    /// Authorize and capture in one step (capture-equivalent for an
    /// already-approved lease).
    async fn purchase(
        &self,
        checkout_token: &str,
        ctx: &OperationContext,
    ) -> GatewayResult<BillingResponse>;

    /// Void an authorization for a checkout session.
    async fn void(
        &self,
        checkout_token: &str,
        ctx: &OperationContext,
    ) -> GatewayResult<BillingResponse>;

    /// Refund a captured payment for a checkout session.
    async fn credit(
        &self,
        checkout_token: &str,
        ctx: &OperationContext,
    ) -> GatewayResult<BillingResponse>;

    /// Whether the remote side reports the lease's payment as captured.
    async fn payment_captured(&self, lease_id: &str) -> bool;

    /// Provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway handle (dynamic dispatch)
pub type BoxedLeaseGateway = Arc<dyn LeaseGateway>;
