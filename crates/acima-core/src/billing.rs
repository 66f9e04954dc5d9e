//! # Billing Types
//!
//! Payment source, operation context, and the normalized billing response
//! the gateway hands back to the host commerce platform.

use crate::money::{Amount, Currency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A lease on the Acima system, as referenced by the host platform.
///
/// Owned by the host platform's payment-source record; the gateway only
/// reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSource {
    /// Remote lease id
    pub lease_id: String,

    /// Human-readable lease reference
    pub lease_number: String,

    /// Per-checkout-session correlation id, used for capture/purchase/
    /// void/credit against the remote API
    pub checkout_token: String,
}

impl PaymentSource {
    pub fn new(
        lease_id: impl Into<String>,
        lease_number: impl Into<String>,
        checkout_token: impl Into<String>,
    ) -> Self {
        Self {
            lease_id: lease_id.into(),
            lease_number: lease_number.into(),
            checkout_token: checkout_token.into(),
        }
    }

    /// The locally generated authorization reference for this lease.
    ///
    /// Authorize never contacts the remote system (lease approval already
    /// implies authorization), so the reference is derived from the lease
    /// identifiers rather than returned by the API.
    pub fn authorization_reference(&self) -> String {
        format!("{}-{}", self.lease_number, self.lease_id)
    }
}

/// The host platform's payment record backing an operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Amount in the host's minor-unit representation
    pub amount: Amount,
}

impl PaymentRecord {
    pub fn new(amount: Amount) -> Self {
        Self { amount }
    }
}

/// The host platform's refund record backing a credit operation.
///
/// A refund does not always carry its own currency; when it doesn't, the
/// currency of the payment being refunded applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundRecord {
    /// Refund amount in minor units
    pub amount_minor_units: i64,

    /// Refund currency, when the refund record carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    /// The payment this refund applies to
    pub payment: PaymentRecord,
}

impl RefundRecord {
    pub fn new(amount_minor_units: i64, currency: Option<Currency>, payment: PaymentRecord) -> Self {
        Self {
            amount_minor_units,
            currency,
            payment,
        }
    }

    /// Refund currency, falling back to the refunded payment's currency
    pub fn resolved_currency(&self) -> Currency {
        self.currency.unwrap_or(self.payment.amount.currency)
    }
}

/// The record a monetary operation derives its amount and currency from:
/// a payment for capture/purchase/void, a refund for credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Originator {
    Payment(PaymentRecord),
    Refund(RefundRecord),
}

impl Originator {
    /// The amount to transmit, with the currency fully resolved
    pub fn amount(&self) -> Amount {
        match self {
            Originator::Payment(payment) => payment.amount,
            Originator::Refund(refund) => {
                Amount::from_minor_units(refund.amount_minor_units, refund.resolved_currency())
            }
        }
    }
}

/// Per-call metadata supplied by the host platform.
///
/// Borrowed for the duration of one operation call, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationContext {
    /// The payment or refund record behind this operation
    pub originator: Originator,
}

impl OperationContext {
    pub fn for_payment(payment: PaymentRecord) -> Self {
        Self {
            originator: Originator::Payment(payment),
        }
    }

    pub fn for_refund(refund: RefundRecord) -> Self {
        Self {
            originator: Originator::Refund(refund),
        }
    }

    /// Amount and resolved currency for the outgoing request body
    pub fn amount(&self) -> Amount {
        self.originator.amount()
    }
}

/// The gateway's normalized output for authorize/capture/purchase/void/credit.
///
/// Invariants: `success` is always present; `authorization` is set only on
/// success; on failure `message` carries the remote HTTP status so the host
/// can log or display it. `params` holds the full remote payload verbatim
/// for the host's audit trail, success or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingResponse {
    /// Whether the remote side accepted the operation
    pub success: bool,

    /// Authorization reference (remote transaction id or local reference);
    /// present only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    /// Human-readable outcome, including the remote HTTP status on failure
    pub message: String,

    /// Raw remote response payload, stringified for persistence
    #[serde(default)]
    pub params: Map<String, Value>,

    /// When the gateway produced this response
    pub created_at: DateTime<Utc>,
}

impl BillingResponse {
    /// Build a successful response
    pub fn approved(
        authorization: impl Into<String>,
        message: impl Into<String>,
        params: Map<String, Value>,
    ) -> Self {
        Self {
            success: true,
            authorization: Some(authorization.into()),
            message: message.into(),
            params,
            created_at: Utc::now(),
        }
    }

    /// Build a failed response; carries no authorization reference
    pub fn declined(message: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            success: false,
            authorization: None,
            message: message.into(),
            params,
            created_at: Utc::now(),
        }
    }
}
