//! # Money Types
//!
//! Currency and amount types for the gateway adapter.
//!
//! The host platform stores amounts in the smallest currency unit (cents).
//! The Acima API expects amounts in major units (dollars), so every request
//! builder converts through [`Amount::as_major_units`]. Keeping that
//! conversion here, in one place, is a contract point: an off-by-factor
//! error in it is a direct financial bug.

use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    CAD,
    EUR,
    GBP,
    MXN,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::MXN => "MXN",
        }
    }

    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u8 {
        2
    }

    /// Convert a major-unit amount to the smallest currency unit
    pub fn to_smallest_unit(&self, amount: f64) -> i64 {
        let multiplier = 10_f64.powi(self.decimal_places() as i32);
        (amount * multiplier).round() as i64
    }

    /// Convert from smallest unit back to major units
    pub fn from_smallest_unit(&self, amount: i64) -> f64 {
        let divisor = 10_f64.powi(self.decimal_places() as i32);
        amount as f64 / divisor
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A monetary amount held in the smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Amount in smallest currency unit (cents for USD)
    pub minor_units: i64,
    /// Currency
    pub currency: Currency,
}

impl Amount {
    /// Create an amount from the smallest currency unit (cents)
    pub fn from_minor_units(minor_units: i64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Create an amount from major units (dollars)
    pub fn from_major_units(amount: f64, currency: Currency) -> Self {
        Self {
            minor_units: currency.to_smallest_unit(amount),
            currency,
        }
    }

    /// The amount in major units, as the Acima API expects it on the wire
    pub fn as_major_units(&self) -> f64 {
        self.currency.from_smallest_unit(self.minor_units)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.as_major_units(), self.currency)
    }
}
