//! Money type for shipping prices.
//!
//! Amounts are kept in minor units (fils for AED) so that totals never pick
//! up floating-point drift.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
///
/// The storefront prices everything in AED; USD exists so that rate files
/// can name it, but no conversion is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    AED,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "AED").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::AED => "AED",
            Currency::USD => "USD",
        }
    }

    /// Number of minor units per major unit.
    pub fn minor_per_major(&self) -> i64 {
        100
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in minor units.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole major units.
    ///
    /// ```
    /// use parts_shipping::money::{Currency, Money};
    /// let fee = Money::from_major(50, Currency::AED);
    /// assert_eq!(fee.amount_minor, 5000);
    /// ```
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount * currency.minor_per_major(), currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / self.currency.minor_per_major() as f64
    }

    /// Format as a display string (e.g., "AED 50.00").
    pub fn display(&self) -> String {
        format!("{} {:.2}", self.currency.code(), self.to_decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
