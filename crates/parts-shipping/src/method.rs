//! Shipping methods.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::country::Locale;
use crate::ShippingError;

/// How a shipment travels from the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// Air freight.
    Air,
    /// Land freight (trucked from the hub).
    Land,
}

impl ShippingMethod {
    /// Every method, in display order.
    pub const ALL: [ShippingMethod; 2] = [ShippingMethod::Air, ShippingMethod::Land];

    /// Wire value ("air" / "land").
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Air => "air",
            ShippingMethod::Land => "land",
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ShippingMethod::Air, Locale::En) => "Air freight",
            (ShippingMethod::Land, Locale::En) => "Land freight",
            (ShippingMethod::Air, Locale::Ar) => "شحن جوي",
            (ShippingMethod::Land, Locale::Ar) => "شحن بري",
        }
    }

    /// Parse a wire value. Exact match only: `"AIR"` or `" air"` are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

impl FromStr for ShippingMethod {
    type Err = ShippingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ShippingError::UnknownMethod(s.to_string()))
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
