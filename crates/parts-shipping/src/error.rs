//! Shipping error types.

use thiserror::Error;

use crate::validate::ShippingFieldErrors;

/// Errors raised while building rate tables or selecting shipping for an order.
///
/// The eligibility check and the cost lookup never return these; they
/// report problems through their result values instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShippingError {
    /// Shipping method string is not one of the known methods.
    #[error("Unknown shipping method: {0}")]
    UnknownMethod(String),

    /// Country code is not two uppercase ASCII letters.
    #[error("Invalid country code: {0:?}")]
    InvalidCountryCode(String),

    /// Same country code appears twice in a rate table.
    #[error("Duplicate country code: {0}")]
    DuplicateCountry(String),

    /// Country row has an empty display name.
    #[error("Country {0} is missing a display name")]
    MissingName(String),

    /// Country row offers no shipping method at all.
    #[error("Country {0} has no shipping rates")]
    NoRates(String),

    /// Rate entry with zero cost or zero transit days.
    #[error("Rate for {method} to {country} must have positive cost and days (cost {cost}, days {days})")]
    NonPositiveRate {
        method: String,
        country: String,
        cost: u32,
        days: u32,
    },

    /// Rate file could not be parsed.
    #[error("Rate file parse error: {0}")]
    ParseError(String),

    /// Rate table could not be serialized.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Shipping fields failed validation.
    #[error("Shipping rejected: {0}")]
    Rejected(ShippingFieldErrors),

    /// Validation passed but the table has no rate for the pair.
    #[error("No rate for {method} to {country}")]
    RateUnavailable { method: String, country: String },
}

impl From<toml::de::Error> for ShippingError {
    fn from(e: toml::de::Error) -> Self {
        ShippingError::ParseError(e.to_string())
    }
}

impl From<toml::ser::Error> for ShippingError {
    fn from(e: toml::ser::Error) -> Self {
        ShippingError::SerializationError(e.to_string())
    }
}
