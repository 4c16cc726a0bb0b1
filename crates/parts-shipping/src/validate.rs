//! Field-level shipping validation for order forms.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::method::ShippingMethod;
use crate::table::RateTable;

pub const MISSING_METHOD: &str = "Please select a shipping method.";
pub const INVALID_METHOD: &str = "Please select a valid shipping method.";
pub const MISSING_COUNTRY: &str = "Please select a destination country.";
pub const UNKNOWN_COUNTRY: &str = "Invalid or unsupported country.";
pub const UNSUPPORTED_COUNTRY: &str = "This country is not currently supported.";

/// Message for a country that does not offer the requested method.
pub fn method_unavailable_message(method: &str) -> String {
    format!("Shipping method \"{}\" is not available for this country.", method)
}

/// Per-field error messages. A field that passed has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingFieldErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_country: Option<String>,
}

impl ShippingFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.shipping_method.is_none() && self.destination_country.is_none()
    }
}

impl fmt::Display for ShippingFieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [&self.shipping_method, &self.destination_country]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        f.write_str(&messages.join(" "))
    }
}

/// Outcome of [`validate_shipping_fields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingValidationResult {
    pub is_valid: bool,
    pub errors: ShippingFieldErrors,
}

/// Validate a method/country pair against the built-in table.
///
/// Accepts any strings, including empty ones and values outside the method
/// enum, and always returns a result. See [`RateTable::validate_fields`].
pub fn validate_shipping_fields(
    shipping_method: &str,
    destination_country: &str,
) -> ShippingValidationResult {
    RateTable::builtin().validate_fields(shipping_method, destination_country)
}

impl RateTable {
    /// Validate a method/country pair against this table.
    ///
    /// Both fields are always checked and both errors returned together.
    /// The country's method check compares the raw method string even when
    /// that string already failed the method check, so an unknown method
    /// against a known, supported country reports on both fields.
    pub fn validate_fields(
        &self,
        shipping_method: &str,
        destination_country: &str,
    ) -> ShippingValidationResult {
        let mut errors = ShippingFieldErrors::default();

        if shipping_method.is_empty() {
            errors.shipping_method = Some(MISSING_METHOD.to_string());
        } else if ShippingMethod::parse(shipping_method).is_none() {
            errors.shipping_method = Some(INVALID_METHOD.to_string());
        }

        errors.destination_country = match self.country(destination_country) {
            _ if destination_country.is_empty() => Some(MISSING_COUNTRY.to_string()),
            None => Some(UNKNOWN_COUNTRY.to_string()),
            Some(country) if !country.is_supported => Some(UNSUPPORTED_COUNTRY.to_string()),
            Some(country) if !country.supports(shipping_method) => {
                Some(method_unavailable_message(shipping_method))
            }
            Some(_) => None,
        };

        ShippingValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_air_to_uae() {
        let result = validate_shipping_fields("air", "AE");
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_valid_land_to_saudi() {
        let result = validate_shipping_fields("land", "SA");
        assert!(result.is_valid);
        assert_eq!(result.errors, ShippingFieldErrors::default());
    }

    #[test]
    fn test_missing_method() {
        let result = validate_shipping_fields("", "AE");
        assert!(!result.is_valid);
        assert_eq!(result.errors.shipping_method.as_deref(), Some(MISSING_METHOD));
        assert_eq!(
            result.errors.destination_country.as_deref(),
            Some("Shipping method \"\" is not available for this country.")
        );
    }

    #[test]
    fn test_invalid_method_still_checks_country_methods() {
        let result = validate_shipping_fields("invalid", "AE");
        assert!(!result.is_valid);
        assert_eq!(result.errors.shipping_method.as_deref(), Some(INVALID_METHOD));
        assert_eq!(
            result.errors.destination_country.as_deref(),
            Some("Shipping method \"invalid\" is not available for this country.")
        );
    }

    #[test]
    fn test_unknown_country() {
        let result = validate_shipping_fields("air", "XX");
        assert!(!result.is_valid);
        assert_eq!(result.errors.shipping_method, None);
        assert_eq!(result.errors.destination_country.as_deref(), Some(UNKNOWN_COUNTRY));
    }

    #[test]
    fn test_method_not_offered() {
        let result = validate_shipping_fields("land", "LB");
        assert!(!result.is_valid);
        assert_eq!(
            result.errors.destination_country.as_deref(),
            Some("Shipping method \"land\" is not available for this country.")
        );
    }

    #[test]
    fn test_unsupported_country_wins_over_method_check() {
        // Syria has an air rate but is closed to shipments.
        let result = validate_shipping_fields("land", "SY");
        assert_eq!(result.errors.destination_country.as_deref(), Some(UNSUPPORTED_COUNTRY));
    }

    #[test]
    fn test_both_missing() {
        let result = validate_shipping_fields("", "");
        assert!(!result.is_valid);
        assert_eq!(result.errors.shipping_method.as_deref(), Some(MISSING_METHOD));
        assert_eq!(result.errors.destination_country.as_deref(), Some(MISSING_COUNTRY));
    }

    #[test]
    fn test_method_is_not_normalized() {
        let result = validate_shipping_fields("Air", "AE");
        assert_eq!(result.errors.shipping_method.as_deref(), Some(INVALID_METHOD));
        assert_eq!(
            result.errors.destination_country.as_deref(),
            Some("Shipping method \"Air\" is not available for this country.")
        );
    }

    #[test]
    fn test_serializes_without_passing_fields() {
        let json = serde_json::to_value(validate_shipping_fields("air", "AE")).unwrap();
        assert_eq!(json, serde_json::json!({ "isValid": true, "errors": {} }));

        let json = serde_json::to_value(validate_shipping_fields("air", "XX")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isValid": false,
                "errors": { "destinationCountry": "Invalid or unsupported country." }
            })
        );
    }

    #[test]
    fn test_errors_display() {
        let errors = validate_shipping_fields("", "").errors;
        assert_eq!(
            errors.to_string(),
            "Please select a shipping method. Please select a destination country."
        );
    }
}
