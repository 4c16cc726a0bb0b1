//! Shipping selection attached to a submitted order.

use serde::{Deserialize, Serialize};

use crate::method::ShippingMethod;
use crate::money::Money;
use crate::quote::ShippingCostResult;
use crate::table::RateTable;
use crate::ShippingError;

/// A validated, priced shipping choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingSelection {
    pub method: ShippingMethod,
    pub country: String,
    /// Shipping cost charged on the order.
    pub rate: Money,
    pub estimated_days: u32,
    /// Delivery estimate (e.g., "3 days").
    pub delivery_estimate: Option<String>,
}

impl ShippingSelection {
    /// Create from an available quote.
    pub fn from_quote(quote: &ShippingCostResult) -> Self {
        Self {
            method: quote.method,
            country: quote.country.clone(),
            rate: quote.price(),
            estimated_days: quote.estimated_days,
            delivery_estimate: quote.delivery_estimate(),
        }
    }
}

impl RateTable {
    /// Validate raw form input and price it, as an order submission does.
    pub fn select_shipping(
        &self,
        shipping_method: &str,
        destination_country: &str,
    ) -> Result<ShippingSelection, ShippingError> {
        let validation = self.validate_fields(shipping_method, destination_country);
        if !validation.is_valid {
            tracing::debug!(
                method = shipping_method,
                country = destination_country,
                errors = %validation.errors,
                "shipping selection rejected"
            );
            return Err(ShippingError::Rejected(validation.errors));
        }

        let method = shipping_method.parse::<ShippingMethod>()?;
        let quote = self.calculate_cost(method, destination_country);
        if !quote.is_available {
            return Err(ShippingError::RateUnavailable {
                method: method.to_string(),
                country: destination_country.to_string(),
            });
        }

        Ok(ShippingSelection::from_quote(&quote))
    }
}
