//! Shipping cost lookup.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::method::ShippingMethod;
use crate::money::{Currency, Money};
use crate::table::RateTable;

/// Price and transit time for a method/country pair.
///
/// When `is_available` is false, `base_cost` and `estimated_days` are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingCostResult {
    pub method: ShippingMethod,
    pub country: String,
    pub base_cost: u32,
    pub currency: Currency,
    pub estimated_days: u32,
    pub is_available: bool,
}

impl ShippingCostResult {
    fn unavailable(method: ShippingMethod, country: &str, currency: Currency) -> Self {
        Self {
            method,
            country: country.to_string(),
            base_cost: 0,
            currency,
            estimated_days: 0,
            is_available: false,
        }
    }

    /// Base cost as money. Zero when unavailable.
    pub fn price(&self) -> Money {
        Money::from_major(i64::from(self.base_cost), self.currency)
    }

    /// Human readable transit estimate (e.g., "3 days").
    pub fn delivery_estimate(&self) -> Option<String> {
        match self.estimated_days {
            _ if !self.is_available => None,
            1 => Some("1 day".to_string()),
            days => Some(format!("{} days", days)),
        }
    }

    /// Expected arrival date for a parcel leaving the hub on `shipped_on`.
    pub fn estimated_arrival(&self, shipped_on: NaiveDate) -> Option<NaiveDate> {
        if !self.is_available {
            return None;
        }
        shipped_on.checked_add_days(Days::new(u64::from(self.estimated_days)))
    }
}

/// Look up the cost of shipping to `country` in the built-in table.
///
/// Never fails: unknown countries, or countries without a rate for the
/// method, give an unavailable result. See [`RateTable::calculate_cost`].
pub fn calculate_shipping_cost(method: ShippingMethod, country: &str) -> ShippingCostResult {
    RateTable::builtin().calculate_cost(method, country)
}

impl RateTable {
    /// Look up the cost of shipping to `country` in this table.
    pub fn calculate_cost(&self, method: ShippingMethod, country: &str) -> ShippingCostResult {
        match self.rate(method, country) {
            Some(rate) => ShippingCostResult {
                method,
                country: country.to_string(),
                base_cost: rate.cost,
                currency: self.currency(),
                estimated_days: rate.days,
                is_available: true,
            },
            None => ShippingCostResult::unavailable(method, country, self.currency()),
        }
    }
}
