//! Shipping eligibility and cost rules for the spare-parts storefront.
//!
//! Parts ship from the Sharjah hub to destinations across the Middle East
//! and Africa, by air or by land. This crate holds the destination table and
//! the two rules every order path runs:
//!
//! - [`validate_shipping_fields`]: field-level errors for a method/country pair
//! - [`calculate_shipping_cost`]: price and transit days, or "unavailable"
//!
//! Both accept anything callers throw at them and always return a value.
//! The table is immutable once built, so both are safe to call from any
//! number of threads.
//!
//! # Example
//!
//! ```
//! use parts_shipping::prelude::*;
//!
//! let result = validate_shipping_fields("land", "LB");
//! assert!(!result.is_valid);
//!
//! let quote = calculate_shipping_cost(ShippingMethod::Land, "SA");
//! assert!(quote.is_available);
//! assert_eq!(quote.price().display(), "AED 50.00");
//! ```

pub mod error;
pub mod money;

pub mod country;
pub mod method;
pub mod picker;
pub mod quote;
pub mod selection;
pub mod table;
pub mod validate;

mod data;

pub use error::ShippingError;
pub use money::{Currency, Money};
pub use quote::calculate_shipping_cost;
pub use validate::validate_shipping_fields;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::ShippingError;
    pub use crate::money::{Currency, Money};

    pub use crate::country::{Country, Locale, Region};
    pub use crate::method::ShippingMethod;
    pub use crate::picker::{CountryOption, PickerQuery, RegionGroup};
    pub use crate::quote::{calculate_shipping_cost, ShippingCostResult};
    pub use crate::selection::ShippingSelection;
    pub use crate::table::{CountryRecord, RateEntry, RateTable};
    pub use crate::validate::{
        validate_shipping_fields, ShippingFieldErrors, ShippingValidationResult,
    };
}
