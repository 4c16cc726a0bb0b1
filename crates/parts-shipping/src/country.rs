//! Destination countries and regions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::method::ShippingMethod;

/// Display language. The storefront is Arabic-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ar" => Ok(Locale::Ar),
            "en" => Ok(Locale::En),
            other => Err(format!("unknown locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic grouping used by the country picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Gulf,
    Levant,
    NorthAfrica,
    EastAfrica,
    WestAfrica,
    SouthernAfrica,
}

impl Region {
    /// Every region, in picker order.
    pub const ALL: [Region; 6] = [
        Region::Gulf,
        Region::Levant,
        Region::NorthAfrica,
        Region::EastAfrica,
        Region::WestAfrica,
        Region::SouthernAfrica,
    ];

    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Region::Gulf => "Gulf",
                Region::Levant => "Levant & Iraq",
                Region::NorthAfrica => "North Africa",
                Region::EastAfrica => "East Africa",
                Region::WestAfrica => "West Africa",
                Region::SouthernAfrica => "Central & Southern Africa",
            },
            Locale::Ar => match self {
                Region::Gulf => "الخليج العربي",
                Region::Levant => "بلاد الشام والعراق",
                Region::NorthAfrica => "شمال أفريقيا",
                Region::EastAfrica => "شرق أفريقيا",
                Region::WestAfrica => "غرب أفريقيا",
                Region::SouthernAfrica => "وسط وجنوب أفريقيا",
            },
        }
    }
}

/// A shipping destination.
///
/// Countries are reference data: built once with their [`RateTable`] and
/// never mutated. `supported_methods` is derived from the rates present in
/// the table, so it always agrees with the cost lookup.
///
/// [`RateTable`]: crate::table::RateTable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Two-letter country code (e.g., "AE").
    pub code: String,
    /// English name.
    pub name: String,
    /// Arabic name.
    pub localized_name: String,
    pub region: Region,
    /// Whether the country accepts shipments at all.
    pub is_supported: bool,
    /// Methods with a rate to this country. Never empty.
    pub supported_methods: Vec<ShippingMethod>,
}

impl Country {
    /// Check whether a raw method string is offered to this country.
    ///
    /// The comparison is against the wire values and is not normalized, so
    /// `"Air"` is never supported.
    pub fn supports(&self, method: &str) -> bool {
        self.supported_methods.iter().any(|m| m.as_str() == method)
    }

    /// Check whether a typed method is offered to this country.
    pub fn supports_method(&self, method: ShippingMethod) -> bool {
        self.supported_methods.contains(&method)
    }

    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ar => &self.localized_name,
            Locale::En => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lebanon() -> Country {
        Country {
            code: "LB".to_string(),
            name: "Lebanon".to_string(),
            localized_name: "لبنان".to_string(),
            region: Region::Levant,
            is_supported: true,
            supported_methods: vec![ShippingMethod::Air],
        }
    }

    #[test]
    fn test_supports_raw_method() {
        let lb = lebanon();
        assert!(lb.supports("air"));
        assert!(!lb.supports("land"));
        assert!(!lb.supports("Air"));
        assert!(!lb.supports(""));
    }

    #[test]
    fn test_display_name() {
        let lb = lebanon();
        assert_eq!(lb.display_name(Locale::En), "Lebanon");
        assert_eq!(lb.display_name(Locale::Ar), "لبنان");
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("AR".parse::<Locale>(), Ok(Locale::Ar));
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Ar);
    }

    #[test]
    fn test_region_labels() {
        assert_eq!(Region::Gulf.label(Locale::En), "Gulf");
        assert_eq!(Region::NorthAfrica.label(Locale::Ar), "شمال أفريقيا");
    }
}
