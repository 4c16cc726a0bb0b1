//! Rate table: destination countries and per-(method, country) rates.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::country::{Country, Region};
use crate::data;
use crate::method::ShippingMethod;
use crate::money::Currency;
use crate::ShippingError;

/// Price and transit time for one method to one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateEntry {
    /// Whole units of the table currency. Always positive.
    pub cost: u32,
    /// Transit days. Always positive.
    pub days: u32,
}

/// One row of a rate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub code: String,
    pub name: String,
    pub localized_name: String,
    pub region: Region,
    #[serde(default = "default_true")]
    pub supported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air: Option<RateEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land: Option<RateEntry>,
}

fn default_true() -> bool {
    true
}

impl CountryRecord {
    fn rate_for(&self, method: ShippingMethod) -> Option<RateEntry> {
        match method {
            ShippingMethod::Air => self.air,
            ShippingMethod::Land => self.land,
        }
    }
}

/// On-disk rate file layout.
#[derive(Debug, Serialize, Deserialize)]
struct RateFile {
    #[serde(default)]
    currency: Currency,
    #[serde(default)]
    countries: Vec<CountryRecord>,
}

static BUILTIN: LazyLock<RateTable> =
    LazyLock::new(|| RateTable::build(Currency::AED, data::seed_records()));

/// Immutable lookup table of destinations and rates.
///
/// Rates are indexed by method, then by country code. Each country's
/// `supported_methods` is filled from the same rows, so a country lists a
/// method exactly when a rate exists for it.
#[derive(Debug, Clone)]
pub struct RateTable {
    currency: Currency,
    countries: Vec<Country>,
    index: HashMap<String, usize>,
    rates: HashMap<ShippingMethod, HashMap<String, RateEntry>>,
}

impl RateTable {
    /// The compiled-in table, built on first use and shared for the process lifetime.
    pub fn builtin() -> &'static RateTable {
        &BUILTIN
    }

    /// Build a table from rows, checking every table invariant first.
    pub fn from_records(
        currency: Currency,
        records: Vec<CountryRecord>,
    ) -> Result<Self, ShippingError> {
        check_records(&records)?;
        Ok(Self::build(currency, records))
    }

    /// Parse a TOML rate file.
    pub fn from_toml_str(content: &str) -> Result<Self, ShippingError> {
        let file: RateFile = toml::from_str(content)?;
        if file.currency != Currency::AED {
            tracing::warn!(
                currency = %file.currency,
                "rate file is not priced in AED; amounts are used as-is"
            );
        }
        let table = Self::from_records(file.currency, file.countries)?;
        tracing::debug!(countries = table.len(), "loaded rate file");
        Ok(table)
    }

    /// Serialize the table back into rate file form.
    pub fn to_toml_string(&self) -> Result<String, ShippingError> {
        let file = RateFile {
            currency: self.currency,
            countries: self.records(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    fn build(currency: Currency, records: Vec<CountryRecord>) -> Self {
        let mut countries = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        let mut rates: HashMap<ShippingMethod, HashMap<String, RateEntry>> = HashMap::new();

        for record in records {
            let mut supported_methods = Vec::new();
            for method in ShippingMethod::ALL {
                if let Some(rate) = record.rate_for(method) {
                    rates
                        .entry(method)
                        .or_default()
                        .insert(record.code.clone(), rate);
                    supported_methods.push(method);
                }
            }

            index.insert(record.code.clone(), countries.len());
            countries.push(Country {
                code: record.code,
                name: record.name,
                localized_name: record.localized_name,
                region: record.region,
                is_supported: record.supported,
                supported_methods,
            });
        }

        Self {
            currency,
            countries,
            index,
            rates,
        }
    }

    /// Currency every rate in this table is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Look up a country by its exact code.
    pub fn country(&self, code: &str) -> Option<&Country> {
        self.index.get(code).map(|&i| &self.countries[i])
    }

    /// All countries, in table order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn rate(&self, method: ShippingMethod, code: &str) -> Option<RateEntry> {
        self.rates.get(&method)?.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Rows equivalent to this table.
    pub fn records(&self) -> Vec<CountryRecord> {
        self.countries
            .iter()
            .map(|c| CountryRecord {
                code: c.code.clone(),
                name: c.name.clone(),
                localized_name: c.localized_name.clone(),
                region: c.region,
                supported: c.is_supported,
                air: self.rate(ShippingMethod::Air, &c.code),
                land: self.rate(ShippingMethod::Land, &c.code),
            })
            .collect()
    }
}

fn check_records(records: &[CountryRecord]) -> Result<(), ShippingError> {
    let mut seen = HashSet::new();

    for record in records {
        let code = &record.code;
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ShippingError::InvalidCountryCode(code.clone()));
        }
        if !seen.insert(code.as_str()) {
            return Err(ShippingError::DuplicateCountry(code.clone()));
        }
        if record.name.trim().is_empty() || record.localized_name.trim().is_empty() {
            return Err(ShippingError::MissingName(code.clone()));
        }

        let mut any_rate = false;
        for method in ShippingMethod::ALL {
            if let Some(rate) = record.rate_for(method) {
                any_rate = true;
                if rate.cost == 0 || rate.days == 0 {
                    return Err(ShippingError::NonPositiveRate {
                        method: method.to_string(),
                        country: code.clone(),
                        cost: rate.cost,
                        days: rate.days,
                    });
                }
            }
        }
        if !any_rate {
            return Err(ShippingError::NoRates(code.clone()));
        }
    }

    Ok(())
}
