//! Country picker: searchable destination list grouped by region.

use serde::{Deserialize, Serialize};

use crate::country::{Country, Locale, Region};
use crate::method::ShippingMethod;
use crate::table::RateTable;

/// Picker filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerQuery {
    /// Currently selected method, if any.
    pub method: Option<ShippingMethod>,
    /// Free-text search over code and names.
    pub search: Option<String>,
    pub locale: Locale,
}

impl PickerQuery {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    pub fn with_method(mut self, method: ShippingMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    fn matches(&self, country: &Country) -> bool {
        let needle = match self.search.as_deref().map(str::trim) {
            None | Some("") => return true,
            Some(s) => s.to_lowercase(),
        };
        country.code.to_lowercase().contains(&needle)
            || country.name.to_lowercase().contains(&needle)
            || country.localized_name.contains(&needle)
    }
}

/// One selectable country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryOption {
    pub code: String,
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionGroup {
    pub region: Region,
    pub label: String,
    pub options: Vec<CountryOption>,
}

impl RateTable {
    /// Build picker groups for the query. Regions without matches are omitted.
    pub fn picker(&self, query: &PickerQuery) -> Vec<RegionGroup> {
        Region::ALL
            .into_iter()
            .filter_map(|region| {
                let options: Vec<CountryOption> = self
                    .countries()
                    .iter()
                    .filter(|c| c.region == region && query.matches(c))
                    .map(|c| CountryOption {
                        code: c.code.clone(),
                        label: c.display_name(query.locale).to_string(),
                        disabled: !c.is_supported
                            || query.method.is_some_and(|m| !c.supports_method(m)),
                    })
                    .collect();

                (!options.is_empty()).then(|| RegionGroup {
                    region,
                    label: region.label(query.locale).to_string(),
                    options,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(groups: &'a [RegionGroup], code: &str) -> Option<&'a CountryOption> {
        groups
            .iter()
            .flat_map(|g| g.options.iter())
            .find(|o| o.code == code)
    }

    #[test]
    fn test_groups_cover_all_countries() {
        let table = RateTable::builtin();
        let groups = table.picker(&PickerQuery::new(Locale::En));
        let total: usize = groups.iter().map(|g| g.options.len()).sum();
        assert_eq!(total, table.len());
        assert_eq!(groups[0].region, Region::Gulf);
        assert_eq!(groups[0].label, "Gulf");
    }

    #[test]
    fn test_disables_by_method() {
        let groups = RateTable::builtin()
            .picker(&PickerQuery::new(Locale::En).with_method(ShippingMethod::Land));
        assert!(find(&groups, "LB").unwrap().disabled);
        assert!(!find(&groups, "SA").unwrap().disabled);

        let groups = RateTable::builtin()
            .picker(&PickerQuery::new(Locale::En).with_method(ShippingMethod::Air));
        assert!(!find(&groups, "LB").unwrap().disabled);
    }

    #[test]
    fn test_disables_unsupported() {
        let groups = RateTable::builtin().picker(&PickerQuery::new(Locale::En));
        assert!(find(&groups, "SY").unwrap().disabled);
        assert!(!find(&groups, "AE").unwrap().disabled);
    }

    #[test]
    fn test_search_by_name_code_and_arabic() {
        let table = RateTable::builtin();

        let groups = table.picker(&PickerQuery::new(Locale::En).with_search("leb"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].options[0].code, "LB");

        let groups = table.picker(&PickerQuery::new(Locale::Ar).with_search("eg"));
        assert!(find(&groups, "EG").is_some());
        assert_eq!(find(&groups, "EG").unwrap().label, "مصر");

        let groups = table.picker(&PickerQuery::new(Locale::Ar).with_search("قطر"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "الخليج العربي");

        let groups = table.picker(&PickerQuery::new(Locale::En).with_search("atlantis"));
        assert!(groups.is_empty());
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let table = RateTable::builtin();
        let all = table.picker(&PickerQuery::new(Locale::En));
        let blank = table.picker(&PickerQuery::new(Locale::En).with_search("  "));
        assert_eq!(all, blank);
    }
}
