// Data models for the REST Countries v3.1 payload
//
// These structs map to the shape returned by the /v3.1/all endpoint
// when queried with our field projection. We use Serde's derive macros
// to generate the deserialization code.
//
// Note: We only parse the fields we care about for the directory.
// Serde will ignore extra fields, making this robust to API changes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder shown wherever an optional field is absent or empty
pub const PLACEHOLDER: &str = "N/A";

/// A single country record as served by the API
///
/// Read-only after load: the master list is never mutated in place,
/// filtering always derives a fresh subset of indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    /// 3-letter country code - unique across the dataset, used as the
    /// sole lookup key for the detail view
    pub cca3: String,

    pub name: CountryName,

    /// Categorical region string ("Europe", "Asia", ...)
    #[serde(default)]
    pub region: String,

    /// Capitals - may be absent or empty for territories
    #[serde(default)]
    pub capital: Vec<String>,

    #[serde(default)]
    pub population: u64,

    /// Flag image URLs (rendered as links in the terminal)
    #[serde(default)]
    pub flags: Flags,

    /// Unicode flag emoji - the terminal-native stand-in for the image
    #[serde(default)]
    pub flag: String,

    #[serde(default)]
    pub maps: Maps,

    /// Currency code -> descriptor; zero or more entries.
    /// BTreeMap keeps the comma-joined summary deterministic.
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
}

/// Country name variants - we only use the common form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub png: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Maps {
    #[serde(rename = "googleMaps", default)]
    pub google_maps: String,
}

/// Currency descriptor - the API also serves a symbol, which we ignore
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
}

impl Country {
    /// Display name used as the sort and search key
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// First capital, or the placeholder when absent/empty
    pub fn first_capital(&self) -> &str {
        self.capital
            .first()
            .map(String::as_str)
            .filter(|c| !c.is_empty())
            .unwrap_or(PLACEHOLDER)
    }

    /// Display name of the first currency, or the placeholder
    pub fn first_currency_name(&self) -> &str {
        self.currencies
            .values()
            .next()
            .map(|c| c.name.as_str())
            .unwrap_or(PLACEHOLDER)
    }

    /// All currencies as "Name (CODE)", comma-joined, or the placeholder
    pub fn currency_summary(&self) -> String {
        if self.currencies.is_empty() {
            return PLACEHOLDER.to_string();
        }
        self.currencies
            .iter()
            .map(|(code, currency)| format!("{} ({})", currency.name, code))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let json = r#"{
            "name": {"common": "France", "official": "French Republic"},
            "cca3": "FRA",
            "region": "Europe",
            "capital": ["Paris"],
            "population": 67391582,
            "flags": {"svg": "https://flagcdn.com/fr.svg", "png": "https://flagcdn.com/w320/fr.png"},
            "flag": "🇫🇷",
            "maps": {"googleMaps": "https://goo.gl/maps/g7QxxSFsWyTPKuzd7"},
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}}
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.cca3, "FRA");
        assert_eq!(country.common_name(), "France");
        assert_eq!(country.first_capital(), "Paris");
        assert_eq!(country.first_currency_name(), "Euro");
        assert_eq!(country.currency_summary(), "Euro (EUR)");
        assert_eq!(country.maps.google_maps, "https://goo.gl/maps/g7QxxSFsWyTPKuzd7");
    }

    #[test]
    fn tolerates_missing_optionals() {
        // Territories frequently lack capital and currencies
        let json = r#"{
            "name": {"common": "Antarctica"},
            "cca3": "ATA",
            "region": "Antarctic",
            "population": 1000
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.first_capital(), PLACEHOLDER);
        assert_eq!(country.first_currency_name(), PLACEHOLDER);
        assert_eq!(country.currency_summary(), PLACEHOLDER);
        assert!(country.flags.svg.is_empty());
    }

    #[test]
    fn currency_summary_joins_in_code_order() {
        let json = r#"{
            "name": {"common": "Bhutan"},
            "cca3": "BTN",
            "region": "Asia",
            "population": 771608,
            "currencies": {
                "INR": {"name": "Indian rupee"},
                "BTN": {"name": "Bhutanese ngultrum"}
            }
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(
            country.currency_summary(),
            "Bhutanese ngultrum (BTN), Indian rupee (INR)"
        );
    }
}
