// Countries module - data model and loader for the country dataset
//
// The master list is fetched once per load cycle, sorted by common name,
// and treated as immutable until the next explicit reload.

pub mod client;
pub mod models;

pub use client::{Client, LoadError};
pub use models::Country;

/// Sort key for the master list: case-insensitive common name.
///
/// std has no locale collation; lowercasing approximates the original
/// locale-aware ordering and is deterministic across platforms.
pub fn sort_key(country: &Country) -> String {
    country.common_name().to_lowercase()
}

/// Sort a freshly loaded list ascending by common name.
///
/// Applied once per load cycle before the list is published; filtering
/// afterwards is stable and never re-sorts.
pub fn normalize(countries: &mut [Country]) {
    countries.sort_by_key(sort_key);
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::models::{Country, CountryName, Currency, Flags, Maps};
    use std::collections::BTreeMap;

    /// Construct a minimal country record for tests
    pub fn country(code: &str, name: &str, region: &str, population: u64) -> Country {
        Country {
            cca3: code.to_string(),
            name: CountryName {
                common: name.to_string(),
                official: name.to_string(),
            },
            region: region.to_string(),
            capital: vec![format!("{} City", name)],
            population,
            flags: Flags::default(),
            flag: String::new(),
            maps: Maps::default(),
            currencies: BTreeMap::new(),
        }
    }

    pub fn with_currency(mut c: Country, code: &str, name: &str) -> Country {
        c.currencies.insert(
            code.to_string(),
            Currency {
                name: name.to_string(),
            },
        );
        c
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::country;
    use super::*;

    #[test]
    fn normalize_sorts_case_insensitively() {
        let mut list = vec![
            country("ZWE", "Zimbabwe", "Africa", 14_862_924),
            country("ALA", "Åland Islands", "Europe", 29_458),
            country("CIV", "Ivory Coast", "Africa", 26_378_274),
            country("ISL", "Iceland", "Europe", 366_425),
        ];

        normalize(&mut list);

        let names: Vec<&str> = list.iter().map(|c| c.common_name()).collect();
        // Non-decreasing under the case-insensitive key
        for pair in list.windows(2) {
            assert!(sort_key(&pair[0]) <= sort_key(&pair[1]));
        }
        assert_eq!(names[0], "Iceland");
        assert_eq!(names[1], "Ivory Coast");
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut list = vec![
            country("FRA", "France", "Europe", 67_391_582),
            country("DEU", "Germany", "Europe", 83_240_525),
        ];
        normalize(&mut list);
        let once: Vec<String> = list.iter().map(|c| c.cca3.clone()).collect();
        normalize(&mut list);
        let twice: Vec<String> = list.iter().map(|c| c.cca3.clone()).collect();
        assert_eq!(once, twice);
    }
}
