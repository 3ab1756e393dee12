// Filter engine - computes the visible subset of the master list
//
// A query is a conjunction of three independent predicates: substring
// text match, exact region match, and population bucket match. The
// result is a list of indices into the master list, in master order;
// the master list itself is never touched.

use crate::countries::Country;

/// Population range categories, mutually exclusive.
///
/// Boundary policy: exactly 1,000,000 and exactly 50,000,000 are
/// `Medium`; exactly 250,000,000 is `Large`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationBucket {
    /// Below one million
    Small,
    /// One million to fifty million inclusive
    Medium,
    /// Above fifty million, up to 250 million inclusive
    Large,
    /// Above 250 million
    XLarge,
}

impl PopulationBucket {
    /// All buckets in selector order
    pub const ALL: [PopulationBucket; 4] = [
        PopulationBucket::Small,
        PopulationBucket::Medium,
        PopulationBucket::Large,
        PopulationBucket::XLarge,
    ];

    /// Whether a population count falls inside this bucket
    pub fn contains(self, population: u64) -> bool {
        match self {
            PopulationBucket::Small => population < 1_000_000,
            PopulationBucket::Medium => (1_000_000..=50_000_000).contains(&population),
            PopulationBucket::Large => (50_000_001..=250_000_000).contains(&population),
            PopulationBucket::XLarge => population > 250_000_000,
        }
    }

    /// Selector label
    pub fn label(self) -> &'static str {
        match self {
            PopulationBucket::Small => "< 1M",
            PopulationBucket::Medium => "1M – 50M",
            PopulationBucket::Large => "50M – 250M",
            PopulationBucket::XLarge => "> 250M",
        }
    }
}

/// The current filter state. `None` selections mean "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    /// Free-text search over the common name, case-insensitive substring
    pub text: String,
    /// Exact region match when set
    pub region: Option<String>,
    /// Population bucket match when set
    pub bucket: Option<PopulationBucket>,
}

impl FilterQuery {
    /// Whether a single record satisfies every predicate
    pub fn matches(&self, country: &Country) -> bool {
        let matches_text = self.text.is_empty()
            || country
                .common_name()
                .to_lowercase()
                .contains(&self.text.to_lowercase());

        let matches_region = match &self.region {
            Some(region) => country.region == *region,
            None => true,
        };

        let matches_bucket = match self.bucket {
            Some(bucket) => bucket.contains(country.population),
            None => true,
        };

        matches_text && matches_region && matches_bucket
    }
}

/// Compute the filtered subset as indices into `master`.
///
/// Stable: indices come out in master order. An empty result is a valid
/// output (the grid renders its "no matches" placeholder), not an error.
pub fn apply(master: &[Country], query: &FilterQuery) -> Vec<usize> {
    master
        .iter()
        .enumerate()
        .filter(|(_, country)| query.matches(country))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::test_fixtures::{country, with_currency};

    fn fixture() -> Vec<Country> {
        vec![
            with_currency(
                country("FRA", "France", "Europe", 67_000_000),
                "EUR",
                "Euro",
            ),
            with_currency(
                country("USA", "United States", "Americas", 331_000_000),
                "USD",
                "US Dollar",
            ),
        ]
    }

    fn query(text: &str, region: Option<&str>, bucket: Option<PopulationBucket>) -> FilterQuery {
        FilterQuery {
            text: text.to_string(),
            region: region.map(str::to_string),
            bucket,
        }
    }

    #[test]
    fn empty_query_matches_all() {
        let master = fixture();
        assert_eq!(apply(&master, &FilterQuery::default()), vec![0, 1]);
    }

    #[test]
    fn region_narrows_to_europe() {
        let master = fixture();
        let result = apply(&master, &query("", Some("Europe"), None));
        assert_eq!(result, vec![0]);
        assert_eq!(master[result[0]].cca3, "FRA");
    }

    #[test]
    fn text_and_bucket_conjoin() {
        let master = fixture();
        // 331,000,000 > 250,000,000 puts the United States in XLarge
        let result = apply(&master, &query("united", None, Some(PopulationBucket::XLarge)));
        assert_eq!(result.len(), 1);
        assert_eq!(master[result[0]].cca3, "USA");
    }

    #[test]
    fn no_match_yields_empty_subset() {
        let master = fixture();
        assert!(apply(&master, &query("z", None, None)).is_empty());
    }

    #[test]
    fn text_match_is_case_insensitive_substring() {
        let master = fixture();
        assert_eq!(apply(&master, &query("FRA", None, None)), vec![0]);
        assert_eq!(apply(&master, &query("ance", None, None)), vec![0]);
    }

    #[test]
    fn result_preserves_master_order() {
        let mut master = fixture();
        master.push(country("AUT", "Austria", "Europe", 8_917_205));
        // Austria sits after the others in this unsorted fixture; the
        // filter must not re-sort
        let result = apply(&master, &query("a", None, None));
        assert_eq!(result, vec![0, 1, 2]);
    }

    #[test]
    fn bucket_boundaries_are_exact() {
        use PopulationBucket::*;

        assert!(Small.contains(999_999));
        assert!(!Small.contains(1_000_000));

        assert!(Medium.contains(1_000_000));
        assert!(Medium.contains(50_000_000));
        assert!(!Medium.contains(50_000_001));

        assert!(Large.contains(50_000_001));
        assert!(Large.contains(250_000_000));
        assert!(!Large.contains(250_000_001));

        assert!(XLarge.contains(250_000_001));
        assert!(!XLarge.contains(250_000_000));
    }

    #[test]
    fn every_population_lands_in_exactly_one_bucket() {
        for population in [0, 999_999, 1_000_000, 50_000_000, 50_000_001, 250_000_000, 250_000_001, u64::MAX] {
            let hits = PopulationBucket::ALL
                .iter()
                .filter(|b| b.contains(population))
                .count();
            assert_eq!(hits, 1, "population {population} matched {hits} buckets");
        }
    }
}
