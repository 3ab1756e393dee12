// Demo mode: a built-in fixture dataset to showcase the TUI
//
// Lets the directory run without network access: the loader task
// serves this list through the same channel a real fetch would use,
// so every interface path (filtering, detail, reload) is exercised.
//
// The records are real countries with approximate census figures,
// chosen to span every region and population bucket.

use crate::countries::models::{Country, CountryName, Currency, Flags, Maps};
use std::collections::BTreeMap;

struct Seed {
    code: &'static str,
    common: &'static str,
    official: &'static str,
    region: &'static str,
    capital: Option<&'static str>,
    population: u64,
    flag: &'static str,
    currency: Option<(&'static str, &'static str)>,
}

const SEEDS: [Seed; 14] = [
    Seed {
        code: "ATA",
        common: "Antarctica",
        official: "Antarctica",
        region: "Antarctic",
        capital: None,
        population: 1_000,
        flag: "🇦🇶",
        currency: None,
    },
    Seed {
        code: "AUS",
        common: "Australia",
        official: "Commonwealth of Australia",
        region: "Oceania",
        capital: Some("Canberra"),
        population: 25_687_041,
        flag: "🇦🇺",
        currency: Some(("AUD", "Australian dollar")),
    },
    Seed {
        code: "BRA",
        common: "Brazil",
        official: "Federative Republic of Brazil",
        region: "Americas",
        capital: Some("Brasília"),
        population: 212_559_409,
        flag: "🇧🇷",
        currency: Some(("BRL", "Brazilian real")),
    },
    Seed {
        code: "CHN",
        common: "China",
        official: "People's Republic of China",
        region: "Asia",
        capital: Some("Beijing"),
        population: 1_402_112_000,
        flag: "🇨🇳",
        currency: Some(("CNY", "Chinese yuan")),
    },
    Seed {
        code: "EGY",
        common: "Egypt",
        official: "Arab Republic of Egypt",
        region: "Africa",
        capital: Some("Cairo"),
        population: 102_334_403,
        flag: "🇪🇬",
        currency: Some(("EGP", "Egyptian pound")),
    },
    Seed {
        code: "FRA",
        common: "France",
        official: "French Republic",
        region: "Europe",
        capital: Some("Paris"),
        population: 67_391_582,
        flag: "🇫🇷",
        currency: Some(("EUR", "Euro")),
    },
    Seed {
        code: "ISL",
        common: "Iceland",
        official: "Iceland",
        region: "Europe",
        capital: Some("Reykjavik"),
        population: 366_425,
        flag: "🇮🇸",
        currency: Some(("ISK", "Icelandic króna")),
    },
    Seed {
        code: "IND",
        common: "India",
        official: "Republic of India",
        region: "Asia",
        capital: Some("New Delhi"),
        population: 1_380_004_385,
        flag: "🇮🇳",
        currency: Some(("INR", "Indian rupee")),
    },
    Seed {
        code: "JPN",
        common: "Japan",
        official: "Japan",
        region: "Asia",
        capital: Some("Tokyo"),
        population: 125_836_021,
        flag: "🇯🇵",
        currency: Some(("JPY", "Japanese yen")),
    },
    Seed {
        code: "MCO",
        common: "Monaco",
        official: "Principality of Monaco",
        region: "Europe",
        capital: Some("Monaco"),
        population: 39_244,
        flag: "🇲🇨",
        currency: Some(("EUR", "Euro")),
    },
    Seed {
        code: "NGA",
        common: "Nigeria",
        official: "Federal Republic of Nigeria",
        region: "Africa",
        capital: Some("Abuja"),
        population: 206_139_587,
        flag: "🇳🇬",
        currency: Some(("NGN", "Nigerian naira")),
    },
    Seed {
        code: "NZL",
        common: "New Zealand",
        official: "New Zealand",
        region: "Oceania",
        capital: Some("Wellington"),
        population: 5_084_300,
        flag: "🇳🇿",
        currency: Some(("NZD", "New Zealand dollar")),
    },
    Seed {
        code: "USA",
        common: "United States",
        official: "United States of America",
        region: "Americas",
        capital: Some("Washington, D.C."),
        population: 329_484_123,
        flag: "🇺🇸",
        currency: Some(("USD", "United States dollar")),
    },
    Seed {
        code: "VAT",
        common: "Vatican City",
        official: "Vatican City State",
        region: "Europe",
        capital: Some("Vatican City"),
        population: 451,
        flag: "🇻🇦",
        currency: Some(("EUR", "Euro")),
    },
];

/// Build the demo master list, sorted like a real load
pub fn countries() -> Vec<Country> {
    let mut list: Vec<Country> = SEEDS.iter().map(build).collect();
    crate::countries::normalize(&mut list);
    list
}

fn build(seed: &Seed) -> Country {
    let mut currencies = BTreeMap::new();
    if let Some((code, name)) = seed.currency {
        currencies.insert(
            code.to_string(),
            Currency {
                name: name.to_string(),
            },
        );
    }

    Country {
        cca3: seed.code.to_string(),
        name: CountryName {
            common: seed.common.to_string(),
            official: seed.official.to_string(),
        },
        region: seed.region.to_string(),
        capital: seed.capital.map(str::to_string).into_iter().collect(),
        population: seed.population,
        // No flag image URLs offline; the emoji carries the card
        flags: Flags::default(),
        flag: seed.flag.to_string(),
        maps: Maps {
            google_maps: format!("https://www.google.com/maps/place/{}", seed.common),
        },
        currencies,
    }
}
