//! Country filter applied to the rendered place list.

use std::collections::BTreeSet;

use crate::data::Place;

/// Select value that disables filtering.
pub const ALL_COUNTRIES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountryFilter {
    #[default]
    All,
    Country(String),
}

impl CountryFilter {
    /// Builds the filter from a `country-filter` select value.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_COUNTRIES || value.is_empty() {
            CountryFilter::All
        } else {
            CountryFilter::Country(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CountryFilter::All => ALL_COUNTRIES,
            CountryFilter::Country(country) => country,
        }
    }

    /// Substring match against a card's location text.
    pub fn matches(&self, location: &str) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::Country(country) => location.contains(country.as_str()),
        }
    }
}

/// Select options for the filter: `all`, then every distinct location of
/// the fetched places in sorted order.
pub fn country_options(places: &[Place]) -> Vec<String> {
    let locations: BTreeSet<&str> = places
        .iter()
        .map(|place| place.location.trim())
        .filter(|location| !location.is_empty())
        .collect();

    std::iter::once(ALL_COUNTRIES)
        .chain(locations)
        .map(str::to_string)
        .collect()
}
