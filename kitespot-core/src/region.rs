//! Static grouping of countries into travel regions.
//!
//! The table is fixed at compile time. Changing a country list changes which
//! spots earn the region bonus, so scorers sharing a catalog must agree on it.
//!
//! # Examples
//! ```
//! use kitespot_core::Region;
//!
//! assert!(Region::Europe.contains_country("Spain"));
//! assert!(!Region::Europe.contains_country("Morocco"));
//! assert_eq!("north-america".parse::<Region>(), Ok(Region::NorthAmerica));
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

const CARIBBEAN: &[&str] = &[
    "Aruba",
    "Bonaire",
    "Curacao",
    "Dominican Republic",
    "Barbados",
    "Turks and Caicos",
    "Antigua and Barbuda",
    "Jamaica",
    "Puerto Rico",
    "Cuba",
    "Saint Lucia",
    "Grenada",
];

const NORTH_AMERICA: &[&str] = &["United States", "USA", "Canada", "Mexico"];

const SOUTH_AMERICA: &[&str] = &[
    "Brazil",
    "Colombia",
    "Venezuela",
    "Peru",
    "Chile",
    "Argentina",
    "Uruguay",
    "Ecuador",
];

const EUROPE: &[&str] = &[
    "Spain",
    "Portugal",
    "France",
    "Italy",
    "Greece",
    "Germany",
    "Netherlands",
    "Denmark",
    "United Kingdom",
    "Ireland",
    "Croatia",
    "Turkey",
    "Poland",
    "Sweden",
];

const AFRICA: &[&str] = &[
    "Morocco",
    "Egypt",
    "South Africa",
    "Kenya",
    "Tanzania",
    "Mauritius",
    "Cape Verde",
    "Madagascar",
    "Senegal",
    "Tunisia",
];

const ASIA: &[&str] = &[
    "Vietnam",
    "Philippines",
    "Sri Lanka",
    "Thailand",
    "Indonesia",
    "India",
    "Maldives",
    "Oman",
    "United Arab Emirates",
    "China",
];

const OCEANIA: &[&str] = &[
    "Australia",
    "New Zealand",
    "Fiji",
    "French Polynesia",
    "New Caledonia",
];

/// A geographic grouping of countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Caribbean islands.
    Caribbean,
    /// North and Central America.
    NorthAmerica,
    /// South America.
    SouthAmerica,
    /// Europe, including Turkey.
    Europe,
    /// Africa and its Indian Ocean islands.
    Africa,
    /// Asia and the Middle East.
    Asia,
    /// Australia and the Pacific islands.
    Oceania,
}

impl Region {
    /// Every region, in table order.
    pub const ALL: [Self; 7] = [
        Self::Caribbean,
        Self::NorthAmerica,
        Self::SouthAmerica,
        Self::Europe,
        Self::Africa,
        Self::Asia,
        Self::Oceania,
    ];

    /// Return the region key used on the wire.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Caribbean => "caribbean",
            Self::NorthAmerica => "north-america",
            Self::SouthAmerica => "south-america",
            Self::Europe => "europe",
            Self::Africa => "africa",
            Self::Asia => "asia",
            Self::Oceania => "oceania",
        }
    }

    /// Return the countries grouped under this region.
    #[must_use]
    pub const fn countries(self) -> &'static [&'static str] {
        match self {
            Self::Caribbean => CARIBBEAN,
            Self::NorthAmerica => NORTH_AMERICA,
            Self::SouthAmerica => SOUTH_AMERICA,
            Self::Europe => EUROPE,
            Self::Africa => AFRICA,
            Self::Asia => ASIA,
            Self::Oceania => OCEANIA,
        }
    }

    /// Report whether `country` is listed under this region.
    ///
    /// Matching is exact, including case.
    #[must_use]
    pub fn contains_country(self, country: &str) -> bool {
        self.countries().contains(&country)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown region key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region '{0}'")]
pub struct ParseRegionError(pub String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.key() == s)
            .ok_or_else(|| ParseRegionError(s.to_owned()))
    }
}
