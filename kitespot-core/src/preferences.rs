//! Travel preferences supplied with a recommendation request.
//!
//! Enumerated preferences keep their string wire form. Values the engine
//! does not recognise are retained as `Unrecognised` rather than rejected, so
//! a permissive caller can still score a request; the matching rule simply
//! never fires. [`UserPreferences::validate`] is the strict boundary check.

use std::fmt;

use thiserror::Error;

use crate::Region;

const TEMPERATURE_COLD_BELOW: f64 = 20.0;
const TEMPERATURE_MODERATE_BELOW: f64 = 25.0;
const TEMPERATURE_WARM_BELOW: f64 = 30.0;

const BUDGET_BELOW: f64 = 120.0;
const MODERATE_UP_TO: f64 = 200.0;

/// Preferred air temperature band.
///
/// # Examples
/// ```
/// use kitespot_core::Temperature;
///
/// assert_eq!(Temperature::from_air_temp(24.9), Temperature::Moderate);
/// assert_eq!(Temperature::from_air_temp(25.0), Temperature::Warm);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Temperature {
    /// Below 20°C.
    Cold,
    /// From 20°C up to, but excluding, 25°C.
    Moderate,
    /// From 25°C up to, but excluding, 30°C.
    Warm,
    /// 30°C and above.
    Hot,
    /// A value outside the known bands, kept verbatim.
    Unrecognised(String),
}

impl Temperature {
    /// Classify an air temperature in degrees Celsius.
    ///
    /// Every input lands in exactly one band; `NaN` falls through to
    /// [`Temperature::Hot`].
    #[must_use]
    pub fn from_air_temp(celsius: f64) -> Self {
        if celsius < TEMPERATURE_COLD_BELOW {
            Self::Cold
        } else if celsius < TEMPERATURE_MODERATE_BELOW {
            Self::Moderate
        } else if celsius < TEMPERATURE_WARM_BELOW {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    /// Return the wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cold => "cold",
            Self::Moderate => "moderate",
            Self::Warm => "warm",
            Self::Hot => "hot",
            Self::Unrecognised(raw) => raw,
        }
    }
}

impl From<String> for Temperature {
    fn from(value: String) -> Self {
        match value.as_str() {
            "cold" => Self::Cold,
            "moderate" => Self::Moderate,
            "warm" => Self::Warm,
            "hot" => Self::Hot,
            _ => Self::Unrecognised(value),
        }
    }
}

impl From<Temperature> for String {
    fn from(value: Temperature) -> Self {
        match value {
            Temperature::Unrecognised(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily spending tier for school and accommodation combined.
///
/// # Examples
/// ```
/// use kitespot_core::BudgetTier;
///
/// assert_eq!(BudgetTier::from_daily_cost(119.0), Some(BudgetTier::Budget));
/// assert_eq!(BudgetTier::from_daily_cost(200.0), Some(BudgetTier::Moderate));
/// assert_eq!(BudgetTier::from_daily_cost(200.5), Some(BudgetTier::Luxury));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum BudgetTier {
    /// Under 120 per day.
    Budget,
    /// 120 to 200 per day inclusive.
    Moderate,
    /// Over 200 per day.
    Luxury,
    /// A value outside the known tiers, kept verbatim.
    Unrecognised(String),
}

impl BudgetTier {
    /// Classify a combined daily cost.
    ///
    /// Returns `None` only for `NaN`.
    #[must_use]
    pub fn from_daily_cost(cost: f64) -> Option<Self> {
        if cost < BUDGET_BELOW {
            Some(Self::Budget)
        } else if (BUDGET_BELOW..=MODERATE_UP_TO).contains(&cost) {
            Some(Self::Moderate)
        } else if cost > MODERATE_UP_TO {
            Some(Self::Luxury)
        } else {
            None
        }
    }

    /// Return the wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Budget => "budget",
            Self::Moderate => "moderate",
            Self::Luxury => "luxury",
            Self::Unrecognised(raw) => raw,
        }
    }
}

impl From<String> for BudgetTier {
    fn from(value: String) -> Self {
        match value.as_str() {
            "budget" => Self::Budget,
            "moderate" => Self::Moderate,
            "luxury" => Self::Luxury,
            _ => Self::Unrecognised(value),
        }
    }
}

impl From<BudgetTier> for String {
    fn from(value: BudgetTier) -> Self {
        match value {
            BudgetTier::Unrecognised(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred region, or no preference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum RegionPreference {
    /// The `"any"` sentinel: the region rule is skipped.
    Any,
    /// A region from the static table.
    Region(Region),
    /// A key missing from the table, kept verbatim.
    Unrecognised(String),
}

impl RegionPreference {
    /// Wire value meaning "no preference".
    pub const ANY: &'static str = "any";

    /// Return the wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => Self::ANY,
            Self::Region(region) => region.key(),
            Self::Unrecognised(raw) => raw,
        }
    }
}

impl From<String> for RegionPreference {
    fn from(value: String) -> Self {
        if value == Self::ANY {
            return Self::Any;
        }
        value
            .parse::<Region>()
            .map_or(Self::Unrecognised(value), Self::Region)
    }
}

impl From<RegionPreference> for String {
    fn from(value: RegionPreference) -> Self {
        match value {
            RegionPreference::Unrecognised(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl From<Region> for RegionPreference {
    fn from(region: Region) -> Self {
        Self::Region(region)
    }
}

/// Preferred skill level, matched against a spot's free-form descriptor.
///
/// # Examples
/// ```
/// use kitespot_core::DifficultyPreference;
///
/// let beginner = DifficultyPreference::new("Beginner");
/// assert!(beginner.matches("beginner to intermediate"));
/// assert!(!beginner.matches("Advanced"));
/// assert!(DifficultyPreference::all().matches("Advanced"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct DifficultyPreference(String);

impl DifficultyPreference {
    /// Wire value accepting every difficulty level.
    pub const ALL: &'static str = "all";

    /// Wrap a raw difficulty preference.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Preference accepting every level.
    #[must_use]
    pub fn all() -> Self {
        Self::new(Self::ALL)
    }

    /// Report whether this is the `"all"` sentinel.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    /// Report whether a spot's difficulty descriptor satisfies the preference.
    ///
    /// Non-sentinel preferences match as a case-insensitive substring.
    #[must_use]
    pub fn matches(&self, level: &str) -> bool {
        self.is_all() || level.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// Return the raw preference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Travel preferences for one recommendation request.
///
/// # Examples
/// ```
/// use kitespot_core::{BudgetTier, Temperature, UserPreferences};
///
/// let preferences = UserPreferences::new(7, 15.0, 25.0)
///     .with_temperature(Temperature::Warm)
///     .with_budget(BudgetTier::Moderate);
/// assert!(preferences.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct UserPreferences {
    /// Lower bound of the preferred wind speed range, in knots.
    pub wind_speed_min: f64,
    /// Upper bound of the preferred wind speed range, in knots.
    pub wind_speed_max: f64,
    /// Preferred air temperature band.
    pub temperature: Temperature,
    /// Preferred skill level.
    pub difficulty: DifficultyPreference,
    /// Preferred daily spending tier.
    pub budget: BudgetTier,
    /// Preferred region.
    pub preferred_region: RegionPreference,
    /// Reward spots with kite schools.
    pub has_kite_schools: bool,
    /// Reward wavy spots when set, flat-water spots otherwise.
    pub prefer_waves: bool,
    /// Reward spots with food options.
    pub food_options: bool,
    /// Reward spots with a culture description.
    pub culture: bool,
    /// Calendar month of travel, `1..=12`.
    pub month: u8,
}

impl UserPreferences {
    /// Construct preferences for a month and wind range.
    ///
    /// The remaining fields start neutral: moderate temperature and budget,
    /// every difficulty, any region, and no amenity bonuses.
    #[must_use]
    pub fn new(month: u8, wind_speed_min: f64, wind_speed_max: f64) -> Self {
        Self {
            wind_speed_min,
            wind_speed_max,
            temperature: Temperature::Moderate,
            difficulty: DifficultyPreference::all(),
            budget: BudgetTier::Moderate,
            preferred_region: RegionPreference::Any,
            has_kite_schools: false,
            prefer_waves: false,
            food_options: false,
            culture: false,
            month,
        }
    }

    /// Set the temperature band.
    #[must_use]
    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the difficulty preference.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: DifficultyPreference) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the budget tier.
    #[must_use]
    pub fn with_budget(mut self, budget: BudgetTier) -> Self {
        self.budget = budget;
        self
    }

    /// Set the preferred region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<RegionPreference>) -> Self {
        self.preferred_region = region.into();
        self
    }

    /// Toggle the kite school bonus.
    #[must_use]
    pub fn with_kite_schools(mut self, enabled: bool) -> Self {
        self.has_kite_schools = enabled;
        self
    }

    /// Toggle the wave preference.
    #[must_use]
    pub fn with_waves(mut self, enabled: bool) -> Self {
        self.prefer_waves = enabled;
        self
    }

    /// Toggle the food options bonus.
    #[must_use]
    pub fn with_food_options(mut self, enabled: bool) -> Self {
        self.food_options = enabled;
        self
    }

    /// Toggle the culture bonus.
    #[must_use]
    pub fn with_culture(mut self, enabled: bool) -> Self {
        self.culture = enabled;
        self
    }

    /// Check the preferences the way a request boundary should.
    ///
    /// Scoring never requires this; it tolerates every value.
    ///
    /// # Errors
    /// Returns the first [`PreferencesValidationError`] encountered.
    pub fn validate(&self) -> Result<(), PreferencesValidationError> {
        let (min, max) = (self.wind_speed_min, self.wind_speed_max);
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || max < 0.0 {
            return Err(PreferencesValidationError::InvalidWindSpeed { min, max });
        }
        if min > max {
            return Err(PreferencesValidationError::InvertedWindRange { min, max });
        }
        if !(1..=12).contains(&self.month) {
            return Err(PreferencesValidationError::MonthOutOfRange { month: self.month });
        }
        if let Temperature::Unrecognised(value) = &self.temperature {
            return Err(PreferencesValidationError::UnknownTemperature {
                value: value.clone(),
            });
        }
        if let BudgetTier::Unrecognised(value) = &self.budget {
            return Err(PreferencesValidationError::UnknownBudget {
                value: value.clone(),
            });
        }
        if let RegionPreference::Unrecognised(value) = &self.preferred_region {
            return Err(PreferencesValidationError::UnknownRegion {
                value: value.clone(),
            });
        }
        Ok(())
    }
}

/// Errors returned by [`UserPreferences::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreferencesValidationError {
    /// A wind speed bound was negative or not finite.
    #[error("wind speed bounds must be finite and non-negative, got {min}..{max}")]
    InvalidWindSpeed {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The lower wind speed bound exceeded the upper bound.
    #[error("minimum wind speed {min} exceeds maximum {max}")]
    InvertedWindRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The month was outside `1..=12`.
    #[error("month {month} is outside 1..=12")]
    MonthOutOfRange {
        /// Requested month.
        month: u8,
    },
    /// The temperature band was not recognised.
    #[error("unknown temperature preference '{value}'")]
    UnknownTemperature {
        /// Raw value from the request.
        value: String,
    },
    /// The budget tier was not recognised.
    #[error("unknown budget tier '{value}'")]
    UnknownBudget {
        /// Raw value from the request.
        value: String,
    },
    /// The region key was not recognised.
    #[error("unknown region '{value}'")]
    UnknownRegion {
        /// Raw value from the request.
        value: String,
    },
}
