//! Monthly wind conditions recorded per spot.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// How favourable a month's wind is at a spot.
///
/// Variants are ordered from least to most favourable.
///
/// # Examples
/// ```
/// use kitespot_core::WindQuality;
///
/// let quality: WindQuality = "Excellent".parse().unwrap();
/// assert!(quality > WindQuality::Good);
/// assert_eq!(quality.to_string(), "Excellent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindQuality {
    /// Rarely rideable.
    Poor,
    /// Rideable on some days.
    Moderate,
    /// Reliable wind.
    Good,
    /// Consistently strong, steady wind.
    Excellent,
}

impl WindQuality {
    /// Return the wire name of the quality.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Moderate => "Moderate",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for WindQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`WindQuality`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown wind quality '{0}'")]
pub struct ParseWindQualityError(pub String);

impl FromStr for WindQuality {
    type Err = ParseWindQualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Poor" => Ok(Self::Poor),
            "Moderate" => Ok(Self::Moderate),
            "Good" => Ok(Self::Good),
            "Excellent" => Ok(Self::Excellent),
            other => Err(ParseWindQualityError(other.to_owned())),
        }
    }
}

/// Average wind and temperature for one spot in one calendar month.
///
/// # Examples
/// ```
/// use kitespot_core::{WindCondition, WindQuality};
///
/// let july = WindCondition::new(1, 7, 24.0, WindQuality::Excellent).with_air_temp(27.0);
/// assert_eq!(july.month, 7);
/// assert_eq!(july.air_temp, Some(27.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct WindCondition {
    /// Spot the record belongs to.
    pub spot_id: u64,
    /// Calendar month, `1..=12`.
    pub month: u8,
    /// Average wind speed in knots.
    pub wind_speed: f64,
    /// Qualitative wind rating.
    pub wind_quality: WindQuality,
    /// Average air temperature in degrees Celsius.
    #[cfg_attr(feature = "serde", serde(default))]
    pub air_temp: Option<f64>,
    /// Average water temperature in degrees Celsius.
    #[cfg_attr(feature = "serde", serde(default))]
    pub water_temp: Option<f64>,
}

impl WindCondition {
    /// Construct a record without temperature data.
    #[must_use]
    pub const fn new(spot_id: u64, month: u8, wind_speed: f64, wind_quality: WindQuality) -> Self {
        Self {
            spot_id,
            month,
            wind_speed,
            wind_quality,
            air_temp: None,
            water_temp: None,
        }
    }

    /// Set the air temperature.
    #[must_use]
    pub const fn with_air_temp(mut self, air_temp: f64) -> Self {
        self.air_temp = Some(air_temp);
        self
    }

    /// Set the water temperature.
    #[must_use]
    pub const fn with_water_temp(mut self, water_temp: f64) -> Self {
        self.water_temp = Some(water_temp);
        self
    }
}
