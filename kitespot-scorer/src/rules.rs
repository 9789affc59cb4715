//! Individual scoring rules.
//!
//! Each rule inspects one aspect of a spot and either contributes a weight
//! with a reason or abstains. Rules never fail: missing data means the rule
//! abstains.

use kitespot_core::{
    BudgetTier, RegionPreference, Spot, Temperature, UserPreferences, WindCondition, WindQuality,
};

use crate::{
    BUDGET_WEIGHT, CULTURE_WEIGHT, DIFFICULTY_WEIGHT, EXCELLENT_WIND_WEIGHT, FOOD_WEIGHT,
    GOOD_WIND_WEIGHT, KITE_SCHOOLS_WEIGHT, REGION_WEIGHT, TEMPERATURE_WEIGHT, WAVES_WEIGHT,
    WIND_IN_RANGE_WEIGHT, WIND_NEAR_RANGE_TOLERANCE, WIND_NEAR_RANGE_WEIGHT,
};

/// Weight and explanation from a rule that fired.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Contribution {
    pub(crate) weight: f64,
    pub(crate) reason: String,
}

impl Contribution {
    fn new(weight: f64, reason: impl Into<String>) -> Self {
        Self {
            weight,
            reason: reason.into(),
        }
    }
}

/// Run every rule in evaluation order.
pub(crate) fn evaluate_all(
    preferences: &UserPreferences,
    spot: &Spot,
    wind: &WindCondition,
) -> [Option<Contribution>; 10] {
    [
        wind_speed(preferences, wind),
        wind_quality(wind),
        temperature(preferences, wind),
        difficulty(preferences, spot),
        budget(preferences, spot),
        region(preferences, spot),
        kite_schools(preferences, spot),
        waves(preferences, spot),
        food(preferences, spot),
        culture(preferences, spot),
    ]
}

#[expect(
    clippy::float_arithmetic,
    reason = "distance to the nearer wind bound"
)]
pub(crate) fn wind_speed(
    preferences: &UserPreferences,
    wind: &WindCondition,
) -> Option<Contribution> {
    let speed = wind.wind_speed;
    let (min, max) = (preferences.wind_speed_min, preferences.wind_speed_max);
    if speed >= min && speed <= max {
        return Some(Contribution::new(
            WIND_IN_RANGE_WEIGHT,
            format!("Wind speed of {speed} knots is within your preferred range"),
        ));
    }
    let distance = (speed - min).abs().min((speed - max).abs());
    (distance <= WIND_NEAR_RANGE_TOLERANCE).then(|| {
        Contribution::new(
            WIND_NEAR_RANGE_WEIGHT,
            format!("Wind speed of {speed} knots is close to your preferred range"),
        )
    })
}

pub(crate) fn wind_quality(wind: &WindCondition) -> Option<Contribution> {
    match wind.wind_quality {
        WindQuality::Excellent => Some(Contribution::new(
            EXCELLENT_WIND_WEIGHT,
            "Excellent wind conditions",
        )),
        WindQuality::Good => Some(Contribution::new(GOOD_WIND_WEIGHT, "Good wind conditions")),
        WindQuality::Moderate | WindQuality::Poor => None,
    }
}

pub(crate) fn temperature(
    preferences: &UserPreferences,
    wind: &WindCondition,
) -> Option<Contribution> {
    let air_temp = wind.air_temp?;
    let band = Temperature::from_air_temp(air_temp);
    (band == preferences.temperature).then(|| {
        Contribution::new(
            TEMPERATURE_WEIGHT,
            format!("Air temperature of {air_temp}°C matches your {band} preference"),
        )
    })
}

pub(crate) fn difficulty(preferences: &UserPreferences, spot: &Spot) -> Option<Contribution> {
    let level = spot.difficulty_level.as_deref()?;
    preferences
        .difficulty
        .matches(level)
        .then(|| Contribution::new(DIFFICULTY_WEIGHT, "Suitable for your skill level"))
}

pub(crate) fn budget(preferences: &UserPreferences, spot: &Spot) -> Option<Contribution> {
    let cost = spot.total_cost_per_day()?;
    let tier = BudgetTier::from_daily_cost(cost)?;
    (tier == preferences.budget).then(|| {
        Contribution::new(
            BUDGET_WEIGHT,
            format!("Fits your {tier} budget at {cost} per day"),
        )
    })
}

pub(crate) fn region(preferences: &UserPreferences, spot: &Spot) -> Option<Contribution> {
    match &preferences.preferred_region {
        RegionPreference::Region(region) if region.contains_country(&spot.country) => Some(
            Contribution::new(REGION_WEIGHT, "Located in your preferred region"),
        ),
        RegionPreference::Any | RegionPreference::Region(_) | RegionPreference::Unrecognised(_) => {
            None
        }
    }
}

pub(crate) fn kite_schools(preferences: &UserPreferences, spot: &Spot) -> Option<Contribution> {
    if !preferences.has_kite_schools {
        return None;
    }
    let count = spot.school_count()?;
    Some(Contribution::new(
        KITE_SCHOOLS_WEIGHT,
        format!("{count} kite schools available"),
    ))
}

pub(crate) fn waves(preferences: &UserPreferences, spot: &Spot) -> Option<Contribution> {
    let descriptor = spot.wave_size.as_deref()?;
    let lowered = descriptor.to_lowercase();
    if preferences.prefer_waves {
        (lowered.contains("strong") || lowered.contains("medium")).then(|| {
            Contribution::new(WAVES_WEIGHT, format!("Good wave conditions ({descriptor})"))
        })
    } else {
        lowered
            .contains("flat")
            .then(|| Contribution::new(WAVES_WEIGHT, "Flat water conditions"))
    }
}

pub(crate) fn food(preferences: &UserPreferences, spot: &Spot) -> Option<Contribution> {
    let options = spot.food_options.as_ref()?;
    (preferences.food_options && !options.is_empty())
        .then(|| Contribution::new(FOOD_WEIGHT, "Good food options available"))
}

pub(crate) fn culture(preferences: &UserPreferences, spot: &Spot) -> Option<Contribution> {
    let description = spot.culture.as_deref()?;
    (preferences.culture && !description.is_empty())
        .then(|| Contribution::new(CULTURE_WEIGHT, "Rich cultural experiences"))
}
