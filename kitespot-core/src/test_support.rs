//! Test-only fixtures shared by unit, behaviour, and property tests.

use crate::{
    BudgetTier, DifficultyPreference, InMemoryCatalog, Recommender, Spot, SpotCatalog,
    SpotWithMatchScore, Temperature, UserPreferences, WindCondition, WindQuality,
};

/// Identifier of [`reference_spot`].
pub const REFERENCE_SPOT_ID: u64 = 1;

/// A well-equipped Caribbean spot used across scoring scenarios.
///
/// All levels, 70 + 90 per day, two kite schools, no wave descriptor.
#[must_use]
pub fn reference_spot() -> Spot {
    Spot::new(REFERENCE_SPOT_ID, "Cabarete", "Dominican Republic")
        .with_difficulty_level("All levels")
        .with_costs(70.0, 90.0)
        .with_kite_schools(["Laurel Eastman Kiteboarding", "Kite Club Cabarete"])
}

/// July conditions for [`reference_spot`]: 24 knots, excellent, 27°C.
#[must_use]
pub const fn reference_july() -> WindCondition {
    WindCondition::new(REFERENCE_SPOT_ID, 7, 24.0, WindQuality::Excellent).with_air_temp(27.0)
}

/// July preferences matching [`reference_spot`] on six rules.
#[must_use]
pub fn reference_preferences() -> UserPreferences {
    UserPreferences::new(7, 15.0, 25.0)
        .with_temperature(Temperature::Warm)
        .with_difficulty(DifficultyPreference::all())
        .with_budget(BudgetTier::Moderate)
        .with_kite_schools(true)
}

/// Catalog holding [`reference_spot`] and [`reference_july`].
#[must_use]
pub fn reference_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new([reference_spot()], [reference_july()])
}

/// `Recommender` returning a fixed list regardless of input.
#[derive(Debug, Clone, Default)]
pub struct FixedRecommender {
    results: Vec<SpotWithMatchScore>,
}

impl FixedRecommender {
    /// Return `results` from every call.
    #[must_use]
    pub const fn new(results: Vec<SpotWithMatchScore>) -> Self {
        Self { results }
    }
}

impl Recommender for FixedRecommender {
    fn recommend(
        &self,
        _preferences: &UserPreferences,
        _catalog: &dyn SpotCatalog,
    ) -> Vec<SpotWithMatchScore> {
        self.results.clone()
    }
}
