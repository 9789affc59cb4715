//! Rule-based ranking of kitesurf spots against visitor preferences.
//!
//! [`RecommendationScorer`] implements
//! [`Recommender`](kitespot_core::Recommender). For every spot in a
//! [`SpotCatalog`](kitespot_core::SpotCatalog) it looks up the wind record for
//! the requested month, evaluates a fixed list of weighted rules and keeps the
//! spot when the summed score clears [`MATCH_THRESHOLD`]. Survivors are sorted
//! best first, ties keeping catalog order, and cut to [`MAX_RESULTS`].
//!
//! Spots without a wind record for the month are never returned. Missing
//! optional attributes only disable the rules that need them.
//!
//! # Examples
//!
//! ```
//! use kitespot_core::{
//!     InMemoryCatalog, Recommender, Spot, UserPreferences, WindCondition, WindQuality,
//! };
//! use kitespot_scorer::RecommendationScorer;
//!
//! let catalog = InMemoryCatalog::new(
//!     [Spot::new(1, "Tarifa", "Spain")],
//!     [WindCondition::new(1, 7, 22.0, WindQuality::Excellent)],
//! );
//! let preferences = UserPreferences::new(7, 15.0, 25.0);
//!
//! let ranked = RecommendationScorer::new().recommend(&preferences, &catalog);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].reasons.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod rules;

use kitespot_core::{
    Recommender, Spot, SpotCatalog, SpotWithMatchScore, UserPreferences, WindCondition,
};

/// Weight awarded when the wind speed lies inside the preferred range.
pub const WIND_IN_RANGE_WEIGHT: f64 = 0.25;
/// Weight awarded when the wind speed lies just outside the preferred range.
pub const WIND_NEAR_RANGE_WEIGHT: f64 = 0.15;
/// Largest distance in knots from the nearer bound that still earns
/// [`WIND_NEAR_RANGE_WEIGHT`].
pub const WIND_NEAR_RANGE_TOLERANCE: f64 = 5.0;
/// Weight for [`WindQuality::Excellent`](kitespot_core::WindQuality::Excellent).
pub const EXCELLENT_WIND_WEIGHT: f64 = 0.15;
/// Weight for [`WindQuality::Good`](kitespot_core::WindQuality::Good).
pub const GOOD_WIND_WEIGHT: f64 = 0.10;
/// Weight for a matching air temperature band.
pub const TEMPERATURE_WEIGHT: f64 = 0.10;
/// Weight for a matching difficulty level.
pub const DIFFICULTY_WEIGHT: f64 = 0.10;
/// Weight for a matching budget tier.
pub const BUDGET_WEIGHT: f64 = 0.10;
/// Weight for a spot inside the preferred region.
pub const REGION_WEIGHT: f64 = 0.10;
/// Weight for available kite schools.
pub const KITE_SCHOOLS_WEIGHT: f64 = 0.05;
/// Weight for matching wave or flat-water conditions.
pub const WAVES_WEIGHT: f64 = 0.05;
/// Weight for listed food options.
pub const FOOD_WEIGHT: f64 = 0.05;
/// Weight for a described cultural offer.
pub const CULTURE_WEIGHT: f64 = 0.05;
/// Scores must be strictly greater than this to be recommended.
pub const MATCH_THRESHOLD: f64 = 0.30;
/// Maximum number of recommendations returned.
pub const MAX_RESULTS: usize = 8;

/// Score and reasons produced by [`evaluate`] for one spot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    /// Sum of the weights of every rule that fired.
    pub score: f64,
    /// One reason per fired rule, in evaluation order.
    pub reasons: Vec<String>,
}

impl MatchOutcome {
    /// Report whether the score clears [`MATCH_THRESHOLD`].
    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.score > MATCH_THRESHOLD
    }
}

/// Evaluate every rule for `spot` under `wind` and sum the contributions.
///
/// Rules run in a fixed order and their weights are added in that order, so
/// the score is reproducible bit for bit.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "match scores are additive rule weights"
)]
pub fn evaluate(preferences: &UserPreferences, spot: &Spot, wind: &WindCondition) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    for contribution in rules::evaluate_all(preferences, spot, wind)
        .into_iter()
        .flatten()
    {
        outcome.score += contribution.weight;
        outcome.reasons.push(contribution.reason);
    }
    outcome
}

/// Recommender applying the weighted rule set.
///
/// The scorer holds no state; the same inputs always give the same output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendationScorer;

impl RecommendationScorer {
    /// Construct the scorer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn score_spot(
        preferences: &UserPreferences,
        catalog: &dyn SpotCatalog,
        spot: Spot,
    ) -> Option<SpotWithMatchScore> {
        let Some(wind) = catalog.wind_condition(spot.id, preferences.month) else {
            log::debug!(
                "skipping spot {} ({}): no wind record for month {}",
                spot.id,
                spot.name,
                preferences.month
            );
            return None;
        };
        let outcome = evaluate(preferences, &spot, &wind);
        log::trace!(
            "spot {} scored {} with {} reasons",
            spot.id,
            outcome.score,
            outcome.reasons.len()
        );
        if !outcome.is_match() {
            return None;
        }
        Some(SpotWithMatchScore {
            spot,
            match_score: outcome.score,
            reasons: outcome.reasons,
            wind_condition: wind,
        })
    }
}

impl Recommender for RecommendationScorer {
    fn recommend(
        &self,
        preferences: &UserPreferences,
        catalog: &dyn SpotCatalog,
    ) -> Vec<SpotWithMatchScore> {
        let mut matches: Vec<SpotWithMatchScore> = catalog
            .spots()
            .filter_map(|spot| Self::score_spot(preferences, catalog, spot))
            .collect();
        // `sort_by` is stable, so equal scores keep catalog order.
        matches.sort_by(|left, right| right.match_score.total_cmp(&left.match_score));
        matches.truncate(MAX_RESULTS);
        log::debug!(
            "recommending {} spots for month {}",
            matches.len(),
            preferences.month
        );
        matches
    }
}
