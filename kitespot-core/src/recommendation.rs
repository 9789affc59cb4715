//! Ranked recommendation output and the trait producing it.

use crate::{Spot, SpotCatalog, UserPreferences, WindCondition};

/// A spot augmented with its preference match.
///
/// On the wire the spot's fields are flattened alongside `matchScore`,
/// `reasons` and `windCondition`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SpotWithMatchScore {
    /// The matched spot.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub spot: Spot,
    /// Sum of the contributions of every rule that fired.
    pub match_score: f64,
    /// One human-readable reason per rule that fired, in evaluation order.
    pub reasons: Vec<String>,
    /// The monthly wind record the score was computed from.
    pub wind_condition: WindCondition,
}

/// Rank catalog spots against a visitor's preferences.
///
/// Implementations are infallible: sparse or unusual input yields a short or
/// empty list, never an error. They must be `Send + Sync` so one instance
/// can serve concurrent requests.
///
/// # Examples
///
/// ```rust
/// use kitespot_core::{
///     InMemoryCatalog, Recommender, SpotCatalog, SpotWithMatchScore, UserPreferences,
/// };
///
/// struct NothingMatches;
///
/// impl Recommender for NothingMatches {
///     fn recommend(
///         &self,
///         _preferences: &UserPreferences,
///         _catalog: &dyn SpotCatalog,
///     ) -> Vec<SpotWithMatchScore> {
///         Vec::new()
///     }
/// }
///
/// let ranked = NothingMatches.recommend(&UserPreferences::new(7, 15.0, 25.0), &InMemoryCatalog::default());
/// assert!(ranked.is_empty());
/// ```
pub trait Recommender: Send + Sync {
    /// Return the best-matching spots, best first.
    fn recommend(
        &self,
        preferences: &UserPreferences,
        catalog: &dyn SpotCatalog,
    ) -> Vec<SpotWithMatchScore>;
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::WindQuality;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn serialises_flattened_spot_fields() {
        let ranked = SpotWithMatchScore {
            spot: Spot::new(4, "Le Morne", "Mauritius").with_wave_size("Strong waves"),
            match_score: 0.45,
            reasons: vec!["Excellent wind conditions".to_owned()],
            wind_condition: WindCondition::new(4, 8, 22.0, WindQuality::Excellent),
        };

        let value = serde_json::to_value(&ranked).expect("serialise match");

        assert_eq!(value["id"], json!(4));
        assert_eq!(value["name"], json!("Le Morne"));
        assert_eq!(value["waveSize"], json!("Strong waves"));
        assert_eq!(value["matchScore"], json!(0.45));
        assert_eq!(value["reasons"], json!(["Excellent wind conditions"]));
        assert_eq!(value["windCondition"]["windQuality"], json!("Excellent"));
    }
}
