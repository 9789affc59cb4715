//! Facade crate for the kitespot recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the rule-based
//! scorer and the SQLite catalog behind feature flags.

#![forbid(unsafe_code)]

pub use kitespot_core::{
    BudgetTier, DifficultyPreference, InMemoryCatalog, PreferencesValidationError, Recommender,
    Region, RegionPreference, Spot, SpotCatalog, SpotWithMatchScore, Temperature,
    UserPreferences, WindCondition, WindQuality,
};

#[cfg(feature = "serde")]
pub use kitespot_core::CatalogSnapshot;

#[cfg(feature = "store-sqlite")]
pub use kitespot_core::{SqliteSpotCatalog, SqliteSpotCatalogError};

#[cfg(feature = "scorer")]
pub use kitespot_scorer::{MatchOutcome, RecommendationScorer, evaluate};
