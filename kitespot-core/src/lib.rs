//! Core domain types for the kitespot recommendation engine.
//!
//! The crate defines spots, monthly wind conditions, visitor preferences and
//! ranked results, together with the static region table and the two seams
//! the engine is built around:
//!
//! - [`SpotCatalog`] supplies spots in catalog order and their monthly wind
//!   records;
//! - [`Recommender`] ranks catalog spots against [`UserPreferences`].
//!
//! Records serialise with camelCase field names when the `serde` feature is
//! enabled. The `store-sqlite` feature adds [`SqliteSpotCatalog`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod preferences;
pub mod recommendation;
pub mod region;
pub mod spot;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod wind;

#[cfg(feature = "serde")]
pub use catalog::CatalogSnapshot;
pub use catalog::{InMemoryCatalog, SpotCatalog};
#[cfg(feature = "store-sqlite")]
pub use catalog::{SqliteSpotCatalog, SqliteSpotCatalogError};
pub use preferences::{
    BudgetTier, DifficultyPreference, PreferencesValidationError, RegionPreference, Temperature,
    UserPreferences,
};
pub use recommendation::{Recommender, SpotWithMatchScore};
pub use region::{ParseRegionError, Region};
pub use spot::Spot;
pub use wind::{ParseWindQualityError, WindCondition, WindQuality};
