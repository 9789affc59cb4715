//! In-memory catalog, optionally built from a JSON snapshot.

use std::collections::HashMap;

use super::SpotCatalog;
use crate::{Spot, WindCondition};

/// Catalog holding every spot and wind record in memory.
///
/// Spots keep their insertion order. A later wind record for the same
/// `(spot, month)` pair replaces an earlier one.
///
/// # Examples
/// ```
/// use kitespot_core::{InMemoryCatalog, Spot, SpotCatalog, WindCondition, WindQuality};
///
/// let catalog = InMemoryCatalog::new(
///     [Spot::new(1, "Tarifa", "Spain")],
///     [WindCondition::new(1, 7, 22.0, WindQuality::Good)],
/// );
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.wind_condition(1, 7).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryCatalog {
    spots: Vec<Spot>,
    conditions: HashMap<(u64, u8), WindCondition>,
}

impl InMemoryCatalog {
    /// Build a catalog from spots and wind records.
    #[must_use]
    pub fn new<S, W>(spots: S, conditions: W) -> Self
    where
        S: IntoIterator<Item = Spot>,
        W: IntoIterator<Item = WindCondition>,
    {
        let mut catalog = Self {
            spots: spots.into_iter().collect(),
            conditions: HashMap::new(),
        };
        for condition in conditions {
            catalog.insert_condition(condition);
        }
        catalog
    }

    /// Append a spot while returning `self` for chaining.
    #[must_use]
    pub fn with_spot(mut self, spot: Spot) -> Self {
        self.spots.push(spot);
        self
    }

    /// Add a wind record while returning `self` for chaining.
    #[must_use]
    pub fn with_condition(mut self, condition: WindCondition) -> Self {
        self.insert_condition(condition);
        self
    }

    /// Insert or replace the wind record for its spot and month.
    pub fn insert_condition(&mut self, condition: WindCondition) {
        self.conditions
            .insert((condition.spot_id, condition.month), condition);
    }

    /// Return the number of spots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Report whether the catalog holds no spots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Return the number of stored wind records.
    #[must_use]
    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }
}

impl SpotCatalog for InMemoryCatalog {
    fn spots(&self) -> Box<dyn Iterator<Item = Spot> + Send + '_> {
        Box::new(self.spots.iter().cloned())
    }

    fn wind_condition(&self, spot_id: u64, month: u8) -> Option<WindCondition> {
        self.conditions.get(&(spot_id, month)).cloned()
    }
}

/// Serialisable catalog contents.
///
/// ```json
/// { "spots": [ ... ], "windConditions": [ ... ] }
/// ```
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    /// Spots in catalog order.
    pub spots: Vec<Spot>,
    /// Monthly wind records for the spots.
    #[serde(default)]
    pub wind_conditions: Vec<WindCondition>,
}

#[cfg(feature = "serde")]
impl From<CatalogSnapshot> for InMemoryCatalog {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Self::new(snapshot.spots, snapshot.wind_conditions)
    }
}
