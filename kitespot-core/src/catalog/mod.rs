//! Read access to spots and their monthly wind conditions.
//!
//! The `SpotCatalog` trait is the only view of stored data a recommender
//! needs: the spots in catalog order, and a per-month wind lookup.

mod memory;
#[cfg(feature = "store-sqlite")]
mod sqlite;

pub use memory::InMemoryCatalog;
#[cfg(feature = "serde")]
pub use memory::CatalogSnapshot;
#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteSpotCatalog, SqliteSpotCatalogError};

use crate::{Spot, WindCondition};

/// Read-only access to a catalog of spots.
///
/// Iteration order is significant: recommenders use it to break ties, so
/// implementations must yield spots in a stable order.
///
/// # Examples
///
/// ```rust
/// use kitespot_core::{Spot, SpotCatalog, WindCondition, WindQuality};
///
/// struct SingleSpot {
///     spot: Spot,
///     july: WindCondition,
/// }
///
/// impl SpotCatalog for SingleSpot {
///     fn spots(&self) -> Box<dyn Iterator<Item = Spot> + Send + '_> {
///         Box::new(std::iter::once(self.spot.clone()))
///     }
///
///     fn wind_condition(&self, spot_id: u64, month: u8) -> Option<WindCondition> {
///         (spot_id == self.spot.id && month == self.july.month).then(|| self.july.clone())
///     }
/// }
///
/// let catalog = SingleSpot {
///     spot: Spot::new(1, "Tarifa", "Spain"),
///     july: WindCondition::new(1, 7, 22.0, WindQuality::Good),
/// };
/// assert_eq!(catalog.spots().count(), 1);
/// assert!(catalog.wind_condition(1, 8).is_none());
/// ```
pub trait SpotCatalog {
    /// Return every spot in catalog order.
    fn spots(&self) -> Box<dyn Iterator<Item = Spot> + Send + '_>;

    /// Return the wind record for a spot and month, if one exists.
    ///
    /// `None` means "no data": the spot cannot be recommended for that month.
    fn wind_condition(&self, spot_id: u64, month: u8) -> Option<WindCondition>;
}
