//! Kitesurfing destinations.
//!
//! A [`Spot`] carries the static attributes the recommendation rules read.
//! Every descriptive attribute is optional: catalogs are sparse, and a rule
//! whose input is missing contributes nothing rather than failing.

/// A named kitesurfing destination.
///
/// # Examples
/// ```
/// use kitespot_core::Spot;
///
/// let spot = Spot::new(1, "Cabarete", "Dominican Republic")
///     .with_difficulty_level("All levels")
///     .with_costs(70.0, 90.0);
///
/// assert_eq!(spot.name, "Cabarete");
/// assert_eq!(spot.total_cost_per_day(), Some(160.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Spot {
    /// Catalog identifier, used to look up monthly wind conditions.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Country name as listed in the region table.
    pub country: String,
    /// Free-form skill descriptor such as `"Beginner to intermediate"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub difficulty_level: Option<String>,
    /// Free-form wave descriptor such as `"Flat water"` or `"Strong waves"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wave_size: Option<String>,
    /// Average daily kite school cost.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avg_school_cost: Option<f64>,
    /// Average nightly accommodation cost, in the same unit as the school cost.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avg_accommodation_cost: Option<f64>,
    /// Names of the kite schools operating at the spot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kite_schools: Option<Vec<String>>,
    /// Explicit school count, preferred over the length of `kite_schools`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kite_school_count: Option<u32>,
    /// Description of the local culture.
    #[cfg_attr(feature = "serde", serde(default))]
    pub culture: Option<String>,
    /// Notable food options near the spot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub food_options: Option<Vec<String>>,
}

impl Spot {
    /// Construct a spot with only its identity populated.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
            ..Self::default()
        }
    }

    /// Set the difficulty descriptor.
    #[must_use]
    pub fn with_difficulty_level(mut self, level: impl Into<String>) -> Self {
        self.difficulty_level = Some(level.into());
        self
    }

    /// Set the wave descriptor.
    #[must_use]
    pub fn with_wave_size(mut self, wave_size: impl Into<String>) -> Self {
        self.wave_size = Some(wave_size.into());
        self
    }

    /// Set both average daily costs.
    #[must_use]
    pub fn with_costs(mut self, school: f64, accommodation: f64) -> Self {
        self.avg_school_cost = Some(school);
        self.avg_accommodation_cost = Some(accommodation);
        self
    }

    /// Set the kite school names.
    #[must_use]
    pub fn with_kite_schools<I, S>(mut self, schools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kite_schools = Some(schools.into_iter().map(Into::into).collect());
        self
    }

    /// Set the culture description.
    #[must_use]
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    /// Set the food options.
    #[must_use]
    pub fn with_food_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.food_options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Sum of school and accommodation costs, when both are known.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "daily cost is the sum of two averages"
    )]
    pub fn total_cost_per_day(&self) -> Option<f64> {
        match (self.avg_school_cost, self.avg_accommodation_cost) {
            (Some(school), Some(accommodation)) => Some(school + accommodation),
            _ => None,
        }
    }

    /// Number of kite schools, or `None` when the spot lists none.
    ///
    /// A non-zero explicit count wins over the list length; a stored zero is
    /// treated as absent.
    #[must_use]
    pub fn school_count(&self) -> Option<usize> {
        let schools = self.kite_schools.as_ref().filter(|list| !list.is_empty())?;
        Some(
            self.kite_school_count
                .filter(|&count| count > 0)
                .and_then(|count| usize::try_from(count).ok())
                .unwrap_or(schools.len()),
        )
    }
}
