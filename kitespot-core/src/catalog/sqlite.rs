//! SQLite-backed catalog reading the application's spot tables.
//!
//! The database is opened read-only and loaded eagerly into an
//! [`InMemoryCatalog`]. Three tables are read:
//!
//! - `spots(id, name, country, difficulty_level, wave_size, avg_school_cost,
//!   avg_accommodation_cost, culture, food_options)` where `food_options` is a
//!   JSON array of strings or `NULL`;
//! - `kite_schools(spot_id, name)`;
//! - `wind_conditions(spot_id, month, wind_speed, wind_quality, air_temp,
//!   water_temp)` where `wind_quality` holds a [`WindQuality`] name.

use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, OpenFlags, Row};
use thiserror::Error;

use super::{InMemoryCatalog, SpotCatalog};
use crate::{ParseWindQualityError, Spot, WindCondition, WindQuality};

const SPOTS_SQL: &str = "SELECT id, name, country, difficulty_level, wave_size, avg_school_cost, \
     avg_accommodation_cost, culture, food_options FROM spots ORDER BY id";
const SCHOOLS_SQL: &str = "SELECT spot_id, name FROM kite_schools ORDER BY spot_id, rowid";
const CONDITIONS_SQL: &str = "SELECT spot_id, month, wind_speed, wind_quality, air_temp, \
     water_temp FROM wind_conditions ORDER BY spot_id, month";

/// Errors raised while loading a catalog from SQLite.
#[derive(Debug, Error)]
pub enum SqliteSpotCatalogError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A spot identifier could not be represented as `u64`.
    #[error("spot id {id} is outside the supported range")]
    SpotIdOutOfRange {
        /// Identifier read from SQLite.
        id: i64,
    },
    /// A wind record carried a month outside `1..=12`.
    #[error("wind condition for spot {spot_id} has invalid month {month}")]
    InvalidMonth {
        /// Spot owning the record.
        spot_id: u64,
        /// Month read from SQLite.
        month: i64,
    },
    /// The stored food options were not a JSON array of strings.
    #[error("failed to parse food options for spot {spot_id}: {source}")]
    InvalidFoodOptions {
        /// Spot whose food options failed to parse.
        spot_id: u64,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A wind record carried an unknown quality name.
    #[error("wind condition for spot {spot_id} in month {month}: {source}")]
    InvalidWindQuality {
        /// Spot owning the record.
        spot_id: u64,
        /// Month of the record.
        month: u8,
        /// Parse failure for the stored name.
        #[source]
        source: ParseWindQualityError,
    },
    /// Generic SQLite error when reading rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Read-only catalog loaded from a SQLite database.
///
/// Spots are ordered by identifier.
pub struct SqliteSpotCatalog {
    catalog: InMemoryCatalog,
}

impl fmt::Debug for SqliteSpotCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteSpotCatalog")
            .field("spots", &self.catalog.len())
            .field("wind_conditions", &self.catalog.condition_count())
            .finish_non_exhaustive()
    }
}

impl SqliteSpotCatalog {
    /// Open the database at `database_path` and load every spot and wind record.
    ///
    /// # Errors
    /// Returns [`SqliteSpotCatalogError`] when the database cannot be opened,
    /// a table is missing, or a row holds data that cannot be represented.
    pub fn open<P>(database_path: P) -> Result<Self, SqliteSpotCatalogError>
    where
        P: AsRef<Path>,
    {
        let path = database_path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqliteSpotCatalogError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;

        let mut spots = read_spots(&connection)?;
        let mut schools = read_schools(&connection)?;
        for spot in &mut spots {
            spot.kite_schools = schools.remove(&spot.id);
        }
        let conditions = read_conditions(&connection)?;

        let catalog = InMemoryCatalog::new(spots, conditions);
        log::info!(
            "loaded {} spots and {} wind conditions from {}",
            catalog.len(),
            catalog.condition_count(),
            path.display()
        );
        Ok(Self { catalog })
    }

    /// Return the number of loaded spots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Report whether the database held no spots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Consume the wrapper and return the loaded catalog.
    #[must_use]
    pub fn into_inner(self) -> InMemoryCatalog {
        self.catalog
    }
}

impl SpotCatalog for SqliteSpotCatalog {
    fn spots(&self) -> Box<dyn Iterator<Item = Spot> + Send + '_> {
        self.catalog.spots()
    }

    fn wind_condition(&self, spot_id: u64, month: u8) -> Option<WindCondition> {
        self.catalog.wind_condition(spot_id, month)
    }
}

struct SpotRow {
    id: i64,
    name: String,
    country: String,
    difficulty_level: Option<String>,
    wave_size: Option<String>,
    avg_school_cost: Option<f64>,
    avg_accommodation_cost: Option<f64>,
    culture: Option<String>,
    food_options: Option<String>,
}

impl SpotRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            country: row.get(2)?,
            difficulty_level: row.get(3)?,
            wave_size: row.get(4)?,
            avg_school_cost: row.get(5)?,
            avg_accommodation_cost: row.get(6)?,
            culture: row.get(7)?,
            food_options: row.get(8)?,
        })
    }

    fn into_spot(self) -> Result<Spot, SqliteSpotCatalogError> {
        let id = spot_id(self.id)?;
        let food_options = self
            .food_options
            .map(|raw| serde_json::from_str::<Vec<String>>(&raw))
            .transpose()
            .map_err(|source| SqliteSpotCatalogError::InvalidFoodOptions {
                spot_id: id,
                source,
            })?;
        Ok(Spot {
            id,
            name: self.name,
            country: self.country,
            difficulty_level: self.difficulty_level,
            wave_size: self.wave_size,
            avg_school_cost: self.avg_school_cost,
            avg_accommodation_cost: self.avg_accommodation_cost,
            kite_schools: None,
            kite_school_count: None,
            culture: self.culture,
            food_options,
        })
    }
}

struct ConditionRow {
    spot_id: i64,
    month: i64,
    wind_speed: f64,
    wind_quality: String,
    air_temp: Option<f64>,
    water_temp: Option<f64>,
}

impl ConditionRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            spot_id: row.get(0)?,
            month: row.get(1)?,
            wind_speed: row.get(2)?,
            wind_quality: row.get(3)?,
            air_temp: row.get(4)?,
            water_temp: row.get(5)?,
        })
    }

    fn into_condition(self) -> Result<WindCondition, SqliteSpotCatalogError> {
        let id = spot_id(self.spot_id)?;
        let month = u8::try_from(self.month)
            .ok()
            .filter(|month| (1..=12).contains(month))
            .ok_or(SqliteSpotCatalogError::InvalidMonth {
                spot_id: id,
                month: self.month,
            })?;
        let quality = self.wind_quality.parse::<WindQuality>().map_err(|source| {
            SqliteSpotCatalogError::InvalidWindQuality {
                spot_id: id,
                month,
                source,
            }
        })?;
        Ok(WindCondition {
            spot_id: id,
            month,
            wind_speed: self.wind_speed,
            wind_quality: quality,
            air_temp: self.air_temp,
            water_temp: self.water_temp,
        })
    }
}

fn spot_id(raw: i64) -> Result<u64, SqliteSpotCatalogError> {
    u64::try_from(raw).map_err(|_| SqliteSpotCatalogError::SpotIdOutOfRange { id: raw })
}

fn read_spots(connection: &Connection) -> Result<Vec<Spot>, SqliteSpotCatalogError> {
    let mut statement = connection.prepare(SPOTS_SQL)?;
    let rows = statement.query_map([], SpotRow::from_row)?;
    let mut spots = Vec::new();
    for row in rows {
        spots.push(row?.into_spot()?);
    }
    Ok(spots)
}

fn read_schools(
    connection: &Connection,
) -> Result<HashMap<u64, Vec<String>>, SqliteSpotCatalogError> {
    let mut statement = connection.prepare(SCHOOLS_SQL)?;
    let rows = statement.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;
    let mut schools: HashMap<u64, Vec<String>> = HashMap::new();
    for row in rows {
        let (raw_id, name) = row?;
        schools.entry(spot_id(raw_id)?).or_default().push(name);
    }
    Ok(schools)
}

fn read_conditions(connection: &Connection) -> Result<Vec<WindCondition>, SqliteSpotCatalogError> {
    let mut statement = connection.prepare(CONDITIONS_SQL)?;
    let rows = statement.query_map([], ConditionRow::from_row)?;
    let mut conditions = Vec::new();
    for row in rows {
        conditions.push(row?.into_condition()?);
    }
    Ok(conditions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    const SCHEMA: &str = "
        CREATE TABLE spots (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            country TEXT NOT NULL,
            difficulty_level TEXT,
            wave_size TEXT,
            avg_school_cost REAL,
            avg_accommodation_cost REAL,
            culture TEXT,
            food_options TEXT
        );
        CREATE TABLE kite_schools (spot_id INTEGER NOT NULL, name TEXT NOT NULL);
        CREATE TABLE wind_conditions (
            spot_id INTEGER NOT NULL,
            month INTEGER NOT NULL,
            wind_speed REAL NOT NULL,
            wind_quality TEXT NOT NULL,
            air_temp REAL,
            water_temp REAL
        );";

    struct Database {
        _dir: TempDir,
        path: PathBuf,
    }

    impl Database {
        fn execute(&self, sql: &str) {
            let connection = Connection::open(&self.path).expect("open fixture database");
            connection.execute_batch(sql).expect("run fixture sql");
        }
    }

    #[fixture]
    fn database() -> Database {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("spots.db");
        let db = Database { _dir: dir, path };
        db.execute(SCHEMA);
        db
    }

    #[rstest]
    fn loads_spots_schools_and_conditions(database: Database) {
        database.execute(
            "INSERT INTO spots VALUES
                (2, 'Tarifa', 'Spain', 'Intermediate', 'Medium waves', 80, 70, NULL, '[\"Tapas\"]'),
                (1, 'Cabarete', 'Dominican Republic', 'All levels', 'Flat water', 70, 90, 'Merengue', NULL);
             INSERT INTO kite_schools VALUES (1, 'Laurel Eastman'), (1, 'Kite Club');
             INSERT INTO wind_conditions VALUES
                (1, 7, 24, 'Excellent', 27.5, 26.0),
                (2, 7, 18.5, 'Good', NULL, NULL);",
        );

        let catalog = SqliteSpotCatalog::open(&database.path).expect("open catalog");

        let spots: Vec<Spot> = catalog.spots().collect();
        let ids: Vec<u64> = spots.iter().map(|spot| spot.id).collect();
        assert_eq!(ids, vec![1, 2]);
        let cabarete = spots.first().expect("first spot");
        assert_eq!(
            cabarete.kite_schools,
            Some(vec!["Laurel Eastman".to_owned(), "Kite Club".to_owned()])
        );
        assert_eq!(cabarete.food_options, None);
        let tarifa = spots.get(1).expect("second spot");
        assert_eq!(tarifa.kite_schools, None);
        assert_eq!(tarifa.food_options, Some(vec!["Tapas".to_owned()]));

        let july = catalog.wind_condition(1, 7).expect("july record");
        assert_eq!(july.wind_quality, WindQuality::Excellent);
        assert_eq!(july.wind_speed, 24.0);
        assert_eq!(july.air_temp, Some(27.5));
        assert!(catalog.wind_condition(2, 8).is_none());
    }

    #[rstest]
    fn missing_database_reports_open_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("absent.db");
        let err = SqliteSpotCatalog::open(&path).expect_err("read-only open must fail");
        assert!(matches!(err, SqliteSpotCatalogError::OpenDatabase { .. }));
    }

    #[rstest]
    fn unknown_quality_is_rejected(database: Database) {
        database.execute(
            "INSERT INTO spots (id, name, country) VALUES (5, 'Dakhla', 'Morocco');
             INSERT INTO wind_conditions VALUES (5, 3, 20, 'Epic', NULL, NULL);",
        );
        let err = SqliteSpotCatalog::open(&database.path).expect_err("bad quality");
        assert!(matches!(
            err,
            SqliteSpotCatalogError::InvalidWindQuality {
                spot_id: 5,
                month: 3,
                ..
            }
        ));
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    #[case(300)]
    fn out_of_range_month_is_rejected(database: Database, #[case] month: i64) {
        database.execute(&format!(
            "INSERT INTO spots (id, name, country) VALUES (5, 'Dakhla', 'Morocco');
             INSERT INTO wind_conditions VALUES (5, {month}, 20, 'Good', NULL, NULL);"
        ));
        let err = SqliteSpotCatalog::open(&database.path).expect_err("bad month");
        assert!(matches!(
            err,
            SqliteSpotCatalogError::InvalidMonth { spot_id: 5, month: m } if m == month
        ));
    }

    #[rstest]
    fn malformed_food_options_are_rejected(database: Database) {
        database.execute(
            "INSERT INTO spots (id, name, country, food_options)
             VALUES (6, 'Prea', 'Brazil', 'seafood');",
        );
        let err = SqliteSpotCatalog::open(&database.path).expect_err("bad food options");
        assert!(matches!(
            err,
            SqliteSpotCatalogError::InvalidFoodOptions { spot_id: 6, .. }
        ));
    }

    #[rstest]
    fn negative_spot_id_is_rejected(database: Database) {
        database.execute("INSERT INTO spots (id, name, country) VALUES (-1, 'Nowhere', 'Spain');");
        let err = SqliteSpotCatalog::open(&database.path).expect_err("negative id");
        assert!(matches!(
            err,
            SqliteSpotCatalogError::SpotIdOutOfRange { id: -1 }
        ));
    }
}
