//! Orrery: time-parameterized positions of the Sun, planets, and nearby stars
//!
//! Every body is bound to a [`PositionFn`] mapping days since J2000 to a
//! position in the equatorial J2000 frame, in kilometers. Planets follow the
//! JPL low-precision Keplerian elements; catalog stars move linearly from
//! their Hipparcos-style space velocity.
//!
//! ```rust
//! use orrery::{BodyTable, TimeFn};
//!
//! let mut table = BodyTable::with_sun();
//! table.add_planets();
//!
//! let earth = table.get("Earth").unwrap();
//! let r = earth.position_at(0.0).unwrap().magnitude();
//! assert!((r / 1.496e8 - 0.983).abs() < 0.01);
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod astrometry;
pub mod catalogs;
pub mod celestial;
pub mod constants;
pub mod coordinates;
pub mod data;
pub mod framelib;
pub mod keplerlib;
pub mod planetlib;
pub mod positions;
pub mod time;
pub mod units;

// Re-export commonly used types
pub use astrometry::{to_state_vector, AstrometricObservation, StateVector};
pub use catalogs::Catalog;
pub use celestial::{Body, BodyKind, BodyTable, IngestReport};
pub use coordinates::Cartesian3;
pub use keplerlib::{propagate, OrbitalElements};
pub use planetlib::Planet;
pub use positions::{PositionFn, TimeFn};

/// Main error type for the orrery library
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalogs::CatalogError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Download error: {0}")]
    Download(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Kepler(#[from] keplerlib::KeplerError),

    #[error(transparent)]
    Astrometry(#[from] astrometry::AstrometryError),

    #[error(transparent)]
    Time(#[from] time::TimeError),

    #[error(transparent)]
    Planet(#[from] planetlib::PlanetError),
}

/// Result type for orrery operations
pub type Result<T> = std::result::Result<T, OrreryError>;

/// Loader settings, deserializable from JSON
///
/// ```json
/// { "catalog_path": "data/The10pcSample_v2.csv", "include_planets": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Cache directory for downloaded catalogs
    pub data_dir: Option<PathBuf>,
    /// URL to download the catalog from when no local path is given
    pub catalog_url: Option<String>,
    /// Local catalog file (CSV, optionally gzipped)
    pub catalog_path: Option<PathBuf>,
    /// Whether to add the eight major planets
    pub include_planets: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            catalog_url: None,
            catalog_path: None,
            include_planets: true,
        }
    }
}

/// Entry point for building a body table
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a new loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader from explicit settings
    pub fn from_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Read settings from a JSON file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: LoaderConfig = serde_json::from_reader(reader)?;
        Ok(Self::from_config(config))
    }

    /// Set a custom data directory
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Download the catalog from `url` when no local path is set
    pub fn with_catalog_url(mut self, url: &str) -> Self {
        self.config.catalog_url = Some(url.to_string());
        self
    }

    /// Read the catalog from a local file
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.catalog_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Include or leave out the major planets
    pub fn with_include_planets(mut self, include: bool) -> Self {
        self.config.include_planets = include;
        self
    }

    /// Current settings
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Directory downloaded catalogs are cached in
    pub fn cache_dir(&self) -> PathBuf {
        self.config
            .data_dir
            .clone()
            .unwrap_or_else(data::get_cache_dir)
    }

    /// Load the configured catalog, if any
    ///
    /// A local path takes precedence over a URL.
    pub fn load_catalog(&self) -> Result<Option<Catalog>> {
        if let Some(path) = &self.config.catalog_path {
            return Ok(Some(Catalog::from_file(path)?));
        }
        if let Some(url) = &self.config.catalog_url {
            let path = data::download_catalog(url, self.cache_dir())?;
            return Ok(Some(Catalog::from_file(path)?));
        }
        Ok(None)
    }

    /// Build the body table: the Sun, optionally the planets, and the catalog
    pub fn load_bodies(&self) -> Result<BodyTable> {
        let mut table = BodyTable::with_sun();
        if self.config.include_planets {
            table.add_planets();
        }
        if let Some(catalog) = self.load_catalog()? {
            table.add_catalog(&catalog);
        }
        info!("Loaded {} bodies", table.len());
        Ok(table)
    }
}
