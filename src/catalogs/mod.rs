//! Star catalogs module
//!
//! Loads tabular star catalogs (CSV, optionally gzipped) such as the 10 pc
//! sample. Field names are matched case-insensitively, and each row exposes
//! its name, object category and astrometric observation.
//!
//! Malformed rows are not an error at this layer: a row with a missing or
//! unparsable parallax still loads, and fails only when its observation is
//! requested. Structural problems (unreadable file, malformed CSV, a
//! required column absent from the header) are reported as [`CatalogError`].

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};
use thiserror::Error;

use crate::astrometry::{AstrometricObservation, AstrometryError};
use crate::data::open_catalog_reader;

/// Columns that must be present in every catalog
pub const REQUIRED_COLUMNS: [&str; 3] = ["ra", "dec", "parallax"];

/// Error type for catalog loading
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog is missing required column '{0}'")]
    MissingColumn(String),
}

/// Object category from the `obj_cat` column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectCategory {
    /// `*` (star) or `LM` (low-mass star)
    Star,
    /// `BD`
    BrownDwarf,
    /// `Planet`
    Planet,
    /// Any other code, kept verbatim
    Other(String),
}

impl ObjectCategory {
    /// Classify an `obj_cat` code
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        match code.to_ascii_lowercase().as_str() {
            "*" | "lm" => ObjectCategory::Star,
            "bd" => ObjectCategory::BrownDwarf,
            "planet" => ObjectCategory::Planet,
            _ => ObjectCategory::Other(code.to_string()),
        }
    }
}

impl FromStr for ObjectCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

impl fmt::Display for ObjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectCategory::Star => write!(f, "*"),
            ObjectCategory::BrownDwarf => write!(f, "BD"),
            ObjectCategory::Planet => write!(f, "Planet"),
            ObjectCategory::Other(code) => write!(f, "{}", code),
        }
    }
}

/// One catalog row with lower-cased field names
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    /// 1-based data row number, header excluded
    pub line: usize,
    fields: HashMap<String, String>,
}

impl CatalogRow {
    /// Build a row from `(field, value)` pairs; field names are normalized
    pub fn new<K, V, I>(line: usize, fields: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.as_ref().trim().to_lowercase(), v.into()))
            .collect();
        Self { line, fields }
    }

    /// Raw value of a field, `None` when absent or blank
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(&field.to_lowercase())
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Display name, from `common_name` then `obj_name`
    pub fn name(&self) -> Option<&str> {
        self.get("common_name").or_else(|| self.get("obj_name"))
    }

    /// Object category; rows without `obj_cat` are taken to be stars
    pub fn category(&self) -> ObjectCategory {
        self.get("obj_cat")
            .map(ObjectCategory::from_code)
            .unwrap_or(ObjectCategory::Star)
    }

    fn number(&self, field: &str) -> Result<Option<f64>, AstrometryError> {
        match self.get(field) {
            None => Ok(None),
            Some(raw) => raw.parse::<f64>().map(Some).map_err(|_| {
                AstrometryError::InvalidObservation(format!(
                    "row {}: {} is not a number: '{}'",
                    self.line, field, raw
                ))
            }),
        }
    }

    fn required(&self, field: &str) -> Result<f64, AstrometryError> {
        self.number(field)?.ok_or_else(|| {
            AstrometryError::InvalidObservation(format!("row {}: missing {}", self.line, field))
        })
    }

    /// Astrometric observation for this row
    ///
    /// `ra`, `dec` and `parallax` are required. Missing proper motions and
    /// radial velocity default to zero.
    ///
    /// # Errors
    ///
    /// [`AstrometryError::InvalidObservation`] when a required field is
    /// missing or any numeric field fails to parse.
    pub fn observation(&self) -> Result<AstrometricObservation, AstrometryError> {
        Ok(AstrometricObservation {
            ra: self.required("ra")?,
            dec: self.required("dec")?,
            parallax: self.required("parallax")?,
            pmra: self.number("pmra")?.unwrap_or(0.0),
            pmdec: self.number("pmdec")?.unwrap_or(0.0),
            rv: self.number("rv")?.unwrap_or(0.0),
        })
    }
}

/// A loaded catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
}

impl Catalog {
    /// Create a catalog from already-built rows
    pub fn from_rows(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }

    /// Parse CSV with a header row from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(CatalogError::MissingColumn(column.to_string()));
            }
        }

        let mut rows = Vec::new();
        for (index, record) in rdr.records().enumerate() {
            let record = record?;
            let row = CatalogRow::new(index + 1, headers.iter().zip(record.iter()));
            debug!("Read catalog row {}: {:?}", row.line, row.name());
            rows.push(row);
        }
        info!("Read {} catalog rows", rows.len());
        Ok(Self { rows })
    }

    /// Parse CSV text
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        Self::from_reader(text.as_bytes())
    }

    /// Load from a file, decompressing `.gz` files on the fly
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        info!("Loading catalog from {}", path.as_ref().display());
        let reader = open_catalog_reader(path)?;
        Self::from_reader(reader)
    }

    /// All rows in file order
    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// Iterate over rows
    pub fn iter(&self) -> impl Iterator<Item = &CatalogRow> {
        self.rows.iter()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the catalog has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
