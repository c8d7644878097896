//! Celestial bodies and the body table
//!
//! A [`Body`] is a named object bound to a [`PositionFn`]. The [`BodyTable`]
//! holds the Sun at the origin, optionally the major planets, and the stars
//! of a catalog, and samples all of them at a common instant.

use std::fmt;

use log::{debug, info, warn};

use crate::astrometry::{to_state_vector, AstrometricObservation, AstrometryError};
use crate::catalogs::{Catalog, ObjectCategory};
use crate::coordinates::Cartesian3;
use crate::keplerlib::KeplerError;
use crate::planetlib::Planet;
use crate::positions::{PositionFn, TimeFn};

/// Kind of body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    BrownDwarf,
    Planet,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyKind::Star => write!(f, "star"),
            BodyKind::BrownDwarf => write!(f, "brown dwarf"),
            BodyKind::Planet => write!(f, "planet"),
        }
    }
}

/// A celestial body in the common equatorial J2000 frame
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Name of the body
    pub name: String,
    /// Kind of body
    pub kind: BodyKind,
    /// Position as a function of time, km
    pub position: PositionFn,
    /// Constant velocity in km/day, when the body has one
    pub velocity: Option<Cartesian3>,
}

impl Body {
    /// Create a new body; the velocity is taken from `position` when constant
    pub fn new(name: &str, kind: BodyKind, position: PositionFn) -> Self {
        let velocity = position.constant_velocity_of();
        Self {
            name: name.to_string(),
            kind,
            position,
            velocity,
        }
    }

    /// The Sun, fixed at the origin
    pub fn sun() -> Self {
        Self::new("Sun", BodyKind::Star, PositionFn::fixed(Cartesian3::zero()))
    }

    /// A major planet on its JPL Keplerian orbit
    pub fn planet(planet: Planet) -> Self {
        Self::new(
            planet.name(),
            BodyKind::Planet,
            PositionFn::keplerian(planet.elements()),
        )
    }

    /// A star moving linearly from its catalog astrometry
    pub fn from_observation(
        name: &str,
        kind: BodyKind,
        obs: &AstrometricObservation,
    ) -> Result<Self, AstrometryError> {
        let state = to_state_vector(obs)?;
        Ok(Self::new(name, kind, PositionFn::from(state)))
    }
}

impl TimeFn for Body {
    fn position_at(&self, t: f64) -> Result<Cartesian3, KeplerError> {
        self.position.evaluate(t)
    }
}

/// Outcome of building a table from a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Rows turned into bodies
    pub accepted: usize,
    /// Rows rejected for invalid astrometry
    pub rejected: usize,
    /// Planet rows skipped for lack of orbital elements
    pub skipped_planets: usize,
}

/// A set of bodies sampled together
#[derive(Debug, Clone, Default)]
pub struct BodyTable {
    bodies: Vec<Body>,
    report: IngestReport,
}

impl BodyTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding only the Sun
    pub fn with_sun() -> Self {
        let mut table = Self::new();
        table.push(Body::sun());
        table
    }

    /// Add one body
    pub fn push(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Add the eight major planets
    pub fn add_planets(&mut self) {
        for planet in Planet::ALL {
            self.push(Body::planet(planet));
        }
    }

    /// Add every usable row of `catalog` as a star or brown dwarf
    ///
    /// Rows whose astrometry is invalid are logged and counted, never added.
    /// Rows categorized as planets carry no orbital elements and are skipped.
    pub fn add_catalog(&mut self, catalog: &Catalog) -> IngestReport {
        let mut report = IngestReport::default();

        for row in catalog.iter() {
            let fallback = format!("row {}", row.line);
            let name = row.name().unwrap_or(&fallback);

            let kind = match row.category() {
                ObjectCategory::Planet => {
                    debug!("Skipping planet '{}': no orbital elements", name);
                    report.skipped_planets += 1;
                    continue;
                }
                ObjectCategory::BrownDwarf => BodyKind::BrownDwarf,
                ObjectCategory::Star => BodyKind::Star,
                ObjectCategory::Other(code) => {
                    debug!("Treating '{}' with category '{}' as a star", name, code);
                    BodyKind::Star
                }
            };

            match row
                .observation()
                .and_then(|obs| Body::from_observation(name, kind, &obs))
            {
                Ok(body) => {
                    debug!("Added {} '{}'", kind, name);
                    self.push(body);
                    report.accepted += 1;
                }
                Err(e) => {
                    warn!("Rejected catalog row '{}': {}", name, e);
                    report.rejected += 1;
                }
            }
        }

        info!(
            "Catalog ingested: {} bodies, {} rejected, {} planets skipped",
            report.accepted, report.rejected, report.skipped_planets
        );
        self.report.accepted += report.accepted;
        self.report.rejected += report.rejected;
        self.report.skipped_planets += report.skipped_planets;
        report
    }

    /// Build a table with the Sun, optionally the planets, and a catalog
    pub fn from_catalog(catalog: &Catalog, include_planets: bool) -> Self {
        let mut table = Self::with_sun();
        if include_planets {
            table.add_planets();
        }
        table.add_catalog(catalog);
        table
    }

    /// Totals over every catalog added so far
    pub fn report(&self) -> IngestReport {
        self.report
    }

    /// All bodies
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Iterate over bodies
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True when the table has no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// First body with the given name, ignoring case
    pub fn get(&self, name: &str) -> Option<&Body> {
        self.bodies
            .iter()
            .find(|body| body.name.eq_ignore_ascii_case(name))
    }

    /// Every body's position at `t`, one result per body in table order
    ///
    /// A body that fails to evaluate does not affect the others.
    pub fn positions_at(&self, t: f64) -> Vec<(&str, Result<Cartesian3, KeplerError>)> {
        self.bodies
            .iter()
            .map(|body| (body.name.as_str(), body.position.evaluate(t)))
            .collect()
    }
}
