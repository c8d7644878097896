//! JPL low-precision orbital elements
//!
//! Each planet is described by six osculating elements at J2000 and their
//! linear rates per Julian century, as tabulated in "Keplerian Elements for
//! Approximate Positions of the Major Planets" (Standish, JPL). The model is
//! fitted to the interval AD 1800–2050; outside it the linear extrapolation
//! still evaluates but accuracy degrades.

use serde::{Deserialize, Serialize};

/// The six element values at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementSet {
    /// Semi-major axis `a` in AU
    pub semi_major_axis: f64,
    /// Eccentricity `e` (dimensionless)
    pub eccentricity: f64,
    /// Inclination `I` in degrees
    pub inclination: f64,
    /// Mean longitude `L` in degrees
    pub mean_longitude: f64,
    /// Longitude of perihelion `ϖ` in degrees
    pub longitude_of_perihelion: f64,
    /// Longitude of the ascending node `Ω` in degrees
    pub ascending_node: f64,
}

impl ElementSet {
    pub const fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        mean_longitude: f64,
        longitude_of_perihelion: f64,
        ascending_node: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            mean_longitude,
            longitude_of_perihelion,
            ascending_node,
        }
    }

    /// Argument of perihelion `ω = ϖ − Ω` in degrees
    pub fn argument_of_perihelion(&self) -> f64 {
        self.longitude_of_perihelion - self.ascending_node
    }

    /// Mean anomaly `M = L − ϖ` reduced to [-180, 180) degrees
    pub fn mean_anomaly(&self) -> f64 {
        reduce_angle(self.mean_longitude - self.longitude_of_perihelion)
    }

    /// True when the eccentricity describes a bound ellipse
    pub fn is_elliptic(&self) -> bool {
        (0.0..1.0).contains(&self.eccentricity)
    }
}

/// Reduce an angle in degrees to [-180, 180)
///
/// The remainder is taken with `rem_euclid` so negative angles wrap the same
/// way as positive ones.
pub fn reduce_angle(angle: f64) -> f64 {
    let shifted = (angle + 180.0).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    let shifted = if shifted >= 360.0 { 0.0 } else { shifted };
    shifted - 180.0
}

/// Base elements at J2000 plus their secular rates per Julian century
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Element values at J2000
    pub base: ElementSet,
    /// Linear rates, per Julian century
    pub rates: ElementSet,
}

impl OrbitalElements {
    pub const fn new(base: ElementSet, rates: ElementSet) -> Self {
        Self { base, rates }
    }

    /// Elements without secular drift
    pub const fn fixed(base: ElementSet) -> Self {
        Self::new(base, ElementSet::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0))
    }

    /// Linearly extrapolate every element to `centuries` after J2000
    pub fn at(&self, centuries: f64) -> ElementSet {
        let (b, r) = (&self.base, &self.rates);
        ElementSet {
            semi_major_axis: b.semi_major_axis + r.semi_major_axis * centuries,
            eccentricity: b.eccentricity + r.eccentricity * centuries,
            inclination: b.inclination + r.inclination * centuries,
            mean_longitude: b.mean_longitude + r.mean_longitude * centuries,
            longitude_of_perihelion: b.longitude_of_perihelion
                + r.longitude_of_perihelion * centuries,
            ascending_node: b.ascending_node + r.ascending_node * centuries,
        }
    }
}
