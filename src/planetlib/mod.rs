//! Planetary positions from the JPL low-precision element tables

use std::collections::HashMap;
use std::str::FromStr;

use lazy_static::lazy_static;
use thiserror::Error;

use crate::coordinates::Cartesian3;
use crate::keplerlib::{propagate, ElementSet, KeplerError, OrbitalElements};

/// Error type for planetary lookups
#[derive(Debug, Error)]
pub enum PlanetError {
    #[error("Planet not found: {0}")]
    NotFound(String),
}

/// The major planets covered by the JPL element tables
///
/// The Earth entry follows the Earth–Moon barycenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

// Table 1 of Standish, "Keplerian Elements for Approximate Positions of the
// Major Planets", valid 1800 AD - 2050 AD. Columns: a, e, I, L, ϖ, Ω.
const MERCURY: OrbitalElements = OrbitalElements::new(
    ElementSet::new(0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593),
    ElementSet::new(0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081),
);
const VENUS: OrbitalElements = OrbitalElements::new(
    ElementSet::new(0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255),
    ElementSet::new(0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418),
);
const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements::new(
    ElementSet::new(1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0),
    ElementSet::new(0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0),
);
const MARS: OrbitalElements = OrbitalElements::new(
    ElementSet::new(1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891),
    ElementSet::new(0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343),
);
const JUPITER: OrbitalElements = OrbitalElements::new(
    ElementSet::new(5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909),
    ElementSet::new(-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106),
);
const SATURN: OrbitalElements = OrbitalElements::new(
    ElementSet::new(9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448),
    ElementSet::new(-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794),
);
const URANUS: OrbitalElements = OrbitalElements::new(
    ElementSet::new(19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503),
    ElementSet::new(-0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589),
);
const NEPTUNE: OrbitalElements = OrbitalElements::new(
    ElementSet::new(30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574),
    ElementSet::new(0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664),
);

lazy_static! {
    static ref PLANETS_BY_NAME: HashMap<&'static str, Planet> = {
        let mut map = HashMap::new();
        for planet in Planet::ALL {
            map.insert(planet.key(), planet);
        }
        map.insert("earth", Planet::EarthMoonBarycenter);
        map.insert("emb", Planet::EarthMoonBarycenter);
        map
    };
}

impl Planet {
    /// All planets, ordered outward from the Sun
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::EarthMoonBarycenter,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Get the planet's display name
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::EarthMoonBarycenter => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::EarthMoonBarycenter => "earth-moon barycenter",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Uranus => "uranus",
            Planet::Neptune => "neptune",
        }
    }

    /// JPL elements and secular rates at J2000
    pub fn elements(&self) -> OrbitalElements {
        match self {
            Planet::Mercury => MERCURY,
            Planet::Venus => VENUS,
            Planet::EarthMoonBarycenter => EARTH_MOON_BARYCENTER,
            Planet::Mars => MARS,
            Planet::Jupiter => JUPITER,
            Planet::Saturn => SATURN,
            Planet::Uranus => URANUS,
            Planet::Neptune => NEPTUNE,
        }
    }

    /// Heliocentric equatorial J2000 position in km, `t` days after J2000
    pub fn position(&self, t: f64) -> Result<Cartesian3, KeplerError> {
        Ok(propagate(&self.elements(), t)?.position)
    }
}

impl FromStr for Planet {
    type Err = PlanetError;

    /// Case-insensitive lookup by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PLANETS_BY_NAME
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| PlanetError::NotFound(s.to_string()))
    }
}
