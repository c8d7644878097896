//! Keplerian propagation of JPL low-precision elements
//!
//! Given a set of [`OrbitalElements`] and a time in days since J2000, the
//! propagator extrapolates the elements, solves Kepler's equation, and
//! rotates the orbital-plane position through the ecliptic into the
//! equatorial J2000 frame, in kilometers.

use std::f64::consts::PI;

use log::warn;
use thiserror::Error;

use super::elements::{ElementSet, OrbitalElements};
use super::solver::solve_kepler;
use super::KeplerError;
use crate::constants::{DAYS_PER_CENTURY, DAY_S, GM_SUN, KM_PER_AU};
use crate::coordinates::Cartesian3;
use crate::framelib::{ecliptic_to_equatorial, perifocal_to_ecliptic};
use crate::units::{au_to_km, cos_deg, sin_deg};

/// Largest eccentricity handed to the solver
///
/// Extrapolated eccentricities above it are clamped down to it. The solver is
/// verified to converge within its iteration cap up to this value; between it
/// and 1 some mean anomalies exhaust the cap.
pub const ECCENTRICITY_CEILING: f64 = 0.9;

/// Extrapolated eccentricity left the range the solver handles
///
/// Secular drift over very large `|t|` is a known limitation of the linear
/// element model. The propagator still produces a position with the
/// eccentricity clamped into `[0, ECCENTRICITY_CEILING]` and attaches this
/// flag to it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("eccentricity {eccentricity} at {centuries} centuries is outside [0, 0.9]; clamped to {clamped_to}")]
pub struct InvalidElements {
    /// Julian centuries after J2000 at which the elements were evaluated
    pub centuries: f64,
    /// Extrapolated eccentricity
    pub eccentricity: f64,
    /// Eccentricity actually used
    pub clamped_to: f64,
}

/// Result of propagating one body to one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Propagation {
    /// Position in kilometers
    pub position: Cartesian3,
    /// Set when the elements had to be clamped to stay elliptic
    pub warning: Option<InvalidElements>,
}

impl Propagation {
    /// True when the elements were valid at the requested time
    pub fn is_nominal(&self) -> bool {
        self.warning.is_none()
    }
}

/// Convert days since J2000 to Julian centuries since J2000
pub fn centuries_since_j2000(t: f64) -> f64 {
    t / DAYS_PER_CENTURY
}

/// Orbital period in days for a heliocentric orbit with semi-major axis `a` AU
///
/// Kepler's third law with the solar GM, neglecting the planet's own mass.
pub fn orbital_period_days(semi_major_axis: f64) -> f64 {
    let a_km = semi_major_axis * KM_PER_AU;
    2.0 * PI * (a_km.powi(3) / GM_SUN).sqrt() / DAY_S
}

/// Mean motion in degrees per Julian century for semi-major axis `a` AU
pub fn mean_motion_per_century(semi_major_axis: f64) -> f64 {
    360.0 * DAYS_PER_CENTURY / orbital_period_days(semi_major_axis)
}

fn clamp_eccentricity(set: &mut ElementSet, centuries: f64) -> Option<InvalidElements> {
    let e = set.eccentricity;
    if e.is_nan() || (set.is_elliptic() && e <= ECCENTRICITY_CEILING) {
        return None;
    }
    let clamped_to = if e < 0.0 {
        0.0
    } else {
        ECCENTRICITY_CEILING
    };
    let flag = InvalidElements {
        centuries,
        eccentricity: e,
        clamped_to,
    };
    warn!("{}", flag);
    set.eccentricity = clamped_to;
    Some(flag)
}

/// Ecliptic-frame position in AU at `centuries` after J2000
fn ecliptic_position_au(
    elements: &OrbitalElements,
    centuries: f64,
) -> Result<(Cartesian3, Option<InvalidElements>), KeplerError> {
    let mut set = elements.at(centuries);
    let warning = clamp_eccentricity(&mut set, centuries);

    let a = set.semi_major_axis;
    let e = set.eccentricity;
    let ecc_anomaly = solve_kepler(set.mean_anomaly(), e)?.eccentric_anomaly;

    let x_prime = a * (cos_deg(ecc_anomaly) - e);
    let y_prime = a * (1.0 - e * e).sqrt() * sin_deg(ecc_anomaly);

    let position = perifocal_to_ecliptic(
        x_prime,
        y_prime,
        set.argument_of_perihelion(),
        set.inclination,
        set.ascending_node,
    );
    Ok((position, warning))
}

/// Position in the equatorial J2000 frame, km, at `t` days since J2000
///
/// # Errors
///
/// [`KeplerError::Convergence`] when the solver cannot find the eccentric
/// anomaly. The caller should treat the body's position at `t` as
/// unavailable.
///
/// # Examples
///
/// ```rust
/// use orrery::keplerlib::propagate;
/// use orrery::planetlib::Planet;
///
/// let earth = propagate(&Planet::EarthMoonBarycenter.elements(), 0.0).unwrap();
/// let distance_au = earth.position.magnitude() / 1.496e8;
/// assert!((distance_au - 0.9833).abs() < 1e-3);
/// ```
pub fn propagate(elements: &OrbitalElements, t: f64) -> Result<Propagation, KeplerError> {
    let centuries = centuries_since_j2000(t);
    let (ecliptic, warning) = ecliptic_position_au(elements, centuries)?;
    let equatorial = ecliptic_to_equatorial(ecliptic, centuries);
    Ok(Propagation {
        position: Cartesian3::new(
            au_to_km(equatorial.x),
            au_to_km(equatorial.y),
            au_to_km(equatorial.z),
        ),
        warning,
    })
}

/// Position in the ecliptic frame, km, at `t` days since J2000
pub fn propagate_ecliptic(elements: &OrbitalElements, t: f64) -> Result<Propagation, KeplerError> {
    let centuries = centuries_since_j2000(t);
    let (ecliptic, warning) = ecliptic_position_au(elements, centuries)?;
    Ok(Propagation {
        position: ecliptic.scale(KM_PER_AU),
        warning,
    })
}
