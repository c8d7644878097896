//! Astrometric observables to Cartesian state vectors
//!
//! Converts a catalog star's right ascension, declination, parallax, proper
//! motion and radial velocity into a position (km) and velocity (km/day) in
//! the equatorial J2000 frame, following the space-velocity formulation of
//! the Hipparcos catalogue (ESA SP-1200, Vol. 1, §1.5.5).

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{AP, AV, C_KMS};
use crate::coordinates::Cartesian3;
use crate::units::{cos_deg, km_per_s_to_km_per_day, sin_deg};

/// Error type for astrometric conversions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AstrometryError {
    /// The observation cannot be turned into a finite position
    #[error("Invalid observation: {0}")]
    InvalidObservation(String),
}

/// One catalog star's astrometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AstrometricObservation {
    /// Right ascension in degrees
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
    /// Parallax in milliarcseconds
    pub parallax: f64,
    /// Proper motion in right ascension (μα*, mas/yr)
    pub pmra: f64,
    /// Proper motion in declination (mas/yr)
    pub pmdec: f64,
    /// Radial velocity in km/s, positive receding
    pub rv: f64,
}

impl AstrometricObservation {
    /// A star with position and parallax only
    pub fn stationary(ra: f64, dec: f64, parallax: f64) -> Self {
        Self {
            ra,
            dec,
            parallax,
            pmra: 0.0,
            pmdec: 0.0,
            rv: 0.0,
        }
    }

    /// Unit vector toward the star
    pub fn unit_vector(&self) -> Cartesian3 {
        Cartesian3::new(
            cos_deg(self.dec) * cos_deg(self.ra),
            cos_deg(self.dec) * sin_deg(self.ra),
            sin_deg(self.dec),
        )
    }

    /// Check the observation can yield a finite state vector
    pub fn validate(&self) -> Result<(), AstrometryError> {
        if !self.parallax.is_finite() || self.parallax <= 0.0 {
            return Err(AstrometryError::InvalidObservation(format!(
                "parallax must be positive, got {} mas",
                self.parallax
            )));
        }
        let fields = [
            ("ra", self.ra),
            ("dec", self.dec),
            ("pmra", self.pmra),
            ("pmdec", self.pmdec),
            ("rv", self.rv),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AstrometryError::InvalidObservation(format!(
                "{} is not finite: {}",
                name, value
            )));
        }
        if self.rv.abs() >= C_KMS {
            return Err(AstrometryError::InvalidObservation(format!(
                "radial velocity {} km/s is not below the speed of light",
                self.rv
            )));
        }
        Ok(())
    }
}

/// Position and velocity of a body
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateVector {
    /// Position in km
    pub position: Cartesian3,
    /// Velocity in km/day
    pub velocity: Cartesian3,
}

/// Distance in km for a parallax in milliarcseconds
pub fn distance_km(parallax: f64) -> Result<f64, AstrometryError> {
    if !parallax.is_finite() || parallax <= 0.0 {
        return Err(AstrometryError::InvalidObservation(format!(
            "parallax must be positive, got {} mas",
            parallax
        )));
    }
    Ok(AP / parallax)
}

/// Convert catalog observables into a heliocentric state vector
///
/// The velocity combines the tangential components from proper motion with
/// the radial velocity, scaled by the Doppler factor `1 / (1 − rv/c)`.
///
/// # Errors
///
/// [`AstrometryError::InvalidObservation`] when the parallax is zero,
/// negative or not finite, when any other field is not finite, or when the
/// radial velocity reaches the speed of light.
///
/// # Examples
///
/// ```rust
/// use orrery::astrometry::{to_state_vector, AstrometricObservation};
///
/// let star = AstrometricObservation::stationary(0.0, 0.0, 1000.0);
/// let state = to_state_vector(&star).unwrap();
/// // One parsec along the x-axis
/// assert!((state.position.x / 3.086e13 - 1.0).abs() < 1e-12);
/// ```
pub fn to_state_vector(obs: &AstrometricObservation) -> Result<StateVector, AstrometryError> {
    obs.validate()?;

    let distance = AP / obs.parallax;
    let doppler = 1.0 / (1.0 - obs.rv / C_KMS);

    let (sin_ra, cos_ra) = (sin_deg(obs.ra), cos_deg(obs.ra));
    let (sin_dec, cos_dec) = (sin_deg(obs.dec), cos_deg(obs.dec));

    let r = obs.unit_vector();
    let p = Cartesian3::new(-sin_ra, cos_ra, 0.0);
    let q = Cartesian3::new(-sin_dec * cos_ra, -sin_dec * sin_ra, cos_dec);

    let tangential_scale = AV / obs.parallax;
    let velocity_kms = p
        .scale(tangential_scale * obs.pmra)
        .add(q.scale(tangential_scale * obs.pmdec))
        .add(r.scale(obs.rv))
        .scale(doppler);

    let state = StateVector {
        position: r.scale(distance),
        velocity: velocity_kms.scale(km_per_s_to_km_per_day(1.0)),
    };
    debug!(
        "ra={} dec={} plx={} -> |b|={:.3e} km, |v|={:.3e} km/day",
        obs.ra,
        obs.dec,
        obs.parallax,
        state.position.magnitude(),
        state.velocity.magnitude()
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::KM_PER_PARSEC;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_star_on_equinox() {
        let star = AstrometricObservation::stationary(0.0, 0.0, 1000.0);
        let state = to_state_vector(&star).unwrap();
        assert_eq!(state.position, Cartesian3::new(AP / 1000.0, 0.0, 0.0));
        assert_eq!(state.velocity, Cartesian3::zero());
    }

    #[test]
    fn test_distance_of_one_parsec() {
        assert_relative_eq!(distance_km(1000.0).unwrap(), KM_PER_PARSEC, max_relative = 1e-15);
    }

    #[test]
    fn test_distance_decreases_with_parallax() {
        let parallaxes = [0.5, 1.0, 3.7, 10.0, 250.0, 768.5, 5000.0];
        let distances: Vec<f64> = parallaxes
            .iter()
            .map(|&plx| {
                let state = to_state_vector(&AstrometricObservation::stationary(47.0, -12.0, plx))
                    .unwrap();
                state.position.magnitude()
            })
            .collect();
        assert!(distances.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-3.2)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_invalid_parallax_is_rejected(#[case] parallax: f64) {
        let star = AstrometricObservation::stationary(10.0, 10.0, parallax);
        assert!(matches!(
            to_state_vector(&star),
            Err(AstrometryError::InvalidObservation(_))
        ));
        assert!(distance_km(parallax).is_err());
    }

    #[test]
    fn test_non_finite_fields_are_rejected() {
        let mut star = AstrometricObservation::stationary(10.0, 10.0, 100.0);
        star.pmdec = f64::NAN;
        assert!(to_state_vector(&star).is_err());

        let mut star = AstrometricObservation::stationary(10.0, 10.0, 100.0);
        star.rv = C_KMS;
        assert!(to_state_vector(&star).is_err());
    }

    #[test]
    fn test_radial_velocity_points_along_line_of_sight() {
        let mut star = AstrometricObservation::stationary(30.0, 45.0, 200.0);
        star.rv = 20.0;
        let state = to_state_vector(&star).unwrap();

        let direction = star.unit_vector();
        let speed_kms = state.velocity.magnitude() / 86_400.0;
        assert_relative_eq!(speed_kms, 20.0 / (1.0 - 20.0 / C_KMS), max_relative = 1e-12);
        assert_relative_eq!(
            state.velocity.dot(&direction),
            state.velocity.magnitude(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_proper_motion_is_tangential() {
        let star = AstrometricObservation {
            ra: 219.9,
            dec: -60.8,
            parallax: 747.1,
            pmra: -3678.19,
            pmdec: 481.84,
            rv: 0.0,
        };
        let state = to_state_vector(&star).unwrap();

        // Perpendicular to the line of sight
        let radial = state.velocity.dot(&state.position.scale(1.0 / state.position.magnitude()));
        assert!(radial.abs() < 1e-9 * state.velocity.magnitude());

        // Tangential speed = Av * μ / ϖ
        let mu = (star.pmra.powi(2) + star.pmdec.powi(2)).sqrt();
        let expected = AV * mu / star.parallax * 86_400.0;
        assert_relative_eq!(state.velocity.magnitude(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_north_pole_star() {
        let star = AstrometricObservation::stationary(123.0, 90.0, 100.0);
        let state = to_state_vector(&star).unwrap();
        assert_relative_eq!(state.position.z, AP / 100.0, max_relative = 1e-15);
        assert!(state.position.x.abs() < 1e-12 * AP);
    }
}
