//! Newton–Raphson solver for Kepler's equation
//!
//! Solves `M = E − (180/π)·e·sin(E)` for the eccentric anomaly `E`, with all
//! angles in degrees.

use super::KeplerError;
use crate::constants::RAD2DEG;
use crate::units::{cos_deg, sin_deg};

/// Largest absolute Newton step (degrees) accepted as converged
pub const TOLERANCE_DEG: f64 = 1e-6;

/// Maximum number of Newton iterations before giving up
pub const MAX_ITERATIONS: usize = 10;

/// Eccentric anomaly together with the work it took to find it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly in degrees
    pub eccentric_anomaly: f64,
    /// Newton iterations performed
    pub iterations: usize,
}

/// Solve Kepler's equation for the eccentric anomaly
///
/// # Arguments
///
/// * `mean_anomaly` - Mean anomaly `M` in degrees, already reduced to [-180, 180)
/// * `eccentricity` - Orbital eccentricity, must lie in [0, 1)
///
/// The iteration is seeded with `E₀ = M − e·sin(M)` and stops once a Newton
/// step is no larger than [`TOLERANCE_DEG`]. Needing more than
/// [`MAX_ITERATIONS`] steps is reported as [`KeplerError::Convergence`].
/// Eccentricities outside [0, 1) and non-finite inputs are outside the
/// elliptic model and fail the same way without iterating.
///
/// # Examples
///
/// ```rust
/// use orrery::keplerlib::solve_kepler;
///
/// let solution = solve_kepler(90.0, 0.0).unwrap();
/// assert!((solution.eccentric_anomaly - 90.0).abs() < 1e-6);
/// ```
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> Result<KeplerSolution, KeplerError> {
    let convergence_error = |iterations| KeplerError::Convergence {
        mean_anomaly,
        eccentricity,
        iterations,
    };

    if !mean_anomaly.is_finite() || !(0.0..1.0).contains(&eccentricity) {
        return Err(convergence_error(0));
    }

    let e_star = RAD2DEG * eccentricity;
    let mut ecc_anomaly = mean_anomaly - eccentricity * sin_deg(mean_anomaly);
    let mut iterations = 0;

    loop {
        if iterations == MAX_ITERATIONS {
            return Err(convergence_error(iterations));
        }
        iterations += 1;

        let delta_m = mean_anomaly - (ecc_anomaly - e_star * sin_deg(ecc_anomaly));
        let delta_e = delta_m / (1.0 - eccentricity * cos_deg(ecc_anomaly));
        ecc_anomaly += delta_e;

        if delta_e.abs() <= TOLERANCE_DEG {
            return Ok(KeplerSolution {
                eccentric_anomaly: ecc_anomaly,
                iterations,
            });
        }
    }
}

/// Residual of Kepler's equation, `M − (E − e*·sin E)`, in degrees
pub fn kepler_residual(mean_anomaly: f64, eccentricity: f64, ecc_anomaly: f64) -> f64 {
    mean_anomaly - (ecc_anomaly - RAD2DEG * eccentricity * sin_deg(ecc_anomaly))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    #[test]
    fn test_converges_over_elliptic_grid() {
        let mut eccentricity = 0.0;
        while eccentricity <= 0.9 + 1e-12 {
            let mut mean_anomaly = -180.0;
            while mean_anomaly < 180.0 {
                let solution = solve_kepler(mean_anomaly, eccentricity).unwrap_or_else(|err| {
                    panic!("M={} e={} failed: {}", mean_anomaly, eccentricity, err)
                });
                assert!(solution.iterations <= MAX_ITERATIONS);
                let residual =
                    kepler_residual(mean_anomaly, eccentricity, solution.eccentric_anomaly);
                assert!(
                    residual.abs() <= TOLERANCE_DEG,
                    "residual {} for M={} e={}",
                    residual,
                    mean_anomaly,
                    eccentricity
                );
                mean_anomaly += 2.5;
            }
            eccentricity += 0.05;
        }
    }

    #[test]
    fn test_converges_for_random_inputs() {
        let mut rng = StdRng::seed_from_u64(1802);
        for _ in 0..5000 {
            let mean_anomaly = rng.gen_range(-180.0..180.0);
            let eccentricity = rng.gen_range(0.0..=0.9);
            let solution = solve_kepler(mean_anomaly, eccentricity).unwrap();
            let residual = kepler_residual(mean_anomaly, eccentricity, solution.eccentric_anomaly);
            assert!(residual.abs() <= TOLERANCE_DEG);
        }
    }

    #[test]
    fn test_iteration_cap_is_reported() {
        // Near-parabolic orbit whose Newton iteration is still oscillating after the cap
        let result = solve_kepler(-26.382599999999996, 0.99);
        assert!(matches!(
            result,
            Err(KeplerError::Convergence {
                iterations: MAX_ITERATIONS,
                ..
            })
        ));
    }

    #[rstest]
    #[case(-180.0)]
    #[case(-97.3)]
    #[case(0.0)]
    #[case(12.5)]
    #[case(179.999)]
    fn test_circular_orbit_is_identity(#[case] mean_anomaly: f64) {
        let solution = solve_kepler(mean_anomaly, 0.0).unwrap();
        assert_relative_eq!(solution.eccentric_anomaly, mean_anomaly, epsilon = TOLERANCE_DEG);
        assert_eq!(solution.iterations, 1);
    }

    #[test]
    fn test_known_value() {
        // Textbook case: M = 27°, e = 0.5 → E ≈ 48.43°
        let solution = solve_kepler(27.0, 0.5).unwrap();
        assert_relative_eq!(solution.eccentric_anomaly, 48.434, epsilon = 1e-2);
    }

    #[test]
    fn test_symmetry_in_mean_anomaly() {
        let forward = solve_kepler(63.0, 0.3).unwrap();
        let backward = solve_kepler(-63.0, 0.3).unwrap();
        assert_relative_eq!(
            forward.eccentric_anomaly,
            -backward.eccentric_anomaly,
            epsilon = 1e-9
        );
    }

    #[rstest]
    #[case(1.5)]
    #[case(1.0)]
    #[case(-0.1)]
    #[case(f64::NAN)]
    fn test_rejects_eccentricity_outside_ellipse(#[case] eccentricity: f64) {
        match solve_kepler(30.0, eccentricity) {
            Err(KeplerError::Convergence { iterations, .. }) => {
                assert!(iterations <= MAX_ITERATIONS)
            }
            other => panic!("expected convergence error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_finite_mean_anomaly() {
        assert!(solve_kepler(f64::INFINITY, 0.2).is_err());
        assert!(solve_kepler(f64::NAN, 0.2).is_err());
    }
}
