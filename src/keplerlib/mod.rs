//! Keplerian orbits from JPL low-precision elements
//!
//! - [`solver`]: Newton–Raphson solution of Kepler's equation
//! - [`elements`]: orbital elements with secular rates
//! - [`propagator`]: elements + time → equatorial J2000 position

use thiserror::Error;

pub mod elements;
pub mod propagator;
pub mod solver;

pub use elements::{reduce_angle, ElementSet, OrbitalElements};
pub use propagator::{
    centuries_since_j2000, mean_motion_per_century, orbital_period_days, propagate,
    propagate_ecliptic, InvalidElements, Propagation, ECCENTRICITY_CEILING,
};
pub use solver::{solve_kepler, KeplerSolution, MAX_ITERATIONS, TOLERANCE_DEG};

/// Error type for Keplerian propagation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KeplerError {
    /// Kepler's equation could not be solved within the iteration cap
    #[error(
        "Kepler's equation did not converge after {iterations} iterations (M = {mean_anomaly}°, e = {eccentricity})"
    )]
    Convergence {
        /// Mean anomaly in degrees
        mean_anomaly: f64,
        /// Eccentricity handed to the solver
        eccentricity: f64,
        /// Iterations performed before giving up
        iterations: usize,
    },
}
