//! Degree-based trigonometry and unit conversions
//!
//! The JPL element tables and catalog observables are all tabulated in
//! degrees, so the engine does its trigonometry in degrees as well.

use crate::constants::{DAY_S, DEG2RAD, KM_PER_AU};

/// Sine of an angle given in degrees
#[inline]
pub fn sin_deg(angle: f64) -> f64 {
    (angle * DEG2RAD).sin()
}

/// Cosine of an angle given in degrees
#[inline]
pub fn cos_deg(angle: f64) -> f64 {
    (angle * DEG2RAD).cos()
}

/// Convert astronomical units to kilometers
#[inline]
pub fn au_to_km(au: f64) -> f64 {
    au * KM_PER_AU
}

/// Convert a speed in km/s to km/day
#[inline]
pub fn km_per_s_to_km_per_day(speed: f64) -> f64 {
    speed * DAY_S
}
