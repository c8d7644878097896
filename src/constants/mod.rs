//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Astronomical distances
/// Astronomical Unit in kilometers, as used by the JPL low-precision element tables
pub const KM_PER_AU: f64 = 1.496e8;
/// Parsec in kilometers
pub const KM_PER_PARSEC: f64 = 3.086e13;
/// Kilometers per unit of inverse parallax in milliarcseconds (distance = AP / parallax_mas)
pub const AP: f64 = 1000.0 * KM_PER_PARSEC;
/// Astronomical unit expressed in km·yr/s, linking proper motion, parallax and tangential velocity
pub const AV: f64 = 4.74074;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

/// Mean obliquity of the ecliptic at J2000 in degrees
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_11;
/// Linear drift of the mean obliquity in degrees per Julian century
pub const OBLIQUITY_RATE_DEG: f64 = -0.013_004_167;

// Physics
/// Speed of light in km/s
pub const C_KMS: f64 = 299_792.458;
/// Solar GM in km^3/s^2 (Pitjeva 2005)
pub const GM_SUN: f64 = 132_712_440_042.0;
