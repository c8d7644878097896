//! Reference frame rotations
//!
//! Two rotations take a planet from its orbital plane into the equatorial
//! J2000 frame:
//!
//! 1. perifocal → ecliptic, a 3-1-3 Euler sequence through the argument of
//!    perihelion, the inclination and the longitude of the ascending node;
//! 2. ecliptic → equatorial, a rotation about the x-axis (the equinox
//!    direction) by the mean obliquity of the ecliptic.
//!
//! Both are written out in closed form.

use crate::constants::{OBLIQUITY_J2000_DEG, OBLIQUITY_RATE_DEG};
use crate::coordinates::Cartesian3;
use crate::units::{cos_deg, sin_deg};

/// Mean obliquity of the ecliptic in degrees, `centuries` Julian centuries after J2000
pub fn mean_obliquity(centuries: f64) -> f64 {
    OBLIQUITY_J2000_DEG + OBLIQUITY_RATE_DEG * centuries
}

/// Rotate orbital-plane coordinates into the ecliptic frame
///
/// # Arguments
///
/// * `x_prime`, `y_prime` - Position in the orbital plane, x toward perihelion
/// * `arg_perihelion` - Argument of perihelion ω in degrees
/// * `inclination` - Inclination I in degrees
/// * `ascending_node` - Longitude of the ascending node Ω in degrees
pub fn perifocal_to_ecliptic(
    x_prime: f64,
    y_prime: f64,
    arg_perihelion: f64,
    inclination: f64,
    ascending_node: f64,
) -> Cartesian3 {
    let (sin_w, cos_w) = (sin_deg(arg_perihelion), cos_deg(arg_perihelion));
    let (sin_i, cos_i) = (sin_deg(inclination), cos_deg(inclination));
    let (sin_o, cos_o) = (sin_deg(ascending_node), cos_deg(ascending_node));

    let x = x_prime * (cos_w * cos_o - sin_w * sin_o * cos_i)
        + y_prime * (-sin_w * cos_o - cos_w * sin_o * cos_i);
    let y = x_prime * (cos_w * sin_o + sin_w * cos_o * cos_i)
        + y_prime * (-sin_w * sin_o + cos_w * cos_o * cos_i);
    let z = x_prime * sin_w * sin_i + y_prime * cos_w * sin_i;

    Cartesian3::new(x, y, z)
}

/// Rotate about the x-axis by `angle` degrees
fn rotate_about_x(v: Cartesian3, angle: f64) -> Cartesian3 {
    let (sin_a, cos_a) = (sin_deg(angle), cos_deg(angle));
    Cartesian3::new(v.x, v.y * cos_a - v.z * sin_a, v.y * sin_a + v.z * cos_a)
}

/// Rotate an ecliptic-frame vector into the equatorial J2000 frame
///
/// Uses the mean obliquity at `centuries` after J2000.
pub fn ecliptic_to_equatorial(v: Cartesian3, centuries: f64) -> Cartesian3 {
    rotate_about_x(v, mean_obliquity(centuries))
}

/// Inverse of [`ecliptic_to_equatorial`]
pub fn equatorial_to_ecliptic(v: Cartesian3, centuries: f64) -> Cartesian3 {
    rotate_about_x(v, -mean_obliquity(centuries))
}
