//! # Cartesian Vector Module
//!
//! This module provides the 3D Cartesian vector type that every position and
//! velocity in the engine is expressed in.
//!
//! ## Coordinate System Convention
//!
//! Unless stated otherwise, vectors live in the equatorial J2000 frame:
//! - **X-axis**: Points toward the vernal equinox (RA = 0°, Dec = 0°)
//! - **Y-axis**: Points toward RA = 90°, Dec = 0°
//! - **Z-axis**: Points toward the north celestial pole (Dec = +90°)
//!
//! Positions are in kilometers, velocities in kilometers per day.
//!
//! ## Value Semantics
//!
//! `Cartesian3` is `Copy` and immutable: every operation returns a new value,
//! so a vector captured by a position function can never be altered by a
//! later evaluation.
//!
//! ## Examples
//!
//! ```rust
//! use orrery::coordinates::cartesian::Cartesian3;
//!
//! let origin = Cartesian3::new(1.0, 2.0, 3.0);
//! let velocity = Cartesian3::new(0.5, 0.0, -1.0);
//!
//! // Linear motion after two days
//! let later = origin.add(velocity.scale(2.0));
//! assert_eq!(later, Cartesian3::new(2.0, 2.0, 1.0));
//! ```

use nalgebra::Vector3;
use std::f64::consts::PI;

/// Three-dimensional Cartesian vector
///
/// Represents a position (km) or velocity (km/day) in 3D space.
///
/// # Coordinate System
///
/// - **X**: Toward vernal equinox (RA = 0°, Dec = 0°)
/// - **Y**: Toward RA = 90°, Dec = 0°
/// - **Z**: Toward north celestial pole (Dec = +90°)
///
/// # Finiteness
///
/// The arithmetic is total over finite inputs. Producers of vectors (the
/// propagator and the astrometric transform) reject inputs that would
/// yield NaN or infinite components; [`Cartesian3::is_finite`] lets callers
/// verify this.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartesian3 {
    /// X-component (toward vernal equinox)
    pub x: f64,
    /// Y-component (toward RA = 90°)
    pub y: f64,
    /// Z-component (toward north celestial pole)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 0.0, 0.0);
    /// assert_eq!(coord.x, 1.0);
    /// assert_eq!(coord.y, 0.0);
    /// assert_eq!(coord.z, 0.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// The zero vector (the frame origin)
    pub const fn zero() -> Self {
        Cartesian3::new(0.0, 0.0, 0.0)
    }

    /// Creates a vector from spherical coordinates
    ///
    /// # Arguments
    ///
    /// * `ra` - Right ascension in radians
    /// * `dec` - Declination in radians
    /// * `distance` - Distance from origin (1.0 for unit vectors)
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = distance * cos(dec) * cos(ra)`
    /// - `y = distance * cos(dec) * sin(ra)`
    /// - `z = distance * sin(dec)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::cartesian::Cartesian3;
    /// use std::f64::consts::PI;
    ///
    /// // North celestial pole (Dec = 90°)
    /// let north_pole = Cartesian3::from_spherical(0.0, PI / 2.0, 1.0);
    /// assert!((north_pole.x).abs() < 1e-15);
    /// assert!((north_pole.y).abs() < 1e-15);
    /// assert!((north_pole.z - 1.0).abs() < 1e-15);
    /// ```
    pub fn from_spherical(ra: f64, dec: f64, distance: f64) -> Self {
        let cos_dec = dec.cos();
        Cartesian3 {
            x: distance * cos_dec * ra.cos(),
            y: distance * cos_dec * ra.sin(),
            z: distance * dec.sin(),
        }
    }

    /// Converts to spherical coordinates
    ///
    /// Returns `(ra, dec, distance)` with right ascension normalized to
    /// [0, 2π) and declination in [-π/2, π/2], both in radians.
    pub fn to_spherical(&self) -> (f64, f64, f64) {
        let distance = self.magnitude();

        if distance == 0.0 {
            return (0.0, 0.0, 0.0);
        }

        let dec = (self.z / distance).asin();
        let ra = if self.x == 0.0 && self.y == 0.0 {
            0.0 // Arbitrary choice at poles
        } else {
            let mut ra = self.y.atan2(self.x);
            if ra < 0.0 {
                ra += 2.0 * PI;
            }
            ra
        };

        (ra, dec, distance)
    }

    /// Component-wise sum of two vectors
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Multiplies every component by `factor`
    pub fn scale(self, factor: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Euclidean length of the vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(3.0, 4.0, 0.0);
    /// assert_eq!(coord.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Distance between two points
    pub fn distance_to(&self, other: &Cartesian3) -> f64 {
        (*self - *other).magnitude()
    }

    /// True when no component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from(vec: Vector3<f64>) -> Self {
        Cartesian3::from_vector3(vec)
    }
}

impl From<Cartesian3> for Vector3<f64> {
    fn from(coord: Cartesian3) -> Self {
        coord.to_vector3()
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3::add(self, other)
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        self.scale(scalar)
    }
}

impl std::ops::Neg for Cartesian3 {
    type Output = Cartesian3;

    fn neg(self) -> Cartesian3 {
        self.scale(-1.0)
    }
}
