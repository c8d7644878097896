//! Time-to-position functions
//!
//! Every body's motion is described by a [`PositionFn`]: a small value type
//! that maps a time `t` (days since J2000, any sign or magnitude) to a
//! position in km. The variants compose, so a moon can be expressed as an
//! offset relative to its planet and the result is again a `PositionFn`.
//!
//! Evaluation holds no mutable state, so a `PositionFn` can be sampled
//! repeatedly, out of order, or from several threads at once.

use crate::astrometry::StateVector;
use crate::coordinates::Cartesian3;
use crate::keplerlib::{propagate, KeplerError, OrbitalElements};

/// Anything that has a position as a function of time
pub trait TimeFn {
    /// Position in km at `t` days since J2000
    fn position_at(&self, t: f64) -> Result<Cartesian3, KeplerError>;
}

/// Closed set of position functions
#[derive(Debug, Clone, PartialEq)]
pub enum PositionFn {
    /// Stationary point
    Fixed(Cartesian3),
    /// Linear motion `origin + velocity·t`, velocity in km/day
    ConstantVelocity {
        origin: Cartesian3,
        velocity: Cartesian3,
    },
    /// `parent(t) + offset(t)`
    RelativeTo {
        parent: Box<PositionFn>,
        offset: Box<PositionFn>,
    },
    /// Heliocentric Keplerian orbit
    Keplerian(OrbitalElements),
}

impl PositionFn {
    /// A body that never moves
    pub fn fixed(position: Cartesian3) -> Self {
        PositionFn::Fixed(position)
    }

    /// A body moving in a straight line from `origin` at J2000
    pub fn constant_velocity(origin: Cartesian3, velocity: Cartesian3) -> Self {
        PositionFn::ConstantVelocity { origin, velocity }
    }

    /// `offset` expressed relative to `parent`
    pub fn relative_to(parent: PositionFn, offset: PositionFn) -> Self {
        PositionFn::RelativeTo {
            parent: Box::new(parent),
            offset: Box::new(offset),
        }
    }

    /// A body on the given heliocentric orbit
    pub fn keplerian(elements: OrbitalElements) -> Self {
        PositionFn::Keplerian(elements)
    }

    /// Evaluate the function at `t` days since J2000
    ///
    /// # Errors
    ///
    /// Only Keplerian terms can fail, when the solver does not converge.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::Cartesian3;
    /// use orrery::positions::PositionFn;
    ///
    /// let star = PositionFn::constant_velocity(
    ///     Cartesian3::new(1.0e13, 0.0, 0.0),
    ///     Cartesian3::new(0.0, 2.0e6, 0.0),
    /// );
    /// let p = star.evaluate(-10.0).unwrap();
    /// assert_eq!(p, Cartesian3::new(1.0e13, -2.0e7, 0.0));
    /// ```
    pub fn evaluate(&self, t: f64) -> Result<Cartesian3, KeplerError> {
        match self {
            PositionFn::Fixed(position) => Ok(*position),
            PositionFn::ConstantVelocity { origin, velocity } => {
                Ok(origin.add(velocity.scale(t)))
            }
            PositionFn::RelativeTo { parent, offset } => {
                Ok(parent.evaluate(t)?.add(offset.evaluate(t)?))
            }
            PositionFn::Keplerian(elements) => Ok(propagate(elements, t)?.position),
        }
    }

    /// Velocity in km/day when it does not depend on time
    pub fn constant_velocity_of(&self) -> Option<Cartesian3> {
        match self {
            PositionFn::Fixed(_) => Some(Cartesian3::zero()),
            PositionFn::ConstantVelocity { velocity, .. } => Some(*velocity),
            PositionFn::RelativeTo { parent, offset } => Some(
                parent
                    .constant_velocity_of()?
                    .add(offset.constant_velocity_of()?),
            ),
            PositionFn::Keplerian(_) => None,
        }
    }
}

impl TimeFn for PositionFn {
    fn position_at(&self, t: f64) -> Result<Cartesian3, KeplerError> {
        self.evaluate(t)
    }
}

impl From<StateVector> for PositionFn {
    fn from(state: StateVector) -> Self {
        PositionFn::constant_velocity(state.position, state.velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keplerlib::{orbital_period_days, ElementSet};
    use crate::planetlib::Planet;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(-1.0e9)]
    #[case(3.5)]
    #[case(1.0e12)]
    fn test_fixed_ignores_time(#[case] t: f64) {
        let p = Cartesian3::new(1.0, -2.0, 3.0);
        assert_eq!(PositionFn::fixed(p).evaluate(t).unwrap(), p);
    }

    #[test]
    fn test_constant_velocity_moves_both_ways() {
        let f = PositionFn::constant_velocity(
            Cartesian3::new(10.0, 0.0, 0.0),
            Cartesian3::new(1.0, 2.0, -1.0),
        );
        assert_eq!(f.evaluate(0.0).unwrap(), Cartesian3::new(10.0, 0.0, 0.0));
        assert_eq!(f.evaluate(5.0).unwrap(), Cartesian3::new(15.0, 10.0, -5.0));
        assert_eq!(f.evaluate(-5.0).unwrap(), Cartesian3::new(5.0, -10.0, 5.0));
        assert_eq!(f.constant_velocity_of(), Some(Cartesian3::new(1.0, 2.0, -1.0)));
    }

    #[test]
    fn test_relative_to_adds_parent_and_offset() {
        let parent =
            PositionFn::constant_velocity(Cartesian3::zero(), Cartesian3::new(1.0, 0.0, 0.0));
        let offset = PositionFn::fixed(Cartesian3::new(0.0, 100.0, 0.0));
        let child = PositionFn::relative_to(parent.clone(), offset.clone());

        for t in [-3.0, 0.0, 7.5] {
            let expected = parent.evaluate(t).unwrap() + offset.evaluate(t).unwrap();
            assert_eq!(child.evaluate(t).unwrap(), expected);
        }
        assert_eq!(child.constant_velocity_of(), Some(Cartesian3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_moon_around_planet() {
        // A circular "moon" orbit, 0.00257 AU from its planet, nested under Earth
        let moon_orbit = OrbitalElements::new(
            ElementSet::new(0.00257, 0.0, 5.1, 0.0, 0.0, 0.0),
            ElementSet::new(0.0, 0.0, 0.0, 36525.0 * 360.0 / 27.32, 0.0, 0.0),
        );
        let earth = PositionFn::keplerian(Planet::EarthMoonBarycenter.elements());
        let moon = PositionFn::relative_to(earth.clone(), PositionFn::keplerian(moon_orbit));

        for t in [-400.0, 0.0, 12.0, 9000.0] {
            let separation = moon.evaluate(t).unwrap() - earth.evaluate(t).unwrap();
            assert_relative_eq!(separation.magnitude(), 0.00257 * 1.496e8, max_relative = 1e-9);
        }
        assert_eq!(moon.constant_velocity_of(), None);
    }

    #[test]
    fn test_nested_composition_is_closed() {
        let star = PositionFn::constant_velocity(
            Cartesian3::new(1.0e14, 0.0, 0.0),
            Cartesian3::new(0.0, 1.0e5, 0.0),
        );
        let planet = PositionFn::relative_to(
            star.clone(),
            PositionFn::keplerian(Planet::Jupiter.elements()),
        );
        let moon = PositionFn::relative_to(
            planet.clone(),
            PositionFn::fixed(Cartesian3::new(0.0, 0.0, 4.0e5)),
        );

        let t = 2_000.0;
        let expected = star.evaluate(t).unwrap()
            + Planet::Jupiter.position(t).unwrap()
            + Cartesian3::new(0.0, 0.0, 4.0e5);
        let actual = moon.evaluate(t).unwrap();
        assert!(actual.distance_to(&expected) < 1.0);
    }

    #[test]
    fn test_keplerian_matches_planet_and_repeats() {
        let elements = Planet::Mars.elements();
        let f = PositionFn::keplerian(elements);
        let t = -12_345.6;
        assert_eq!(f.evaluate(t).unwrap(), Planet::Mars.position(t).unwrap());
        // Sampling out of order gives identical answers
        let later = f.evaluate(t + orbital_period_days(1.52)).unwrap();
        assert_eq!(f.evaluate(t).unwrap(), f.position_at(t).unwrap());
        assert_ne!(later, f.evaluate(t).unwrap());
    }

    #[test]
    fn test_from_state_vector() {
        let state = StateVector {
            position: Cartesian3::new(1.0, 2.0, 3.0),
            velocity: Cartesian3::new(-1.0, 0.0, 0.5),
        };
        let f = PositionFn::from(state);
        assert_eq!(f.evaluate(2.0).unwrap(), Cartesian3::new(-1.0, 2.0, 4.0));
    }

    #[test]
    fn test_position_functions_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PositionFn>();

        let f = PositionFn::keplerian(Planet::Saturn.elements());
        let expected = f.evaluate(777.0).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| f.evaluate(777.0).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
