use log::warn;

use crate::{
    attractor::Attractor,
    body::BodyId,
    vector::{Planar, Vector2},
};

/// Gravitational constant used when none, or an invalid one, is given.
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 1.0;

/// Planar gravity field of a set of attractors.
///
/// The field strength of an attractor of mass `m` at distance `r` is `G * m / r`, directed towards
/// the attractor. The constant `G` belongs to the field value rather than to the process, so
/// independent simulations can use different constants.
///
/// Coincident positions are a singularity of the field: an attractor contributes nothing to the
/// acceleration at its own position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityField {
    gravitational_constant: f64,
}

impl Default for GravityField {
    fn default() -> Self {
        Self {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
        }
    }
}

impl GravityField {
    /// Creates a field with the given gravitational constant.
    ///
    /// A constant that is not strictly positive and finite is replaced by
    /// [`DEFAULT_GRAVITATIONAL_CONSTANT`].
    pub fn new(gravitational_constant: f64) -> Self {
        if gravitational_constant.is_finite() && gravitational_constant > 0.0 {
            Self {
                gravitational_constant,
            }
        } else {
            warn!(
                "Invalid gravitational constant {gravitational_constant}. Using {DEFAULT_GRAVITATIONAL_CONSTANT}."
            );
            Self::default()
        }
    }

    /// The gravitational constant `G` of this field.
    #[inline]
    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    /// Acceleration a single attractor causes at `point`.
    ///
    /// Zero if `point` is exactly at the attractor's position.
    #[inline]
    pub fn pull<A>(&self, point: Vector2, source: &A) -> Vector2
    where
        A: Attractor + ?Sized,
    {
        let dir = source.position() - point;
        let distance = dir.magnitude();

        if distance != 0.0 {
            dir / distance * (self.gravitational_constant * source.mass() / distance)
        } else {
            Vector2::ZERO
        }
    }

    /// Accelerations two attractors cause on each other, in the order `(on affected, on affecting)`.
    #[inline]
    pub fn pull_paired<A1, A2>(&self, affected: &A1, affecting: &A2) -> (Vector2, Vector2)
    where
        A1: Attractor + ?Sized,
        A2: Attractor + ?Sized,
    {
        let dir = affecting.position() - affected.position();
        let distance_squared = dir.length_squared();

        if distance_squared != 0.0 {
            let f = dir * self.gravitational_constant / distance_squared;

            (f * affecting.mass(), -f * affected.mass())
        } else {
            (Vector2::ZERO, Vector2::ZERO)
        }
    }

    /// Net acceleration at `point` caused by every source except the one identified by `exclude`.
    ///
    /// Sources are excluded by identity only: a different source sharing the position and mass of
    /// the excluded one still contributes.
    ///
    /// # Example
    ///
    /// ```
    /// # use orrery::prelude::*;
    /// let field = GravityField::new(1.0);
    /// let sources = [(Vector2::new(2.0, 0.0), 4.0), (Vector2::new(0.0, -1.0), 1.0)];
    ///
    /// let acceleration = field.acceleration_at(Vector2::ZERO, &sources, None);
    ///
    /// assert_eq!(acceleration, Vector2::new(2.0, -1.0));
    /// ```
    pub fn acceleration_at<I>(&self, point: Vector2, sources: I, exclude: Option<BodyId>) -> Vector2
    where
        I: IntoIterator,
        I::Item: Attractor,
    {
        sources
            .into_iter()
            .filter(|source| exclude.is_none() || source.id() != exclude)
            .fold(Vector2::ZERO, |acceleration, source| {
                acceleration + self.pull(point, &source)
            })
    }

    /// Velocity, relative to its parent, of a body at `position` on a circular orbit around a
    /// parent of mass `parent_mass` at `parent_position`.
    ///
    /// The orbit is counter-clockwise. Zero if the positions coincide.
    pub fn circular_orbit_velocity(
        &self,
        parent_position: Vector2,
        parent_mass: f64,
        position: Vector2,
    ) -> Vector2 {
        let radial = position - parent_position;

        if radial == Vector2::ZERO {
            return Vector2::ZERO;
        }

        // Centripetal balance v² / r = G * m / r.
        let speed = (self.gravitational_constant * parent_mass).sqrt();

        radial.normalized().perp() * speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attractor::PointMass;

    const EPSILON: f64 = 1E-12;

    #[test]
    fn acceleration_calculation() {
        let field = GravityField::new(3.0);
        let source = (Vector2::new(3.0, 4.0), 10.0);

        let acceleration = field.acceleration_at(Vector2::ZERO, [source], None);

        // |a| = G * m / r = 3 * 10 / 5, towards the source.
        let expected = Vector2::new(0.6, 0.8) * 6.0;
        assert!((acceleration - expected).magnitude() < EPSILON);
    }

    #[test]
    fn coincident_source_is_skipped() {
        let field = GravityField::default();
        let sources = [(Vector2::ONE, 5.0), (Vector2::new(1.0, 3.0), 2.0)];

        let acceleration = field.acceleration_at(Vector2::ONE, sources, None);

        assert!(acceleration.is_finite());
        assert!((acceleration - Vector2::new(0.0, 1.0)).magnitude() < EPSILON);
    }

    #[test]
    fn exclusion_is_by_identity() {
        let field = GravityField::default();
        let excluded = PointMass::new(Some(BodyId::next()), Vector2::new(4.0, 0.0), 8.0);
        let twin = PointMass::new(Some(BodyId::next()), Vector2::new(4.0, 0.0), 8.0);

        let acceleration = field.acceleration_at(Vector2::ZERO, [excluded, twin], excluded.id);

        assert!((acceleration - Vector2::new(2.0, 0.0)).magnitude() < EPSILON);
    }

    #[test]
    fn anonymous_sources_are_never_excluded() {
        let field = GravityField::default();
        let sources = [(Vector2::new(0.0, 2.0), 2.0)];

        let acceleration = field.acceleration_at(Vector2::ZERO, sources, Some(BodyId::next()));

        assert!((acceleration - Vector2::new(0.0, 1.0)).magnitude() < EPSILON);
    }

    #[test]
    fn no_sources_no_acceleration() {
        let field = GravityField::default();
        let sources: [(Vector2, f64); 0] = [];

        assert_eq!(field.acceleration_at(Vector2::ONE, sources, None), Vector2::ZERO);
    }

    #[test]
    fn paired_pull_matches_single_pulls() {
        let field = GravityField::new(0.5);
        let a = (Vector2::new(-1.0, 2.0), 3.0);
        let b = (Vector2::new(4.0, -2.0), 7.0);

        let (on_a, on_b) = field.pull_paired(&a, &b);

        assert!((on_a - field.pull(a.0, &b)).magnitude() < EPSILON);
        assert!((on_b - field.pull(b.0, &a)).magnitude() < EPSILON);
    }

    #[test]
    fn invalid_constant_falls_back_to_default() {
        for g in [0.0, -1.0, f64::NAN] {
            assert_eq!(
                GravityField::new(g).gravitational_constant(),
                DEFAULT_GRAVITATIONAL_CONSTANT
            );
        }
    }

    #[test]
    fn circular_orbit_velocity_balances_the_field() {
        let field = GravityField::new(2.0);
        let parent = (Vector2::new(10.0, -5.0), 50.0);
        let position = Vector2::new(10.0, 15.0);

        let velocity = field.circular_orbit_velocity(parent.0, parent.1, position);
        let acceleration = field.pull(position, &parent);
        let radius = (position - parent.0).magnitude();

        assert!(velocity.dot(position - parent.0).abs() < EPSILON);
        assert!((velocity.length_squared() / radius - acceleration.magnitude()).abs() < 1E-9);
        // Counter-clockwise: angular momentum is positive.
        assert!((position - parent.0).perp_dot(velocity) > 0.0);
        assert_eq!(
            field.circular_orbit_velocity(parent.0, parent.1, parent.0),
            Vector2::ZERO
        );
    }
}
