/// Planar vector used for positions, velocities and accelerations.
///
/// Arithmetic (`+`, `-`, componentwise `*` and `/`, scalar `*` and `/`) and value equality come
/// from [`glam::DVec2`]. The [`Planar`] trait adds the few operations the simulation relies on
/// with the semantics it needs, notably a normalization that never produces `NaN`.
pub type Vector2 = glam::DVec2;

/// Extension methods on [`Vector2`].
///
/// # Example
///
/// ```
/// # use orrery::prelude::*;
/// let v = Vector2::new(3.0, 4.0);
///
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v.normalized(), Vector2::new(0.6, 0.8));
/// assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
/// ```
pub trait Planar: Sized {
    /// Euclidean norm of the vector.
    fn magnitude(self) -> f64;

    /// Unit vector with the same direction, or the zero vector if the magnitude is exactly zero.
    fn normalized(self) -> Self;

    /// Angle of the vector from the positive x axis, `atan2(y, x)`, in radians.
    fn angle(self) -> f64;

    /// Componentwise division returning `None` if any component of `rhs` is zero.
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

impl Planar for Vector2 {
    #[inline]
    fn magnitude(self) -> f64 {
        self.length()
    }

    #[inline]
    fn normalized(self) -> Self {
        let magnitude = self.magnitude();

        if magnitude > 0.0 {
            self / magnitude
        } else {
            Vector2::ZERO
        }
    }

    #[inline]
    fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        (rhs.x != 0.0 && rhs.y != 0.0).then(|| self / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1E-12;

    #[test]
    fn normalize_zero_vector() {
        let normalized = Vector2::ZERO.normalized();

        assert_eq!(normalized, Vector2::ZERO);
        assert!(!normalized.is_nan());
    }

    #[test]
    fn normalize_has_unit_length() {
        for v in [
            Vector2::new(5.0, 1.0),
            Vector2::new(-3.0, 0.5),
            Vector2::new(0.0, -1E-9),
        ] {
            assert!((v.normalized().magnitude() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn angle_quadrants() {
        use std::f64::consts::{FRAC_PI_2, PI};

        assert_eq!(Vector2::X.angle(), 0.0);
        assert!((Vector2::Y.angle() - FRAC_PI_2).abs() < EPSILON);
        assert!((Vector2::NEG_X.angle() - PI).abs() < EPSILON);
        assert!((Vector2::NEG_Y.angle() + FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn componentwise_operations() {
        let a = Vector2::new(2.0, 3.0);
        let b = Vector2::new(4.0, -1.0);

        assert_eq!(a + b, Vector2::new(6.0, 2.0));
        assert_eq!(a - b, Vector2::new(-2.0, 4.0));
        assert_eq!(a * b, Vector2::new(8.0, -3.0));
        assert_eq!(a * 2.0, Vector2::new(4.0, 6.0));
        assert_eq!(b / 2.0, Vector2::new(2.0, -0.5));
    }

    #[test]
    fn checked_division() {
        let a = Vector2::new(2.0, 3.0);

        assert_eq!(a.checked_div(Vector2::new(2.0, 3.0)), Some(Vector2::ONE));
        assert_eq!(a.checked_div(Vector2::new(0.0, 3.0)), None);
        assert_eq!(a.checked_div(Vector2::new(2.0, 0.0)), None);
    }
}
