use crate::{body::BodyId, vector::Vector2};

/// Derive macro generating an implementation of the trait [`Attractor`].
pub use orrery_derive::Attractor;

/// Trait to describe a source of gravity, which consists of a [position](Attractor::position), a
/// [mass](Attractor::mass) and optionally an [identity](Attractor::id).
///
/// The identity is what [`GravityField::acceleration_at`](crate::gravity::GravityField::acceleration_at)
/// uses to exclude a body from the sources acting on itself. Two attractors with the same position
/// and mass are still distinct if their identities differ.
///
/// #### Deriving:
///
/// Used when the type has fields named `position` and `mass`, and optionally `id`:
///
/// ```
/// # use orrery::prelude::*;
/// #[derive(Attractor)]
/// struct Probe {
///     id: BodyId,
///     position: Vector2,
///     mass: f64,
/// //  ...
/// }
/// ```
/// #### Manual implementation:
///
/// ```
/// # use orrery::prelude::*;
/// struct Moon {
///     position: Vector2,
///     density: f64,
///     volume: f64,
/// }
///
/// impl Attractor for Moon {
///     fn position(&self) -> Vector2 {
///         self.position
///     }
///
///     fn mass(&self) -> f64 {
///         self.density * self.volume
///     }
/// }
/// ```
///
/// It is also implemented for tuples of a position and a mass, which are anonymous attractors.
///
/// ```
/// # use orrery::prelude::*;
/// let attractor = (Vector2::ONE, 5.0);
///
/// assert_eq!(attractor.position(), Vector2::ONE);
/// assert_eq!(attractor.mass(), 5.0);
/// assert_eq!(attractor.id(), None);
/// ```
pub trait Attractor {
    /// The position of the attractor.
    fn position(&self) -> Vector2;

    /// The mass of the attractor.
    fn mass(&self) -> f64;

    /// The identity of the attractor, if it has one.
    #[inline]
    fn id(&self) -> Option<BodyId> {
        None
    }
}

impl Attractor for (Vector2, f64) {
    #[inline]
    fn position(&self) -> Vector2 {
        self.0
    }

    #[inline]
    fn mass(&self) -> f64 {
        self.1
    }
}

impl<A> Attractor for &A
where
    A: Attractor + ?Sized,
{
    #[inline]
    fn position(&self) -> Vector2 {
        (**self).position()
    }

    #[inline]
    fn mass(&self) -> f64 {
        (**self).mass()
    }

    #[inline]
    fn id(&self) -> Option<BodyId> {
        (**self).id()
    }
}

impl<A> Attractor for &mut A
where
    A: Attractor + ?Sized,
{
    #[inline]
    fn position(&self) -> Vector2 {
        (**self).position()
    }

    #[inline]
    fn mass(&self) -> f64 {
        (**self).mass()
    }

    #[inline]
    fn id(&self) -> Option<BodyId> {
        (**self).id()
    }
}

/// Value snapshot of an attractor: its identity, position and mass at one instant.
///
/// Compute methods work on slices of these so that the positions every acceleration is computed
/// from stay frozen for the whole computation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointMass {
    /// Identity of the snapshotted attractor.
    pub id: Option<BodyId>,
    /// Position of the attractor.
    pub position: Vector2,
    /// Mass of the attractor.
    pub mass: f64,
}

impl PointMass {
    /// Creates a new [`PointMass`] with the given identity, position and mass.
    #[inline]
    pub const fn new(id: Option<BodyId>, position: Vector2, mass: f64) -> Self {
        Self { id, position, mass }
    }

    /// Snapshots an attractor.
    #[inline]
    pub fn of<A>(attractor: &A) -> Self
    where
        A: Attractor + ?Sized,
    {
        Self::new(attractor.id(), attractor.position(), attractor.mass())
    }

    /// Returns true if the mass is zero.
    #[inline]
    pub fn is_massless(&self) -> bool {
        self.mass == 0.0
    }
}

impl Attractor for PointMass {
    #[inline]
    fn position(&self) -> Vector2 {
        self.position
    }

    #[inline]
    fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    fn id(&self) -> Option<BodyId> {
        self.id
    }
}
