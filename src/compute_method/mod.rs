#[cfg(feature = "parallel")]
/// Compute methods that use multiple CPU threads.
pub mod parallel;

/// Compute methods that use one CPU thread.
pub mod sequential;

use crate::{attractor::PointMass, gravity::GravityField, vector::Vector2};

/// Trait for algorithms computing the gravitational acceleration of every
/// [`PointMass`] of a snapshot caused by all the others.
///
/// Each point mass excludes itself by identity, and coincident point masses do not act on each
/// other.
///
/// # Example
///
/// ```
/// # use orrery::prelude::*;
/// struct Frozen;
///
/// impl ComputeMethod for Frozen {
///     fn compute(&mut self, _field: &GravityField, point_masses: &[PointMass]) -> Vec<Vector2> {
///         vec![Vector2::ZERO; point_masses.len()]
///     }
/// }
/// ```
pub trait ComputeMethod {
    /// Computes the acceleration of the point masses.
    ///
    /// The returned vector has one acceleration per point mass, in the same order they were input.
    fn compute(&mut self, field: &GravityField, point_masses: &[PointMass]) -> Vec<Vector2>;
}

impl<C> ComputeMethod for &mut C
where
    C: ComputeMethod + ?Sized,
{
    #[inline]
    fn compute(&mut self, field: &GravityField, point_masses: &[PointMass]) -> Vec<Vector2> {
        (**self).compute(field, point_masses)
    }
}
