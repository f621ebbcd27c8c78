use crate::{attractor::PointMass, gravity::GravityField, vector::Vector2};

/// A brute-force [`ComputeMethod`](super::ComputeMethod) using the CPU with [rayon](https://github.com/rayon-rs/rayon).
///
/// The work is split across threads but the call only returns once every acceleration is
/// computed, so it can be used anywhere [`sequential::BruteForce`](super::sequential::BruteForce)
/// is.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl super::ComputeMethod for BruteForce {
    #[inline]
    fn compute(&mut self, field: &GravityField, point_masses: &[PointMass]) -> Vec<Vector2> {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

        point_masses
            .par_iter()
            .map(|point_mass| field.acceleration_at(point_mass.position, point_masses, point_mass.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests;
    use super::*;

    #[test]
    fn brute_force() {
        tests::acceleration_computation(BruteForce);
    }

    #[test]
    fn brute_force_degenerate_inputs() {
        tests::empty_and_single(BruteForce);
    }
}
