use crate::{attractor::PointMass, gravity::GravityField, vector::Vector2};

/// A brute-force [`ComputeMethod`](super::ComputeMethod) using the CPU.
///
/// Every pair is visited once and both accelerations are accumulated from it, which keeps the
/// action and reaction of a pair exactly opposite for equal masses.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl super::ComputeMethod for BruteForce {
    fn compute(&mut self, field: &GravityField, point_masses: &[PointMass]) -> Vec<Vector2> {
        let len = point_masses.len();
        let mut accelerations = vec![Vector2::ZERO; len];

        for i in 0..len {
            let point_mass1 = &point_masses[i];
            let mut acceleration = Vector2::ZERO;

            for j in (i + 1)..len {
                let point_mass2 = &point_masses[j];

                if point_mass1.is_massless() && point_mass2.is_massless() {
                    continue;
                }

                if point_mass1.id.is_some() && point_mass1.id == point_mass2.id {
                    continue;
                }

                let (on1, on2) = field.pull_paired(point_mass1, point_mass2);

                acceleration += on1;
                accelerations[j] += on2;
            }

            accelerations[i] += acceleration;
        }

        accelerations
    }
}
