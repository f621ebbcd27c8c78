use log::{debug, trace, warn};

use crate::{
    attractor::{Attractor, PointMass},
    body::{Body, BodyId},
    color::Color,
    compute_method::{sequential, ComputeMethod},
    config::PredictionConfig,
    engine::SimulationEngine,
    gravity::GravityField,
    vector::Vector2,
};

/// Points reserved up front for each path, the rest grow on demand.
const RESERVED_POINTS: usize = 1024;

/// Value copy of the state of a [`Body`] used by predictions.
///
/// Advancing it never affects the body it was copied from.
#[derive(Debug, Clone, Copy, PartialEq, Attractor)]
pub struct VirtualBody {
    /// Identity of the copied body.
    pub id: BodyId,
    /// Predicted position.
    pub position: Vector2,
    /// Predicted velocity.
    pub velocity: Vector2,
    /// Mass of the copied body.
    pub mass: f64,
}

impl VirtualBody {
    /// Copies the current state of a body.
    #[inline]
    pub fn of(body: &Body) -> Self {
        Self {
            id: body.id(),
            position: body.position(),
            velocity: body.velocity(),
            mass: body.mass(),
        }
    }
}

/// Predicted trajectory of one body.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Identity of the body the path belongs to.
    pub body: BodyId,
    /// Color of the body.
    pub color: Color,
    /// Predicted positions, one per step.
    pub points: Vec<Vector2>,
}

/// Forward simulation of copies of the live bodies, producing their predicted trajectories.
///
/// Predictions advance at a fixed time step, independent of the wall clock and of the speed of the
/// engine, using the same two-pass integration as [`SimulationEngine::tick`]. Every call starts
/// over from the current state of the bodies and leaves them untouched.
#[derive(Debug, Clone)]
pub struct TrajectoryPredictor<C = sequential::BruteForce> {
    horizon: usize,
    time_step: f64,
    compute_method: C,
}

impl TrajectoryPredictor {
    /// Creates a predictor running `horizon` steps of `time_step` simulated seconds.
    pub fn new(horizon: usize, time_step: f64) -> Self {
        Self::with_compute_method(horizon, time_step, sequential::BruteForce)
    }

    /// Creates a predictor from the prediction section of a configuration.
    pub fn from_config(config: &PredictionConfig) -> Self {
        Self::new(config.horizon, config.time_step)
    }
}

impl Default for TrajectoryPredictor {
    fn default() -> Self {
        Self::from_config(&PredictionConfig::default())
    }
}

impl<C: ComputeMethod> TrajectoryPredictor<C> {
    /// Creates a predictor computing accelerations with the given [`ComputeMethod`].
    ///
    /// A time step that is not finite is replaced by the default one.
    pub fn with_compute_method(horizon: usize, time_step: f64, compute_method: C) -> Self {
        let time_step = if time_step.is_finite() {
            time_step
        } else {
            let default = PredictionConfig::default().time_step;
            warn!("Invalid prediction time step {time_step}. Using {default}.");
            default
        };

        Self {
            horizon,
            time_step,
            compute_method,
        }
    }

    /// Number of points of every predicted path.
    #[inline]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Simulated time between two points of a path.
    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Predicts the trajectories of the bodies of an engine, in the order of its bodies.
    ///
    /// In relative mode, the paths are drawn in the frame of `reference`, or of the central body
    /// of the engine if `reference` is `None`: the reference body stays at its current position
    /// and every other point is shifted by the displacement of the reference body. A reference
    /// unknown to the engine falls back to the world frame.
    ///
    /// ```
    /// # use orrery::prelude::*;
    /// let mut engine = SimulationEngine::new();
    /// engine.add_body(BodyConfig::named("Sun").shaped(10.0, 10.0, 1.0));
    /// engine.add_body(BodyConfig::named("Moon").at((50.0, 0.0)).moving((0.0, 30.0)));
    ///
    /// let mut predictor = TrajectoryPredictor::new(100, 0.1);
    /// let sun = engine.bodies()[0].id();
    /// let paths = predictor.compute_paths(&engine, true, Some(sun));
    ///
    /// assert_eq!(paths.len(), 2);
    /// assert!(paths[0].points.iter().all(|&point| point == Vector2::ZERO));
    /// assert_eq!(paths[1].points.len(), 100);
    /// ```
    pub fn compute_paths<E>(
        &mut self,
        engine: &SimulationEngine<E>,
        relative: bool,
        reference: Option<BodyId>,
    ) -> Vec<Path>
    where
        E: ComputeMethod,
    {
        let reference = if relative {
            reference.or(engine.central_body_id())
        } else {
            None
        };

        self.predict(engine.bodies(), engine.field(), reference)
    }

    /// Predicts the trajectories of `bodies` in `field`, in the frame of `reference` if it is one
    /// of them and in the world frame otherwise.
    pub fn predict(
        &mut self,
        bodies: &[Body],
        field: &GravityField,
        reference: Option<BodyId>,
    ) -> Vec<Path> {
        if bodies.is_empty() {
            return Vec::new();
        }

        let mut virtual_bodies: Vec<_> = bodies.iter().map(VirtualBody::of).collect();

        let reference = reference.and_then(|id| {
            let index = virtual_bodies.iter().position(|body| body.id == id);

            if index.is_none() {
                debug!("Reference body {id} not found, predicting in world frame");
            }

            index.map(|index| (index, virtual_bodies[index].position))
        });

        let mut paths: Vec<_> = bodies
            .iter()
            .map(|body| Path {
                body: body.id(),
                color: body.color(),
                points: Vec::with_capacity(self.horizon.min(RESERVED_POINTS)),
            })
            .collect();

        trace!(
            "Predicting {} bodies over {} steps",
            virtual_bodies.len(),
            self.horizon
        );

        for _ in 0..self.horizon {
            self.step(field, &mut virtual_bodies);

            let offset = reference.map_or(Vector2::ZERO, |(index, initial)| {
                virtual_bodies[index].position - initial
            });

            for (index, (body, path)) in virtual_bodies.iter().zip(&mut paths).enumerate() {
                let point = match reference {
                    Some((reference_index, initial)) if reference_index == index => initial,
                    _ => body.position - offset,
                };

                path.points.push(point);
            }
        }

        paths
    }

    fn step(&mut self, field: &GravityField, virtual_bodies: &mut [VirtualBody]) {
        let point_masses: Vec<_> = virtual_bodies.iter().map(PointMass::of).collect();
        let accelerations = self.compute_method.compute(field, &point_masses);

        for (body, acceleration) in virtual_bodies.iter_mut().zip(accelerations) {
            body.velocity += acceleration * self.time_step;
        }

        for body in virtual_bodies.iter_mut() {
            body.position += body.velocity * self.time_step;
        }
    }
}

/// Predicted paths kept between frames.
///
/// While the engine runs, the paths are recomputed on every call. While it is paused, they are
/// computed once and then reused until the cache is invalidated. That happens when the relative
/// flag or the reference changes, when a body is added to the engine or its central body changes,
/// when the horizon or time step of the predictor differs, or with
/// [`invalidate`](Self::invalidate).
#[derive(Debug, Clone, Default)]
pub struct PathCache {
    paths: Vec<Path>,
    key: Option<CacheKey>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheKey {
    relative: bool,
    reference: Option<BodyId>,
    revision: u64,
    horizon: usize,
    time_step: f64,
}

impl PathCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the paths for the current state of `engine`, recomputing them if needed.
    pub fn paths<C, E>(
        &mut self,
        predictor: &mut TrajectoryPredictor<C>,
        engine: &SimulationEngine<E>,
        relative: bool,
        reference: Option<BodyId>,
    ) -> &[Path]
    where
        C: ComputeMethod,
        E: ComputeMethod,
    {
        let key = CacheKey {
            relative,
            reference,
            revision: engine.revision(),
            horizon: predictor.horizon(),
            time_step: predictor.time_step(),
        };

        if !engine.is_paused() || self.key != Some(key) {
            self.paths = predictor.compute_paths(engine, relative, reference);
            self.key = Some(key);
        }

        &self.paths
    }

    /// Forces the next call to [`paths`](Self::paths) to recompute.
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// The paths computed last, possibly outdated.
    #[inline]
    pub fn cached(&self) -> &[Path] {
        &self.paths
    }
}
