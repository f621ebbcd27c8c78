use log::{debug, info, warn};

use crate::{
    attractor::PointMass,
    body::{Body, BodyConfig, BodyId},
    compute_method::{sequential, ComputeMethod},
    config::{PhysicsConfig, SimulationConfig},
    gravity::GravityField,
};

/// Run state of a [`SimulationEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationState {
    /// Ticks are ignored.
    #[default]
    Paused,
    /// Ticks advance the bodies.
    Running,
}

/// Owner of the live bodies, advancing them with a two-pass semi-implicit Euler integrator.
///
/// Every tick, accelerations are computed from the positions at the start of the tick, then every
/// velocity is updated, then every position. The wall-clock delta given to [`tick`](Self::tick) is
/// scaled by the simulation speed.
///
/// ```
/// # use orrery::prelude::*;
/// let mut engine = SimulationEngine::new();
/// engine.add_body(BodyConfig::named("Drifter").moving((2.0, 0.0)));
///
/// engine.tick(1.0);
/// assert_eq!(engine.bodies()[0].position(), Vector2::ZERO);
///
/// engine.toggle_pause();
/// engine.tick(1000.0);
/// assert_eq!(engine.bodies()[0].position(), Vector2::new(2.0, 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct SimulationEngine<C = sequential::BruteForce> {
    bodies: Vec<Body>,
    state: SimulationState,
    speed: f64,
    min_speed: f64,
    max_speed: f64,
    central_body: Option<BodyId>,
    field: GravityField,
    trail_capacity: usize,
    compute_method: C,
    revision: u64,
    ticks: u64,
    elapsed: f64,
}

impl SimulationEngine {
    /// Creates an empty, paused engine with the default physics.
    pub fn new() -> Self {
        Self::with_compute_method(&PhysicsConfig::default(), sequential::BruteForce)
    }

    /// Creates a paused engine from a configuration, populated with its scenario followed by its
    /// extra bodies.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut engine = Self::with_compute_method(&config.physics, sequential::BruteForce);
        engine.populate(config);
        engine
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ComputeMethod> SimulationEngine<C> {
    /// Creates an empty, paused engine with the given physics, computing accelerations with the
    /// given [`ComputeMethod`].
    ///
    /// Invalid speed bounds are replaced by the default ones and the initial speed is clamped into
    /// the bounds.
    pub fn with_compute_method(physics: &PhysicsConfig, compute_method: C) -> Self {
        let defaults = PhysicsConfig::default();
        let (min_speed, max_speed) = if physics.min_speed.is_finite()
            && physics.max_speed.is_finite()
            && 0.0 < physics.min_speed
            && physics.min_speed <= physics.max_speed
        {
            (physics.min_speed, physics.max_speed)
        } else {
            warn!(
                "Invalid speed bounds [{}, {}]. Using [{}, {}].",
                physics.min_speed, physics.max_speed, defaults.min_speed, defaults.max_speed
            );
            (defaults.min_speed, defaults.max_speed)
        };

        let speed = if physics.initial_speed.is_nan() {
            warn!("Invalid initial speed. Using {}.", defaults.initial_speed);
            defaults.initial_speed.clamp(min_speed, max_speed)
        } else {
            physics.initial_speed.clamp(min_speed, max_speed)
        };

        Self {
            bodies: Vec::new(),
            state: SimulationState::Paused,
            speed,
            min_speed,
            max_speed,
            central_body: None,
            field: GravityField::new(physics.gravitational_constant),
            trail_capacity: physics.trail_capacity,
            compute_method,
            revision: 0,
            ticks: 0,
            elapsed: 0.0,
        }
    }

    /// Adds the scenario and the extra bodies of a configuration.
    pub fn populate(&mut self, config: &SimulationConfig) {
        config.scenario.populate(self);

        for body in &config.bodies {
            self.add_body(body.clone());
        }
    }

    /// Advances the simulation by `dt` seconds of wall-clock time, scaled by the speed.
    ///
    /// Does nothing while paused. A non-finite `dt` is ignored.
    pub fn tick(&mut self, dt: f64) {
        if self.state == SimulationState::Paused {
            return;
        }

        if !dt.is_finite() {
            warn!("Ignoring tick with non-finite delta {dt}");
            return;
        }

        let dt = dt * self.speed;
        let point_masses: Vec<_> = self.bodies.iter().map(PointMass::of).collect();
        let accelerations = self.compute_method.compute(&self.field, &point_masses);

        for (body, acceleration) in self.bodies.iter_mut().zip(accelerations) {
            body.update_velocity(acceleration, dt);
        }

        for body in &mut self.bodies {
            body.update_position(dt);
        }

        self.ticks += 1;
        self.elapsed += dt;
    }

    /// Switches between [`Paused`](SimulationState::Paused) and
    /// [`Running`](SimulationState::Running).
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SimulationState::Paused => SimulationState::Running,
            SimulationState::Running => SimulationState::Paused,
        };

        info!("Simulation {:?}", self.state);
    }

    /// Returns true if ticks are currently ignored.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == SimulationState::Paused
    }

    /// The current run state.
    #[inline]
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Multiplies the speed by `factor`.
    ///
    /// The change is rejected, leaving the speed unchanged, if the new speed falls outside the
    /// speed bounds. Returns whether the change was applied.
    ///
    /// ```
    /// # use orrery::prelude::*;
    /// let mut engine = SimulationEngine::new();
    /// let speed = engine.speed();
    ///
    /// assert!(engine.change_speed(2.0));
    /// assert_eq!(engine.speed(), speed * 2.0);
    ///
    /// assert!(!engine.change_speed(1E9));
    /// assert_eq!(engine.speed(), speed * 2.0);
    /// ```
    pub fn change_speed(&mut self, factor: f64) -> bool {
        let speed = self.speed * factor;

        if (self.min_speed..=self.max_speed).contains(&speed) {
            debug!("Speed changed from {} to {speed}", self.speed);
            self.speed = speed;
            true
        } else {
            debug!(
                "Rejected speed {speed} outside of [{}, {}]",
                self.min_speed, self.max_speed
            );
            false
        }
    }

    /// Factor applied to the wall-clock delta of every tick.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Lowest and highest speed [`change_speed`](Self::change_speed) may reach.
    #[inline]
    pub fn speed_bounds(&self) -> (f64, f64) {
        (self.min_speed, self.max_speed)
    }

    /// Creates a body from its configuration and appends it to the simulation.
    pub fn add_body(&mut self, config: BodyConfig) -> BodyId {
        let body = Body::new(config, &self.field).with_trail_capacity(self.trail_capacity);
        let id = body.id();

        debug!("Added body {body} with mass {}", body.mass());

        self.bodies.push(body);
        self.revision += 1;
        id
    }

    /// The live bodies, in insertion order.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// The body with the given identity, if it is simulated by this engine.
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id() == id)
    }

    /// Index in [`bodies`](Self::bodies) of the body with the given identity.
    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|body| body.id() == id)
    }

    /// First body, in insertion order, with the given name.
    ///
    /// Names may repeat, prefer identities when they are available.
    pub fn find_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|body| body.name() == name)
    }

    /// Sets the body used as reference frame by default, or clears it.
    ///
    /// The identity is only resolved when used: an identity unknown to this engine behaves like no
    /// central body.
    pub fn set_central_body(&mut self, id: Option<BodyId>) {
        self.central_body = id;
        self.revision += 1;
    }

    /// The central body, if one is set and simulated by this engine.
    pub fn central_body(&self) -> Option<&Body> {
        self.central_body.and_then(|id| self.body(id))
    }

    /// Identity of the central body, as set.
    #[inline]
    pub fn central_body_id(&self) -> Option<BodyId> {
        self.central_body
    }

    /// The gravity field of the simulation.
    #[inline]
    pub fn field(&self) -> &GravityField {
        &self.field
    }

    /// Counter increased every time a body is added or the central body changes.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of ticks applied while running.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time elapsed, the sum of the scaled deltas of every applied tick.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
