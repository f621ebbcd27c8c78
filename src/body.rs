use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    attractor::Attractor,
    color::Color,
    gravity::GravityField,
    trail::Trail,
    vector::Vector2,
};

static NEXT_BODY_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identity of a [`Body`], assigned at creation.
///
/// Names are for display and may repeat; exclusion from its own gravity and reference-frame
/// lookups always go through this identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(u64);

impl BodyId {
    /// Allocates a new identifier, distinct from every identifier allocated before.
    pub fn next() -> Self {
        Self(NEXT_BODY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Parameters a [`Body`] is created from.
///
/// Missing fields take their default value when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Display name.
    pub name: String,
    /// Initial position.
    pub position: Vector2,
    /// Initial velocity.
    pub initial_velocity: Vector2,
    /// Radius, replaced by `1` if not strictly positive.
    pub radius: f64,
    /// Gravity at the surface, replaced by `1` if not strictly positive.
    pub surface_gravity: f64,
    /// Density factor, replaced by `1` if not strictly positive.
    pub density: f64,
    /// Color, picked from [`Color::NEW_BODY_PALETTE`] when missing.
    pub color: Option<Color>,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            name: String::from("Body"),
            position: Vector2::ZERO,
            initial_velocity: Vector2::ZERO,
            radius: 1.0,
            surface_gravity: 1.0,
            density: 1.0,
            color: None,
        }
    }
}

impl BodyConfig {
    /// Creates a configuration with the given name and default values otherwise.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the initial position.
    pub fn at(mut self, position: impl Into<Vector2>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets the initial velocity.
    pub fn moving(mut self, velocity: impl Into<Vector2>) -> Self {
        self.initial_velocity = velocity.into();
        self
    }

    /// Sets radius, surface gravity and density.
    pub fn shaped(mut self, radius: f64, surface_gravity: f64, density: f64) -> Self {
        self.radius = radius;
        self.surface_gravity = surface_gravity;
        self.density = density;
        self
    }

    /// Sets the color.
    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A simulated point-mass.
///
/// Its mass is derived once at creation from its radius, surface gravity and density:
/// `mass = density * surface_gravity * radius² / G`.
///
/// Two bodies are equal if and only if they have the same [`BodyId`].
#[derive(Debug, Clone, Attractor)]
pub struct Body {
    id: BodyId,
    name: String,
    color: Color,
    position: Vector2,
    velocity: Vector2,
    radius: f64,
    surface_gravity: f64,
    density: f64,
    mass: f64,
    trail: Trail,
}

impl Body {
    /// Creates a body from its configuration, in the given gravity field.
    ///
    /// Invalid parameters are replaced by safe defaults rather than rejected.
    pub fn new(config: BodyConfig, field: &GravityField) -> Self {
        let BodyConfig {
            name,
            position,
            initial_velocity,
            radius,
            surface_gravity,
            density,
            color,
        } = config;

        let radius = positive_or_one(radius, "radius", &name);
        let surface_gravity = positive_or_one(surface_gravity, "surface gravity", &name);
        let density = positive_or_one(density, "density", &name);
        let position = finite_or_zero(position, "position", &name);
        let velocity = finite_or_zero(initial_velocity, "velocity", &name);

        Self {
            id: BodyId::next(),
            color: color.unwrap_or_else(|| Color::random(&mut rand::thread_rng())),
            mass: density * surface_gravity * radius * radius / field.gravitational_constant(),
            name,
            position,
            velocity,
            radius,
            surface_gravity,
            density,
            trail: Trail::default(),
        }
    }

    /// Replaces the trail by an empty one keeping at most `capacity` positions.
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail = Trail::new(capacity);
        self
    }

    /// Semi-implicit Euler velocity step: `velocity += acceleration * dt`.
    #[inline]
    pub fn update_velocity(&mut self, acceleration: Vector2, dt: f64) {
        self.velocity += acceleration * dt;
    }

    /// Semi-implicit Euler position step: `position += velocity * dt`, recorded in the trail.
    #[inline]
    pub fn update_position(&mut self, dt: f64) {
        self.position += self.velocity * dt;
        self.trail.push(self.position);
    }

    /// Identity of the body.
    #[inline]
    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Display name of the body.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color the body and its paths are drawn with.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Current velocity.
    #[inline]
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Radius given at creation.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Surface gravity given at creation.
    #[inline]
    pub fn surface_gravity(&self) -> f64 {
        self.surface_gravity
    }

    /// Density factor given at creation.
    #[inline]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Mass derived at creation.
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Recent positions of the body, oldest first.
    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Body {}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

fn positive_or_one(value: f64, parameter: &str, name: &str) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!("Invalid {parameter} {value} for body `{name}`. Using 1.");
        1.0
    }
}

fn finite_or_zero(value: Vector2, parameter: &str, name: &str) -> Vector2 {
    if value.is_finite() {
        value
    } else {
        warn!("Invalid {parameter} {value} for body `{name}`. Using {}.", Vector2::ZERO);
        Vector2::ZERO
    }
}
