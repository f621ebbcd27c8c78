//! # Orrery
//!
//! Orrery is a crate simulating the gravitational interaction of celestial bodies in a plane, and
//! predicting their future trajectories.
//!
//! ## Goals
//!
//! The main goal of this crate is to provide the core of an interactive orbit sandbox: a
//! simulation that a host advances from its frame loop, and predicted paths it can draw ahead of
//! the bodies. It does not draw anything itself.
//!
//! The force law is the planar one: an attractor of mass `m` at distance `r` causes an
//! acceleration of `G * m / r`. Bodies are integrated with a two-pass semi-implicit Euler scheme,
//! every velocity being updated from the positions at the start of the step before any position
//! is.
//!
//! Accelerations are computed by a [`ComputeMethod`](compute_method::ComputeMethod). Orrery can be
//! used with a parallel implementation on the CPU thanks to [rayon](https://github.com/rayon-rs/rayon).
//! Enable the "parallel" feature to access it.
//!
//! # Using Orrery
//!
//! ## Setting up the simulation
//!
//! Bodies are added to a [`SimulationEngine`](engine::SimulationEngine) from a
//! [`BodyConfig`](body::BodyConfig). Their mass is derived from their radius, surface gravity and
//! density.
//!
//! ```
//! # use orrery::prelude::*;
//! let mut engine = SimulationEngine::new();
//!
//! let sun = engine.add_body(BodyConfig::named("Sun").shaped(30.0, 100.0, 1.0));
//! engine.add_body(BodyConfig::named("Planet").at((400.0, 0.0)).moving((0.0, 300.0)));
//! engine.set_central_body(Some(sun));
//! ```
//!
//! A whole simulation can also be described by a [`SimulationConfig`](config::SimulationConfig),
//! usually read from a TOML file.
//!
//! ```
//! # use orrery::prelude::*;
//! let config = SimulationConfig::from_toml_str(r#"scenario = "solar""#).unwrap();
//! let engine = SimulationEngine::from_config(&config);
//!
//! assert_eq!(engine.bodies().len(), 9);
//! ```
//!
//! ## Advancing the simulation
//!
//! The engine starts paused. Once running, every [`tick`](engine::SimulationEngine::tick) advances
//! the bodies by the wall-clock delta scaled by the simulation speed.
//!
//! ```
//! # use orrery::prelude::*;
//! # let mut engine = SimulationEngine::new();
//! # engine.add_body(BodyConfig::named("Planet").moving((0.0, 300.0)));
//! engine.toggle_pause();
//! engine.change_speed(10.0);
//!
//! for _ in 0..60 {
//!     engine.tick(1.0 / 60.0);
//! }
//! ```
//!
//! ## Predicting trajectories
//!
//! A [`TrajectoryPredictor`](predictor::TrajectoryPredictor) runs the same integration on copies
//! of the bodies, optionally in the frame of a reference body.
//!
//! ```
//! # use orrery::prelude::*;
//! # let mut engine = SimulationEngine::new();
//! # let sun = engine.add_body(BodyConfig::named("Sun").shaped(30.0, 100.0, 1.0));
//! # engine.add_body(BodyConfig::named("Planet").at((400.0, 0.0)).moving((0.0, 300.0)));
//! let mut predictor = TrajectoryPredictor::default();
//!
//! for path in predictor.compute_paths(&engine, true, Some(sun)) {
//!     println!("{} points in {}", path.points.len(), path.color);
//! }
//! ```

#![warn(missing_docs)]

/// Trait to implement on types representing sources of gravity.
pub mod attractor;

/// Simulated bodies and their identities.
pub mod body;

/// Colors of bodies and paths.
pub mod color;

/// Trait for computing accelerations and types implementing it for the user to choose from.
pub mod compute_method;

/// Configuration of a simulation.
pub mod config;

/// Lenient parsing of user-typed body parameters.
pub mod draft;

/// The live simulation.
pub mod engine;

/// Errors of the configuration.
pub mod error;

/// The planar gravity field.
pub mod gravity;

/// Prediction of future trajectories.
pub mod predictor;

/// Predefined sets of bodies.
pub mod scenario;

/// Bounded history of recent positions.
pub mod trail;

/// Vector type used for positions, velocities and accelerations.
pub mod vector;

pub use error::{Error, Result};

/// Everything needed to use the crate.
pub mod prelude {
    pub use crate::attractor::{Attractor, PointMass};
    pub use crate::body::{Body, BodyConfig, BodyId};
    pub use crate::color::Color;
    pub use crate::compute_method::*;
    pub use crate::config::{PhysicsConfig, PredictionConfig, SimulationConfig};
    pub use crate::draft::BodyDraft;
    pub use crate::engine::{SimulationEngine, SimulationState};
    pub use crate::gravity::GravityField;
    pub use crate::predictor::{Path, PathCache, TrajectoryPredictor, VirtualBody};
    pub use crate::scenario::Scenario;
    pub use crate::trail::Trail;
    pub use crate::vector::{Planar, Vector2};
}
