use std::{fs, path::Path};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{body::BodyConfig, error::Result, scenario::Scenario};

/// Complete configuration of a simulation, usually read from a TOML file.
///
/// Every field is optional in the file and falls back to its default.
///
/// ```
/// # use orrery::prelude::*;
/// let config = SimulationConfig::from_toml_str(
///     r#"
///     scenario = "empty"
///
///     [physics]
///     gravitational_constant = 2.5
///
///     [[bodies]]
///     name = "Lonely"
///     position = [10.0, -4.0]
///     color = "pink"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.physics.gravitational_constant, 2.5);
/// assert_eq!(config.prediction.horizon, 500);
/// assert_eq!(config.bodies[0].position, Vector2::new(10.0, -4.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Bodies the simulation starts with.
    pub scenario: Scenario,
    /// Constants and limits of the live simulation.
    pub physics: PhysicsConfig,
    /// Parameters of the trajectory prediction.
    pub prediction: PredictionConfig,
    /// Bodies added after the ones of the scenario.
    pub bodies: Vec<BodyConfig>,
}

/// Constants and limits of the live simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Constant `G` of the gravity field, also used to derive body masses.
    pub gravitational_constant: f64,
    /// Factor applied to the wall-clock delta of every tick.
    pub initial_speed: f64,
    /// Lowest speed a speed change may reach.
    pub min_speed: f64,
    /// Highest speed a speed change may reach.
    pub max_speed: f64,
    /// Number of recent positions each body keeps.
    pub trail_capacity: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: crate::gravity::DEFAULT_GRAVITATIONAL_CONSTANT,
            initial_speed: 1E-3,
            min_speed: 1E-7,
            max_speed: 1E-1,
            trail_capacity: crate::trail::DEFAULT_TRAIL_CAPACITY,
        }
    }
}

/// Parameters of the trajectory prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Number of steps each predicted path has.
    pub horizon: usize,
    /// Simulated time between two points of a predicted path.
    pub time_step: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            horizon: 500,
            time_step: 0.1,
        }
    }
}

impl SimulationConfig {
    /// Parses a configuration from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads a configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Loads a configuration from a file, falling back to defaults if the file doesn't exist or
    /// can't be parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    /// Saves the configuration to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
