use serde::{Deserialize, Serialize};

use crate::{
    body::{BodyConfig, BodyId},
    color::Color,
    compute_method::ComputeMethod,
    engine::SimulationEngine,
    vector::Vector2,
};

/// Predefined sets of bodies a simulation can start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// No bodies.
    Empty,
    /// Two suns orbiting each other, circled by three planets. The first sun is the central body.
    #[default]
    #[serde(rename = "binary")]
    BinarySystem,
    /// A sun and eight planets on circular orbits around it. The sun is the central body.
    ///
    /// This is an idealised solar system: the sun is at rest and every planet moves
    /// counter-clockwise at exactly the circular speed of the field, without per-planet factors.
    #[serde(rename = "solar")]
    SolarSystem,
}

const SUN_RADIUS: f64 = 109.0;
const EARTH_DISTANCE: f64 = SUN_RADIUS * 215.0;

/// Planets of the solar system: name, distance to the sun, radius, surface gravity, density and
/// color, all relative to the earth.
const PLANETS: [(&str, f64, f64, f64, f64, Color); 8] = [
    ("Mercury", SUN_RADIUS * 66.0, 0.38, 0.38, 0.99, Color::GREY),
    ("Venus", SUN_RADIUS * 155.0, 0.95, 0.91, 0.95, Color::BURLYWOOD4),
    ("Earth", EARTH_DISTANCE, 1.0, 1.0, 1.0, Color::BLUE),
    ("Mars", EARTH_DISTANCE * 1.5, 0.53, 0.38, 0.71, Color::RED),
    ("Jupiter", EARTH_DISTANCE * 5.2, 11.0, 2.4, 0.24, Color::BISQUE3),
    ("Saturn", EARTH_DISTANCE * 9.6, 9.5, 0.92, 0.13, Color::BISQUE),
    ("Uranus", EARTH_DISTANCE * 19.2, 4.0, 0.89, 0.23, Color::CADET_BLUE1),
    ("Neptune", EARTH_DISTANCE * 30.2, 3.9, 1.1, 0.30, Color::CADET_BLUE4),
];

impl Scenario {
    /// Adds the bodies of the scenario to the engine and sets its central body.
    ///
    /// Returns the identities of the added bodies, in insertion order.
    pub fn populate<C: ComputeMethod>(&self, engine: &mut SimulationEngine<C>) -> Vec<BodyId> {
        match self {
            Scenario::Empty => Vec::new(),
            Scenario::BinarySystem => binary_system(engine),
            Scenario::SolarSystem => solar_system(engine),
        }
    }
}

fn binary_system<C: ComputeMethod>(engine: &mut SimulationEngine<C>) -> Vec<BodyId> {
    let sun = |name| BodyConfig::named(name).shaped(200.0, 333000.0, 0.26);
    let planet = |x: f64, vy: f64, color| {
        BodyConfig::named("Planet")
            .at((x, 0.0))
            .moving((0.0, vy))
            .shaped(3.9, 1.1, 0.30)
            .colored(color)
    };

    let ids = vec![
        engine.add_body(sun("Sun").moving((0.0, 20000.0)).colored(Color::YELLOW)),
        engine.add_body(
            sun("Sun2")
                .at((100000.0, 0.0))
                .moving((0.0, -20000.0))
                .colored(Color::BLUE),
        ),
        engine.add_body(planet(500000.0, -80000.0, Color::RED)),
        engine.add_body(planet(250000.0, -40000.0, Color::GREEN)),
        engine.add_body(planet(10000.0, -8000.0, Color::CHOCOLATE)),
    ];

    engine.set_central_body(ids.first().copied());
    ids
}

fn solar_system<C: ComputeMethod>(engine: &mut SimulationEngine<C>) -> Vec<BodyId> {
    let sun = engine.add_body(
        BodyConfig::named("Sun")
            .shaped(SUN_RADIUS, 333000.0, 0.26)
            .colored(Color::YELLOW),
    );
    let sun_mass = engine.body(sun).map_or(0.0, |body| body.mass());
    let field = *engine.field();

    let mut ids = vec![sun];
    for (name, distance, radius, surface_gravity, density, color) in PLANETS {
        let position = Vector2::new(distance, 0.0);

        ids.push(
            engine.add_body(
                BodyConfig::named(name)
                    .at(position)
                    .moving(field.circular_orbit_velocity(Vector2::ZERO, sun_mass, position))
                    .shaped(radius, surface_gravity, density)
                    .colored(color),
            ),
        );
    }

    engine.set_central_body(Some(sun));
    ids
}
