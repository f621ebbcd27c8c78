use orrery::prelude::*;

const EPSILON: f64 = 1E-9;

fn running_engine(speed: f64) -> SimulationEngine {
    let physics = PhysicsConfig {
        initial_speed: speed,
        max_speed: speed.max(1.0),
        ..Default::default()
    };

    let mut engine = SimulationEngine::with_compute_method(&physics, sequential::BruteForce);
    engine.toggle_pause();
    engine
}

#[test]
fn mirror_symmetric_pair_stays_symmetric() {
    let mut engine = running_engine(1.0);
    let config = BodyConfig::default().shaped(3.0, 2.0, 1.5);
    engine.add_body(config.clone().at((-5.0, 1.0)).moving((0.3, -2.0)));
    engine.add_body(config.at((5.0, -1.0)).moving((-0.3, 2.0)));

    for _ in 0..500 {
        engine.tick(0.01);

        let [a, b] = [&engine.bodies()[0], &engine.bodies()[1]];
        assert_eq!(a.position(), -b.position());
        assert_eq!(a.velocity(), -b.velocity());
    }
}

#[test]
fn lone_body_moves_uniformly() {
    let mut engine = running_engine(1.0);
    let p0 = Vector2::new(-3.0, 8.0);
    let v0 = Vector2::new(1.25, -0.5);
    engine.add_body(BodyConfig::default().at(p0).moving(v0));

    for _ in 0..100 {
        engine.tick(0.05);
    }

    let body = &engine.bodies()[0];
    assert_eq!(body.velocity(), v0);
    assert!((body.position() - (p0 + v0 * 5.0)).magnitude() < EPSILON);
    assert!((engine.elapsed() - 5.0).abs() < EPSILON);
}

#[test]
fn light_body_orbits_heavy_body() {
    let mut engine = running_engine(1.0);
    let center = engine.add_body(BodyConfig::named("A").shaped(1000.0, 1.0, 1.0));
    let heavy_mass = engine.body(center).map(Body::mass).unwrap();
    assert_eq!(heavy_mass, 1E6);

    let position = Vector2::new(100.0, 0.0);
    let velocity = engine
        .field()
        .circular_orbit_velocity(Vector2::ZERO, heavy_mass, position);
    assert!((velocity - Vector2::new(0.0, 1000.0)).magnitude() < EPSILON);

    let orbiter = engine.add_body(BodyConfig::named("B").at(position).moving(velocity));

    for _ in 0..1000 {
        engine.tick(1E-4);

        let distance = (engine.body(orbiter).unwrap().position()
            - engine.body(center).unwrap().position())
        .magnitude();
        assert!((90.0..110.0).contains(&distance), "distance {distance}");
    }

    // A sixth of a revolution, counter-clockwise.
    assert!(engine.body(orbiter).unwrap().position().y > 50.0);
}

#[test]
fn trails_hold_the_most_recent_positions() {
    let physics = PhysicsConfig {
        initial_speed: 1.0,
        max_speed: 1.0,
        trail_capacity: 5,
        ..Default::default()
    };
    let mut engine = SimulationEngine::with_compute_method(&physics, sequential::BruteForce);
    engine.toggle_pause();
    engine.add_body(BodyConfig::default().moving((1.0, 0.0)));

    for _ in 0..12 {
        engine.tick(1.0);
        assert!(engine.bodies()[0].trail().len() <= 5);
    }

    let trail: Vec<_> = engine.bodies()[0].trail().iter().map(|p| p.x).collect();
    assert_eq!(trail, [8.0, 9.0, 10.0, 11.0, 12.0]);
}

#[test]
fn speed_bounds_are_enforced() {
    let mut engine = SimulationEngine::new();
    let (min, max) = engine.speed_bounds();

    while engine.change_speed(2.0) {}
    assert!(engine.speed() <= max);
    assert!(engine.speed() * 2.0 > max);

    while engine.change_speed(0.5) {}
    assert!(engine.speed() >= min);
    assert!(engine.speed() * 0.5 < min);
}

#[test]
fn prediction_leaves_the_simulation_untouched() {
    let engine = SimulationEngine::from_config(&SimulationConfig::default());
    let snapshot: Vec<_> = engine.bodies().iter().map(VirtualBody::of).collect();

    let mut predictor = TrajectoryPredictor::new(50, 0.1);
    let paths = predictor.compute_paths(&engine, true, None);

    let after: Vec<_> = engine.bodies().iter().map(VirtualBody::of).collect();
    assert_eq!(snapshot, after);
    assert_eq!(paths.len(), engine.bodies().len());

    // The central sun is the reference and stays put.
    let sun = engine.central_body().unwrap();
    assert_eq!(paths[0].body, sun.id());
    assert!(paths[0].points.iter().all(|&point| point == sun.position()));
}

#[test]
fn relative_prediction_by_identity_with_duplicate_names() {
    let mut engine = SimulationEngine::new();
    engine.add_body(BodyConfig::named("Twin").shaped(10.0, 10.0, 1.0));
    let second = engine.add_body(
        BodyConfig::named("Twin")
            .at((60.0, 0.0))
            .moving((0.0, 25.0))
            .shaped(10.0, 10.0, 1.0),
    );

    let paths = TrajectoryPredictor::new(100, 0.1).compute_paths(&engine, true, Some(second));

    let initial = engine.body(second).unwrap().position();
    assert!(paths[1].points.iter().all(|&point| point == initial));
    assert!(paths[0].points.iter().any(|&point| point != Vector2::ZERO));
}

#[test]
fn configured_simulation_end_to_end() {
    let config = SimulationConfig::from_toml_str(
        r#"
        scenario = "empty"

        [physics]
        gravitational_constant = 2.0
        initial_speed = 0.5
        max_speed = 1.0

        [prediction]
        horizon = 25
        time_step = 0.02

        [[bodies]]
        name = "Star"
        radius = 10.0
        surface_gravity = 4.0
        color = "yellow"

        [[bodies]]
        name = "Rock"
        position = [30.0, 0.0]
        initial_velocity = [0.0, 15.0]
        "#,
    )
    .unwrap();

    let mut engine = SimulationEngine::from_config(&config);
    let mut predictor = TrajectoryPredictor::from_config(&config.prediction);

    assert_eq!(engine.bodies()[0].mass(), 200.0);
    assert_eq!(engine.bodies()[0].color(), Color::YELLOW);
    assert!(engine.central_body().is_none());

    let paths = predictor.compute_paths(&engine, false, None);
    assert!(paths.iter().all(|path| path.points.len() == 25));

    // A prediction step of 0.02 matches a tick of 0.04 at half speed.
    engine.toggle_pause();
    for _ in 0..25 {
        engine.tick(0.04);
    }

    for (path, body) in paths.iter().zip(engine.bodies()) {
        assert!((path.points[24] - body.position()).magnitude() < EPSILON);
    }
}

#[test]
fn drafted_bodies_join_the_simulation() {
    let mut engine = SimulationEngine::new();
    let mut draft = BodyDraft {
        name: "Probe".into(),
        radius: "oops".into(),
        position_x: "10".into(),
        position_y: "20".into(),
        ..Default::default()
    };

    let id = engine.add_body(draft.submit());

    let body = engine.body(id).unwrap();
    assert_eq!(body.name(), "Probe");
    assert_eq!(body.radius(), 1.0);
    assert_eq!(body.position(), Vector2::new(10.0, 20.0));
    assert!(Color::NEW_BODY_PALETTE.contains(&body.color()));
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_engine_matches_sequential() {
    let config = SimulationConfig {
        scenario: Scenario::BinarySystem,
        ..Default::default()
    };

    let mut single_threaded = SimulationEngine::from_config(&config);
    let mut multi_threaded =
        SimulationEngine::with_compute_method(&config.physics, parallel::BruteForce);
    config.scenario.populate(&mut multi_threaded);

    single_threaded.toggle_pause();
    multi_threaded.toggle_pause();
    for _ in 0..100 {
        single_threaded.tick(0.016);
        multi_threaded.tick(0.016);
    }

    for (a, b) in single_threaded.bodies().iter().zip(multi_threaded.bodies()) {
        let scale = a.position().magnitude().max(1.0);
        assert!((a.position() - b.position()).magnitude() < 1E-6 * scale);
    }
}
