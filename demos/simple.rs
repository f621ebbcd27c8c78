use std::time::Duration;

use anyhow::Context;
use log::info;
use orrery::prelude::*;

const FRAME: Duration = Duration::from_millis(16);
const FRAMES: usize = 600;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // An explicit path must load; without one the defaults are used.
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(&path)
            .with_context(|| format!("failed to load configuration from {path}"))?,
        None => SimulationConfig::load_or_default("orrery.toml"),
    };

    let mut engine = SimulationEngine::from_config(&config);
    let mut predictor = TrajectoryPredictor::from_config(&config.prediction);
    let mut cache = PathCache::new();

    info!(
        "Simulating {} bodies, {:?} scenario",
        engine.bodies().len(),
        config.scenario
    );

    engine.toggle_pause();

    for frame in 0..FRAMES {
        engine.tick(FRAME.as_secs_f64());
        let paths = cache.paths(&mut predictor, &engine, true, None);

        if frame % 100 == 0 {
            println!("t = {:.4}", engine.elapsed());

            for (body, path) in engine.bodies().iter().zip(paths) {
                let end = path.points.last().copied().unwrap_or(body.position());
                println!(
                    "  {body} at ({:>12.2}, {:>12.2}), predicted ({:>12.2}, {:>12.2})",
                    body.position().x,
                    body.position().y,
                    end.x,
                    end.y
                );
            }
        }
    }

    engine.toggle_pause();
    info!("Simulated {} ticks", engine.ticks());

    Ok(())
}
