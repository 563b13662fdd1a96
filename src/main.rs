use std::path::Path;

use anyhow::{Context, Result};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use stonefield::config::EngineConfig;
use stonefield::player::MoveIntent;
use stonefield::render::NullRenderer;
use stonefield::VoxelEngine;

const TICK: f32 = 1.0 / 60.0;
const SESSION_TICKS: u64 = 600;

/// Headless demo session: builds the world, then walks the player forward
/// for ten simulated seconds with a jump and a sprint along the way,
/// logging world stats as chunks stream in and out.
fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .context("failed to initialize logging")?;

    let config = EngineConfig::load_or_default(Path::new("stonefield.toml"))
        .context("failed to load configuration")?;

    let mut engine = VoxelEngine::new(config, NullRenderer::new());
    engine.set_look(0.0, -0.4);
    engine.set_move_intent(MoveIntent {
        forward: true,
        ..Default::default()
    });

    for tick in 0..SESSION_TICKS {
        if tick == 120 {
            engine.jump();
        }
        if tick == 300 {
            engine.set_running(true);
        }
        engine.tick(TICK);

        if tick % 120 == 0 {
            let stats = engine.stats();
            info!(
                "tick {}: {} chunks loaded, {} batches, player at {:.1} {:.1} {:.1}",
                stats.ticks,
                stats.loaded_chunks,
                stats.render_batches,
                stats.player_position.x,
                stats.player_position.y,
                stats.player_position.z,
            );
        }
    }

    let stats = engine.stats();
    info!(
        "session complete: {} ticks, {} chunks loaded, {} voxels stored",
        stats.ticks,
        stats.loaded_chunks,
        engine.world().store.len(),
    );
    Ok(())
}
