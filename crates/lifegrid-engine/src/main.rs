//! Demonstration driver for the Lifegrid kernel.
//!
//! Loads configuration, builds a starting board (a named pattern or a
//! seeded random soup), runs it to completion, and reports the outcome.
//! This binary stands in for the embedding layer the kernel is designed
//! to serve: it owns the board, calls into the kernel, and decides what
//! to do with the result.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `lifegrid-config.yaml`
//! 3. Build the starting board
//! 4. Run to completion with a rendering callback
//! 5. Log the outcome

mod config;
mod error;
mod patterns;
mod render;

use std::path::Path;

use lifegrid_core::{Board, run_to_completion_with};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{EngineConfig, WorldConfig};
use crate::error::EngineError;
use crate::render::RenderCallback;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration loading or board construction
/// fails. A run that does not stabilize is a normal outcome, not an
/// error.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("lifegrid-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        name = config.world.name,
        seed = config.world.seed,
        columns = config.world.columns,
        rows = config.world.rows,
        pattern = config.world.pattern,
        max_generations = config.run.max_generations,
        "Configuration loaded"
    );

    // 3. Build the starting board.
    let mut board = build_board(&config.world)?;
    info!(
        generation = board.generation(),
        population = board.population(),
        "Starting board constructed"
    );
    if config.run.render {
        println!("generation {}\n{}", board.generation(), render::render(&board));
    }

    // 4. Run to completion.
    let mut callback = RenderCallback::new(config.run.render);
    let outcome = run_to_completion_with(&mut board, config.run.max_generations, &mut callback);

    // 5. Log the outcome.
    info!(
        termination = ?outcome.termination,
        stable = outcome.termination.is_stable(),
        generations = outcome.generations,
        final_generation = board.generation(),
        final_population = outcome.final_population,
        "lifegrid-engine shutdown complete"
    );

    Ok(())
}

/// Load the engine configuration from `lifegrid-config.yaml`.
///
/// Looks for the config file relative to the current working directory
/// and falls back to defaults when it is absent.
fn load_config() -> Result<EngineConfig, EngineError> {
    let config_path = Path::new("lifegrid-config.yaml");
    if config_path.exists() {
        let config = EngineConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        Ok(EngineConfig::default())
    }
}

/// Build the starting board from the world configuration.
///
/// `pattern: random` produces a seeded random soup; any other value is
/// resolved against the built-in pattern library.
fn build_board(world: &WorldConfig) -> Result<Board, EngineError> {
    if world.pattern.eq_ignore_ascii_case("random") {
        let mut rng = StdRng::seed_from_u64(world.seed);
        let board = Board::random(world.columns, world.rows, &mut rng)?;
        return Ok(board);
    }

    let pattern = patterns::find(&world.pattern).ok_or_else(|| EngineError::UnknownPattern {
        name: world.pattern.clone(),
    })?;
    let board = patterns::stamp(pattern, world.columns, world.rows)?;
    Ok(board)
}
