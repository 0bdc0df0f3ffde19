//! Benchmark profiles for the Physarum simulation.
//!
//! Provides pre-built configurations and maps for benchmarks:
//!
//! - [`reference_profile`]: the default 800x600 world, 266x200 cells
//! - [`stress_profile`]: 1600x1200 world with a larger population
//! - [`reference_map`]: a source and four food sources scaled to a world
//! - [`running_controller`]: a controller already started on a map

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use physarum_core::{MapLayout, PlacementError, StartError};
use physarum_engine::{ConfigError, SimConfig, SimulationController};
use thiserror::Error;

/// Default world, default parameters, capped at 5000 agents.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        seed,
        ..SimConfig::default()
    }
}

/// Twice the reference world in each dimension with a larger base
/// population.
pub fn stress_profile(seed: u64) -> SimConfig {
    let mut config = reference_profile(seed);
    config.world.width = 1600.0;
    config.world.height = 1200.0;
    config.spawn.base_count = 8000;
    config.spawn.max_agents = 12_000;
    config
}

/// Source at the centre of a `width` x `height` world with food near the
/// four corners.
pub fn reference_map(width: f32, height: f32) -> Result<MapLayout, PlacementError> {
    let mut layout = MapLayout::new();
    layout.place_source(width * 0.5, height * 0.5)?;
    for (fx, fy) in [(0.2, 0.2), (0.8, 0.2), (0.2, 0.8), (0.8, 0.8)] {
        layout.place_food(width * fx, height * fy, "food")?;
    }
    Ok(layout)
}

/// Errors from building a benchmark controller.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The profile config was rejected.
    #[error("profile config: {0}")]
    Config(#[from] ConfigError),
    /// The map could not be built.
    #[error("profile map: {0}")]
    Placement(#[from] PlacementError),
    /// The controller refused to start.
    #[error("profile start: {0}")]
    Start(#[from] StartError),
}

/// Build a controller from `config`, load [`reference_map`] and start it.
pub fn running_controller(config: SimConfig) -> Result<SimulationController, ProfileError> {
    let layout = reference_map(config.world.width, config.world.height)?;
    let mut sim = SimulationController::new(config)?;
    sim.load_layout(&layout);
    sim.start()?;
    Ok(sim)
}
