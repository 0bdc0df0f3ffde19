//! Physarum: stigmergic network growth in the style of the slime mold
//! *Physarum polycephalum*.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Physarum sub-crates. Agents deposit a decaying trail on a 2-D grid,
//! steer toward stronger trail and nearby food, and the trail settles into
//! a network linking a source point to the food.
//!
//! # Quick start
//!
//! ```rust
//! use physarum::prelude::*;
//!
//! let mut sim = SimulationController::new(SimConfig::default()).unwrap();
//! sim.set_source(400.0, 300.0).unwrap();
//! sim.add_food_source(200.0, 150.0, "food").unwrap();
//! sim.add_food_source(600.0, 450.0, "food").unwrap();
//!
//! assert_eq!(sim.start().unwrap(), 3200);
//! for _ in 0..10 {
//!     sim.step().unwrap();
//! }
//! let snapshot = sim.snapshot();
//! assert_eq!(snapshot.tick, TickId(10));
//! assert_eq!(snapshot.stats.nodes, 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `physarum-core` | Points, map elements, path edges, tunables, errors |
//! | [`field`] | `physarum-field` | Grid geometry, diffusion kernel, trail field |
//! | [`agents`] | `physarum-agents` | Agents, spawn policy, agent store |
//! | [`propagator`] | `physarum-propagator` | Stage trait, step context, pipeline |
//! | [`propagators`] | `physarum-propagators` | Steering, movement, deposition, diffusion, extraction |
//! | [`engine`] | `physarum-engine` | Controller, config, statistics, snapshots, presets |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`physarum-core`).
pub use physarum_core as types;

/// Trail field storage (`physarum-field`).
///
/// [`field::TrailField`] holds the double-buffered grid;
/// [`field::Kernel3x3`] defines the diffusion weights.
pub use physarum_field as field;

/// Agent population (`physarum-agents`).
pub use physarum_agents as agents;

/// Stage contract (`physarum-propagator`).
///
/// The [`propagator::Propagator`] trait is the extension point for custom
/// per-tick logic.
pub use physarum_propagator as propagator;

/// The standard stages (`physarum-propagators`).
pub use physarum_propagators as propagators;

/// Simulation controller (`physarum-engine`).
pub use physarum_engine as engine;

/// Common imports for typical Physarum usage.
///
/// ```rust
/// use physarum::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use physarum_core::{
        FoodSource, MapLayout, PathEdge, Point, SourcePoint, TickId, Tunables,
    };

    // Errors
    pub use physarum_core::{PlacementError, PropagatorError, StartError, StepError};

    // Field and agents
    pub use physarum_agents::{Agent, AgentStore};
    pub use physarum_field::TrailField;

    // Stages
    pub use physarum_propagator::{Pipeline, Propagator, StepContext};

    // Engine
    pub use physarum_engine::{
        ConfigError, NetworkStats, OwnedSnapshot, Preset, RunState, SimConfig,
        SimulationController, Snapshot, StepMetrics, StepOutcome,
    };
}
