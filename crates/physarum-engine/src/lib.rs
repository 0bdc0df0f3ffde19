//! Simulation controller for the Physarum network simulation.
//!
//! [`SimulationController`] owns the whole simulation state (trail field,
//! agents, map, paths, PRNG) and drives the stage pipeline one tick per
//! [`step`](SimulationController::step) call. It is built from a
//! [`SimConfig`], which can be loaded from TOML.
//!
//! The controller is single-threaded and does no timing of its own: a
//! collaborator (render loop, test, benchmark) calls `step()` as often as
//! it likes and reads state back through borrowed [`Snapshot`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod lifecycle;
pub mod metrics;
pub mod presets;
pub mod snapshot;
pub mod stats;

pub use config::{ConfigError, SensorConfig, SimConfig, TrailConfig, WorldConfig};
pub use controller::{SimulationController, StepOutcome};
pub use lifecycle::{Lifecycle, RunState, SessionPhase};
pub use metrics::StepMetrics;
pub use presets::{Preset, Station, PROGRESS_HORIZON};
pub use snapshot::{OwnedSnapshot, Snapshot};
pub use stats::NetworkStats;
