//! The simulation controller.
//!
//! [`SimulationController`] owns every piece of simulation state and runs
//! the stage pipeline once per [`step()`](SimulationController::step).
//!
//! # Ownership model
//!
//! The controller is [`Send`] but all mutation goes through `&mut self`.
//! [`snapshot()`](SimulationController::snapshot) borrows from `self`, so
//! the borrow checker prevents stepping while a view is alive.
//!
//! # Example
//!
//! ```
//! use physarum_engine::{SimConfig, SimulationController, StepOutcome};
//!
//! let mut sim = SimulationController::new(SimConfig::default()).unwrap();
//! sim.set_source(400.0, 300.0).unwrap();
//! sim.add_food_source(600.0, 200.0, "food").unwrap();
//! assert_eq!(sim.start().unwrap(), 2600);
//!
//! assert!(matches!(sim.step().unwrap(), StepOutcome::Advanced(_)));
//! assert_eq!(sim.stats().iterations, 1);
//! ```

use std::time::Instant;

use physarum_agents::AgentStore;
use physarum_core::{
    FoodCategory, FoodSource, MapLayout, ParameterVersion, PathEdge, PlacementError, Point,
    SourcePoint, StartError, StepError, TickId, Tunables,
};
use physarum_field::TrailField;
use physarum_propagator::{Pipeline, StepContext};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};

use crate::config::{ConfigError, SimConfig};
use crate::lifecycle::{Lifecycle, RunState, SessionPhase};
use crate::metrics::StepMetrics;
use crate::snapshot::Snapshot;
use crate::stats::NetworkStats;

// Compile-time assertion: the controller can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SimulationController>();
    }
};

// ── StepOutcome ────────────────────────────────────────────────────

/// What a call to [`SimulationController::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The controller is idle or has no agents; nothing changed.
    Skipped,
    /// One tick ran. Carries the new iteration count.
    Advanced(TickId),
}

// ── SimulationController ───────────────────────────────────────────

/// Owns the trail field, agents, map and PRNG, and advances them one tick
/// per [`step()`](Self::step).
pub struct SimulationController {
    config: SimConfig,
    field: TrailField,
    agents: AgentStore,
    source: Option<SourcePoint>,
    food: Vec<FoodSource>,
    paths: Vec<PathEdge>,
    tunables: Tunables,
    param_version: ParameterVersion,
    pipeline: Pipeline,
    rng: ChaCha8Rng,
    lifecycle: Lifecycle,
    iteration: TickId,
    last_metrics: StepMetrics,
}

impl SimulationController {
    /// Validate `config` and build a controller running the standard
    /// five-stage pipeline.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from validation or pipeline assembly.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pipeline = config.build_pipeline()?;
        Self::with_pipeline(config, pipeline)
    }

    /// Build a controller that runs `pipeline` instead of the standard
    /// stages.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from validation.
    pub fn with_pipeline(config: SimConfig, pipeline: Pipeline) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = TrailField::new(config.geometry()?);
        Ok(Self {
            field,
            agents: AgentStore::new(),
            source: None,
            food: Vec::new(),
            paths: Vec::new(),
            tunables: config.tunables,
            param_version: ParameterVersion::default(),
            pipeline,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            lifecycle: Lifecycle::new(),
            iteration: TickId::default(),
            last_metrics: StepMetrics::default(),
            config,
        })
    }

    // ── Map editing ────────────────────────────────────────────────

    /// Place the origin, replacing any existing one.
    ///
    /// # Errors
    ///
    /// [`PlacementError::NonFinite`] for NaN or infinite coordinates.
    pub fn set_source(&mut self, x: f32, y: f32) -> Result<(), PlacementError> {
        let p = Point::new(x, y);
        if !p.is_finite() {
            return Err(PlacementError::NonFinite { x, y });
        }
        self.source = Some(SourcePoint(p));
        Ok(())
    }

    /// Append a food source.
    ///
    /// Attraction sees the new source on the next tick. The agent count
    /// only changes on the next `start()`.
    ///
    /// # Errors
    ///
    /// [`PlacementError::NonFinite`] for NaN or infinite coordinates.
    pub fn add_food_source(
        &mut self,
        x: f32,
        y: f32,
        category: impl Into<FoodCategory>,
    ) -> Result<(), PlacementError> {
        if !Point::new(x, y).is_finite() {
            return Err(PlacementError::NonFinite { x, y });
        }
        self.food.push(FoodSource::new(x, y, category));
        Ok(())
    }

    /// Reset, then forget the source and every food source.
    pub fn clear_map(&mut self) {
        self.reset();
        self.source = None;
        self.food.clear();
        info!("map cleared");
    }

    /// Replace the map with `layout`. Resets the simulation first.
    pub fn load_layout(&mut self, layout: &MapLayout) {
        self.clear_map();
        self.source = layout.source();
        self.food = layout.food().to_vec();
        debug!(food = self.food.len(), "layout loaded");
    }

    // ── Run control ────────────────────────────────────────────────

    /// Spawn a fresh population around the source and enter `Running`.
    ///
    /// The iteration counter and the trail are kept, so a stop/start
    /// cycle continues the same run with new agents. Returns the number
    /// of agents spawned.
    ///
    /// # Errors
    ///
    /// [`StartError::MissingSource`] without a source, then
    /// [`StartError::MissingFood`] without food. Nothing changes on error.
    pub fn start(&mut self) -> Result<usize, StartError> {
        let Some(source) = self.source else {
            warn!("start rejected: no source point");
            return Err(StartError::MissingSource);
        };
        if self.food.is_empty() {
            warn!("start rejected: no food sources");
            return Err(StartError::MissingFood);
        }

        let bounds = self.field.geometry().bounds();
        let spawned = self.agents.spawn(
            Some(source.position()),
            self.food.len(),
            &self.config.spawn,
            bounds,
            &mut self.rng,
        );
        self.lifecycle.start();
        info!(
            agents = spawned,
            food = self.food.len(),
            iteration = self.iteration.0,
            "simulation started"
        );
        Ok(spawned)
    }

    /// Pause. Agents, trail, paths and the iteration count are kept.
    pub fn stop(&mut self) {
        if self.lifecycle.stop() {
            info!(iteration = self.iteration.0, "simulation stopped");
        }
    }

    /// Discard agents, trail, paths and the iteration count, and return
    /// to `Idle`. The map is kept.
    ///
    /// The PRNG is re-seeded from the configured seed, so a reset
    /// controller replays the same run.
    pub fn reset(&mut self) {
        self.agents.clear();
        self.paths.clear();
        self.field.clear();
        self.iteration = TickId::default();
        self.lifecycle.reset();
        self.last_metrics = StepMetrics::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        info!("simulation reset");
    }

    /// Run one tick.
    ///
    /// Returns [`StepOutcome::Skipped`] unless the controller is running
    /// with at least one agent.
    ///
    /// # Errors
    ///
    /// [`StepError::PropagatorFailed`] if a stage fails. The controller
    /// stops and the iteration count does not advance; state written by
    /// stages that ran before the failure is kept.
    pub fn step(&mut self) -> Result<StepOutcome, StepError> {
        if !self.lifecycle.is_running() || self.agents.is_empty() {
            return Ok(StepOutcome::Skipped);
        }

        let started = Instant::now();
        let tick = self.iteration.next();
        let result = {
            let mut ctx = StepContext::new(
                &mut self.field,
                &mut self.agents,
                &self.food,
                &mut self.paths,
                &self.tunables,
                &mut self.rng,
                tick,
            );
            self.pipeline.run(&mut ctx)
        };

        let timings = match result {
            Ok(timings) => timings,
            Err(e) => {
                self.lifecycle.stop();
                warn!(tick = tick.0, error = %e, "stage failed, simulation stopped");
                return Err(e);
            }
        };

        self.iteration = tick;
        self.last_metrics = StepMetrics {
            total_us: started.elapsed().as_micros() as u64,
            propagator_us: timings.into_iter().map(|t| (t.name, t.micros)).collect(),
            agent_count: self.agents.len(),
            edge_count: self.paths.len(),
        };
        trace!(
            tick = tick.0,
            total_us = self.last_metrics.total_us,
            edges = self.last_metrics.edge_count,
            "tick complete"
        );
        Ok(StepOutcome::Advanced(tick))
    }

    // ── Live parameters ────────────────────────────────────────────

    /// Set sensor sensitivity.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] unless `value` is finite and non-negative.
    pub fn set_sensitivity(&mut self, value: f32) -> Result<(), ConfigError> {
        self.edit_tunables(|t| t.sensitivity = value)
    }

    /// Set the per-tick decay factor.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] unless `value` is in `(0, 1]`.
    pub fn set_decay_rate(&mut self, value: f32) -> Result<(), ConfigError> {
        self.edit_tunables(|t| t.decay_rate = value)
    }

    /// Set the agent speed.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] unless `value` is finite and non-negative.
    pub fn set_speed(&mut self, value: f32) -> Result<(), ConfigError> {
        self.edit_tunables(|t| t.speed = value)
    }

    fn edit_tunables(&mut self, edit: impl FnOnce(&mut Tunables)) -> Result<(), ConfigError> {
        let mut candidate = self.tunables;
        edit(&mut candidate);
        candidate
            .validate()
            .map_err(ConfigError::invalid("tunables"))?;
        self.tunables = candidate;
        self.param_version = self.param_version.next();
        debug!(
            version = self.param_version.0,
            sensitivity = candidate.sensitivity,
            decay_rate = candidate.decay_rate,
            speed = candidate.speed,
            "tunables updated"
        );
        Ok(())
    }

    /// Replace the PRNG with one seeded from `seed`. Later resets also
    /// use `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        debug!(seed, "prng reseeded");
    }

    // ── Reads ──────────────────────────────────────────────────────

    /// Network statistics for the current paths.
    pub fn stats(&self) -> NetworkStats {
        NetworkStats::compute(self.food.len(), &self.paths, self.iteration.0)
    }

    /// Borrowed view of the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tick: self.iteration,
            run_state: self.lifecycle.run_state(),
            phase: self.lifecycle.phase(),
            parameter_version: self.param_version,
            field: &self.field,
            paths: &self.paths,
            agents: &self.agents,
            source: self.source,
            food: &self.food,
            stats: self.stats(),
        }
    }

    /// Trail field.
    pub fn field(&self) -> &TrailField {
        &self.field
    }

    /// Paths extracted on the last tick.
    pub fn paths(&self) -> &[PathEdge] {
        &self.paths
    }

    /// Agent population.
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    /// The origin, if placed.
    pub fn source(&self) -> Option<SourcePoint> {
        self.source
    }

    /// Food sources in placement order.
    pub fn food(&self) -> &[FoodSource] {
        &self.food
    }

    /// Metrics from the most recent successful tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Completed ticks since the last reset.
    pub fn iteration(&self) -> TickId {
        self.iteration
    }

    /// Run flag.
    pub fn run_state(&self) -> RunState {
        self.lifecycle.run_state()
    }

    /// Session-data flag.
    pub fn phase(&self) -> SessionPhase {
        self.lifecycle.phase()
    }

    /// Live parameters in effect.
    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// Bumped by every successful parameter edit.
    pub fn parameter_version(&self) -> ParameterVersion {
        self.param_version
    }

    /// The configuration the controller was built from, with the current
    /// seed.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
