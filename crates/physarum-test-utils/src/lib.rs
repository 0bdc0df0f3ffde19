//! Test utilities and fixtures for Physarum development.
//!
//! [`StepHarness`] owns every piece of state a [`StepContext`] borrows, so
//! a single stage can be run in isolation. The mock stages in
//! [`fixtures`] cover pipeline and controller error paths.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CountingPropagator, FailingPropagator, FillPropagator};

use physarum_agents::{Agent, AgentStore};
use physarum_core::{
    FoodSource, PathEdge, Point, PropagatorError, StepError, TickId, Tunables,
};
use physarum_field::{GridGeometry, TrailField};
use physarum_propagator::{Pipeline, Propagator, StageTiming, StepContext};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed used by fixtures unless a test picks its own.
pub const TEST_SEED: u64 = 0x5EED;

/// A ChaCha8 PRNG seeded from `seed`.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A `cols` x `rows` grid with unit cells.
pub fn unit_geometry(cols: usize, rows: usize) -> GridGeometry {
    match GridGeometry::new(cols as f32, rows as f32, 1.0) {
        Ok(g) => g,
        Err(e) => panic!("bad fixture geometry {cols}x{rows}: {e}"),
    }
}

/// A unit-cell field with every cell set to `value`.
pub fn uniform_field(cols: usize, rows: usize, value: f32) -> TrailField {
    let mut field = TrailField::new(unit_geometry(cols, rows));
    for row in 0..rows {
        for col in 0..cols {
            field.set(col, row, value);
        }
    }
    field
}

/// A unit-cell field, zero except for the listed `(col, row, value)` cells.
pub fn field_with(cols: usize, rows: usize, cells: &[(usize, usize, f32)]) -> TrailField {
    let mut field = TrailField::new(unit_geometry(cols, rows));
    for &(col, row, value) in cells {
        field.set(col, row, value);
    }
    field
}

/// An agent with unit speed.
pub fn agent_at(x: f32, y: f32, heading: f32) -> Agent {
    Agent::new(Point::new(x, y), heading, 1.0)
}

/// An agent store holding exactly `agents`.
pub fn store_with(agents: &[Agent]) -> AgentStore {
    agents.iter().copied().collect()
}

/// Owns the state a [`StepContext`] borrows.
pub struct StepHarness {
    pub field: TrailField,
    pub agents: AgentStore,
    pub food: Vec<FoodSource>,
    pub paths: Vec<PathEdge>,
    pub tunables: Tunables,
    pub rng: ChaCha8Rng,
    pub tick: TickId,
}

impl StepHarness {
    /// Empty harness over `field`, default tunables, [`TEST_SEED`].
    pub fn new(field: TrailField) -> Self {
        Self {
            field,
            agents: AgentStore::new(),
            food: Vec::new(),
            paths: Vec::new(),
            tunables: Tunables::default(),
            rng: seeded_rng(TEST_SEED),
            tick: TickId(1),
        }
    }

    /// Empty harness over a zeroed `cols` x `rows` unit grid.
    pub fn grid(cols: usize, rows: usize) -> Self {
        Self::new(TrailField::new(unit_geometry(cols, rows)))
    }

    pub fn with_agents(mut self, agents: &[Agent]) -> Self {
        self.agents = store_with(agents);
        self
    }

    pub fn with_food(mut self, food: Vec<FoodSource>) -> Self {
        self.food = food;
        self
    }

    pub fn with_tunables(mut self, tunables: Tunables) -> Self {
        self.tunables = tunables;
        self
    }

    /// Borrow everything as a context for one step.
    pub fn ctx(&mut self) -> StepContext<'_> {
        StepContext::new(
            &mut self.field,
            &mut self.agents,
            &self.food,
            &mut self.paths,
            &self.tunables,
            &mut self.rng,
            self.tick,
        )
    }

    /// Run one stage once.
    pub fn run(&mut self, stage: &dyn Propagator) -> Result<(), PropagatorError> {
        let mut ctx = self.ctx();
        stage.step(&mut ctx)
    }

    /// Run a whole pipeline once and advance the tick id.
    pub fn run_pipeline(&mut self, pipeline: &Pipeline) -> Result<Vec<StageTiming>, StepError> {
        let timings = {
            let mut ctx = self.ctx();
            pipeline.run(&mut ctx)?
        };
        self.tick = self.tick.next();
        Ok(timings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_with_preserves_agents() {
        let agents = [agent_at(1.0, 2.0, 0.5), agent_at(3.0, 4.0, 1.0)];
        let store = store_with(&agents);
        assert_eq!(store.as_slice(), &agents);
    }

    #[test]
    fn field_with_sets_cells() {
        let f = field_with(3, 3, &[(1, 1, 0.5)]);
        assert_eq!(f.value(1, 1), 0.5);
        assert_eq!(f.total(), 0.5);
    }
}
