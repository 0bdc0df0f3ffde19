//! Execution context passed to stages during a tick.
//!
//! [`StepContext`] bundles borrows of every piece of simulation state a
//! stage may touch. Stages that need several pieces mutably at once (a
//! steering stage reads the field while turning agents and drawing random
//! numbers) call [`StepContext::parts`] to split the borrow.

use physarum_agents::AgentStore;
use physarum_core::{FoodSource, PathEdge, TickId, Tunables};
use physarum_field::TrailField;
use rand_chacha::ChaCha8Rng;

/// Execution context passed to each stage's `step()` method.
pub struct StepContext<'a> {
    field: &'a mut TrailField,
    agents: &'a mut AgentStore,
    food: &'a [FoodSource],
    paths: &'a mut Vec<PathEdge>,
    tunables: &'a Tunables,
    rng: &'a mut ChaCha8Rng,
    tick_id: TickId,
}

/// Disjoint borrows of the context, for stages that need more than one
/// piece mutably.
pub struct StepParts<'s> {
    /// Trail field.
    pub field: &'s mut TrailField,
    /// Agent population.
    pub agents: &'s mut AgentStore,
    /// Food sources, in placement order.
    pub food: &'s [FoodSource],
    /// Paths extracted this tick.
    pub paths: &'s mut Vec<PathEdge>,
    /// Live parameters.
    pub tunables: &'s Tunables,
    /// Shared PRNG.
    pub rng: &'s mut ChaCha8Rng,
    /// Tick being computed.
    pub tick_id: TickId,
}

impl<'a> StepContext<'a> {
    /// Construct a step context.
    ///
    /// Typically called by the controller; tests build one directly.
    pub fn new(
        field: &'a mut TrailField,
        agents: &'a mut AgentStore,
        food: &'a [FoodSource],
        paths: &'a mut Vec<PathEdge>,
        tunables: &'a Tunables,
        rng: &'a mut ChaCha8Rng,
        tick_id: TickId,
    ) -> Self {
        Self {
            field,
            agents,
            food,
            paths,
            tunables,
            rng,
            tick_id,
        }
    }

    /// Trail field.
    pub fn field(&self) -> &TrailField {
        &*self.field
    }

    /// Mutable trail field.
    pub fn field_mut(&mut self) -> &mut TrailField {
        &mut *self.field
    }

    /// Agent population.
    pub fn agents(&self) -> &AgentStore {
        &*self.agents
    }

    /// Mutable agent population.
    pub fn agents_mut(&mut self) -> &mut AgentStore {
        &mut *self.agents
    }

    /// Food sources, in placement order.
    pub fn food(&self) -> &[FoodSource] {
        self.food
    }

    /// Paths extracted so far this tick (the previous tick's until the
    /// extraction stage runs).
    pub fn paths(&self) -> &[PathEdge] {
        self.paths.as_slice()
    }

    /// Mutable path list.
    pub fn paths_mut(&mut self) -> &mut Vec<PathEdge> {
        &mut *self.paths
    }

    /// Live parameters.
    pub fn tunables(&self) -> &Tunables {
        self.tunables
    }

    /// Shared PRNG.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut *self.rng
    }

    /// The tick being computed.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Split into disjoint borrows.
    pub fn parts(&mut self) -> StepParts<'_> {
        StepParts {
            field: &mut *self.field,
            agents: &mut *self.agents,
            food: self.food,
            paths: &mut *self.paths,
            tunables: self.tunables,
            rng: &mut *self.rng,
            tick_id: self.tick_id,
        }
    }
}
