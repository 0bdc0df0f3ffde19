//! Owner of the agent population.

use crate::agent::Agent;
use crate::spawn::SpawnPolicy;
use physarum_core::{Bounds, Point};
use rand::Rng;
use std::f32::consts::TAU;

/// The full set of agents. Replaced wholesale by [`AgentStore::spawn`].
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current population and scatter a new one around
    /// `source`. Returns the number of agents created (0 with no source).
    ///
    /// Positions are clamped into `bounds`, so a source near an edge
    /// piles some agents onto the border rather than outside it.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        source: Option<Point>,
        food_count: usize,
        policy: &SpawnPolicy,
        bounds: Bounds,
        rng: &mut R,
    ) -> usize {
        self.agents.clear();
        let Some(origin) = source else {
            return 0;
        };

        let count = policy.count_for(food_count);
        self.agents.reserve(count);
        let speed_span = policy.speed_max - policy.speed_min;
        for _ in 0..count {
            let angle = rng.random::<f32>() * TAU;
            let radius = rng.random::<f32>() * policy.radius;
            let position = bounds.clamp(origin.offset(angle, radius));
            let heading = rng.random::<f32>() * TAU;
            let speed = policy.speed_min + rng.random::<f32>() * speed_span;
            self.agents.push(Agent::new(position, heading, speed));
        }
        count
    }

    /// Remove every agent.
    pub fn clear(&mut self) {
        self.agents.clear();
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterate over the agents.
    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    /// Iterate mutably over the agents.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent> {
        self.agents.iter_mut()
    }

    /// The agents as a slice.
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }
}

impl From<Vec<Agent>> for AgentStore {
    fn from(agents: Vec<Agent>) -> Self {
        Self { agents }
    }
}

impl FromIterator<Agent> for AgentStore {
    fn from_iter<I: IntoIterator<Item = Agent>>(iter: I) -> Self {
        Self {
            agents: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AgentStore {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
