//! Read-only views of controller state.
//!
//! [`Snapshot`] borrows from the controller, so the caller cannot step
//! while holding one. [`OwnedSnapshot`] is a detached copy that can be
//! serialised and sent elsewhere.

use physarum_agents::{Agent, AgentStore};
use physarum_core::{FoodSource, ParameterVersion, PathEdge, Point, SourcePoint, TickId};
use physarum_field::TrailField;
use serde::Serialize;

use crate::lifecycle::{RunState, SessionPhase};
use crate::stats::NetworkStats;

/// Borrowed view of the simulation after the most recent tick.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    /// Completed ticks since the last reset.
    pub tick: TickId,
    /// Run flag.
    pub run_state: RunState,
    /// Session-data flag.
    pub phase: SessionPhase,
    /// Version of the live parameters in effect.
    pub parameter_version: ParameterVersion,
    /// Trail field.
    pub field: &'a TrailField,
    /// Paths extracted on the last tick.
    pub paths: &'a [PathEdge],
    /// Agent population.
    pub agents: &'a AgentStore,
    /// Origin, if placed.
    pub source: Option<SourcePoint>,
    /// Food sources in placement order.
    pub food: &'a [FoodSource],
    /// Network statistics at this tick.
    pub stats: NetworkStats,
}

impl Snapshot<'_> {
    /// Copy everything into an [`OwnedSnapshot`].
    pub fn to_owned(&self) -> OwnedSnapshot {
        let geometry = self.field.geometry();
        OwnedSnapshot {
            tick: self.tick.0,
            run_state: self.run_state,
            phase: self.phase,
            parameter_version: self.parameter_version.0,
            cols: geometry.cols(),
            rows: geometry.rows(),
            cell_size: geometry.cell_size(),
            field_digest: self.field.digest(),
            trail: self.field.values().to_vec(),
            paths: self.paths.to_vec(),
            agents: self.agents.as_slice().to_vec(),
            source: self.source.map(|s| s.position()),
            food: self.food.to_vec(),
            stats: self.stats,
        }
    }
}

/// Detached, serialisable copy of a [`Snapshot`].
///
/// The trail is stored row-major, `rows * cols` values.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OwnedSnapshot {
    /// Completed ticks since the last reset.
    pub tick: u64,
    /// Run flag.
    pub run_state: RunState,
    /// Session-data flag.
    pub phase: SessionPhase,
    /// Version of the live parameters in effect.
    pub parameter_version: u64,
    /// Grid columns.
    pub cols: usize,
    /// Grid rows.
    pub rows: usize,
    /// World units per cell edge.
    pub cell_size: f32,
    /// FNV-1a digest of the trail values.
    pub field_digest: u64,
    /// Trail values, row-major.
    pub trail: Vec<f32>,
    /// Extracted path edges.
    pub paths: Vec<PathEdge>,
    /// Agents.
    pub agents: Vec<Agent>,
    /// Origin, if placed.
    pub source: Option<Point>,
    /// Food sources.
    pub food: Vec<FoodSource>,
    /// Network statistics.
    pub stats: NetworkStats,
}

impl From<&Snapshot<'_>> for OwnedSnapshot {
    fn from(s: &Snapshot<'_>) -> Self {
        s.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physarum_test_utils::{agent_at, field_with, store_with};

    #[test]
    fn owned_copy_matches_borrowed_view() {
        let field = field_with(4, 3, &[(1, 1, 0.5)]);
        let agents = store_with(&[agent_at(1.5, 1.5, 0.0)]);
        let food = vec![FoodSource::new(3.0, 2.0, "food")];
        let paths = Vec::new();
        let snap = Snapshot {
            tick: TickId(9),
            run_state: RunState::Idle,
            phase: SessionPhase::Populated,
            parameter_version: ParameterVersion(2),
            field: &field,
            paths: &paths,
            agents: &agents,
            source: Some(SourcePoint(Point::new(0.5, 0.5))),
            food: &food,
            stats: NetworkStats::compute(food.len(), &paths, 9),
        };

        let owned = OwnedSnapshot::from(&snap);
        assert_eq!(owned.tick, 9);
        assert_eq!((owned.cols, owned.rows), (4, 3));
        assert_eq!(owned.trail.len(), 12);
        assert_eq!(owned.trail[4 + 1], 0.5);
        assert_eq!(owned.field_digest, field.digest());
        assert_eq!(owned.agents.len(), 1);
        assert_eq!(owned.source, Some(Point::new(0.5, 0.5)));
        assert_eq!(owned.stats.efficiency, 100.0);
        assert_eq!(owned, snap.to_owned());
    }
}
