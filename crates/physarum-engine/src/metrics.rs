//! Per-tick performance metrics.

use serde::Serialize;

/// Timing and size data collected during a single tick.
///
/// All durations are in microseconds. The controller replaces these after
/// every successful `step()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StepMetrics {
    /// Wall-clock time for the whole tick.
    pub total_us: u64,
    /// Per-stage execution times: `(name, microseconds)`, in pipeline
    /// order.
    pub propagator_us: Vec<(String, u64)>,
    /// Agents moved this tick.
    pub agent_count: usize,
    /// Path edges extracted this tick.
    pub edge_count: usize,
}
