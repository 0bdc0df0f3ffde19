//! Run/pause flag and session-data flag.
//!
//! The two are independent: a paused simulation may still hold agents and
//! trail (`Idle` + `Populated`), and a reset returns to `Idle` + `Empty`.
//!
//! ```text
//!            start()               stop()
//!   Idle ───────────────► Running ─────────► Idle
//!   Empty                 Populated          Populated
//!     ▲                                         │
//!     └────────────────── reset() ──────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Whether `step()` advances the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Paused or never started. `step()` is a no-op.
    #[default]
    Idle,
    /// `step()` runs the pipeline.
    Running,
}

/// Whether the controller holds simulation data from a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No agents, no trail, no paths, iteration zero.
    #[default]
    Empty,
    /// Agents have been spawned since the last reset.
    Populated,
}

/// The controller's lifecycle flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lifecycle {
    run: RunState,
    phase: SessionPhase,
}

impl Lifecycle {
    /// `Idle` + `Empty`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current run flag.
    pub fn run_state(&self) -> RunState {
        self.run
    }

    /// Current data flag.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether the run flag is `Running`.
    pub fn is_running(&self) -> bool {
        self.run == RunState::Running
    }

    /// Enter `Running` with freshly spawned agents.
    pub fn start(&mut self) {
        self.run = RunState::Running;
        self.phase = SessionPhase::Populated;
    }

    /// Pause. Returns whether the state changed.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.run = RunState::Idle;
        was_running
    }

    /// Back to `Idle` + `Empty`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_empty() {
        let l = Lifecycle::new();
        assert_eq!(l.run_state(), RunState::Idle);
        assert_eq!(l.phase(), SessionPhase::Empty);
    }

    #[test]
    fn stop_keeps_data() {
        let mut l = Lifecycle::new();
        l.start();
        assert!(l.stop());
        assert_eq!(l.run_state(), RunState::Idle);
        assert_eq!(l.phase(), SessionPhase::Populated);
        assert!(!l.stop());
    }

    #[test]
    fn reset_clears_both_flags() {
        let mut l = Lifecycle::new();
        l.start();
        l.reset();
        assert_eq!(l, Lifecycle::new());
    }
}
