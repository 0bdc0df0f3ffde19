//! Error types for the Physarum simulation, one enum per subsystem.
//!
//! Routine boundary events (sampling outside the grid, depositing outside
//! the grid, stepping a paused simulation) are not errors and never show
//! up here.

use thiserror::Error;

/// Why `start()` refused to begin a run. The controller state is left
/// untouched when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StartError {
    /// No source point has been set.
    #[error("no source point set")]
    MissingSource,
    /// No food source has been added.
    #[error("no food sources placed")]
    MissingFood,
}

/// Errors from map editing.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum PlacementError {
    /// The map already carries a source point.
    #[error("source already placed")]
    SourceAlreadyPlaced,
    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite {
        /// Offending x.
        x: f32,
        /// Offending y.
        y: f32,
    },
}

/// Errors from an individual pipeline stage.
///
/// Returned by `Propagator::step()` and wrapped in
/// [`StepError::PropagatorFailed`] by the controller.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PropagatorError {
    /// The stage could not run.
    #[error("execution failed: {reason}")]
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The stage produced a NaN or infinite value.
    #[error("non-finite {what}{}", index_suffix(.index))]
    NonFinite {
        /// What went non-finite (`"trail value"`, `"agent position"`).
        what: &'static str,
        /// Index of the first offending element, if known.
        index: Option<usize>,
    },
}

fn index_suffix(index: &Option<usize>) -> String {
    index.map(|i| format!(" at index {i}")).unwrap_or_default()
}

/// Errors from the controller during `step()`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum StepError {
    /// A stage returned an error; the tick did not complete.
    #[error("propagator '{name}' failed: {reason}")]
    PropagatorFailed {
        /// Name of the failing stage.
        name: String,
        /// The underlying stage error.
        #[source]
        reason: PropagatorError,
    },
}
