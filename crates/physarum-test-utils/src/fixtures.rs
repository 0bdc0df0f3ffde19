//! Mock stages for pipeline and controller tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use physarum_core::PropagatorError;
use physarum_propagator::{Propagator, StepContext};

/// Fails deterministically after a configurable number of successful calls.
///
/// The call counter is shared through an `Arc` so a test can still read
/// it after the stage has been moved into a pipeline.
pub struct FailingPropagator {
    pub name: String,
    pub succeed_count: usize,
    calls: Arc<AtomicUsize>,
}

impl FailingPropagator {
    /// Create a stage that succeeds `succeed_count` times then fails.
    pub fn new(name: impl Into<String>, succeed_count: usize) -> Self {
        Self {
            name: name.into(),
            succeed_count,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle on the call counter.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Propagator for FailingPropagator {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&self, _ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(PropagatorError::ExecutionFailed {
                reason: format!(
                    "deliberate failure after {} successful calls",
                    self.succeed_count
                ),
            });
        }
        Ok(())
    }
}

/// Counts its calls and does nothing else.
pub struct CountingPropagator {
    pub name: String,
    calls: Arc<AtomicUsize>,
}

impl CountingPropagator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle on the call counter.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Propagator for CountingPropagator {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&self, _ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Sets every trail cell to a constant.
pub struct FillPropagator {
    pub name: String,
    pub value: f32,
}

impl FillPropagator {
    pub fn new(name: impl Into<String>, value: f32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Propagator for FillPropagator {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
        let field = ctx.field_mut();
        let (cols, rows) = (field.geometry().cols(), field.geometry().rows());
        for row in 0..rows {
            for col in 0..cols {
                field.set(col, row, self.value);
            }
        }
        Ok(())
    }
}
