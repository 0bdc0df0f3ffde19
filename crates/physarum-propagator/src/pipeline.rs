//! Ordered, validated stage sequence.
//!
//! [`Pipeline::new`] runs once when the controller is built and rejects
//! structural mistakes (no stages, two stages with the same name). After
//! that, [`Pipeline::run`] executes the stages in insertion order every
//! tick and reports how long each one took.

use indexmap::IndexMap;
use physarum_core::StepError;
use std::time::Instant;
use thiserror::Error;

use crate::context::StepContext;
use crate::propagator::Propagator;

/// Errors from pipeline construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// No stages registered.
    #[error("pipeline has no stages")]
    Empty,
    /// Two stages share a name.
    #[error("duplicate stage name '{name}'")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}

/// Wall-clock duration of one stage in one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageTiming {
    /// Stage name.
    pub name: String,
    /// Elapsed microseconds.
    pub micros: u64,
}

/// The stages of a tick, keyed and ordered by name.
pub struct Pipeline {
    stages: IndexMap<String, Box<dyn Propagator>>,
}

impl Pipeline {
    /// Build a pipeline from stages in execution order.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Empty`] for an empty list,
    /// [`PipelineError::DuplicateName`] if two stages share a name.
    pub fn new(stages: Vec<Box<dyn Propagator>>) -> Result<Self, PipelineError> {
        if stages.is_empty() {
            return Err(PipelineError::Empty);
        }
        let mut map = IndexMap::with_capacity(stages.len());
        for stage in stages {
            let name = stage.name().to_string();
            if map.contains_key(&name) {
                return Err(PipelineError::DuplicateName { name });
            }
            map.insert(name, stage);
        }
        Ok(Self { stages: map })
    }

    /// Run every stage in order.
    ///
    /// Stops at the first failing stage; stages that already ran keep
    /// their effects.
    ///
    /// # Errors
    ///
    /// [`StepError::PropagatorFailed`] naming the stage that failed.
    pub fn run(&self, ctx: &mut StepContext<'_>) -> Result<Vec<StageTiming>, StepError> {
        let mut timings = Vec::with_capacity(self.stages.len());
        for (name, stage) in &self.stages {
            let started = Instant::now();
            stage
                .step(ctx)
                .map_err(|reason| StepError::PropagatorFailed {
                    name: name.clone(),
                    reason,
                })?;
            timings.push(StageTiming {
                name: name.clone(),
                micros: started.elapsed().as_micros() as u64,
            });
        }
        Ok(timings)
    }

    /// Stage names in execution order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stages.keys().map(String::as_str)
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always `false`; construction rejects empty pipelines.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.keys().collect::<Vec<_>>())
            .finish()
    }
}
