//! The per-tick stage contract for the Physarum simulation.
//!
//! A tick is a fixed sequence of [`Propagator`]s. Each one receives a
//! [`StepContext`] with mutable access to the trail field, the agents,
//! the path list and the shared PRNG, and read access to the food sources
//! and live parameters. A [`Pipeline`] holds the sequence, rejects
//! duplicate stage names at construction, and times each stage.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod pipeline;
pub mod propagator;

pub use context::{StepContext, StepParts};
pub use pipeline::{Pipeline, PipelineError, StageTiming};
pub use propagator::Propagator;
