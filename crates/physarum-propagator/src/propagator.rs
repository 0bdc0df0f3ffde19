//! The [`Propagator`] trait.

use crate::context::StepContext;
use physarum_core::PropagatorError;

/// One stage of the per-tick pipeline.
///
/// # Contract
///
/// - `&self`: stages are stateless; everything they change lives in the
///   [`StepContext`].
/// - `step()` draws randomness only from `ctx.rng()`, so a pipeline run
///   is reproducible from the controller's seed.
/// - A stage that returns `Err` aborts the tick. Stages before it have
///   already applied their changes.
///
/// # Object safety
///
/// This trait is object-safe; the pipeline stores stages as
/// `Box<dyn Propagator>`.
///
/// # Examples
///
/// A stage that empties the path list:
///
/// ```
/// use physarum_core::PropagatorError;
/// use physarum_propagator::{Propagator, StepContext};
///
/// struct ClearPaths;
///
/// impl Propagator for ClearPaths {
///     fn name(&self) -> &str { "clear_paths" }
///
///     fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
///         ctx.paths_mut().clear();
///         Ok(())
///     }
/// }
///
/// assert_eq!(ClearPaths.name(), "clear_paths");
/// ```
pub trait Propagator: Send + 'static {
    /// Name used in errors, metrics and logs. Unique within a pipeline.
    fn name(&self) -> &str;

    /// Execute the stage for one tick.
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError>;
}
