//! Threshold the trail field into a graph of grid edges.

use physarum_core::{PathEdge, PropagatorError};
use physarum_field::TrailField;
use physarum_propagator::{Propagator, StepContext, StepParts};

/// Edges between horizontally or vertically adjacent cells whose values
/// both exceed `threshold`.
///
/// Only cells in rows `0..rows-1` and columns `0..cols-1` originate
/// edges; each emits at most one edge to the right and one downward, in
/// that order. Endpoints are cell origins in world units and the strength
/// is the mean of the two values.
pub fn extract_paths(field: &TrailField, threshold: f32) -> Vec<PathEdge> {
    let mut out = Vec::new();
    extract_into(field, threshold, &mut out);
    out
}

fn extract_into(field: &TrailField, threshold: f32, out: &mut Vec<PathEdge>) {
    out.clear();
    let g = field.geometry();
    for row in 0..g.rows().saturating_sub(1) {
        for col in 0..g.cols().saturating_sub(1) {
            let v = field.value(col, row);
            if v <= threshold {
                continue;
            }
            let from = g.cell_origin(col, row);
            for (nc, nr) in [(col + 1, row), (col, row + 1)] {
                let n = field.value(nc, nr);
                if n > threshold {
                    out.push(PathEdge {
                        from,
                        to: g.cell_origin(nc, nr),
                        strength: (v + n) / 2.0,
                    });
                }
            }
        }
    }
}

/// Replaces the path list with a fresh extraction every tick.
#[derive(Clone, Debug)]
pub struct PathExtraction {
    threshold: f32,
}

impl PathExtraction {
    /// An extraction stage with a custom threshold.
    ///
    /// # Errors
    ///
    /// Returns `Err` unless `threshold` is in `[0, 1)`.
    pub fn new(threshold: f32) -> Result<Self, String> {
        if !(0.0..1.0).contains(&threshold) {
            return Err(format!("path threshold must be in [0, 1), got {threshold}"));
        }
        Ok(Self { threshold })
    }

    /// Cells must be strictly above this value to form an edge.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl Default for PathExtraction {
    fn default() -> Self {
        Self { threshold: 0.2 }
    }
}

impl Propagator for PathExtraction {
    fn name(&self) -> &str {
        "PathExtraction"
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
        let StepParts { field, paths, .. } = ctx.parts();
        extract_into(field, self.threshold, paths);
        Ok(())
    }
}
