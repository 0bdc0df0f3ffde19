//! Network summary statistics.

use physarum_core::PathEdge;
use serde::{Deserialize, Serialize};

/// Summary of the current network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Food sources plus the source point.
    pub nodes: usize,
    /// Sum of Euclidean edge lengths, world units.
    pub path_length: f64,
    /// Food reached per hundred units of path, as a percentage capped at
    /// 100. Zero with no food.
    pub efficiency: f64,
    /// Completed ticks since the last reset.
    pub iterations: u64,
}

impl NetworkStats {
    /// Compute statistics from the map size and current paths.
    ///
    /// `efficiency = min(100, food / (path_length / 100) * 100)`, where a
    /// zero `path_length / 100` is replaced by 1. An empty network with
    /// food therefore scores 100.
    pub fn compute(food_count: usize, paths: &[PathEdge], iterations: u64) -> Self {
        let path_length: f64 = paths.iter().map(|e| e.length() as f64).sum();
        let efficiency = if food_count > 0 {
            let per_hundred = path_length / 100.0;
            let denom = if per_hundred == 0.0 { 1.0 } else { per_hundred };
            (food_count as f64 / denom * 100.0).min(100.0)
        } else {
            0.0
        };
        Self {
            nodes: food_count + 1,
            path_length,
            efficiency,
            iterations,
        }
    }
}
