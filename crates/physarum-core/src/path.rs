//! The derived network edge.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// One edge of the extracted trail network.
///
/// Endpoints are the world-space origins of two grid-adjacent cells;
/// `strength` is the mean of their trail values at extraction time.
/// Edges are rebuilt from the field every tick and never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathEdge {
    /// First endpoint (the scanned cell).
    pub from: Point,
    /// Second endpoint (its right or lower neighbour).
    pub to: Point,
    /// Mean trail value of the two endpoints.
    pub strength: f32,
}

impl PathEdge {
    /// Euclidean length of the edge in world units.
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}
