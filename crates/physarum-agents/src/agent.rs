//! A single mobile agent.

use physarum_core::Point;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// A mobile sensing agent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Position in world units.
    pub position: Point,
    /// Heading in radians, kept in `[0, 2π)`.
    pub heading: f32,
    /// Per-agent step length multiplier.
    pub speed: f32,
}

impl Agent {
    /// Construct an agent; the heading is normalised.
    pub fn new(position: Point, heading: f32, speed: f32) -> Self {
        Self {
            position,
            heading: normalize_heading(heading),
            speed,
        }
    }

    /// Add `delta` radians to the heading, keeping it in `[0, 2π)`.
    pub fn turn(&mut self, delta: f32) {
        self.heading = normalize_heading(self.heading + delta);
    }

    /// Replace the heading, keeping it in `[0, 2π)`.
    pub fn set_heading(&mut self, heading: f32) {
        self.heading = normalize_heading(heading);
    }
}

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_heading(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
