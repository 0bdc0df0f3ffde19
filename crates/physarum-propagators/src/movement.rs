//! Forward motion with reflective world edges.

use physarum_agents::Agent;
use physarum_core::{Bounds, PropagatorError};
use physarum_propagator::{Propagator, StepContext, StepParts};
use std::f32::consts::PI;

/// Moves every agent `agent.speed * (tunables.speed / speed_reference)`
/// along its heading.
///
/// Crossing the left or right edge pins x to `0` or `width - 1` and
/// mirrors the heading horizontally (`π - heading`); crossing the top or
/// bottom pins y to `0` or `height - 1` and mirrors vertically
/// (`-heading`).
#[derive(Clone, Debug)]
pub struct ReflectiveMovement {
    speed_reference: f32,
}

impl ReflectiveMovement {
    /// A movement stage where `tunables.speed == speed_reference` means
    /// unscaled steps.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `speed_reference` is not finite and positive.
    pub fn new(speed_reference: f32) -> Result<Self, String> {
        if !speed_reference.is_finite() || speed_reference <= 0.0 {
            return Err(format!(
                "speed_reference must be finite and > 0, got {speed_reference}"
            ));
        }
        Ok(Self { speed_reference })
    }

    /// The speed value that leaves steps unscaled.
    pub fn speed_reference(&self) -> f32 {
        self.speed_reference
    }
}

impl Default for ReflectiveMovement {
    fn default() -> Self {
        Self {
            speed_reference: 5.0,
        }
    }
}

/// Advance `agent` by `distance` and bounce it off the edges of `bounds`.
pub fn advance(agent: &mut Agent, distance: f32, bounds: Bounds) {
    let mut p = agent.position.offset(agent.heading, distance);
    let mut heading = agent.heading;

    if p.x < 0.0 {
        p.x = 0.0;
        heading = PI - heading;
    } else if p.x >= bounds.width {
        p.x = bounds.max_x();
        heading = PI - heading;
    }
    if p.y < 0.0 {
        p.y = 0.0;
        heading = -heading;
    } else if p.y >= bounds.height {
        p.y = bounds.max_y();
        heading = -heading;
    }

    agent.position = p;
    agent.set_heading(heading);
}

impl Propagator for ReflectiveMovement {
    fn name(&self) -> &str {
        "ReflectiveMovement"
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
        let StepParts {
            field,
            agents,
            tunables,
            ..
        } = ctx.parts();
        let bounds = field.geometry().bounds();
        let scale = tunables.speed / self.speed_reference;

        for (i, agent) in agents.iter_mut().enumerate() {
            let distance = agent.speed * scale;
            advance(agent, distance, bounds);
            if !agent.position.is_finite() {
                return Err(PropagatorError::NonFinite {
                    what: "agent position",
                    index: Some(i),
                });
            }
        }
        Ok(())
    }
}
