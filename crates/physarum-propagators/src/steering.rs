//! Three-sensor steering.
//!
//! Each agent samples the trail (plus the food bonus) at three points
//! `sensor_distance` ahead: straight on, `sensor_angle` to the left and
//! `sensor_angle` to the right. It then turns according to [`classify`].
//!
//! Constructed via the builder pattern: [`SensorSteering::builder`].

use crate::attraction::FoodAttraction;
use physarum_core::{FoodSource, Point, PropagatorError};
use physarum_field::TrailField;
use physarum_propagator::{Propagator, StepContext, StepParts};
use rand::Rng;
use std::f32::consts::FRAC_PI_4;

/// Which way an agent turns given its three readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Forward is strictly strongest: keep the heading.
    Hold,
    /// Forward is strictly weakest: random turn in `[-rotation, rotation)`.
    Explore,
    /// Left beats right: turn left by `rotation * U[0.5, 1)`.
    Left,
    /// Right beats left: turn right by `rotation * U[0.5, 1)`.
    Right,
    /// Anything else (ties): small random turn in `[-rotation/2, rotation/2)`.
    Jitter,
}

/// Decide a turn from the forward, left and right readings.
///
/// Rules are checked in order; the first match wins.
pub fn classify(forward: f32, left: f32, right: f32) -> Turn {
    if forward > left && forward > right {
        Turn::Hold
    } else if forward < left && forward < right {
        Turn::Explore
    } else if left > right {
        Turn::Left
    } else if right > left {
        Turn::Right
    } else {
        Turn::Jitter
    }
}

/// Sensing and steering stage.
///
/// # Construction
///
/// ```
/// use physarum_propagators::SensorSteering;
///
/// let steering = SensorSteering::builder()
///     .sensor_distance(12.0)
///     .build()
///     .unwrap();
/// assert_eq!(steering.sensor_distance(), 12.0);
/// ```
#[derive(Clone, Debug)]
pub struct SensorSteering {
    sensor_angle: f32,
    sensor_distance: f32,
    rotation: f32,
    attraction: FoodAttraction,
}

/// Builder for [`SensorSteering`].
///
/// All fields have defaults: sensor angle π/4, sensor distance 9,
/// rotation π/4, default [`FoodAttraction`].
pub struct SensorSteeringBuilder {
    sensor_angle: f32,
    sensor_distance: f32,
    rotation: f32,
    attraction: FoodAttraction,
}

impl SensorSteering {
    /// Create a new builder.
    pub fn builder() -> SensorSteeringBuilder {
        SensorSteeringBuilder {
            sensor_angle: FRAC_PI_4,
            sensor_distance: 9.0,
            rotation: FRAC_PI_4,
            attraction: FoodAttraction::default(),
        }
    }

    /// Angle between the forward sensor and each side sensor.
    pub fn sensor_angle(&self) -> f32 {
        self.sensor_angle
    }

    /// Distance from the agent to each sensor.
    pub fn sensor_distance(&self) -> f32 {
        self.sensor_distance
    }

    /// Maximum turn per tick.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Reading at `p`: trail plus food bonus, or exactly 0 where `p` maps
    /// to no grid cell (outside the world or in the partial edge strip).
    pub fn sense(&self, field: &TrailField, food: &[FoodSource], sensitivity: f32, p: Point) -> f32 {
        if field.geometry().cell_of(p).is_none() {
            return 0.0;
        }
        field.sample(p) + self.attraction.at(p, food, sensitivity)
    }

    fn turn_amount<R: Rng + ?Sized>(&self, turn: Turn, rng: &mut R) -> f32 {
        match turn {
            Turn::Hold => 0.0,
            Turn::Explore => (rng.random::<f32>() - 0.5) * self.rotation * 2.0,
            Turn::Left => -self.rotation * (rng.random::<f32>() * 0.5 + 0.5),
            Turn::Right => self.rotation * (rng.random::<f32>() * 0.5 + 0.5),
            Turn::Jitter => (rng.random::<f32>() - 0.5) * self.rotation,
        }
    }
}

impl SensorSteeringBuilder {
    /// Set the side-sensor angle in radians (default π/4).
    pub fn sensor_angle(mut self, angle: f32) -> Self {
        self.sensor_angle = angle;
        self
    }

    /// Set the sensor distance in world units (default 9).
    pub fn sensor_distance(mut self, distance: f32) -> Self {
        self.sensor_distance = distance;
        self
    }

    /// Set the maximum turn in radians (default π/4).
    pub fn rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the food bonus parameters.
    pub fn attraction(mut self, attraction: FoodAttraction) -> Self {
        self.attraction = attraction;
        self
    }

    /// Build the stage, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any angle or distance is negative or non-finite,
    /// or the attraction parameters are invalid.
    pub fn build(self) -> Result<SensorSteering, String> {
        for (name, v) in [
            ("sensor_angle", self.sensor_angle),
            ("sensor_distance", self.sensor_distance),
            ("rotation", self.rotation),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(format!("{name} must be finite and >= 0, got {v}"));
            }
        }
        self.attraction.validate()?;
        Ok(SensorSteering {
            sensor_angle: self.sensor_angle,
            sensor_distance: self.sensor_distance,
            rotation: self.rotation,
            attraction: self.attraction,
        })
    }
}

impl Propagator for SensorSteering {
    fn name(&self) -> &str {
        "SensorSteering"
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
        let StepParts {
            field,
            agents,
            food,
            tunables,
            rng,
            ..
        } = ctx.parts();
        let sensitivity = tunables.sensitivity;

        for (i, agent) in agents.iter_mut().enumerate() {
            let (pos, heading) = (agent.position, agent.heading);
            let forward = self.sense(
                field,
                food,
                sensitivity,
                pos.offset(heading, self.sensor_distance),
            );
            let left = self.sense(
                field,
                food,
                sensitivity,
                pos.offset(heading - self.sensor_angle, self.sensor_distance),
            );
            let right = self.sense(
                field,
                food,
                sensitivity,
                pos.offset(heading + self.sensor_angle, self.sensor_distance),
            );

            let delta = self.turn_amount(classify(forward, left, right), rng);
            agent.turn(delta);
            if !agent.heading.is_finite() {
                return Err(PropagatorError::NonFinite {
                    what: "agent heading",
                    index: Some(i),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physarum_test_utils::{agent_at, seeded_rng, StepHarness};
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_8, TAU};

    fn steering() -> SensorSteering {
        SensorSteering::builder().build().unwrap()
    }

    #[test]
    fn classify_follows_rule_order() {
        assert_eq!(classify(1.0, 0.5, 0.5), Turn::Hold);
        assert_eq!(classify(0.0, 0.5, 0.6), Turn::Explore);
        assert_eq!(classify(0.5, 0.7, 0.5), Turn::Left);
        assert_eq!(classify(0.5, 0.5, 0.7), Turn::Right);
        assert_eq!(classify(0.5, 0.5, 0.5), Turn::Jitter);
        assert_eq!(classify(0.0, 0.0, 0.0), Turn::Jitter);
        // Forward ties the stronger side: falls through to the side rule.
        assert_eq!(classify(0.7, 0.7, 0.2), Turn::Left);
    }

    #[test]
    fn builder_rejects_negative_distance() {
        let err = SensorSteering::builder()
            .sensor_distance(-1.0)
            .build()
            .unwrap_err();
        assert!(err.contains("sensor_distance"));
    }

    #[test]
    fn builder_rejects_bad_attraction() {
        let bad = FoodAttraction {
            gain: f32::NAN,
            ..FoodAttraction::default()
        };
        assert!(SensorSteering::builder().attraction(bad).build().is_err());
    }

    #[test]
    fn holds_heading_on_strong_forward_trail() {
        let mut h = StepHarness::grid(40, 40).with_agents(&[agent_at(20.0, 20.0, 0.0)]);
        h.field.set(29, 20, 1.0);
        h.run(&steering()).unwrap();
        assert_eq!(h.agents.as_slice()[0].heading, 0.0);
    }

    #[test]
    fn turns_left_toward_left_trail() {
        let mut h = StepHarness::grid(40, 40).with_agents(&[agent_at(20.0, 20.0, 0.0)]);
        // Left sensor lands at (26.36, 13.64).
        h.field.set(26, 13, 1.0);
        h.run(&steering()).unwrap();
        let heading = h.agents.as_slice()[0].heading;
        assert!(heading >= TAU - FRAC_PI_4 - 1e-5 && heading <= TAU - FRAC_PI_8 + 1e-5);
    }

    #[test]
    fn turns_right_toward_right_trail() {
        let mut h = StepHarness::grid(40, 40).with_agents(&[agent_at(20.0, 20.0, 0.0)]);
        // Right sensor lands at (26.36, 26.36).
        h.field.set(26, 26, 1.0);
        h.run(&steering()).unwrap();
        let heading = h.agents.as_slice()[0].heading;
        assert!((FRAC_PI_8 - 1e-5..=FRAC_PI_4 + 1e-5).contains(&heading));
    }

    #[test]
    fn explores_when_forward_is_weakest() {
        let mut h = StepHarness::grid(40, 40).with_agents(&[agent_at(20.0, 20.0, 0.0)]);
        h.field.set(26, 13, 1.0);
        h.field.set(26, 26, 1.0);
        h.run(&steering()).unwrap();
        let heading = h.agents.as_slice()[0].heading;
        let delta = if heading > std::f32::consts::PI {
            heading - TAU
        } else {
            heading
        };
        assert!(delta.abs() <= FRAC_PI_4 + 1e-5);
    }

    #[test]
    fn food_pulls_agent_toward_it() {
        let mut h = StepHarness::grid(200, 200)
            .with_agents(&[agent_at(100.0, 100.0, 0.0)])
            .with_food(vec![physarum_core::FoodSource::new(107.0, 107.0, "food")]);
        h.run(&steering()).unwrap();
        let heading = h.agents.as_slice()[0].heading;
        assert!((FRAC_PI_8 - 1e-5..=FRAC_PI_4 + 1e-5).contains(&heading));
    }

    #[test]
    fn sensor_outside_world_reads_zero_even_near_food() {
        let s = steering();
        let field = physarum_test_utils::uniform_field(40, 40, 0.5);
        let food = [physarum_core::FoodSource::new(0.0, 20.0, "food")];
        assert_eq!(s.sense(&field, &food, 5.0, Point::new(-8.0, 20.0)), 0.0);
        assert!(s.sense(&field, &food, 5.0, Point::new(4.0, 20.0)) > 0.5);
    }

    #[test]
    fn sensor_in_partial_edge_strip_reads_zero() {
        // 800 / 3 leaves x in [798, 800) without a cell.
        let s = steering();
        let field = TrailField::new(physarum_field::GridGeometry::new(800.0, 600.0, 3.0).unwrap());
        let food = [physarum_core::FoodSource::new(799.0, 300.0, "food")];
        assert_eq!(s.sense(&field, &food, 5.0, Point::new(799.0, 300.0)), 0.0);
        assert!(s.sense(&field, &food, 5.0, Point::new(797.0, 300.0)) > 0.0);
    }

    #[test]
    fn same_seed_same_turns() {
        let agents: Vec<_> = (0..20)
            .map(|i| agent_at(10.0 + i as f32, 20.0, i as f32 * 0.3))
            .collect();
        let run = || {
            let mut h = StepHarness::grid(40, 40).with_agents(&agents);
            h.rng = seeded_rng(99);
            h.run(&steering()).unwrap();
            h.agents.as_slice().to_vec()
        };
        assert_eq!(run(), run());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn headings_stay_normalised(
            x in 0.0f32..40.0,
            y in 0.0f32..40.0,
            heading in 0.0f32..TAU,
            seed in any::<u64>(),
        ) {
            let mut h = StepHarness::grid(40, 40).with_agents(&[agent_at(x, y, heading)]);
            h.rng = seeded_rng(seed);
            h.field.set(20, 20, 1.0);
            h.run(&steering()).unwrap();
            let out = h.agents.as_slice()[0].heading;
            prop_assert!((0.0..TAU).contains(&out));
        }
    }
}
