//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the constructor input for a
//! [`SimulationController`](crate::SimulationController). Every section
//! has defaults, so a TOML file only needs the values it changes:
//!
//! ```
//! use physarum_engine::SimConfig;
//!
//! let config = SimConfig::from_toml_str(
//!     r#"
//!     seed = 7
//!
//!     [world]
//!     cell_size = 4.0
//!
//!     [tunables]
//!     decay_rate = 0.96
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.world.width, 800.0);
//! assert_eq!(config.world.cell_size, 4.0);
//! ```

use std::f32::consts::FRAC_PI_4;

use physarum_agents::SpawnPolicy;
use physarum_core::Tunables;
use physarum_field::{GridError, GridGeometry, Kernel3x3};
use physarum_propagator::{Pipeline, PipelineError, Propagator};
use physarum_propagators::{
    DiffuseDecay, FoodAttraction, PathExtraction, ReflectiveMovement, SensorSteering,
    TrailDeposition,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Sections ───────────────────────────────────────────────────────

/// World rectangle and grid resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World width in world units.
    pub width: f32,
    /// World height in world units.
    pub height: f32,
    /// World units per grid cell edge.
    pub cell_size: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            cell_size: 3.0,
        }
    }
}

/// Sensor geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Angle between forward and side sensors, radians.
    pub angle: f32,
    /// Sensor distance from the agent, world units.
    pub distance: f32,
    /// Maximum turn per tick, radians.
    pub rotation: f32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            angle: FRAC_PI_4,
            distance: 9.0,
            rotation: FRAC_PI_4,
        }
    }
}

/// Trail deposit and path extraction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Amount each agent adds to its cell per tick.
    pub deposit_amount: f32,
    /// Cells must exceed this to take part in a path edge.
    pub path_threshold: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            deposit_amount: 0.08,
            path_threshold: 0.2,
        }
    }
}

/// Full configuration for a simulation controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// PRNG seed for spawning and steering.
    pub seed: u64,
    /// `tunables.speed` value that leaves agent steps unscaled.
    pub speed_reference: f32,
    /// World and grid.
    pub world: WorldConfig,
    /// Population size and scatter.
    pub spawn: SpawnPolicy,
    /// Sensor geometry.
    pub sensor: SensorConfig,
    /// Food bonus added to sensor readings.
    pub attraction: FoodAttraction,
    /// Deposit amount and path threshold.
    pub trail: TrailConfig,
    /// Initial live parameters.
    pub tunables: Tunables,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            speed_reference: 5.0,
            world: WorldConfig::default(),
            spawn: SpawnPolicy::default(),
            sensor: SensorConfig::default(),
            attraction: FoodAttraction::default(),
            trail: TrailConfig::default(),
            tunables: Tunables::default(),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while loading or validating a [`SimConfig`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A value is out of range.
    #[error("invalid {section}: {reason}")]
    Invalid {
        /// Config section (`"spawn"`, `"trail"`, ...).
        section: &'static str,
        /// What is wrong with it.
        reason: String,
    },
    /// World dimensions or cell size do not form a grid.
    #[error("invalid world: {0}")]
    Grid(#[from] GridError),
    /// The stage pipeline could not be assembled.
    #[error("invalid pipeline: {0}")]
    Pipeline(#[from] PipelineError),
    /// TOML could not be parsed into a config.
    #[error("config parse error: {0}")]
    Parse(String),
    /// A config could not be written as TOML.
    #[error("config encode error: {0}")]
    Encode(String),
}

impl ConfigError {
    pub(crate) fn invalid(section: &'static str) -> impl FnOnce(String) -> Self {
        move |reason| Self::Invalid { section, reason }
    }
}

// ── Validation and construction ────────────────────────────────────

impl SimConfig {
    /// Parse a TOML document and validate it.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML or unknown value types,
    /// otherwise whatever [`validate`](Self::validate) reports.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SimConfig =
            toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialise as TOML.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Encode`] if a value has no TOML representation.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Encode(e.to_string()))
    }

    /// Check every value.
    ///
    /// # Errors
    ///
    /// The first problem found, as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry()?;
        self.spawn.validate().map_err(ConfigError::invalid("spawn"))?;
        for (name, v) in [
            ("angle", self.sensor.angle),
            ("distance", self.sensor.distance),
            ("rotation", self.sensor.rotation),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::Invalid {
                    section: "sensor",
                    reason: format!("{name} must be finite and >= 0, got {v}"),
                });
            }
        }
        self.attraction
            .validate()
            .map_err(ConfigError::invalid("attraction"))?;
        if !self.trail.deposit_amount.is_finite() || self.trail.deposit_amount < 0.0 {
            return Err(ConfigError::Invalid {
                section: "trail",
                reason: format!(
                    "deposit_amount must be finite and >= 0, got {}",
                    self.trail.deposit_amount
                ),
            });
        }
        if !(0.0..1.0).contains(&self.trail.path_threshold) {
            return Err(ConfigError::Invalid {
                section: "trail",
                reason: format!(
                    "path_threshold must be in [0, 1), got {}",
                    self.trail.path_threshold
                ),
            });
        }
        self.tunables
            .validate()
            .map_err(ConfigError::invalid("tunables"))?;
        if !self.speed_reference.is_finite() || self.speed_reference <= 0.0 {
            return Err(ConfigError::Invalid {
                section: "speed_reference",
                reason: format!("must be finite and > 0, got {}", self.speed_reference),
            });
        }
        Ok(())
    }

    /// The grid described by the `world` section.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Grid`] for unusable dimensions.
    pub fn geometry(&self) -> Result<GridGeometry, ConfigError> {
        Ok(GridGeometry::new(
            self.world.width,
            self.world.height,
            self.world.cell_size,
        )?)
    }

    /// The standard five-stage pipeline configured from this config.
    ///
    /// Order: steering, movement, deposition, diffusion/decay, path
    /// extraction.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if a stage rejects its parameters.
    pub fn build_pipeline(&self) -> Result<Pipeline, ConfigError> {
        let steering = SensorSteering::builder()
            .sensor_angle(self.sensor.angle)
            .sensor_distance(self.sensor.distance)
            .rotation(self.sensor.rotation)
            .attraction(self.attraction)
            .build()
            .map_err(ConfigError::invalid("sensor"))?;
        let movement = ReflectiveMovement::new(self.speed_reference)
            .map_err(ConfigError::invalid("speed_reference"))?;
        let deposition = TrailDeposition::new(self.trail.deposit_amount)
            .map_err(ConfigError::invalid("trail"))?;
        let extraction = PathExtraction::new(self.trail.path_threshold)
            .map_err(ConfigError::invalid("trail"))?;

        let stages: Vec<Box<dyn Propagator>> = vec![
            Box::new(steering),
            Box::new(movement),
            Box::new(deposition),
            Box::new(DiffuseDecay::new(Kernel3x3::PHYSARUM)),
            Box::new(extraction),
        ];
        Ok(Pipeline::new(stages)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let c = SimConfig::default();
        assert!(c.validate().is_ok());
        let g = c.geometry().unwrap();
        assert_eq!((g.cols(), g.rows()), (266, 200));
    }

    #[test]
    fn default_pipeline_has_five_stages() {
        let p = SimConfig::default().build_pipeline().unwrap();
        assert_eq!(
            p.names().collect::<Vec<_>>(),
            [
                "SensorSteering",
                "ReflectiveMovement",
                "TrailDeposition",
                "DiffuseDecay",
                "PathExtraction"
            ]
        );
    }

    #[test]
    fn rejects_bad_decay() {
        let mut c = SimConfig::default();
        c.tunables.decay_rate = 1.2;
        match c.validate() {
            Err(ConfigError::Invalid { section, .. }) => assert_eq!(section, "tunables"),
            other => panic!("expected tunables error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_cell_larger_than_world() {
        let mut c = SimConfig::default();
        c.world.cell_size = 1000.0;
        assert!(matches!(c.validate(), Err(ConfigError::Grid(_))));
    }

    #[test]
    fn rejects_threshold_of_one() {
        let mut c = SimConfig::default();
        c.trail.path_threshold = 1.0;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Invalid {
                section: "trail",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_agent_cap() {
        let mut c = SimConfig::default();
        c.spawn.max_agents = 0;
        assert!(c.validate().unwrap_err().to_string().contains("spawn"));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(SimConfig::from_toml_str("").unwrap(), SimConfig::default());
    }

    #[test]
    fn toml_overrides_nested_fields() {
        let c = SimConfig::from_toml_str(
            r#"
            seed = 99
            speed_reference = 4.0

            [spawn]
            max_agents = 1234

            [trail]
            path_threshold = 0.3
            "#,
        )
        .unwrap();
        assert_eq!(c.seed, 99);
        assert_eq!(c.spawn.max_agents, 1234);
        assert_eq!(c.spawn.base_count, 2000);
        assert_eq!(c.trail.path_threshold, 0.3);
        assert_eq!(c.trail.deposit_amount, 0.08);
        assert_eq!(c.speed_reference, 4.0);
    }

    #[test]
    fn toml_parse_error_is_reported() {
        let err = SimConfig::from_toml_str("world = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_values_are_validated() {
        let err = SimConfig::from_toml_str("[tunables]\nspeed = -1.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                section: "tunables",
                ..
            }
        ));
    }

    #[test]
    fn toml_round_trip_preserves_config() {
        let mut c = SimConfig::default();
        c.seed = 17;
        c.world.cell_size = 5.0;
        let text = c.to_toml_string().unwrap();
        assert_eq!(SimConfig::from_toml_str(&text).unwrap(), c);
    }
}
