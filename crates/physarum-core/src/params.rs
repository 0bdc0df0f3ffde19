//! Parameters a collaborator may edit while the simulation runs.

use serde::{Deserialize, Serialize};

/// Live-tunable parameters, read by the stages every tick.
///
/// These are the slider-driven values; everything else in the
/// configuration is fixed for the lifetime of a controller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Scales the food attraction bonus. Relative to the attraction
    /// reference (5 by default), so 5 means "unscaled".
    pub sensitivity: f32,
    /// Multiplicative decay applied after each diffusion pass, in (0, 1].
    pub decay_rate: f32,
    /// Scales agent step length. Relative to the speed reference (5 by
    /// default).
    pub speed: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            sensitivity: 5.0,
            decay_rate: 0.97,
            speed: 5.0,
        }
    }
}

impl Tunables {
    /// Check that every value is usable.
    ///
    /// Returns a description of the first violated constraint.
    pub fn validate(&self) -> Result<(), String> {
        if !self.sensitivity.is_finite() || self.sensitivity < 0.0 {
            return Err(format!(
                "sensitivity must be finite and >= 0, got {}",
                self.sensitivity
            ));
        }
        if !self.decay_rate.is_finite() || self.decay_rate <= 0.0 || self.decay_rate > 1.0 {
            return Err(format!(
                "decay_rate must be in (0, 1], got {}",
                self.decay_rate
            ));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(format!("speed must be finite and >= 0, got {}", self.speed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Tunables::default().validate().is_ok());
    }

    #[test]
    fn decay_outside_unit_interval_rejected() {
        for bad in [0.0, -0.5, 1.01, f32::NAN] {
            let t = Tunables {
                decay_rate: bad,
                ..Tunables::default()
            };
            assert!(t.validate().is_err(), "decay {bad} should be rejected");
        }
        let one = Tunables {
            decay_rate: 1.0,
            ..Tunables::default()
        };
        assert!(one.validate().is_ok());
    }

    #[test]
    fn negative_speed_rejected() {
        let t = Tunables {
            speed: -1.0,
            ..Tunables::default()
        };
        assert!(t.validate().unwrap_err().contains("speed"));
    }
}
