//! Extra sensor signal near food sources.

use physarum_core::{FoodSource, Point};
use serde::{Deserialize, Serialize};

/// Linear falloff bonus around each food source.
///
/// For every food within `radius` of the sampled point:
/// ```text
/// bonus += (1 - d / radius) * gain * (sensitivity / sensitivity_reference) * strength
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodAttraction {
    /// Influence radius in world units; food at or beyond it adds nothing.
    pub radius: f32,
    /// Bonus at distance zero for unit sensitivity and strength.
    pub gain: f32,
    /// Sensitivity value that leaves the bonus unscaled.
    pub sensitivity_reference: f32,
}

impl Default for FoodAttraction {
    fn default() -> Self {
        Self {
            radius: 80.0,
            gain: 3.0,
            sensitivity_reference: 5.0,
        }
    }
}

impl FoodAttraction {
    /// Check that the falloff is well defined.
    pub fn validate(&self) -> Result<(), String> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(format!(
                "attraction radius must be finite and > 0, got {}",
                self.radius
            ));
        }
        if !self.gain.is_finite() || self.gain < 0.0 {
            return Err(format!(
                "attraction gain must be finite and >= 0, got {}",
                self.gain
            ));
        }
        if !self.sensitivity_reference.is_finite() || self.sensitivity_reference <= 0.0 {
            return Err(format!(
                "sensitivity_reference must be finite and > 0, got {}",
                self.sensitivity_reference
            ));
        }
        Ok(())
    }

    /// Total bonus at `p`.
    pub fn at(&self, p: Point, food: &[FoodSource], sensitivity: f32) -> f32 {
        let scale = self.gain * (sensitivity / self.sensitivity_reference);
        food.iter()
            .filter_map(|f| {
                let d = p.distance(f.position);
                (d < self.radius).then(|| (1.0 - d / self.radius) * scale * f.strength)
            })
            .sum()
    }
}
