//! How many agents a map gets and where they start.

use serde::{Deserialize, Serialize};

/// Spawn parameters.
///
/// The population is `min(max_agents, base_count + food * per_food_bonus)`,
/// scattered uniformly by angle and radius within `radius` of the source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnPolicy {
    /// Agents spawned regardless of food count.
    pub base_count: usize,
    /// Extra agents per food source.
    pub per_food_bonus: usize,
    /// Hard cap on the population.
    pub max_agents: usize,
    /// Maximum spawn distance from the source, in world units.
    pub radius: f32,
    /// Lower bound (inclusive) of the per-agent speed multiplier.
    pub speed_min: f32,
    /// Upper bound (exclusive) of the per-agent speed multiplier.
    pub speed_max: f32,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            base_count: 2000,
            per_food_bonus: 600,
            max_agents: 5000,
            radius: 8.0,
            speed_min: 0.8,
            speed_max: 1.2,
        }
    }
}

impl SpawnPolicy {
    /// Population for a map with `food_count` food sources.
    pub fn count_for(&self, food_count: usize) -> usize {
        food_count
            .saturating_mul(self.per_food_bonus)
            .saturating_add(self.base_count)
            .min(self.max_agents)
    }

    /// Check that the policy can produce agents.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_agents == 0 {
            return Err("max_agents must be at least 1".into());
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(format!(
                "spawn radius must be finite and >= 0, got {}",
                self.radius
            ));
        }
        if !self.speed_min.is_finite()
            || !self.speed_max.is_finite()
            || self.speed_min < 0.0
            || self.speed_min >= self.speed_max
        {
            return Err(format!(
                "speed range [{}, {}) is empty or invalid",
                self.speed_min, self.speed_max
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn count_follows_formula() {
        let p = SpawnPolicy::default();
        assert_eq!(p.count_for(0), 2000);
        assert_eq!(p.count_for(2), 3200);
        assert_eq!(p.count_for(5), 5000);
        assert_eq!(p.count_for(100), 5000);
    }

    #[test]
    fn count_saturates_instead_of_overflowing() {
        let p = SpawnPolicy {
            per_food_bonus: usize::MAX,
            ..SpawnPolicy::default()
        };
        assert_eq!(p.count_for(3), p.max_agents);
    }

    #[test]
    fn validate_rejects_bad_policies() {
        assert!(SpawnPolicy::default().validate().is_ok());
        let zero_cap = SpawnPolicy {
            max_agents: 0,
            ..SpawnPolicy::default()
        };
        assert!(zero_cap.validate().is_err());
        let empty_speed = SpawnPolicy {
            speed_min: 1.0,
            speed_max: 1.0,
            ..SpawnPolicy::default()
        };
        assert!(empty_speed.validate().is_err());
        let bad_radius = SpawnPolicy {
            radius: f32::INFINITY,
            ..SpawnPolicy::default()
        };
        assert!(bad_radius.validate().is_err());
    }

    proptest! {
        #[test]
        fn count_never_exceeds_cap(food in 0usize..50, cap in 1usize..10_000) {
            let p = SpawnPolicy { max_agents: cap, ..SpawnPolicy::default() };
            let n = p.count_for(food);
            prop_assert!(n <= cap);
            prop_assert_eq!(n, (2000 + food * 600).min(cap));
        }
    }
}
