//! Agents mark the cell they stand in.

use physarum_core::PropagatorError;
use physarum_propagator::{Propagator, StepContext, StepParts};

/// Adds a fixed amount to each agent's cell, saturating at 1.
///
/// Agents in the partial strip past the last grid column or row deposit
/// nothing.
#[derive(Clone, Debug)]
pub struct TrailDeposition {
    amount: f32,
}

impl TrailDeposition {
    /// A stage depositing `amount` per agent per tick.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `amount` is negative or non-finite.
    pub fn new(amount: f32) -> Result<Self, String> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(format!("deposit amount must be finite and >= 0, got {amount}"));
        }
        Ok(Self { amount })
    }

    /// Per-agent deposit.
    pub fn amount(&self) -> f32 {
        self.amount
    }
}

impl Default for TrailDeposition {
    fn default() -> Self {
        Self { amount: 0.08 }
    }
}

impl Propagator for TrailDeposition {
    fn name(&self) -> &str {
        "TrailDeposition"
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
        let StepParts { field, agents, .. } = ctx.parts();
        for agent in agents.iter() {
            field.deposit(agent.position, self.amount);
        }
        Ok(())
    }
}
