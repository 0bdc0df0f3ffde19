//! Blur-and-fade pass over the trail field.

use physarum_core::PropagatorError;
use physarum_field::Kernel3x3;
use physarum_propagator::{Propagator, StepContext};

/// Convolves the field with a 3x3 kernel and multiplies by
/// `tunables.decay_rate`. Border cells are zeroed.
///
/// The decay rate is read every tick, so a live edit takes effect on the
/// next step.
#[derive(Clone, Debug, Default)]
pub struct DiffuseDecay {
    kernel: Kernel3x3,
}

impl DiffuseDecay {
    /// A diffusion stage with a custom kernel.
    pub fn new(kernel: Kernel3x3) -> Self {
        Self { kernel }
    }

    /// The kernel in use.
    pub fn kernel(&self) -> &Kernel3x3 {
        &self.kernel
    }
}

impl Propagator for DiffuseDecay {
    fn name(&self) -> &str {
        "DiffuseDecay"
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), PropagatorError> {
        let decay = ctx.tunables().decay_rate;
        if !decay.is_finite() || decay <= 0.0 || decay > 1.0 {
            return Err(PropagatorError::ExecutionFailed {
                reason: format!("decay_rate must be in (0, 1], got {decay}"),
            });
        }
        ctx.field_mut().diffuse_and_decay(&self.kernel, decay);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physarum_core::Tunables;
    use physarum_test_utils::{uniform_field, StepHarness};
    use proptest::prelude::*;

    #[test]
    fn uniform_interior_decays_by_rate() {
        let mut h = StepHarness::new(uniform_field(6, 6, 0.5));
        h.run(&DiffuseDecay::default()).unwrap();
        for row in 1..5 {
            for col in 1..5 {
                assert!((h.field.value(col, row) - 0.5 * 0.97).abs() < 1e-6);
            }
        }
        assert_eq!(h.field.value(0, 3), 0.0);
    }

    #[test]
    fn reads_decay_from_tunables() {
        let mut h = StepHarness::new(uniform_field(5, 5, 1.0)).with_tunables(Tunables {
            decay_rate: 0.5,
            ..Tunables::default()
        });
        h.run(&DiffuseDecay::default()).unwrap();
        assert!((h.field.value(2, 2) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn invalid_decay_is_an_execution_failure() {
        let mut h = StepHarness::grid(5, 5).with_tunables(Tunables {
            decay_rate: 1.5,
            ..Tunables::default()
        });
        let err = h.run(&DiffuseDecay::default()).unwrap_err();
        assert!(matches!(err, PropagatorError::ExecutionFailed { .. }));
    }

    proptest! {
        #[test]
        fn uniform_interior_property(v in 0.0f32..=1.0, decay in 0.01f32..=1.0) {
            let mut h = StepHarness::new(uniform_field(7, 7, v)).with_tunables(Tunables {
                decay_rate: decay,
                ..Tunables::default()
            });
            h.run(&DiffuseDecay::default()).unwrap();
            // Border cells still hold v when the pass reads them.
            for row in 1..6 {
                for col in 1..6 {
                    prop_assert!((h.field.value(col, row) - v * decay).abs() < 1e-5);
                }
            }
        }
    }
}
