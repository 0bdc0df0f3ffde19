//! The 3x3 diffusion stencil.

use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// Tolerance when checking that weights sum to one.
const SUM_TOLERANCE: f32 = 1e-5;

/// Normalised 3x3 weights, indexed `[row][col]` with the centre at `[1][1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kernel3x3 {
    weights: [[f32; 3]; 3],
}

impl Kernel3x3 {
    /// Corners 0.05, edges 0.1, centre 0.4.
    pub const PHYSARUM: Kernel3x3 = Kernel3x3 {
        weights: [[0.05, 0.1, 0.05], [0.1, 0.4, 0.1], [0.05, 0.1, 0.05]],
    };

    /// Build a kernel from explicit weights.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidWeight`] if any weight is negative or
    /// non-finite, [`GridError::UnnormalisedKernel`] if they do not sum
    /// to one.
    pub fn new(weights: [[f32; 3]; 3]) -> Result<Self, GridError> {
        let mut sum = 0.0f32;
        for (row, line) in weights.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(GridError::InvalidWeight { row, col, value });
                }
                sum += value;
            }
        }
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(GridError::UnnormalisedKernel { sum });
        }
        Ok(Self { weights })
    }

    /// Weight for the neighbour at offset `(dr, dc)`, each in `-1..=1`.
    #[inline]
    pub fn weight(&self, dr: isize, dc: isize) -> f32 {
        self.weights[(dr + 1) as usize][(dc + 1) as usize]
    }

    /// The raw weight table.
    pub fn weights(&self) -> &[[f32; 3]; 3] {
        &self.weights
    }
}

impl Default for Kernel3x3 {
    fn default() -> Self {
        Self::PHYSARUM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physarum_kernel_is_normalised() {
        let k = Kernel3x3::new(*Kernel3x3::PHYSARUM.weights()).unwrap();
        assert_eq!(k, Kernel3x3::PHYSARUM);
        assert_eq!(k.weight(0, 0), 0.4);
        assert_eq!(k.weight(-1, 0), 0.1);
        assert_eq!(k.weight(1, -1), 0.05);
    }

    #[test]
    fn rejects_negative_weight() {
        let mut w = *Kernel3x3::PHYSARUM.weights();
        w[0][2] = -0.05;
        w[1][1] = 0.5;
        assert_eq!(
            Kernel3x3::new(w),
            Err(GridError::InvalidWeight {
                row: 0,
                col: 2,
                value: -0.05
            })
        );
    }

    #[test]
    fn rejects_unnormalised() {
        let w = [[0.0; 3], [0.0, 0.5, 0.0], [0.0; 3]];
        assert!(matches!(
            Kernel3x3::new(w),
            Err(GridError::UnnormalisedKernel { .. })
        ));
    }

    #[test]
    fn identity_kernel_accepted() {
        let w = [[0.0; 3], [0.0, 1.0, 0.0], [0.0; 3]];
        assert!(Kernel3x3::new(w).is_ok());
    }
}
