//! Double-buffered trail concentration grid.
//!
//! Agents deposit into the front buffer and sense from it. A diffusion
//! pass reads the front buffer, writes every cell of the back buffer, and
//! then swaps the two, so no cell ever sees a partially updated
//! neighbourhood.

use crate::grid::GridGeometry;
use crate::hash::digest_f32;
use crate::kernel::Kernel3x3;
use physarum_core::Point;

/// Scalar trail values in `[0, 1]`, one per grid cell.
#[derive(Clone, Debug)]
pub struct TrailField {
    geometry: GridGeometry,
    front: Vec<f32>,
    back: Vec<f32>,
}

impl TrailField {
    /// An all-zero field over `geometry`.
    pub fn new(geometry: GridGeometry) -> Self {
        let n = geometry.cell_count();
        Self {
            geometry,
            front: vec![0.0; n],
            back: vec![0.0; n],
        }
    }

    /// The grid this field is laid over.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Add `amount` to the cell containing `at`, saturating at 1.
    ///
    /// Returns `false` (and changes nothing) when `at` maps to no cell.
    pub fn deposit(&mut self, at: Point, amount: f32) -> bool {
        match self.geometry.cell_of(at) {
            Some((col, row)) => {
                let i = self.geometry.index(col, row);
                self.front[i] = (self.front[i] + amount).clamp(0.0, 1.0);
                true
            }
            None => false,
        }
    }

    /// Trail value of the cell containing `at`, or 0 when `at` maps to no
    /// cell.
    pub fn sample(&self, at: Point) -> f32 {
        self.geometry
            .cell_of(at)
            .map(|(col, row)| self.front[self.geometry.index(col, row)])
            .unwrap_or(0.0)
    }

    /// Value at `(col, row)`. Panics if out of range.
    pub fn value(&self, col: usize, row: usize) -> f32 {
        self.front[self.geometry.index(col, row)]
    }

    /// Overwrite `(col, row)`, clamped to `[0, 1]`. Panics if out of range.
    pub fn set(&mut self, col: usize, row: usize, value: f32) {
        let i = self.geometry.index(col, row);
        self.front[i] = value.clamp(0.0, 1.0);
    }

    /// One blur-and-fade pass.
    ///
    /// Every interior cell becomes the kernel-weighted sum of its 3x3
    /// neighbourhood times `decay`, capped at 1. Border cells become 0.
    /// The sum is accumulated in `f64` and narrowed once, so a uniform
    /// interior `v` becomes exactly `v * decay` under a unit-sum kernel.
    pub fn diffuse_and_decay(&mut self, kernel: &Kernel3x3, decay: f32) {
        let cols = self.geometry.cols();
        let rows = self.geometry.rows();
        let src = &self.front;
        let dst = &mut self.back;

        for row in 0..rows {
            for col in 0..cols {
                let i = row * cols + col;
                if self.geometry.is_border(col, row) {
                    dst[i] = 0.0;
                    continue;
                }
                let mut sum = 0.0f64;
                for dr in -1isize..=1 {
                    let r = (row as isize + dr) as usize;
                    for dc in -1isize..=1 {
                        let c = (col as isize + dc) as usize;
                        sum += src[r * cols + c] as f64 * kernel.weight(dr, dc) as f64;
                    }
                }
                dst[i] = ((sum * decay as f64) as f32).min(1.0);
            }
        }

        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Zero every cell.
    pub fn clear(&mut self) {
        self.front.fill(0.0);
        self.back.fill(0.0);
    }

    /// Current values, row-major.
    pub fn values(&self) -> &[f32] {
        &self.front
    }

    /// Sum of all cells.
    pub fn total(&self) -> f64 {
        self.front.iter().map(|&v| v as f64).sum()
    }

    /// Largest cell value (0 for an all-zero field).
    pub fn max(&self) -> f32 {
        self.front.iter().copied().fold(0.0, f32::max)
    }

    /// Index of the first non-finite cell, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.front.iter().position(|v| !v.is_finite())
    }

    /// FNV-1a digest of the current values.
    pub fn digest(&self) -> u64 {
        digest_f32(&self.front)
    }
}
