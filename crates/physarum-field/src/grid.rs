//! World-to-cell mapping for the trail grid.

use crate::error::GridError;
use physarum_core::{Bounds, Point};
use serde::{Deserialize, Serialize};

/// Dimensions of the world and of the grid laid over it.
///
/// `cols = floor(width / cell_size)` and `rows = floor(height / cell_size)`.
/// A strip narrower than one cell along the right and bottom edges is part
/// of the world (agents may stand there) but maps to no cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    bounds: Bounds,
    cell_size: f32,
    cols: usize,
    rows: usize,
}

impl GridGeometry {
    /// Lay a grid of `cell_size`-unit cells over a `width` x `height` world.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidDimension`] for non-finite or non-positive
    /// values, [`GridError::EmptyGrid`] when not even one cell fits.
    pub fn new(width: f32, height: f32, cell_size: f32) -> Result<Self, GridError> {
        for (name, value) in [("width", width), ("height", height), ("cell_size", cell_size)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GridError::InvalidDimension { name, value });
            }
        }
        let cols = (width / cell_size).floor() as usize;
        let rows = (height / cell_size).floor() as usize;
        if cols == 0 || rows == 0 {
            return Err(GridError::EmptyGrid {
                width,
                height,
                cell_size,
            });
        }
        Ok(Self {
            bounds: Bounds::new(width, height),
            cell_size,
            cols,
            rows,
        })
    }

    /// The continuous world rectangle.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// World units per cell edge.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Row-major flat index of `(col, row)`.
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// The `(col, row)` of the cell containing `p`, or `None` when `p` is
    /// outside the world or in the partial strip past the last cell.
    pub fn cell_of(&self, p: Point) -> Option<(usize, usize)> {
        if !self.bounds.contains(p) {
            return None;
        }
        let col = (p.x / self.cell_size).floor() as usize;
        let row = (p.y / self.cell_size).floor() as usize;
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    /// World position of the top-left corner of `(col, row)`.
    pub fn cell_origin(&self, col: usize, row: usize) -> Point {
        Point::new(col as f32 * self.cell_size, row as f32 * self.cell_size)
    }

    /// Whether `(col, row)` lies on the outermost ring of cells.
    pub fn is_border(&self, col: usize, row: usize) -> bool {
        col == 0 || row == 0 || col + 1 == self.cols || row + 1 == self.rows
    }
}
