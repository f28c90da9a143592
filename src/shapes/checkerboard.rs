// src/shapes/checkerboard.rs

use log::{debug, trace};

use crate::error::{GeometryError, GeometryResult};
use crate::geometry::Rect;
use crate::path::Path;
use crate::shapes::Shape;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkerboard {
    pub rows: usize,
    pub columns: usize,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self { rows: 4, columns: 4 }
    }
}

impl Checkerboard {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of filled cells: every cell whose row and column sum is even.
    /// `None` when the board has more cells than `usize` can count.
    pub fn filled_cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns).map(|cells| cells.div_ceil(2))
    }
}

impl Shape for Checkerboard {
    fn path(&self, bounds: Rect) -> GeometryResult<Path> {
        bounds.validate()?;

        let mut path = Path::new();
        if self.rows == 0 || self.columns == 0 {
            debug!("checkerboard {}x{} has no cells", self.rows, self.columns);
            return Ok(path);
        }
        if self.filled_cell_count().is_none() {
            return Err(GeometryError::DegenerateGeometry(format!(
                "checkerboard {}x{} has too many cells",
                self.rows, self.columns
            )));
        }

        let row_size = bounds.height / self.rows as f64;
        let column_size = bounds.width / self.columns as f64;

        for row in 0..self.rows {
            for column in 0..self.columns {
                if (row + column) % 2 == 0 {
                    let start_x = bounds.min_x() + column_size * column as f64;
                    let start_y = bounds.min_y() + row_size * row as f64;
                    path.add_rect(Rect::new(start_x, start_y, column_size, row_size));
                }
            }
        }

        trace!("checkerboard {}x{} filled {} cells", self.rows, self.columns, path.subpath_count());
        Ok(path)
    }
}
