// src/shapes/arrow.rs

use crate::error::{ensure_finite, GeometryResult};
use crate::geometry::{Point2, Rect};
use crate::path::Path;
use crate::shapes::Shape;

/// Downward-pointing arrow. `amount` sets the shaft width; the head spans
/// three times that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
    pub amount: f64,
}

impl Default for Arrow {
    fn default() -> Self {
        Self { amount: 50.0 }
    }
}

impl Arrow {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl Shape for Arrow {
    fn path(&self, bounds: Rect) -> GeometryResult<Path> {
        bounds.validate()?;
        ensure_finite("arrow amount", self.amount)?;

        let amount = self.amount;
        let shoulder_y = bounds.max_y() / 3.0 * 2.0;

        let mut path = Path::new();
        path.move_to(Point2::new(bounds.mid_x() + amount / 2.0, bounds.min_y()));
        path.line_to(Point2::new(bounds.mid_x() - amount / 2.0, bounds.min_y()));
        path.line_to(Point2::new(bounds.mid_x() - amount / 2.0, shoulder_y));
        path.line_to(Point2::new(bounds.mid_x() - amount * 3.0 / 2.0, shoulder_y));
        path.line_to(Point2::new(bounds.mid_x(), bounds.mid_y() + amount * 3.0 / 2.0));
        path.line_to(Point2::new(bounds.mid_x() + amount * 3.0 / 2.0, shoulder_y));
        path.line_to(Point2::new(bounds.mid_x() + amount / 2.0, shoulder_y));

        Ok(path)
    }
}
