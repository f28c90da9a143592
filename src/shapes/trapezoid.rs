// src/shapes/trapezoid.rs

use crate::error::{ensure_finite, GeometryResult};
use crate::geometry::{Point2, Rect};
use crate::path::Path;
use crate::shapes::Shape;

/// Full-width base with a top edge pulled in by `inset_amount` on each side.
/// Insets past half the width cross over into a bowtie, which is allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trapezoid {
    pub inset_amount: f64,
}

impl Default for Trapezoid {
    fn default() -> Self {
        Self { inset_amount: 50.0 }
    }
}

impl Trapezoid {
    pub fn new(inset_amount: f64) -> Self {
        Self { inset_amount }
    }
}

impl Shape for Trapezoid {
    fn path(&self, bounds: Rect) -> GeometryResult<Path> {
        bounds.validate()?;
        ensure_finite("trapezoid inset", self.inset_amount)?;

        let mut path = Path::new();
        path.move_to(Point2::new(0.0, bounds.max_y()));
        path.line_to(Point2::new(self.inset_amount, bounds.min_y()));
        path.line_to(Point2::new(bounds.max_x() - self.inset_amount, bounds.min_y()));
        path.line_to(Point2::new(bounds.max_x(), bounds.max_y()));
        path.line_to(Point2::new(0.0, bounds.max_y()));

        Ok(path)
    }
}
