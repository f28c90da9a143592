// src/shapes/mod.rs

pub mod arc;
pub mod arrow;
pub mod blend_circles;
pub mod checkerboard;
pub mod flower;
pub mod spirograph;
pub mod trapezoid;

use crate::error::GeometryResult;
use crate::geometry::Rect;
use crate::path::Path;

pub use arc::Arc;
pub use arrow::Arrow;
pub use blend_circles::{BlendCircles, Layer};
pub use checkerboard::Checkerboard;
pub use flower::Flower;
pub use spirograph::{gcd, Spirograph};
pub use trapezoid::Trapezoid;

/// A pure function from parameters and a bounding rectangle to a path.
pub trait Shape {
    fn path(&self, bounds: Rect) -> GeometryResult<Path>;
}

/// A shape that can be shrunk inward, returning a new value each time.
pub trait InsettableShape: Shape + Sized {
    fn inset(&self, amount: f64) -> Self;
}
