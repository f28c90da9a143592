// src/lib.rs

pub mod animation;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod path;
pub mod shapes;
pub mod svg;

// Commonly used items, re-exported for convenience
pub use error::GeometryError;
pub use geometry::{Point2, Rect};
pub use path::{FillRule, Path, PathSegment};
pub use shapes::{InsettableShape, Shape};
