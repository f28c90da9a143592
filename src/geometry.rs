// src/geometry.rs

use bytemuck::{Pod, Zeroable};
use glam::{DAffine2, DVec2};

use crate::error::{GeometryError, GeometryResult};

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    pub fn transformed(&self, transform: &DAffine2) -> Point2 {
        transform.transform_point2((*self).into()).into()
    }

    pub fn approx_eq(&self, other: &Point2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl From<DVec2> for Point2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<kurbo::Point> for Point2 {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2> for kurbo::Point {
    fn from(p: Point2) -> Self {
        kurbo::Point::new(p.x, p.y)
    }
}

impl From<Point2> for DVec2 {
    fn from(p: Point2) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// Axis-aligned rectangle in a y-down coordinate space, the frame every
/// generator draws into.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.mid_x(), self.mid_y())
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    pub fn validate(&self) -> GeometryResult<()> {
        let finite = self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite();
        if !finite {
            return Err(GeometryError::DegenerateGeometry(format!("bounds are not finite: {:?}", self)));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(GeometryError::DegenerateGeometry(format!(
                "bounds have negative size {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10.0, 20.0, 200.0, 100.0);
        assert_eq!(rect.min_x(), 10.0);
        assert_eq!(rect.mid_x(), 110.0);
        assert_eq!(rect.max_x(), 210.0);
        assert_eq!(rect.mid_y(), 70.0);
        assert_eq!(rect.max_y(), 120.0);
        assert_eq!(rect.center(), Point2::new(110.0, 70.0));
    }

    #[test]
    fn negative_or_nan_bounds_are_rejected() {
        assert!(Rect::from_size(-1.0, 10.0).validate().is_err());
        assert!(Rect::from_size(10.0, f64::NAN).validate().is_err());
        assert!(Rect::from_size(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn transform_round_trips_through_glam() {
        let transform = DAffine2::from_translation(DVec2::new(5.0, -2.0));
        let moved = Point2::new(1.0, 1.0).transformed(&transform);
        assert_eq!(moved, Point2::new(6.0, -1.0));
    }
}
