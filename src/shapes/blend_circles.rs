// src/shapes/blend_circles.rs

use std::f64::consts::TAU;

use crate::error::{ensure_finite, GeometryError, GeometryResult};
use crate::geometry::{Point2, Rect};
use crate::gradient::Rgb;
use crate::path::Path;
use crate::shapes::Shape;

/// Diameter of each circle at `amount == 1`.
pub const FULL_DIAMETER: f64 = 200.0;

const CIRCLES: [(f64, f64, Rgb); 3] = [(-50.0, -80.0, Rgb::RED), (50.0, -80.0, Rgb::GREEN), (0.0, 0.0, Rgb::BLUE)];

/// Screen blend of one channel: the result is never darker than either input.
pub fn screen(a: f64, b: f64) -> f64 {
    1.0 - (1.0 - a) * (1.0 - b)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub path: Path,
    pub color: Rgb,
    pub center: Point2,
    pub radius: f64,
}

impl Layer {
    pub fn contains(&self, point: Point2) -> bool {
        self.center.distance(&point) <= self.radius
    }
}

/// Red, green and blue discs screened together over black. Where all three
/// overlap the result is white.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BlendCircles {
    pub amount: f64,
}

impl BlendCircles {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    pub fn layers(&self, bounds: Rect) -> GeometryResult<Vec<Layer>> {
        bounds.validate()?;
        ensure_finite("blend amount", self.amount)?;
        if self.amount < 0.0 {
            return Err(GeometryError::DegenerateGeometry(format!(
                "blend amount {} gives a negative diameter",
                self.amount
            )));
        }

        let radius = FULL_DIAMETER * self.amount / 2.0;
        let layers = CIRCLES
            .iter()
            .map(|&(dx, dy, color)| {
                let center = Point2::new(bounds.mid_x() + dx, bounds.mid_y() + dy);
                let mut path = Path::new();
                path.arc_to(center, radius, 0.0, TAU, false);
                path.close();
                Layer {
                    path,
                    color,
                    center,
                    radius,
                }
            })
            .collect();
        Ok(layers)
    }

    /// Colour of `point` after screening every layer that covers it.
    pub fn color_at(&self, bounds: Rect, point: Point2) -> GeometryResult<Rgb> {
        let color = self
            .layers(bounds)?
            .iter()
            .filter(|layer| layer.contains(point))
            .fold(Rgb::BLACK, |acc, layer| {
                Rgb::new(
                    screen(acc.r, layer.color.r),
                    screen(acc.g, layer.color.g),
                    screen(acc.b, layer.color.b),
                )
            });
        Ok(color)
    }
}

impl Shape for BlendCircles {
    fn path(&self, bounds: Rect) -> GeometryResult<Path> {
        let mut path = Path::new();
        for layer in self.layers(bounds)? {
            path.add_path(&layer.path);
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_never_darkens() {
        assert_eq!(screen(0.0, 0.0), 0.0);
        assert_eq!(screen(1.0, 0.0), 1.0);
        assert!((screen(0.5, 0.5) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn three_circles_scaled_by_amount() {
        let bounds = Rect::from_size(300.0, 300.0);
        let layers = BlendCircles::new(0.5).layers(bounds).unwrap();
        assert_eq!(layers.len(), 3);
        assert!(layers.iter().all(|l| l.radius == 50.0));
        assert_eq!(layers[0].center, Point2::new(100.0, 70.0));
        assert_eq!(layers[2].center, Point2::new(150.0, 150.0));

        let path = BlendCircles::new(0.5).path(bounds).unwrap();
        assert_eq!(path.subpath_count(), 3);
    }

    #[test]
    fn overlap_of_all_three_is_white() {
        let bounds = Rect::from_size(300.0, 300.0);
        let circles = BlendCircles::new(1.0);
        let white = circles.color_at(bounds, Point2::new(150.0, 110.0)).unwrap();
        assert_eq!(white, Rgb::new(1.0, 1.0, 1.0));
        let outside = circles.color_at(bounds, Point2::new(0.0, 299.0)).unwrap();
        assert_eq!(outside, Rgb::BLACK);
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert!(BlendCircles::new(-1.0).layers(Rect::from_size(10.0, 10.0)).is_err());
    }
}
