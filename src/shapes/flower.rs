// src/shapes/flower.rs

use std::f64::consts::PI;

use glam::{DAffine2, DVec2};
use log::trace;

use crate::error::{ensure_finite, GeometryResult};
use crate::geometry::Rect;
use crate::path::{FillRule, Path};
use crate::shapes::Shape;

pub const PETAL_STEP: f64 = PI / 8.0;
pub const PETAL_COUNT: usize = 16;

/// Ring of rotated ellipses. Must be filled even-odd: the overlaps between
/// petals are what make the pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flower {
    pub petal_offset: f64,
    pub petal_width: f64,
}

impl Default for Flower {
    fn default() -> Self {
        Self {
            petal_offset: -20.0,
            petal_width: 100.0,
        }
    }
}

impl Flower {
    pub fn new(petal_offset: f64, petal_width: f64) -> Self {
        Self {
            petal_offset,
            petal_width,
        }
    }

    /// Rotation of every petal, stepping through one full turn.
    pub fn petal_angles() -> impl Iterator<Item = f64> {
        (0..PETAL_COUNT).map(|i| i as f64 * PETAL_STEP)
    }
}

impl Shape for Flower {
    fn path(&self, bounds: Rect) -> GeometryResult<Path> {
        bounds.validate()?;
        ensure_finite("petal offset", self.petal_offset)?;
        ensure_finite("petal width", self.petal_width)?;

        let mut path = Path::new().with_fill_rule(FillRule::EvenOdd);
        let centre = DAffine2::from_translation(DVec2::new(bounds.width / 2.0, bounds.height / 2.0));

        let mut petal = Path::new();
        petal.add_ellipse_in(Rect::new(self.petal_offset, 0.0, self.petal_width, bounds.width / 2.0));

        for angle in Flower::petal_angles() {
            // Rotate about the origin first, then move onto the centre.
            let position = centre * DAffine2::from_angle(angle);
            path.add_path(&petal.applying(&position));
        }

        trace!("flower produced {} segments", path.len());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2;

    #[test]
    fn sixteen_petals_for_any_parameters() {
        let bounds = Rect::from_size(300.0, 300.0);
        for (offset, width) in [(-40.0, 0.0), (-20.0, 100.0), (40.0, 55.5)] {
            let path = Flower::new(offset, width).path(bounds).unwrap();
            assert_eq!(path.subpath_count(), PETAL_COUNT);
            assert_eq!(path.fill_rule(), FillRule::EvenOdd);
        }
    }

    fn extremes(points: &[Point2]) -> (Point2, Point2) {
        points.iter().fold(
            (Point2::new(f64::MAX, f64::MAX), Point2::new(f64::MIN, f64::MIN)),
            |(lo, hi), p| (Point2::new(lo.x.min(p.x), lo.y.min(p.y)), Point2::new(hi.x.max(p.x), hi.y.max(p.y))),
        )
    }

    #[test]
    fn quarter_turn_petal_is_rotated_before_it_is_moved() {
        let bounds = Rect::from_size(300.0, 300.0);
        let petals = Flower::new(-20.0, 100.0).path(bounds).unwrap().subpaths();
        assert_eq!(petals.len(), PETAL_COUNT);

        // Petal 0 is the ellipse in (-20, 0, 100, 150) moved by (150, 150).
        let (lo, hi) = extremes(&petals[0]);
        assert!(lo.approx_eq(&Point2::new(130.0, 150.0), 0.5), "{lo:?}");
        assert!(hi.approx_eq(&Point2::new(230.0, 300.0), 0.5), "{hi:?}");

        // Petal 4 turns a quarter: its centre (30, 75) goes to (-75, 30)
        // and then to (75, 180), and its long axis lies along x.
        let (lo, hi) = extremes(&petals[4]);
        assert!(lo.approx_eq(&Point2::new(0.0, 130.0), 0.5), "{lo:?}");
        assert!(hi.approx_eq(&Point2::new(150.0, 230.0), 0.5), "{hi:?}");
    }

    #[test]
    fn every_petal_centre_sits_on_the_rotated_offset() {
        let bounds = Rect::from_size(300.0, 300.0);
        let flower = Flower::new(40.0, 55.5);
        let petals = flower.path(bounds).unwrap().subpaths();
        let local = DVec2::new(40.0 + 55.5 / 2.0, 300.0 / 4.0);

        for (petal, angle) in petals.iter().zip(Flower::petal_angles()) {
            let (lo, hi) = extremes(petal);
            let centre = Point2::new((lo.x + hi.x) / 2.0, (lo.y + hi.y) / 2.0);
            let expected = DVec2::new(150.0, 150.0) + DVec2::from_angle(angle).rotate(local);
            assert!(centre.approx_eq(&expected.into(), 0.5), "angle {angle}: {centre:?} vs {expected:?}");
        }
    }

    #[test]
    fn petal_angles_cover_one_turn() {
        let angles: Vec<f64> = Flower::petal_angles().collect();
        assert_eq!(angles.len(), 16);
        assert_eq!(angles[0], 0.0);
        assert!(*angles.last().unwrap() < 2.0 * PI);
    }
}
