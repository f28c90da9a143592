// src/shapes/spirograph.rs

use std::f64::consts::TAU;

use log::{debug, trace};

use crate::error::{ensure_finite, GeometryError, GeometryResult};
use crate::geometry::{Point2, Rect};
use crate::path::Path;
use crate::shapes::Shape;

/// Angular step between consecutive samples of the curve.
pub const THETA_STEP: f64 = 0.01;

/// Greatest common divisor of the magnitudes of `a` and `b`.
/// `gcd(0, x) == |x|`, and `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();

    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }

    a
}

/// Dense polyline approximation of a trochoid: a pen `distance` from the
/// centre of a circle of `outer_radius` rolling against one of
/// `inner_radius`. `amount` is the fraction of the repeating cycle drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spirograph {
    pub inner_radius: i64,
    pub outer_radius: i64,
    pub distance: i64,
    pub amount: f64,
}

impl Default for Spirograph {
    fn default() -> Self {
        Self {
            inner_radius: 100,
            outer_radius: 40,
            distance: 40,
            amount: 1.0,
        }
    }
}

impl Spirograph {
    pub fn new(inner_radius: i64, outer_radius: i64, distance: i64, amount: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            distance,
            amount,
        }
    }

    /// Last parameter value of the curve. `amount` must lie in `[0, 1]`.
    pub fn end_theta(&self) -> GeometryResult<f64> {
        let divisor = gcd(self.inner_radius, self.outer_radius);
        if divisor == 0 {
            return Err(GeometryError::DivisionByZero("spirograph radii are both zero"));
        }
        if self.outer_radius == 0 {
            return Err(GeometryError::DivisionByZero("spirograph outer radius is zero"));
        }
        ensure_finite("spirograph amount", self.amount)?;
        if !(0.0..=1.0).contains(&self.amount) {
            return Err(GeometryError::DegenerateGeometry(format!(
                "spirograph amount {} is outside [0, 1]",
                self.amount
            )));
        }

        Ok((TAU * self.outer_radius as f64 / divisor as f64).ceil() * self.amount)
    }

    /// Curve position at `theta`, relative to the curve's own centre.
    pub fn point_at(&self, theta: f64) -> Point2 {
        let outer_radius = self.outer_radius as f64;
        let distance = self.distance as f64;
        let difference = self.inner_radius as f64 - outer_radius;
        let ratio = difference / outer_radius;

        Point2::new(
            difference * theta.cos() + distance * (ratio * theta).cos(),
            difference * theta.sin() - distance * (ratio * theta).sin(),
        )
    }
}

impl Shape for Spirograph {
    fn path(&self, bounds: Rect) -> GeometryResult<Path> {
        bounds.validate()?;
        let end_theta = self.end_theta()?;

        let mut path = Path::new();
        if end_theta < 0.0 {
            debug!("spirograph end theta {} is negative, nothing to draw", end_theta);
            return Ok(path);
        }

        let mut step = 0u64;
        loop {
            let theta = step as f64 * THETA_STEP;
            if theta > end_theta {
                break;
            }

            let local = self.point_at(theta);
            let point = Point2::new(local.x + bounds.width / 2.0, local.y + bounds.height / 2.0);
            if step == 0 {
                path.move_to(point);
            } else {
                path.line_to(point);
            }
            step += 1;
        }

        trace!("spirograph sampled {} points up to theta {}", step, end_theta);
        Ok(path)
    }
}
