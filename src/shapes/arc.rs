// src/shapes/arc.rs

use std::f64::consts::FRAC_PI_2;

use log::debug;

use crate::error::{ensure_finite, GeometryResult};
use crate::geometry::Rect;
use crate::path::Path;
use crate::shapes::{InsettableShape, Shape};

/// Arc around the centre of its bounds. Angle 0 points up.
///
/// The `clockwise` flag is handed to the path inverted. Path arcs use the
/// y-up sense of direction, so after the inversion `clockwise: true` sweeps
/// clockwise on a y-down screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub start_angle: f64,
    pub end_angle: f64,
    pub clockwise: bool,
    pub inset_amount: f64,
}

impl Arc {
    pub fn new(start_angle: f64, end_angle: f64, clockwise: bool) -> Self {
        Self {
            start_angle,
            end_angle,
            clockwise,
            inset_amount: 0.0,
        }
    }

    pub fn from_degrees(start_degrees: f64, end_degrees: f64, clockwise: bool) -> Self {
        Self::new(start_degrees.to_radians(), end_degrees.to_radians(), clockwise)
    }

    pub fn radius_in(&self, bounds: Rect) -> f64 {
        (bounds.width / 2.0 - self.inset_amount).max(0.0)
    }
}

impl Shape for Arc {
    fn path(&self, bounds: Rect) -> GeometryResult<Path> {
        bounds.validate()?;
        ensure_finite("arc start angle", self.start_angle)?;
        ensure_finite("arc end angle", self.end_angle)?;
        ensure_finite("arc inset", self.inset_amount)?;

        let radius = self.radius_in(bounds);
        if radius == 0.0 {
            debug!("arc inset {} leaves no radius in {:?}", self.inset_amount, bounds);
        }

        let mut path = Path::new();
        path.arc_to(
            bounds.center(),
            radius,
            self.start_angle - FRAC_PI_2,
            self.end_angle - FRAC_PI_2,
            !self.clockwise,
        );
        Ok(path)
    }
}

impl InsettableShape for Arc {
    fn inset(&self, amount: f64) -> Self {
        let mut arc = *self;
        arc.inset_amount += amount;
        arc
    }
}
