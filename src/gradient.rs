// src/gradient.rs

use crate::error::{ensure_finite, GeometryError, GeometryResult};

/// Brings a hue back under one with a single subtraction. Only inputs in
/// `[0, 2)` come out in range; `1.0` itself is left as is.
pub fn wrap01(hue: f64) -> f64 {
    if hue > 1.0 {
        hue - 1.0
    } else {
        hue
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };
    pub const RED: Rgb = Rgb { r: 1.0, g: 0.0, b: 0.0 };
    pub const GREEN: Rgb = Rgb { r: 0.0, g: 1.0, b: 0.0 };
    pub const BLUE: Rgb = Rgb { r: 0.0, g: 0.0, b: 1.0 };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", channel(self.r), channel(self.g), channel(self.b))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        let v = self.brightness;
        let s = self.saturation;
        let h6 = self.hue.rem_euclid(1.0) * 6.0;
        let sector = h6.floor();
        let f = h6 - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sector as u8 % 6 {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}

/// Position in a shape's unit square, `(0, 0)` top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub hue_fraction: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub location: f64,
}

impl GradientStop {
    pub fn color(&self) -> Hsb {
        Hsb::new(self.hue_fraction, self.saturation, self.brightness)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    pub stops: [GradientStop; 2],
    pub start: UnitPoint,
    pub end: UnitPoint,
}

/// Two-stop hue gradient whose hues follow two cycle positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorCycleGradient {
    pub cycle_position_1: f64,
    pub cycle_position_2: f64,
    pub steps: u32,
    pub start: UnitPoint,
    pub end: UnitPoint,
}

impl Default for ColorCycleGradient {
    fn default() -> Self {
        Self {
            cycle_position_1: 0.0,
            cycle_position_2: 0.0,
            steps: 100,
            start: UnitPoint::new(0.2, 0.2),
            end: UnitPoint::new(0.2, 0.2),
        }
    }
}

impl ColorCycleGradient {
    pub fn new(cycle_position_1: f64, cycle_position_2: f64) -> Self {
        Self {
            cycle_position_1,
            cycle_position_2,
            ..Self::default()
        }
    }

    // The sampled index is always zero, so `steps` only matters for the
    // zero check.
    // TODO: take the cycling index as a parameter once the intended
    // animation over `steps` is settled.
    fn hue(&self, cycle_position: f64) -> GeometryResult<f64> {
        if self.steps == 0 {
            return Err(GeometryError::DivisionByZero("colour cycle steps is zero"));
        }
        ensure_finite("cycle position", cycle_position)?;
        if !(0.0..2.0).contains(&cycle_position) {
            return Err(GeometryError::DegenerateGeometry(format!(
                "cycle position {} is outside [0, 2)",
                cycle_position
            )));
        }
        Ok(wrap01(0.0 / self.steps as f64 + cycle_position))
    }

    /// The first cycle position sits at the end of the gradient, the
    /// second at the start.
    pub fn stops(&self, brightness: f64) -> GeometryResult<[GradientStop; 2]> {
        ensure_finite("brightness", brightness)?;
        Ok([
            GradientStop {
                hue_fraction: self.hue(self.cycle_position_1)?,
                saturation: 1.0,
                brightness,
                location: 1.0,
            },
            GradientStop {
                hue_fraction: self.hue(self.cycle_position_2)?,
                saturation: 1.0,
                brightness,
                location: 0.0,
            },
        ])
    }

    pub fn gradient(&self, brightness: f64) -> GeometryResult<LinearGradient> {
        Ok(LinearGradient {
            stops: self.stops(brightness)?,
            start: self.start,
            end: self.end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_subtracts_once() {
        assert_eq!(wrap01(0.5), 0.5);
        assert!((wrap01(1.3) - 0.3).abs() < 1e-12);
        assert!((wrap01(1.999) - 0.999).abs() < 1e-12);
        assert_eq!(wrap01(1.0), 1.0);
    }

    #[test]
    fn stops_follow_cycle_positions() {
        let stops = ColorCycleGradient::new(0.25, 1.5).stops(1.0).unwrap();
        assert_eq!(stops[0].hue_fraction, 0.25);
        assert_eq!(stops[0].location, 1.0);
        assert_eq!(stops[1].hue_fraction, 0.5);
        assert_eq!(stops[1].location, 0.0);
        assert!(stops.iter().all(|s| s.saturation == 1.0));
    }

    #[test]
    fn steps_do_not_change_the_hue() {
        let mut gradient = ColorCycleGradient::new(0.4, 0.6);
        let coarse = gradient.stops(0.8).unwrap();
        gradient.steps = 7;
        assert_eq!(gradient.stops(0.8).unwrap(), coarse);
    }

    #[test]
    fn zero_steps_is_an_error() {
        let gradient = ColorCycleGradient {
            steps: 0,
            ..ColorCycleGradient::default()
        };
        assert!(matches!(gradient.stops(1.0), Err(GeometryError::DivisionByZero(_))));
    }

    #[test]
    fn cycle_positions_outside_two_turns_are_rejected() {
        for (first, second) in [(-0.5, 0.0), (0.0, 2.0), (0.3, -1e-9)] {
            let result = ColorCycleGradient::new(first, second).stops(1.0);
            assert!(
                matches!(result, Err(GeometryError::DegenerateGeometry(_))),
                "({first}, {second}) gave {result:?}"
            );
        }
        let hue = ColorCycleGradient::new(1.999, 0.0).stops(1.0).unwrap()[0].hue_fraction;
        assert!((hue - 0.999).abs() < 1e-12);
    }

    #[test]
    fn primary_hues_convert_to_rgb() {
        assert_eq!(Hsb::new(0.0, 1.0, 1.0).to_rgb(), Rgb::RED);
        let green = Hsb::new(1.0 / 3.0, 1.0, 1.0).to_rgb();
        assert!((green.g - 1.0).abs() < 1e-9 && green.r.abs() < 1e-9);
        assert_eq!(Hsb::new(1.0, 1.0, 1.0).to_rgb(), Rgb::RED);
        assert_eq!(Rgb::BLUE.to_hex(), "#0000ff");
    }
}
