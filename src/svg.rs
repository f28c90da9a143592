// src/svg.rs
//
// Minimal SVG writer for generated paths, used by the command line tool.

use std::fmt::Write;

use kurbo::BezPath;

use crate::geometry::Rect;
use crate::gradient::{LinearGradient, Rgb};
use crate::path::{FillRule, Path};

/// SVG path data for `path`. Arcs are written as cubic curves.
pub fn path_data(path: &Path) -> String {
    BezPath::from(path).to_svg()
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    None,
    Solid(Rgb),
    Gradient(LinearGradient),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub fill: Paint,
    pub stroke: Option<(Rgb, f64)>,
    pub screen_blend: bool,
}

impl Style {
    pub fn fill(color: Rgb) -> Self {
        Self {
            fill: Paint::Solid(color),
            stroke: None,
            screen_blend: false,
        }
    }

    pub fn stroke(color: Rgb, width: f64) -> Self {
        Self {
            fill: Paint::None,
            stroke: Some((color, width)),
            screen_blend: false,
        }
    }
}

pub struct SvgDocument {
    bounds: Rect,
    background: Option<Rgb>,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgDocument {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            background: None,
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    fn gradient_def(&mut self, gradient: &LinearGradient) -> String {
        let id = format!("gradient{}", self.defs.len());
        let mut stops = gradient.stops;
        stops.sort_by(|a, b| a.location.total_cmp(&b.location));

        let mut def = format!(
            r#"<linearGradient id="{}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
            id,
            gradient.start.x,
            gradient.start.y,
            gradient.end.x,
            gradient.end.y
        );
        for stop in stops {
            let _ = write!(
                def,
                r#"<stop offset="{}" stop-color="{}"/>"#,
                stop.location,
                stop.color().to_rgb().to_hex()
            );
        }
        def.push_str("</linearGradient>");
        self.defs.push(def);
        id
    }

    pub fn add_path(&mut self, path: &Path, style: &Style) {
        let fill = match &style.fill {
            Paint::None => "none".to_string(),
            Paint::Solid(color) => color.to_hex(),
            Paint::Gradient(gradient) => format!("url(#{})", self.gradient_def(gradient)),
        };
        let fill_rule = match path.fill_rule() {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        };

        let mut element = format!(r#"<path d="{}" fill="{}" fill-rule="{}""#, path_data(path), fill, fill_rule);
        if let Some((color, width)) = style.stroke {
            let _ = write!(element, r#" stroke="{}" stroke-width="{}""#, color.to_hex(), width);
        }
        if style.screen_blend {
            element.push_str(r#" style="mix-blend-mode:screen""#);
        }
        element.push_str("/>");
        self.elements.push(element);
    }

    pub fn finish(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{} {} {w} {h}">"#,
            self.bounds.x,
            self.bounds.y,
            w = self.bounds.width,
            h = self.bounds.height
        );
        out.push('\n');
        if !self.defs.is_empty() {
            let _ = writeln!(out, "<defs>{}</defs>", self.defs.join(""));
        }
        if let Some(color) = self.background {
            let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, color.to_hex());
        }
        for element in &self.elements {
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}
