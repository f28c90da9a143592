// src/path.rs

use glam::DAffine2;
use kurbo::{BezPath, PathEl, Shape as _, Vec2};

use crate::geometry::{Point2, Rect};

/// Maximum deviation allowed when curves are approximated by lines.
pub const DEFAULT_TOLERANCE: f64 = 0.1;
/// Tolerance never drops below this fraction of the path's extent, which
/// bounds the vertex count for very large arcs.
pub const MIN_RELATIVE_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Point2),
    LineTo(Point2),
    /// Circular arc. Opens a new subpath at its start point when no subpath
    /// is open, otherwise the renderer joins the current point to the arc
    /// start with a straight line. `clockwise` sweeps toward decreasing
    /// angles (y-up convention), so in a y-down frame it reads the other way.
    ArcTo {
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    },
    ClosePath,
}

impl PathSegment {
    pub fn end_point(&self) -> Option<Point2> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::ArcTo { center, radius, end_angle, .. } => Some(point_on_circle(center, radius, end_angle)),
            PathSegment::ClosePath => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
    fill_rule: FillRule,
}

pub fn point_on_circle(center: Point2, radius: f64, angle: f64) -> Point2 {
    Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Signed angular sweep from `start` to `end`. A request spanning a full turn
/// or more draws the whole circle.
pub fn arc_sweep(start_angle: f64, end_angle: f64, clockwise: bool) -> f64 {
    use std::f64::consts::TAU;

    let delta = end_angle - start_angle;
    if clockwise {
        if -delta >= TAU {
            -TAU
        } else {
            -(-delta).rem_euclid(TAU)
        }
    } else if delta >= TAU {
        TAU
    } else {
        delta.rem_euclid(TAU)
    }
}

/// Raw byte view of a vertex list, laid out as consecutive `f64` x/y pairs.
pub fn vertex_bytes(points: &[Point2]) -> &[u8] {
    bytemuck::cast_slice(points)
}

fn push_flattened(segments: &mut Vec<PathSegment>, el: PathEl) {
    match el {
        PathEl::MoveTo(p) => segments.push(PathSegment::MoveTo(p.into())),
        PathEl::LineTo(p) => segments.push(PathSegment::LineTo(p.into())),
        PathEl::ClosePath => segments.push(PathSegment::ClosePath),
        // kurbo::flatten only emits moves, lines and closes
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    }
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn has_open_subpath(&self) -> bool {
        !matches!(self.segments.last(), None | Some(PathSegment::ClosePath))
    }

    /// Start point of the most recent subpath, open or closed.
    fn last_subpath_start(&self) -> Option<Point2> {
        let mut start = None;
        let mut open = false;
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    start = Some(p);
                    open = true;
                }
                PathSegment::ArcTo {
                    center,
                    radius,
                    start_angle,
                    ..
                } if !open => {
                    start = Some(point_on_circle(center, radius, start_angle));
                    open = true;
                }
                PathSegment::ClosePath => open = false,
                _ => {}
            }
        }
        start
    }

    pub fn move_to(&mut self, point: Point2) {
        self.segments.push(PathSegment::MoveTo(point));
    }

    /// After a close, the line continues from the closed subpath's start
    /// point. On an empty path there is nothing to continue from, so the
    /// line starts a subpath at `point` instead.
    pub fn line_to(&mut self, point: Point2) {
        if !self.has_open_subpath() {
            match self.last_subpath_start() {
                Some(start) => self.segments.push(PathSegment::MoveTo(start)),
                None => {
                    self.segments.push(PathSegment::MoveTo(point));
                    return;
                }
            }
        }
        self.segments.push(PathSegment::LineTo(point));
    }

    pub fn arc_to(&mut self, center: Point2, radius: f64, start_angle: f64, end_angle: f64, clockwise: bool) {
        self.segments.push(PathSegment::ArcTo {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
    }

    pub fn close(&mut self) {
        if self.has_open_subpath() {
            self.segments.push(PathSegment::ClosePath);
        }
    }

    pub fn add_rect(&mut self, rect: Rect) {
        self.move_to(Point2::new(rect.min_x(), rect.min_y()));
        self.line_to(Point2::new(rect.max_x(), rect.min_y()));
        self.line_to(Point2::new(rect.max_x(), rect.max_y()));
        self.line_to(Point2::new(rect.min_x(), rect.max_y()));
        self.close();
    }

    /// Adds the ellipse inscribed in `rect` as a closed polyline within
    /// `DEFAULT_TOLERANCE` of the true curve.
    pub fn add_ellipse_in(&mut self, rect: Rect) {
        let ellipse = kurbo::Ellipse::from_rect(kurbo::Rect::new(rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y()));
        let segments = &mut self.segments;
        kurbo::flatten(ellipse.path_elements(DEFAULT_TOLERANCE), DEFAULT_TOLERANCE, |el| push_flattened(segments, el));
        self.close();
    }

    /// Appends `other` as is. An arc opening `other` joins onto a subpath
    /// still open here.
    pub fn add_path(&mut self, other: &Path) {
        self.segments.extend_from_slice(&other.segments);
    }

    pub fn subpath_count(&self) -> usize {
        let mut open = false;
        let mut count = 0;
        for segment in &self.segments {
            match segment {
                PathSegment::MoveTo(_) => {
                    count += 1;
                    open = true;
                }
                PathSegment::ArcTo { .. } if !open => {
                    count += 1;
                    open = true;
                }
                PathSegment::ClosePath => open = false,
                _ => {}
            }
        }
        count
    }

    /// End point of every drawing segment, in order.
    pub fn points(&self) -> Vec<Point2> {
        self.segments.iter().filter_map(PathSegment::end_point).collect()
    }

    /// Flattened vertices grouped by subpath.
    pub fn subpaths(&self) -> Vec<Vec<Point2>> {
        let mut subpaths: Vec<Vec<Point2>> = Vec::new();
        for segment in self.flatten(DEFAULT_TOLERANCE).segments {
            match segment {
                PathSegment::MoveTo(p) => subpaths.push(vec![p]),
                PathSegment::LineTo(p) => {
                    if let Some(current) = subpaths.last_mut() {
                        current.push(p);
                    }
                }
                _ => {}
            }
        }
        subpaths
    }

    fn extent(&self) -> f64 {
        self.segments
            .iter()
            .map(|segment| match *segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p.x.abs().max(p.y.abs()),
                PathSegment::ArcTo { center, radius, .. } => center.x.abs().max(center.y.abs()) + radius.abs(),
                PathSegment::ClosePath => 0.0,
            })
            .fold(0.0, f64::max)
    }

    fn effective_tolerance(&self, tolerance: f64) -> f64 {
        let tolerance = if tolerance > 0.0 { tolerance } else { DEFAULT_TOLERANCE };
        tolerance.max(self.extent() * MIN_RELATIVE_TOLERANCE)
    }

    /// Curve form of the path. Arcs become cubic segments accurate to
    /// `tolerance`.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let tolerance = self.effective_tolerance(tolerance);
        let mut bez = BezPath::new();
        let mut current: Option<Point2> = None;

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    bez.move_to(p);
                    current = Some(p);
                }
                PathSegment::LineTo(p) => {
                    bez.line_to(p);
                    current = Some(p);
                }
                PathSegment::ClosePath => {
                    bez.close_path();
                    current = None;
                }
                PathSegment::ArcTo {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise,
                } => {
                    let start = point_on_circle(center, radius, start_angle);
                    match current {
                        None => bez.move_to(start),
                        Some(p) if !p.approx_eq(&start, 1e-12) => bez.line_to(start),
                        Some(_) => {}
                    }
                    let sweep_angle = arc_sweep(start_angle, end_angle, clockwise);
                    // A collapsed arc is just its start point.
                    if radius > 0.0 && sweep_angle != 0.0 {
                        let arc = kurbo::Arc {
                            center: center.into(),
                            radii: Vec2::new(radius, radius),
                            start_angle,
                            sweep_angle,
                            x_rotation: 0.0,
                        };
                        for el in arc.append_iter(tolerance) {
                            bez.push(el);
                        }
                    }
                    current = Some(point_on_circle(center, radius, end_angle));
                }
            }
        }
        bez
    }

    /// Returns an equivalent path made only of moves, lines and closes.
    pub fn flatten(&self, tolerance: f64) -> Path {
        let tolerance = self.effective_tolerance(tolerance);
        let mut segments = Vec::with_capacity(self.segments.len());
        kurbo::flatten(self.to_bez_path(tolerance).iter(), tolerance, |el| push_flattened(&mut segments, el));
        Path {
            segments,
            fill_rule: self.fill_rule,
        }
    }

    pub fn applying(&self, transform: &DAffine2) -> Path {
        let has_arcs = self.segments.iter().any(|s| matches!(s, PathSegment::ArcTo { .. }));
        let source = if has_arcs { self.flatten(DEFAULT_TOLERANCE) } else { self.clone() };

        let segments = source
            .segments
            .into_iter()
            .map(|segment| match segment {
                PathSegment::MoveTo(p) => PathSegment::MoveTo(p.transformed(transform)),
                PathSegment::LineTo(p) => PathSegment::LineTo(p.transformed(transform)),
                other => other,
            })
            .collect();

        Path {
            segments,
            fill_rule: self.fill_rule,
        }
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        let bbox = self.to_bez_path(DEFAULT_TOLERANCE).bounding_box();
        Some(Rect::new(bbox.x0, bbox.y0, bbox.width(), bbox.height()))
    }
}

impl From<&Path> for BezPath {
    fn from(path: &Path) -> Self {
        path.to_bez_path(DEFAULT_TOLERANCE)
    }
}
