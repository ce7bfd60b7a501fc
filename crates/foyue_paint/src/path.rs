//! Path building and representation
//!
//! Paths keep canvas semantics: corner arcs are recorded as tangent arcs
//! (`arcTo(x1, y1, x2, y2, r)`) and only resolved into explicit circle
//! geometry when someone asks for segments or bounds.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use serde::Serialize;
use smallvec::SmallVec;

use crate::primitives::Rect;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    fn offset(self, dir: Point, distance: f32) -> Point {
        Point::new(self.x + dir.x * distance, self.y + dir.y * distance)
    }

    fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Tangent arc: blends the line towards `control` into the line towards
    /// `end` with a circle of `radius`
    ArcTo {
        control: Point,
        end: Point,
        radius: f32,
    },
    Close,
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Resolve the path into straight and circular segments
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut current: Option<Point> = None;
        let mut subpath_start = Point::ZERO;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    current = Some(p);
                    subpath_start = p;
                }
                PathCommand::LineTo(p) => {
                    match current {
                        Some(from) => segments.push(Segment::Line { from, to: p }),
                        None => subpath_start = p,
                    }
                    current = Some(p);
                }
                PathCommand::ArcTo {
                    control,
                    end,
                    radius,
                } => {
                    // An arc with no current point starts its subpath at the control point
                    let from = current.unwrap_or_else(|| {
                        subpath_start = control;
                        control
                    });
                    match resolve_tangent_arc(from, control, end, radius) {
                        ArcResolution::Line(to) => {
                            if to != from {
                                segments.push(Segment::Line { from, to });
                            }
                            current = Some(to);
                        }
                        ArcResolution::Arc(arc) => {
                            if arc.start != from {
                                segments.push(Segment::Line {
                                    from,
                                    to: arc.start,
                                });
                            }
                            segments.push(Segment::Arc(arc));
                            current = Some(arc.end);
                        }
                    }
                }
                PathCommand::Close => {
                    if let Some(from) = current {
                        if from != subpath_start {
                            segments.push(Segment::Line {
                                from,
                                to: subpath_start,
                            });
                        }
                        current = Some(subpath_start);
                    }
                }
            }
        }

        segments
    }

    /// Axis-aligned bounds of the resolved geometry
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = Vec::new();
        for segment in self.segments() {
            match segment {
                Segment::Line { from, to } => points.extend([from, to]),
                Segment::Arc(arc) => points.extend(arc.extreme_points()),
            }
        }
        if points.is_empty() {
            // A lone move_to still has a position
            if let Some(PathCommand::MoveTo(p)) = self.commands.first() {
                return Some(Rect::new(p.x, p.y, 0.0, 0.0));
            }
            return None;
        }

        let (mut min, mut max) = (points[0], points[0]);
        for p in &points[1..] {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        Some(Rect::from_points(min, max))
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self { path: Path::new() }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.path.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.path.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn arc_to(mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) -> Self {
        self.path.push(PathCommand::ArcTo {
            control: Point::new(x1, y1),
            end: Point::new(x2, y2),
            radius,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.path.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A resolved piece of path geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Line { from: Point, to: Point },
    Arc(TangentArc),
}

/// Circle geometry of a resolved tangent arc
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentArc {
    /// Tangent point on the incoming line
    pub start: Point,
    /// Tangent point on the outgoing line
    pub end: Point,
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    /// Sweep direction in surface coordinates (y down)
    pub anticlockwise: bool,
}

impl TangentArc {
    /// Swept angle in radians, always positive
    pub fn sweep(&self) -> f32 {
        if self.anticlockwise {
            (self.start_angle - self.end_angle).rem_euclid(TAU)
        } else {
            (self.end_angle - self.start_angle).rem_euclid(TAU)
        }
    }

    fn contains_angle(&self, angle: f32) -> bool {
        let offset = if self.anticlockwise {
            (self.start_angle - angle).rem_euclid(TAU)
        } else {
            (angle - self.start_angle).rem_euclid(TAU)
        };
        offset <= self.sweep()
    }

    fn extreme_points(&self) -> Vec<Point> {
        let mut points = vec![self.start, self.end];
        for angle in [0.0, FRAC_PI_2, PI, -FRAC_PI_2] {
            if self.contains_angle(angle) {
                points.push(Point::new(
                    self.center.x + self.radius * angle.cos(),
                    self.center.y + self.radius * angle.sin(),
                ));
            }
        }
        points
    }
}

/// Outcome of resolving a tangent arc
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcResolution {
    /// Degenerate input: the arc collapses into a line to the control point
    Line(Point),
    Arc(TangentArc),
}

/// Resolve `arcTo(control, end, radius)` from `current` the way a 2D canvas does
///
/// Zero radius, coincident points and collinear points degrade to a straight
/// line to `control`. The radius is used as given, including negative values.
pub fn resolve_tangent_arc(
    current: Point,
    control: Point,
    end: Point,
    radius: f32,
) -> ArcResolution {
    let incoming = current.sub(control);
    let outgoing = end.sub(control);
    let (len_in, len_out) = (incoming.length(), outgoing.length());

    if radius == 0.0 || len_in == 0.0 || len_out == 0.0 {
        return ArcResolution::Line(control);
    }

    let cross = incoming.x * outgoing.y - incoming.y * outgoing.x;
    if cross.abs() <= f32::EPSILON * len_in * len_out {
        return ArcResolution::Line(control);
    }

    let u_in = Point::new(incoming.x / len_in, incoming.y / len_in);
    let u_out = Point::new(outgoing.x / len_out, outgoing.y / len_out);
    let half_angle = (u_in.x * u_out.x + u_in.y * u_out.y).clamp(-1.0, 1.0).acos() / 2.0;

    let tangent_len = radius / half_angle.tan();
    let start = control.offset(u_in, tangent_len);
    let end_point = control.offset(u_out, tangent_len);

    let bisector = Point::new(u_in.x + u_out.x, u_in.y + u_out.y);
    let bisector_len = bisector.length();
    let bisector = Point::new(bisector.x / bisector_len, bisector.y / bisector_len);
    let center = control.offset(bisector, radius / half_angle.sin());

    ArcResolution::Arc(TangentArc {
        start,
        end: end_point,
        center,
        radius,
        start_angle: (start.y - center.y).atan2(start.x - center.x),
        end_angle: (end_point.y - center.y).atan2(end_point.x - center.x),
        anticlockwise: cross > 0.0,
    })
}
