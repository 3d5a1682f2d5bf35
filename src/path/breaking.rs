//! Breaking a path in two.
//!
//! On success the source path becomes the front piece and the back piece is
//! returned as a new path carrying the source's layer. A circle has no start
//! to split from, so it is instead turned in place into a full-turn arc that
//! begins at the break point ([`Broken::Reshaped`]).

use crate::errors::BreakError;
use crate::geometry::{angle, measure, point};
use crate::log;
use crate::types::{Angle, Point, Tolerance};

use super::{Arc, Bezier, Circle, Line, Path, Primitive};

/// Outcome of a successful break
#[derive(Debug, Clone, PartialEq)]
pub enum Broken {
    /// The source kept the front piece; this is the back piece.
    Split(Path),
    /// The source was converted in place and there is no second piece.
    Reshaped,
}

impl Broken {
    /// The back piece, if one was produced.
    pub fn into_piece(self) -> Option<Path> {
        match self {
            Broken::Split(path) => Some(path),
            Broken::Reshaped => None,
        }
    }
}

impl Path {
    /// Break at a point with the default tolerance.
    pub fn break_at_point(&mut self, at: Point) -> Result<Broken, BreakError> {
        self.break_at_point_within(at, Tolerance::default())
    }

    /// Break at a point.
    ///
    /// Lines require the point on the segment (end points included). Circles
    /// and arcs use the polar angle of the point around their origin. Beziers
    /// break at the curve parameter nearest the point.
    pub fn break_at_point_within(
        &mut self,
        at: Point,
        tolerance: Tolerance,
    ) -> Result<Broken, BreakError> {
        let result = match &mut self.primitive {
            Primitive::Line(line) => break_line(line, at, tolerance.point).map(Primitive::from),
            Primitive::Circle(Circle { origin, .. }) | Primitive::Arc(Arc { origin, .. }) => {
                let angle = angle::of_point(*origin, at);
                return self.break_at_angle_within(angle, tolerance);
            }
            Primitive::Bezier(bezier) => {
                break_bezier_at_point(bezier, at, tolerance.point).map(Primitive::from)
            }
        };
        self.finish(result)
    }

    /// Break a circle or arc at a known angle, skipping the point-to-angle step.
    pub fn break_at_angle(&mut self, angle: Angle) -> Result<Broken, BreakError> {
        self.break_at_angle_within(angle, Tolerance::default())
    }

    pub fn break_at_angle_within(
        &mut self,
        angle: Angle,
        tolerance: Tolerance,
    ) -> Result<Broken, BreakError> {
        let result = match &mut self.primitive {
            Primitive::Circle(circle) => {
                let circle = *circle;
                let start = angle.normalized();
                log::debug!(origin = ?circle.origin, start = start.0, "circle reshaped into arc");
                self.primitive =
                    Arc::new(circle.origin, circle.radius, start, start + Angle::FULL_TURN).into();
                return Ok(Broken::Reshaped);
            }
            Primitive::Arc(arc) => break_arc(arc, angle, tolerance.angle).map(Primitive::from),
            Primitive::Line(_) | Primitive::Bezier(_) => Err(BreakError::NotCircular),
        };
        self.finish(result)
    }

    /// Break a bezier at curve parameter `t`, which must lie in (0, 1).
    pub fn break_at_parameter(&mut self, t: f64) -> Result<Broken, BreakError> {
        let result = match &mut self.primitive {
            Primitive::Bezier(bezier) => split_bezier(bezier, t).map(Primitive::from),
            _ => Err(BreakError::NotACurve),
        };
        self.finish(result)
    }

    fn finish(&self, result: Result<Primitive, BreakError>) -> Result<Broken, BreakError> {
        match result {
            Ok(piece) => Ok(Broken::Split(self.derive(piece))),
            Err(reason) => {
                log::debug!(kind = %self.kind(), %reason, "break failed");
                Err(reason)
            }
        }
    }
}

fn break_line(line: &mut Line, at: Point, within: f64) -> Result<Line, BreakError> {
    if !measure::is_point_on_line(at, line, within) {
        return Err(BreakError::NotOnPath);
    }
    let end = std::mem::replace(&mut line.end, at);
    Ok(Line::new(at, end))
}

fn break_arc(arc: &mut Arc, at: Angle, within: f64) -> Result<Arc, BreakError> {
    if angle::are_equal_within(at, arc.start_angle, within)
        || angle::are_equal_within(at, arc.end_angle, within)
    {
        return Err(BreakError::AtEndpoint);
    }
    let resolved = measure::resolve_in_sweep(at, arc, true)
        .ok_or(BreakError::NotOnPath)?
        .normalized();
    let end = std::mem::replace(&mut arc.end_angle, resolved);
    Ok(Arc::new(arc.origin, arc.radius, resolved, end))
}

fn break_bezier_at_point(bezier: &mut Bezier, at: Point, within: f64) -> Result<Bezier, BreakError> {
    if point::are_equal_within(at, bezier.origin, within)
        || point::are_equal_within(at, bezier.end, within)
    {
        return Err(BreakError::AtEndpoint);
    }
    let t = bezier.nearest_parameter(at);
    if !point::are_equal_within(bezier.point_at(t), at, within) {
        return Err(BreakError::NotOnPath);
    }
    split_bezier(bezier, t)
}

fn split_bezier(bezier: &mut Bezier, t: f64) -> Result<Bezier, BreakError> {
    if !(t > 0.0 && t < 1.0) {
        return Err(BreakError::ParameterOutOfRange { t });
    }
    Ok(bezier.split(t))
}
