//! Measurement: betweenness, on-path tests, length and extents

use crate::path::{Arc, Line, Primitive};
use crate::types::{Angle, Extents, Point};

use super::{angle, defaults, point};

/// Whether `value` lies between `a` and `b` (in either order).
pub fn is_between(value: f64, a: f64, b: f64, exclusive: bool) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if exclusive {
        lo < value && value < hi
    } else {
        lo <= value && value <= hi
    }
}

/// Whether `angle` falls inside the sweep of `arc`.
///
/// The sweep is taken from a start normalized to [0, 360), so the angle is
/// also tried one turn up and one turn down to catch sweeps crossing 0°.
pub fn is_between_arc_angles(angle: Angle, arc: &Arc, exclusive: bool) -> bool {
    resolve_in_sweep(angle, arc, exclusive).is_some()
}

/// The representation of `angle` (offset by 0, +360 or -360) lying inside
/// the sweep of `arc`, measured against the normalized start.
pub(crate) fn resolve_in_sweep(angle: Angle, arc: &Arc, exclusive: bool) -> Option<Angle> {
    let start = arc.start_angle.normalized();
    let end = start + (angle::of_arc_end(arc) - arc.start_angle);
    let angle = angle.normalized();
    [0.0, 360.0, -360.0]
        .into_iter()
        .map(|offset| angle + Angle(offset))
        .find(|a| is_between(a.0, start.0, end.0, exclusive))
}

/// Distance from `p` to the closest point of the segment.
pub fn distance_to_line(p: Point, line: &Line) -> f64 {
    let d = line.end - line.origin;
    let len2 = d.length_squared();
    if len2 == 0.0 {
        return p.distance(line.origin);
    }
    let t = ((p - line.origin).dot(d) / len2).clamp(0.0, 1.0);
    p.distance(line.origin + d * t)
}

/// Whether `p` lies on the segment, end points included.
pub fn is_point_on_line(p: Point, line: &Line, tolerance: f64) -> bool {
    distance_to_line(p, line) <= tolerance
}

/// Whether `p` lies on the given primitive.
pub fn is_point_on_path(p: Point, primitive: &Primitive, tolerance: f64) -> bool {
    match primitive {
        Primitive::Line(line) => is_point_on_line(p, line, tolerance),
        Primitive::Circle(c) => (p.distance(c.origin) - c.radius).abs() <= tolerance,
        Primitive::Arc(arc) => {
            (p.distance(arc.origin) - arc.radius).abs() <= tolerance
                && is_between_arc_angles(angle::of_point(arc.origin, p), arc, false)
        }
        Primitive::Bezier(b) => {
            let t = b.nearest_parameter(p);
            b.point_at(t).distance(p) <= tolerance
        }
    }
}

/// Length of the primitive. Beziers are measured by flattening.
pub fn length(primitive: &Primitive) -> f64 {
    match primitive {
        Primitive::Line(line) => line.length(),
        Primitive::Circle(c) => std::f64::consts::TAU * c.radius,
        Primitive::Arc(arc) => angle::of_arc_span(arc).to_radians() * arc.radius,
        Primitive::Bezier(b) => b
            .flatten(defaults::BEZIER_SAMPLES)
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum(),
    }
}

/// Axis-aligned bounding box of the primitive.
pub fn extents(primitive: &Primitive) -> Extents {
    match primitive {
        Primitive::Line(line) => [line.origin, line.end].into_iter().collect(),
        Primitive::Circle(c) => {
            let r = Point::splat(c.radius);
            Extents { min: c.origin - r, max: c.origin + r }
        }
        Primitive::Arc(arc) => {
            let mut ext: Extents = point::from_arc(arc).into_iter().collect();
            for quadrant in [0.0, 90.0, 180.0, 270.0] {
                if is_between_arc_angles(Angle(quadrant), arc, false) {
                    ext.expand_point(point::on_circle(arc.origin, arc.radius, Angle(quadrant)));
                }
            }
            ext
        }
        Primitive::Bezier(b) => b.flatten(defaults::BEZIER_SAMPLES).into_iter().collect(),
    }
}
