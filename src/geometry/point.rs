//! Point arithmetic.
//!
//! Addition, subtraction and scaling are the `DVec2` operators (`a + b`,
//! `a - b`, `p * factor`); everything else lives here. All functions are
//! pure and return new points.

use crate::path::{Arc, Circle, Line, Primitive};
use crate::types::{Angle, Point, Tolerance, pt};

use super::angle;

/// Negate the X and/or Y coordinate.
#[inline]
pub fn mirror(p: Point, mirror_x: bool, mirror_y: bool) -> Point {
    pt(
        if mirror_x { -p.x } else { p.x },
        if mirror_y { -p.y } else { p.y },
    )
}

/// Rotate `p` counter-clockwise about `center`.
pub fn rotate(p: Point, angle: Angle, center: Point) -> Point {
    if angle.0 == 0.0 {
        return p;
    }
    let (sin, cos) = angle::sin_cos(angle);
    let d = p - center;
    center + pt(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

/// Point at `radius` along heading `angle` from the coordinate origin.
pub fn from_polar(angle: Angle, radius: f64) -> Point {
    let (sin, cos) = angle::sin_cos(angle);
    pt(radius * cos, radius * sin)
}

/// Point on a circle (or arc) at the given angle.
pub fn on_circle(origin: Point, radius: f64, angle: Angle) -> Point {
    origin + from_polar(angle, radius)
}

/// Start and end points of an arc.
pub fn from_arc(arc: &Arc) -> [Point; 2] {
    [
        on_circle(arc.origin, arc.radius, arc.start_angle),
        on_circle(arc.origin, arc.radius, arc.end_angle),
    ]
}

/// Midpoint of a line.
pub fn middle(line: &Line) -> Point {
    line.origin.lerp(line.end, 0.5)
}

/// Point a fraction of the way along any primitive (0 = start, 1 = end).
///
/// Circles are walked counter-clockwise from 0°.
pub fn at_ratio(primitive: &Primitive, ratio: f64) -> Point {
    match primitive {
        Primitive::Line(line) => line.origin.lerp(line.end, ratio),
        Primitive::Circle(Circle { origin, radius }) => {
            on_circle(*origin, *radius, Angle(360.0 * ratio))
        }
        Primitive::Arc(arc) => on_circle(arc.origin, arc.radius, angle::of_arc_middle(arc, ratio)),
        Primitive::Bezier(bezier) => bezier.point_at(ratio),
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// The candidate nearest to `target`, if any.
pub fn closest(target: Point, candidates: &[Point]) -> Option<Point> {
    candidates
        .iter()
        .copied()
        .min_by(|a, b| a.distance_squared(target).total_cmp(&b.distance_squared(target)))
}

/// Compare two points with the default point tolerance.
pub fn are_equal(a: Point, b: Point) -> bool {
    are_equal_within(a, b, Tolerance::default().point)
}

/// Compare two points: equal when their Euclidean distance is within `tolerance`.
pub fn are_equal_within(a: Point, b: Point, tolerance: f64) -> bool {
    a.distance(b) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_each_axis() {
        let p = pt(3.0, -4.0);
        assert_eq!(mirror(p, true, false), pt(-3.0, -4.0));
        assert_eq!(mirror(p, false, true), pt(3.0, 4.0));
        assert_eq!(mirror(p, true, true), pt(-3.0, 4.0));
        assert_eq!(mirror(p, false, false), p);
    }

    #[test]
    fn rotate_quarter_turn_is_exact() {
        assert_eq!(rotate(pt(10.0, 0.0), Angle(90.0), pt(0.0, 0.0)), pt(0.0, 10.0));
        assert_eq!(rotate(pt(2.0, 1.0), Angle(180.0), pt(1.0, 1.0)), pt(0.0, 1.0));
    }

    #[test]
    fn rotate_about_external_center() {
        let r = rotate(pt(1.0, 0.0), Angle(45.0), pt(0.0, 0.0));
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert!(are_equal(r, pt(h, h)), "got {:?}", r);
    }

    #[test]
    fn from_polar_axes() {
        assert_eq!(from_polar(Angle(0.0), 2.0), pt(2.0, 0.0));
        assert_eq!(from_polar(Angle(270.0), 2.0), pt(0.0, -2.0));
    }

    #[test]
    fn from_arc_endpoints() {
        let arc = Arc::new(pt(1.0, 1.0), 2.0, Angle(0.0), Angle(90.0));
        assert_eq!(from_arc(&arc), [pt(3.0, 1.0), pt(1.0, 3.0)]);
    }

    #[test]
    fn middle_of_line() {
        let line = Line::new(pt(0.0, 0.0), pt(4.0, -2.0));
        assert_eq!(middle(&line), pt(2.0, -1.0));
    }

    #[test]
    fn at_ratio_on_arc_and_circle() {
        let arc = Primitive::Arc(Arc::new(pt(0.0, 0.0), 1.0, Angle(0.0), Angle(180.0)));
        assert_eq!(at_ratio(&arc, 0.5), pt(0.0, 1.0));
        let circle = Primitive::Circle(Circle::new(pt(0.0, 0.0), 1.0));
        assert_eq!(at_ratio(&circle, 0.5), pt(-1.0, 0.0));
    }

    #[test]
    fn closest_picks_nearest() {
        let c = closest(pt(0.0, 0.0), &[pt(5.0, 5.0), pt(-1.0, 0.5), pt(3.0, 0.0)]);
        assert_eq!(c, Some(pt(-1.0, 0.5)));
        assert_eq!(closest(pt(0.0, 0.0), &[]), None);
    }

    #[test]
    fn equality_within_tolerance() {
        assert!(are_equal(pt(1.0, 1.0), pt(1.0 + 5e-8, 1.0)));
        assert!(!are_equal(pt(1.0, 1.0), pt(1.0 + 1e-6, 1.0)));
        assert!(are_equal_within(pt(0.0, 0.0), pt(3.0, 4.0), 5.0));
    }
}
