//! Structural comparison of paths under tolerance.
//!
//! Lines and beziers compare undirected: a path equals its own reversal.
//! Radii compare exactly. Arc angles use the angle tolerance regardless of
//! the point tolerance passed in. Layers are ignored.

use crate::geometry::{angle, point};
use crate::types::{Point, Tolerance};

use super::{Arc, Bezier, Circle, Line, Path, Primitive};

impl Path {
    /// Geometric equality with the default tolerance.
    pub fn approx_eq(&self, other: &Path) -> bool {
        are_equal(self, other, Tolerance::default())
    }
}

/// Whether two paths describe the same geometry.
pub fn are_equal(a: &Path, b: &Path, tolerance: Tolerance) -> bool {
    primitives_equal(&a.primitive, &b.primitive, tolerance)
}

pub fn primitives_equal(a: &Primitive, b: &Primitive, tolerance: Tolerance) -> bool {
    match (a, b) {
        (Primitive::Line(a), Primitive::Line(b)) => lines_equal(a, b, tolerance.point),
        (Primitive::Circle(a), Primitive::Circle(b)) => circles_equal(a, b, tolerance.point),
        (Primitive::Arc(a), Primitive::Arc(b)) => arcs_equal(a, b, tolerance),
        (Primitive::Bezier(a), Primitive::Bezier(b)) => beziers_equal(a, b, tolerance.point),
        _ => false,
    }
}

fn lines_equal(a: &Line, b: &Line, within: f64) -> bool {
    let eq = |p, q| point::are_equal_within(p, q, within);
    (eq(a.origin, b.origin) && eq(a.end, b.end)) || (eq(a.origin, b.end) && eq(a.end, b.origin))
}

fn circles_equal(a: &Circle, b: &Circle, within: f64) -> bool {
    point::are_equal_within(a.origin, b.origin, within) && a.radius == b.radius
}

fn arcs_equal(a: &Arc, b: &Arc, tolerance: Tolerance) -> bool {
    circles_equal(&a.circle(), &b.circle(), tolerance.point)
        && angle::are_equal_within(a.start_angle, b.start_angle, tolerance.angle)
        && angle::are_equal_within(a.end_angle, b.end_angle, tolerance.angle)
}

fn beziers_equal(a: &Bezier, b: &Bezier, within: f64) -> bool {
    if std::mem::discriminant(&a.controls) != std::mem::discriminant(&b.controls)
        || a.controls.len() != b.controls.len()
    {
        return false;
    }
    let pa = a.points();
    let pb = b.points();
    let eq = |(p, q): (&Point, &Point)| point::are_equal_within(*p, *q, within);
    pa.iter().zip(pb.iter()).all(eq) || pa.iter().zip(pb.iter().rev()).all(eq)
}
