//! Degree arithmetic.
//!
//! Arc sweeps run counter-clockwise from start to end. An end angle below
//! the start angle means the sweep crosses 0°, so most helpers here first
//! lift the end angle by whole turns before doing any arithmetic.

use crate::path::{Arc, Line};
use crate::types::{Angle, Point, Tolerance};

/// Map an angle into [0, 360).
#[inline]
pub fn normalize(angle: Angle) -> Angle {
    angle.normalized()
}

/// Alias of [`normalize`]: strip whole revolutions.
#[inline]
pub fn no_revolutions(angle: Angle) -> Angle {
    angle.normalized()
}

/// Reflect an angle the same way `point::mirror` reflects a point.
///
/// `mirror_x` negates X (reflection across the Y axis), `mirror_y` negates
/// Y (reflection across the X axis).
pub fn mirror(angle: Angle, mirror_x: bool, mirror_y: bool) -> Angle {
    let mut a = angle.0;
    if mirror_y {
        a = 360.0 - a;
    }
    if mirror_x {
        a = if a < 180.0 { 180.0 } else { 540.0 } - a;
    }
    Angle(a)
}

/// Compare two angles modulo full turns with the default angle tolerance.
pub fn are_equal(a: Angle, b: Angle) -> bool {
    are_equal_within(a, b, Tolerance::default().angle)
}

/// Compare two angles modulo full turns.
pub fn are_equal_within(a: Angle, b: Angle, tolerance: f64) -> bool {
    let d = (a - b).normalized().0;
    d <= tolerance || 360.0 - d <= tolerance
}

/// Sine and cosine of an angle, exact on quarter turns.
pub fn sin_cos(angle: Angle) -> (f64, f64) {
    let a = angle.normalized().0;
    if a == 0.0 {
        (0.0, 1.0)
    } else if a == 90.0 {
        (1.0, 0.0)
    } else if a == 180.0 {
        (0.0, -1.0)
    } else if a == 270.0 {
        (-1.0, 0.0)
    } else {
        angle.to_radians().sin_cos()
    }
}

/// Polar angle of `p` as seen from `origin`, in [0, 360).
pub fn of_point(origin: Point, p: Point) -> Angle {
    let d = p - origin;
    Angle::from_radians(d.y.atan2(d.x)).normalized()
}

/// Heading of a line from its origin to its end, in [0, 360).
pub fn of_line(line: &Line) -> Angle {
    of_point(line.origin, line.end)
}

/// End angle of an arc, lifted by the fewest whole turns that give a
/// positive sweep.
///
/// Ends that meet (up to the angle tolerance) describe a full turn, which is
/// what rotating an `Arc(a, a + 360)` leaves behind once each angle is
/// normalized.
pub fn of_arc_end(arc: &Arc) -> Angle {
    let tolerance = Tolerance::default().angle;
    let sweep = arc.end_angle.0 - arc.start_angle.0;
    if sweep >= tolerance {
        return arc.end_angle;
    }
    let mut revolutions = (-sweep / 360.0).floor() + 1.0;
    if sweep + revolutions * 360.0 < tolerance {
        revolutions += 1.0;
    }
    Angle(arc.end_angle.0 + revolutions * 360.0)
}

/// Counter-clockwise sweep of an arc.
///
/// A sweep of exactly 360 is kept (a full circle), anything beyond loses its
/// extra revolutions.
pub fn of_arc_span(arc: &Arc) -> Angle {
    let span = of_arc_end(arc) - arc.start_angle;
    if span.0 > 360.0 + Tolerance::default().angle {
        span.normalized()
    } else {
        span
    }
}

/// Angle a fraction of the way along the sweep (0.5 = middle).
pub fn of_arc_middle(arc: &Arc, ratio: f64) -> Angle {
    arc.start_angle + Angle(of_arc_span(arc).0 * ratio)
}
