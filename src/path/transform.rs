//! Transformations.
//!
//! Two kinds of operation, told apart by their receivers:
//! - in place (`&mut self`, returns `&mut Self` for chaining): [`Path::move_to`],
//!   [`Path::move_relative`], [`Path::rotate`], [`Path::scale`]. The layer is
//!   never touched.
//! - copying (`&self`, returns a new [`Path`]): `Clone::clone` and
//!   [`Path::mirrored`]. The layer is copied onto the result.

use std::ops::Deref;

use crate::geometry::{angle, point};
use crate::log;
use crate::types::{Angle, Point};

use super::{Arc, Bezier, Circle, Line, Path, PathKind, Primitive, PrimitiveOps};

impl PrimitiveOps for Line {
    fn origin(&self) -> Point {
        self.origin
    }

    fn kind(&self) -> PathKind {
        PathKind::Line
    }

    fn move_to(&mut self, origin: Point) {
        self.end += origin - self.origin;
        self.origin = origin;
    }

    fn move_by(&mut self, delta: Point) {
        self.origin += delta;
        self.end += delta;
    }

    fn rotate_about(&mut self, angle: Angle, center: Point) {
        self.origin = point::rotate(self.origin, angle, center);
        self.end = point::rotate(self.end, angle, center);
    }

    fn scale_by(&mut self, factor: f64) {
        self.origin *= factor;
        self.end *= factor;
    }

    fn mirrored(&self, mirror_x: bool, mirror_y: bool) -> Primitive {
        Line::new(
            point::mirror(self.origin, mirror_x, mirror_y),
            point::mirror(self.end, mirror_x, mirror_y),
        )
        .into()
    }

    fn end_points(&self) -> Option<[Point; 2]> {
        Some([self.origin, self.end])
    }
}

impl PrimitiveOps for Circle {
    fn origin(&self) -> Point {
        self.origin
    }

    fn kind(&self) -> PathKind {
        PathKind::Circle
    }

    fn move_to(&mut self, origin: Point) {
        self.origin = origin;
    }

    fn move_by(&mut self, delta: Point) {
        self.origin += delta;
    }

    fn rotate_about(&mut self, angle: Angle, center: Point) {
        self.origin = point::rotate(self.origin, angle, center);
    }

    fn scale_by(&mut self, factor: f64) {
        self.origin *= factor;
        self.radius *= factor;
    }

    fn mirrored(&self, mirror_x: bool, mirror_y: bool) -> Primitive {
        Circle::new(point::mirror(self.origin, mirror_x, mirror_y), self.radius).into()
    }

    fn end_points(&self) -> Option<[Point; 2]> {
        None
    }
}

impl PrimitiveOps for Arc {
    fn origin(&self) -> Point {
        self.origin
    }

    fn kind(&self) -> PathKind {
        PathKind::Arc
    }

    fn move_to(&mut self, origin: Point) {
        self.origin = origin;
    }

    fn move_by(&mut self, delta: Point) {
        self.origin += delta;
    }

    fn rotate_about(&mut self, angle: Angle, center: Point) {
        self.origin = point::rotate(self.origin, angle, center);
        // each end wraps on its own
        self.start_angle = (self.start_angle + angle).normalized();
        self.end_angle = (self.end_angle + angle).normalized();
    }

    fn scale_by(&mut self, factor: f64) {
        self.origin *= factor;
        self.radius *= factor;
    }

    fn mirrored(&self, mirror_x: bool, mirror_y: bool) -> Primitive {
        let start = angle::mirror(self.start_angle, mirror_x, mirror_y);
        let end = angle::mirror(angle::of_arc_end(self), mirror_x, mirror_y);
        let origin = point::mirror(self.origin, mirror_x, mirror_y);
        // a single-axis flip reverses the winding, so the ends trade places
        if mirror_x != mirror_y {
            Arc::new(origin, self.radius, end, start).into()
        } else {
            Arc::new(origin, self.radius, start, end).into()
        }
    }

    fn end_points(&self) -> Option<[Point; 2]> {
        Some(point::from_arc(self))
    }
}

impl PrimitiveOps for Bezier {
    fn origin(&self) -> Point {
        self.origin
    }

    fn kind(&self) -> PathKind {
        PathKind::Bezier
    }

    fn move_to(&mut self, origin: Point) {
        let delta = origin - self.origin;
        for c in self.controls.as_mut_slice() {
            *c += delta;
        }
        self.end += delta;
        self.origin = origin;
    }

    fn move_by(&mut self, delta: Point) {
        self.origin += delta;
        for c in self.controls.as_mut_slice() {
            *c += delta;
        }
        self.end += delta;
    }

    fn rotate_about(&mut self, angle: Angle, center: Point) {
        self.origin = point::rotate(self.origin, angle, center);
        for c in self.controls.as_mut_slice() {
            *c = point::rotate(*c, angle, center);
        }
        self.end = point::rotate(self.end, angle, center);
    }

    fn scale_by(&mut self, factor: f64) {
        self.origin *= factor;
        for c in self.controls.as_mut_slice() {
            *c *= factor;
        }
        self.end *= factor;
    }

    fn mirrored(&self, mirror_x: bool, mirror_y: bool) -> Primitive {
        let m = |p| point::mirror(p, mirror_x, mirror_y);
        Bezier::new(m(self.origin), self.controls.map(m), m(self.end)).into()
    }

    fn end_points(&self) -> Option<[Point; 2]> {
        Some([self.origin, self.end])
    }
}

impl Path {
    /// A reflected copy. `mirror_x` negates X coordinates, `mirror_y`
    /// negates Y coordinates. Arcs keep counter-clockwise winding.
    pub fn mirrored(&self, mirror_x: bool, mirror_y: bool) -> Path {
        self.derive(self.primitive.mirrored(mirror_x, mirror_y))
    }

    /// Move the path so its origin is exactly `origin`.
    pub fn move_to(&mut self, origin: Point) -> &mut Self {
        self.primitive.move_to(origin);
        self
    }

    /// Translate by `delta`, or by `-delta` when `subtract` is set.
    pub fn move_relative(&mut self, delta: Point, subtract: bool) -> &mut Self {
        let delta = if subtract { -delta } else { delta };
        self.primitive.move_by(delta);
        self
    }

    /// Rotate counter-clockwise by `angle` about `center`.
    ///
    /// Arc angles are normalized to [0, 360) afterwards. A zero angle leaves
    /// the path untouched.
    pub fn rotate(&mut self, angle: Angle, center: Point) -> &mut Self {
        if angle.0 == 0.0 {
            return self;
        }
        if !angle.is_finite() {
            log::warn!(angle = angle.0, kind = %self.kind(), "ignoring non-finite rotation");
            return self;
        }
        self.primitive.rotate_about(angle, center);
        self
    }

    /// Scale about the coordinate origin (not the path's own origin).
    ///
    /// A factor of 1 leaves the path untouched.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        if factor == 1.0 {
            return self;
        }
        if !factor.is_finite() {
            log::warn!(factor, kind = %self.kind(), "ignoring non-finite scale");
            return self;
        }
        self.primitive.scale_by(factor);
        self
    }
}

// ============================================================================
// Scoped temporary moves
// ============================================================================

/// Paths moved by per-path deltas for as long as the guard lives.
///
/// Dropping the guard moves every path back by the same delta, including
/// when the scope unwinds from a panic. Paths without a delta (a `None`
/// entry, or no entry at all) are left in place.
pub struct MoveGuard<'a> {
    paths: &'a mut [Path],
    deltas: Vec<Option<Point>>,
}

impl<'a> MoveGuard<'a> {
    pub fn apply(paths: &'a mut [Path], deltas: &[Option<Point>]) -> Self {
        let deltas = deltas.to_vec();
        for (path, delta) in paths.iter_mut().zip(&deltas) {
            if let Some(delta) = delta {
                path.move_relative(*delta, false);
            }
        }
        log::trace!(paths = paths.len(), deltas = deltas.len(), "applied temporary moves");
        MoveGuard { paths, deltas }
    }
}

impl Deref for MoveGuard<'_> {
    type Target = [Path];

    fn deref(&self) -> &[Path] {
        self.paths
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        for (path, delta) in self.paths.iter_mut().zip(&self.deltas) {
            if let Some(delta) = delta {
                path.move_relative(*delta, true);
            }
        }
        log::trace!(paths = self.paths.len(), "reverted temporary moves");
    }
}

/// Move each path by its delta, run `task` on the moved paths, then move
/// them back. The reversal runs even if `task` panics.
pub fn move_temporary<R>(
    paths: &mut [Path],
    deltas: &[Option<Point>],
    task: impl FnOnce(&[Path]) -> R,
) -> R {
    let guard = MoveGuard::apply(paths, deltas);
    task(&*guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Controls;
    use crate::types::pt;

    fn line() -> Path {
        Line::new(pt(0.0, 0.0), pt(10.0, 0.0)).into()
    }

    #[test]
    fn mirror_line_across_y_axis() {
        let mirrored = line().mirrored(true, false);
        assert_eq!(mirrored.primitive, Primitive::Line(Line::new(pt(0.0, 0.0), pt(-10.0, 0.0))));
    }

    #[test]
    fn mirror_copies_layer_and_leaves_source() {
        let src = line().with_layer("etch");
        let m = src.mirrored(false, true);
        assert_eq!(m.layer.as_deref(), Some("etch"));
        assert_eq!(src, line().with_layer("etch"));
    }

    #[test]
    fn mirror_arc_single_axis_swaps_ends() {
        let arc: Path = Arc::new(pt(1.0, 0.0), 5.0, Angle(0.0), Angle(90.0)).into();
        let m = arc.mirrored(true, false);
        assert_eq!(
            m.primitive,
            Primitive::Arc(Arc::new(pt(-1.0, 0.0), 5.0, Angle(90.0), Angle(180.0)))
        );
    }

    #[test]
    fn mirror_arc_both_axes_keeps_order() {
        let arc: Path = Arc::new(pt(0.0, 0.0), 5.0, Angle(0.0), Angle(90.0)).into();
        let Primitive::Arc(m) = arc.mirrored(true, true).primitive else {
            panic!("mirror changed the variant");
        };
        assert!(angle::are_equal(m.start_angle, Angle(180.0)));
        assert!(angle::are_equal(m.end_angle, Angle(270.0)));
    }

    #[test]
    fn mirror_bezier_keeps_arity() {
        let b: Path = Bezier::quadratic(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 0.0)).into();
        let Primitive::Bezier(m) = b.mirrored(false, true).primitive else {
            panic!("mirror changed the variant");
        };
        assert_eq!(m.controls, Controls::Single(pt(1.0, -1.0)));
    }

    #[test]
    fn move_to_carries_end_with_original_origin() {
        let mut p: Path = Line::new(pt(1.0, 1.0), pt(4.0, 5.0)).into();
        p.move_to(pt(10.0, 10.0));
        assert_eq!(p.primitive, Primitive::Line(Line::new(pt(10.0, 10.0), pt(13.0, 14.0))));
    }

    #[test]
    fn move_to_bezier_moves_controls() {
        let mut p: Path = Bezier::cubic(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 1.0), pt(3.0, 0.0)).into();
        p.move_to(pt(0.0, 2.0));
        let Primitive::Bezier(b) = &p.primitive else { unreachable!() };
        assert_eq!(b.controls.as_slice(), &[pt(1.0, 3.0), pt(2.0, 3.0)]);
        assert_eq!(b.end, pt(3.0, 2.0));
    }

    #[test]
    fn move_relative_and_back() {
        let mut p = line();
        p.move_relative(pt(2.0, 3.0), false);
        assert_eq!(p.primitive, Primitive::Line(Line::new(pt(2.0, 3.0), pt(12.0, 3.0))));
        p.move_relative(pt(2.0, 3.0), true);
        assert_eq!(p, line());
    }

    #[test]
    fn move_relative_circle_only_moves_origin() {
        let mut p: Path = Circle::new(pt(0.0, 0.0), 2.0).into();
        p.move_relative(pt(1.0, 1.0), false);
        assert_eq!(p.primitive, Primitive::Circle(Circle::new(pt(1.0, 1.0), 2.0)));
    }

    #[test]
    fn rotate_arc_normalizes_each_angle() {
        let mut p: Path = Arc::new(pt(0.0, 0.0), 5.0, Angle(300.0), Angle(350.0)).into();
        p.rotate(Angle(30.0), pt(0.0, 0.0));
        assert_eq!(
            p.primitive,
            Primitive::Arc(Arc::new(pt(0.0, 0.0), 5.0, Angle(330.0), Angle(20.0)))
        );
    }

    #[test]
    fn rotate_circle_about_external_center_moves_origin() {
        let mut p: Path = Circle::new(pt(2.0, 0.0), 1.0).into();
        p.rotate(Angle(180.0), pt(0.0, 0.0));
        assert_eq!(p.primitive, Primitive::Circle(Circle::new(pt(-2.0, 0.0), 1.0)));
    }

    #[test]
    fn rotate_by_zero_and_nan_are_no_ops() {
        let mut p = line();
        p.rotate(Angle(0.0), pt(5.0, 5.0)).rotate(Angle(f64::NAN), pt(0.0, 0.0));
        assert_eq!(p, line());
    }

    #[test]
    fn scale_is_about_global_origin() {
        let mut p: Path = Arc::new(pt(1.0, 2.0), 3.0, Angle(0.0), Angle(45.0)).into();
        p.scale(2.0);
        assert_eq!(
            p.primitive,
            Primitive::Arc(Arc::new(pt(2.0, 4.0), 6.0, Angle(0.0), Angle(45.0)))
        );
    }

    #[test]
    fn rotate_line_turns_both_ends_about_center() {
        let mut p: Path = Line::new(pt(2.0, 1.0), pt(1.0, 3.0)).into();
        p.rotate(Angle(90.0), pt(1.0, 1.0));
        assert_eq!(p.primitive, Primitive::Line(Line::new(pt(1.0, 2.0), pt(-1.0, 1.0))));
    }

    #[test]
    fn rotate_circle_keeps_radius() {
        let mut p: Path = Circle::new(pt(0.0, 3.0), 2.5).into();
        p.rotate(Angle(90.0), pt(0.0, 0.0));
        assert_eq!(p.primitive, Primitive::Circle(Circle::new(pt(-3.0, 0.0), 2.5)));
    }

    #[test]
    fn rotate_quadratic_bezier_turns_its_control() {
        let mut p: Path = Bezier::quadratic(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 0.0)).into();
        p.rotate(Angle(180.0), pt(0.0, 0.0));
        assert_eq!(
            p.primitive,
            Primitive::Bezier(Bezier::quadratic(pt(0.0, 0.0), pt(-1.0, -1.0), pt(-2.0, 0.0)))
        );
    }

    #[test]
    fn rotate_cubic_bezier_turns_every_control() {
        let mut p: Path =
            Bezier::cubic(pt(1.0, 0.0), pt(2.0, 0.0), pt(2.0, 1.0), pt(1.0, 2.0)).into();
        p.rotate(Angle(90.0), pt(1.0, 0.0));
        assert_eq!(
            p.primitive,
            Primitive::Bezier(Bezier::cubic(pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0), pt(-1.0, 0.0)))
        );
    }

    #[test]
    fn scale_line_multiplies_both_ends() {
        let mut p: Path = Line::new(pt(1.0, 2.0), pt(3.0, -4.0)).into();
        p.scale(2.5);
        assert_eq!(p.primitive, Primitive::Line(Line::new(pt(2.5, 5.0), pt(7.5, -10.0))));
    }

    #[test]
    fn scale_circle_multiplies_origin_and_radius() {
        let mut p: Path = Circle::new(pt(1.0, -2.0), 1.5).into();
        p.scale(2.0);
        assert_eq!(p.primitive, Primitive::Circle(Circle::new(pt(2.0, -4.0), 3.0)));
    }

    #[test]
    fn scale_bezier_multiplies_controls_of_either_arity() {
        let mut q: Path = Bezier::quadratic(pt(0.0, 0.0), pt(1.0, 2.0), pt(3.0, 1.0)).into();
        q.scale(0.5);
        assert_eq!(
            q.primitive,
            Primitive::Bezier(Bezier::quadratic(pt(0.0, 0.0), pt(0.5, 1.0), pt(1.5, 0.5)))
        );

        let mut c: Path =
            Bezier::cubic(pt(1.0, 1.0), pt(2.0, 3.0), pt(4.0, 3.0), pt(5.0, -1.0)).into();
        c.scale(3.0);
        assert_eq!(
            c.primitive,
            Primitive::Bezier(Bezier::cubic(pt(3.0, 3.0), pt(6.0, 9.0), pt(12.0, 9.0), pt(15.0, -3.0)))
        );
    }

    #[test]
    fn in_place_ops_keep_layer() {
        let mut p = line().with_layer("a");
        p.move_to(pt(1.0, 1.0)).scale(3.0).rotate(Angle(90.0), pt(0.0, 0.0));
        assert_eq!(p.layer.as_deref(), Some("a"));
        assert_eq!(p.primitive, Primitive::Line(Line::new(pt(-3.0, 3.0), pt(-3.0, 33.0))));
    }

    #[test]
    fn move_temporary_applies_then_reverts() {
        let mut paths = vec![line(), Circle::new(pt(1.0, 1.0), 1.0).into(), line()];
        let before = paths.clone();
        let seen = move_temporary(&mut paths, &[Some(pt(1.0, 2.0)), None], |moved| {
            (moved[0].origin(), moved[1].origin(), moved[2].origin())
        });
        assert_eq!(seen, (pt(1.0, 2.0), pt(1.0, 1.0), pt(0.0, 0.0)));
        assert_eq!(paths, before);
    }

    #[test]
    fn move_temporary_reverts_after_panic() {
        let mut paths = vec![line()];
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            move_temporary(&mut paths, &[Some(pt(5.0, 5.0))], |_| panic!("task failed"))
        }));
        assert!(result.is_err());
        assert_eq!(paths, vec![line()]);
    }
}
