//! Bezier evaluation and subdivision.
//!
//! Everything here runs de Casteljau over the full point sequence
//! (origin, controls, end), so it works for any order and never changes the
//! control arity of the curve it splits.

use crate::geometry::defaults;
use crate::types::Point;

use super::Bezier;

/// Run de Casteljau at `t`.
///
/// Returns the point on the curve plus the control polygons of the two
/// halves: `head` runs from the start to the point, `tail` from the point to
/// the end. Both have as many points as the input.
fn de_casteljau(points: &[Point], t: f64) -> (Point, Vec<Point>, Vec<Point>) {
    let n = points.len();
    let mut work = points.to_vec();
    let mut head = Vec::with_capacity(n);
    let mut tail = Vec::with_capacity(n);
    head.push(work[0]);
    tail.push(work[n - 1]);
    for level in 1..n {
        for i in 0..n - level {
            work[i] = work[i].lerp(work[i + 1], t);
        }
        head.push(work[0]);
        tail.push(work[n - level - 1]);
    }
    tail.reverse();
    (work[0], head, tail)
}

impl Bezier {
    /// Point on the curve at parameter `t` in [0, 1].
    pub fn point_at(&self, t: f64) -> Point {
        if t <= 0.0 {
            return self.origin;
        }
        if t >= 1.0 {
            return self.end;
        }
        de_casteljau(&self.points(), t).0
    }

    /// `segments + 1` evenly spaced (in `t`) points along the curve.
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }

    /// Split at `t`: `self` becomes the part before `t`, the part after is
    /// returned. Both keep the control arity of the original.
    pub fn split(&mut self, t: f64) -> Bezier {
        let (_, head, tail) = de_casteljau(&self.points(), t);
        let tail = self.with_points(&tail);
        *self = self.with_points(&head);
        tail
    }

    /// Parameter of the curve point closest to `p`.
    ///
    /// Coarse sampling picks the best bracket, ternary search refines it.
    pub fn nearest_parameter(&self, p: Point) -> f64 {
        let samples = defaults::BEZIER_SAMPLES;
        let dist = |t: f64| self.point_at(t).distance_squared(p);

        let best = (0..=samples)
            .min_by(|&a, &b| {
                let da = dist(a as f64 / samples as f64);
                let db = dist(b as f64 / samples as f64);
                da.total_cmp(&db)
            })
            .unwrap_or(0);

        let step = 1.0 / samples as f64;
        let mut lo = ((best as f64 - 1.0) * step).max(0.0);
        let mut hi = ((best as f64 + 1.0) * step).min(1.0);
        for _ in 0..defaults::BEZIER_REFINE_STEPS {
            let m1 = lo + (hi - lo) / 3.0;
            let m2 = hi - (hi - lo) / 3.0;
            if dist(m1) < dist(m2) {
                hi = m2;
            } else {
                lo = m1;
            }
        }
        (lo + hi) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Controls;
    use crate::types::pt;

    fn cubic() -> Bezier {
        Bezier::cubic(pt(0.0, 0.0), pt(0.0, 4.0), pt(4.0, 4.0), pt(4.0, 0.0))
    }

    #[test]
    fn point_at_ends_and_middle() {
        let c = cubic();
        assert_eq!(c.point_at(0.0), pt(0.0, 0.0));
        assert_eq!(c.point_at(1.0), pt(4.0, 0.0));
        assert_eq!(c.point_at(0.5), pt(2.0, 3.0));
    }

    #[test]
    fn quadratic_point_at_middle() {
        let q = Bezier::quadratic(pt(0.0, 0.0), pt(1.0, 2.0), pt(2.0, 0.0));
        assert_eq!(q.point_at(0.5), pt(1.0, 1.0));
    }

    #[test]
    fn split_cubic_keeps_arity_and_meets() {
        let mut head = cubic();
        let tail = head.split(0.5);
        assert_eq!(head.end, pt(2.0, 3.0));
        assert_eq!(tail.origin, pt(2.0, 3.0));
        assert_eq!(tail.end, pt(4.0, 0.0));
        assert!(matches!(head.controls, Controls::Many(ref v) if v.len() == 2));
        assert!(matches!(tail.controls, Controls::Many(ref v) if v.len() == 2));
        assert_eq!(head.controls.as_slice(), &[pt(0.0, 2.0), pt(1.0, 3.0)]);
        assert_eq!(tail.controls.as_slice(), &[pt(3.0, 3.0), pt(4.0, 2.0)]);
    }

    #[test]
    fn split_quadratic_stays_quadratic() {
        let mut head = Bezier::quadratic(pt(0.0, 0.0), pt(1.0, 2.0), pt(2.0, 0.0));
        let tail = head.split(0.5);
        assert!(matches!(head.controls, Controls::Single(_)));
        assert!(matches!(tail.controls, Controls::Single(_)));
        assert_eq!(tail.controls.as_slice(), &[pt(1.5, 1.0)]);
    }

    #[test]
    fn halves_trace_the_original() {
        let original = cubic();
        let mut head = original.clone();
        let tail = head.split(0.3);
        let on_original = original.point_at(0.3 + 0.7 * 0.5);
        assert!(tail.point_at(0.5).distance(on_original) < 1e-12);
        let on_original = original.point_at(0.3 * 0.5);
        assert!(head.point_at(0.5).distance(on_original) < 1e-12);
    }

    #[test]
    fn nearest_parameter_finds_curve_point() {
        let c = cubic();
        let t = c.nearest_parameter(pt(2.0, 3.0));
        assert!((t - 0.5).abs() < 1e-6, "t = {}", t);
        assert!(c.point_at(c.nearest_parameter(pt(-1.0, -1.0))).distance(pt(0.0, 0.0)) < 1e-9);
    }

    #[test]
    fn flatten_yields_segments_plus_one() {
        assert_eq!(cubic().flatten(8).len(), 9);
    }
}
