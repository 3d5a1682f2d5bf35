//! Path primitives
//!
//! This module is organized into submodules:
//! - `transform`: In-place moves, rotation, scaling; copying mirror; scoped temporary moves
//! - `equal`: Structural comparison under tolerance
//! - `breaking`: Splitting one path into two at a point or curve parameter
//! - `bezier`: Bezier evaluation and de Casteljau subdivision
//!
//! A [`Path`] is a [`Primitive`] plus optional layer metadata. The four
//! primitives share the [`PrimitiveOps`] trait, dispatched statically over
//! the closed [`Primitive`] enum so no variant can lack an implementation.

pub mod bezier;
pub mod breaking;
pub mod equal;
pub mod transform;

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::errors::ConstructError;
use crate::geometry::{angle, measure};
use crate::types::{Angle, NumericError, Point, check_finite, check_positive};

pub use breaking::Broken;
pub use transform::{MoveGuard, move_temporary};

/// Geometry shared by every primitive.
///
/// Methods taking `&mut self` change the primitive in place; methods taking
/// `&self` leave it untouched and build a new value.
#[enum_dispatch]
pub trait PrimitiveOps {
    /// The anchor point: start for lines and beziers, center for circles and arcs
    fn origin(&self) -> Point;

    fn kind(&self) -> PathKind;

    /// Move so the anchor lands on `origin`, carrying every other point along.
    fn move_to(&mut self, origin: Point);

    /// Translate every point by `delta`.
    fn move_by(&mut self, delta: Point);

    /// Rotate counter-clockwise about `center`.
    fn rotate_about(&mut self, angle: Angle, center: Point);

    /// Multiply every coordinate (and the radius) by `factor`.
    fn scale_by(&mut self, factor: f64);

    /// A reflected copy; see [`Path::mirrored`].
    fn mirrored(&self, mirror_x: bool, mirror_y: bool) -> Primitive;

    /// Start and end point, or `None` for a circle.
    fn end_points(&self) -> Option<[Point; 2]>;
}

/// Variant tag of a [`Primitive`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    Line,
    Circle,
    Arc,
    Bezier,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PathKind::Line => "line",
            PathKind::Circle => "circle",
            PathKind::Arc => "arc",
            PathKind::Bezier => "bezier",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Primitive Types
// ============================================================================

/// A straight segment from `origin` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub origin: Point,
    pub end: Point,
}

impl Line {
    pub fn new(origin: Point, end: Point) -> Self {
        Self { origin, end }
    }

    pub fn length(&self) -> f64 {
        self.origin.distance(self.end)
    }
}

/// A full circle around `origin`
///
/// The radius should be positive; [`Circle::try_new`] enforces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub origin: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(origin: Point, radius: f64) -> Self {
        Self { origin, radius }
    }

    /// Create a Circle with validation (finite origin, positive radius)
    pub fn try_new(origin: Point, radius: f64) -> Result<Self, NumericError> {
        check_finite(origin.x)?;
        check_finite(origin.y)?;
        Ok(Self::new(origin, check_positive(radius)?))
    }

    /// The circle whose diameter runs from `a` to `b`.
    pub fn from_diameter(a: Point, b: Point) -> Self {
        Self::new(a.lerp(b, 0.5), a.distance(b) / 2.0)
    }

    /// The circle through three points.
    pub fn through(a: Point, b: Point, c: Point) -> Result<Self, ConstructError> {
        let origin = circumcenter(a, b, c)?;
        Ok(Self::new(origin, origin.distance(a)))
    }
}

/// A counter-clockwise sweep of a circle from `start_angle` to `end_angle`
///
/// `end_angle` below `start_angle` means the sweep crosses 0°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub origin: Point,
    pub radius: f64,
    pub start_angle: Angle,
    pub end_angle: Angle,
}

impl Arc {
    pub fn new(origin: Point, radius: f64, start_angle: Angle, end_angle: Angle) -> Self {
        Self { origin, radius, start_angle, end_angle }
    }

    /// Create an Arc with validation (finite values, positive radius)
    pub fn try_new(
        origin: Point,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
    ) -> Result<Self, NumericError> {
        let circle = Circle::try_new(origin, radius)?;
        check_finite(start_angle.0)?;
        check_finite(end_angle.0)?;
        Ok(Self::new(circle.origin, circle.radius, start_angle, end_angle))
    }

    /// The arc from `a` to `c` passing through `b`.
    pub fn through(a: Point, b: Point, c: Point) -> Result<Self, ConstructError> {
        let origin = circumcenter(a, b, c)?;
        let mut arc = Self::new(
            origin,
            origin.distance(a),
            angle::of_point(origin, a),
            angle::of_point(origin, c),
        );
        // Counter-clockwise from a to c must pass b; otherwise the sweep runs the other way
        if !measure::is_between_arc_angles(angle::of_point(origin, b), &arc, false) {
            std::mem::swap(&mut arc.start_angle, &mut arc.end_angle);
        }
        Ok(arc)
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.origin, self.radius)
    }
}

fn circumcenter(a: Point, b: Point, c: Point) -> Result<Point, ConstructError> {
    let ab = b - a;
    let ac = c - a;
    let cross = ab.perp_dot(ac);
    if cross.abs() <= 1e-12 * ab.length() * ac.length() {
        return Err(ConstructError::Collinear);
    }
    let d = 2.0 * cross;
    let ab2 = ab.length_squared();
    let ac2 = ac.length_squared();
    let ux = (ac.y * ab2 - ab.y * ac2) / d;
    let uy = (ab.x * ac2 - ac.x * ab2) / d;
    Ok(a + Point::new(ux, uy))
}

/// Control points of a bezier: one for a quadratic curve, several for cubic
/// and higher orders. The variant is preserved by every operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Controls {
    Single(Point),
    Many(Vec<Point>),
}

impl Controls {
    pub fn as_slice(&self) -> &[Point] {
        match self {
            Controls::Single(p) => std::slice::from_ref(p),
            Controls::Many(ps) => ps,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [Point] {
        match self {
            Controls::Single(p) => std::slice::from_mut(p),
            Controls::Many(ps) => ps,
        }
    }

    /// Apply `f` to every control point, keeping the arity.
    pub fn map(&self, mut f: impl FnMut(Point) -> Point) -> Controls {
        match self {
            Controls::Single(p) => Controls::Single(f(*p)),
            Controls::Many(ps) => Controls::Many(ps.iter().copied().map(f).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// A bezier curve from `origin` to `end` shaped by its control points
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier {
    pub origin: Point,
    pub controls: Controls,
    pub end: Point,
}

impl Bezier {
    pub fn new(origin: Point, controls: Controls, end: Point) -> Self {
        Self { origin, controls, end }
    }

    pub fn quadratic(origin: Point, control: Point, end: Point) -> Self {
        Self::new(origin, Controls::Single(control), end)
    }

    pub fn cubic(origin: Point, c1: Point, c2: Point, end: Point) -> Self {
        Self::new(origin, Controls::Many(vec![c1, c2]), end)
    }

    /// Degree of the curve (2 for quadratic, 3 for cubic, ...)
    pub fn order(&self) -> usize {
        self.controls.len() + 1
    }

    /// All points in order: origin, controls, end.
    pub fn points(&self) -> Vec<Point> {
        let mut pts = Vec::with_capacity(self.controls.len() + 2);
        pts.push(self.origin);
        pts.extend_from_slice(self.controls.as_slice());
        pts.push(self.end);
        pts
    }

    /// Rebuild from a full point sequence, keeping this curve's control arity.
    ///
    /// `points` must have the same length as [`Bezier::points`].
    pub(crate) fn with_points(&self, points: &[Point]) -> Bezier {
        let n = points.len();
        let inner = &points[1..n - 1];
        let controls = match self.controls {
            Controls::Single(_) => Controls::Single(inner[0]),
            Controls::Many(_) => Controls::Many(inner.to_vec()),
        };
        Bezier::new(points[0], controls, points[n - 1])
    }
}

/// The closed set of path primitives
#[enum_dispatch(PrimitiveOps)]
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Bezier(Bezier),
}

// ============================================================================
// Path
// ============================================================================

/// A primitive with optional layer metadata.
///
/// The layer groups paths for output and never affects geometry. Operations
/// that build a new path copy it; operations that mutate in place leave it
/// alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub primitive: Primitive,
    pub layer: Option<String>,
}

impl Path {
    pub fn new(primitive: impl Into<Primitive>) -> Self {
        Self { primitive: primitive.into(), layer: None }
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    /// Build a path derived from `self`: same layer, new geometry.
    pub(crate) fn derive(&self, primitive: impl Into<Primitive>) -> Path {
        Path { primitive: primitive.into(), layer: self.layer.clone() }
    }

    pub fn kind(&self) -> PathKind {
        self.primitive.kind()
    }

    pub fn origin(&self) -> Point {
        self.primitive.origin()
    }

    pub fn end_points(&self) -> Option<[Point; 2]> {
        self.primitive.end_points()
    }

    pub fn is_line(&self) -> bool {
        self.kind() == PathKind::Line
    }

    pub fn is_circle(&self) -> bool {
        self.kind() == PathKind::Circle
    }

    pub fn is_arc(&self) -> bool {
        self.kind() == PathKind::Arc
    }

    pub fn is_bezier(&self) -> bool {
        self.kind() == PathKind::Bezier
    }

    /// Everything but a circle has distinct start and end points
    pub fn has_end_points(&self) -> bool {
        !self.is_circle()
    }

    pub fn is_closed(&self) -> bool {
        self.is_circle()
    }

    pub fn length(&self) -> f64 {
        measure::length(&self.primitive)
    }
}

macro_rules! path_from {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Path {
                fn from(p: $ty) -> Self {
                    Path::new(p)
                }
            }
        )*
    };
}

path_from!(Line, Circle, Arc, Bezier, Primitive);

struct Pt(Point);

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.primitive {
            Primitive::Line(l) => write!(f, "line {} -> {}", Pt(l.origin), Pt(l.end))?,
            Primitive::Circle(c) => write!(f, "circle {} r={}", Pt(c.origin), c.radius)?,
            Primitive::Arc(a) => write!(
                f,
                "arc {} r={} {}..{}",
                Pt(a.origin),
                a.radius,
                a.start_angle,
                a.end_angle
            )?,
            Primitive::Bezier(b) => {
                write!(f, "bezier {}", Pt(b.origin))?;
                for c in b.controls.as_slice() {
                    write!(f, " ~{}", Pt(*c))?;
                }
                write!(f, " -> {}", Pt(b.end))?;
            }
        }
        if let Some(layer) = &self.layer {
            write!(f, " [{}]", layer)?;
        }
        Ok(())
    }
}
