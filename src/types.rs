//! Strongly-typed numeric primitives for pathkern (zero-cost newtypes).
//!
//! Points are plain `glam::DVec2` values; angles are degrees wrapped in
//! [`Angle`] so they never mix with lengths or radians by accident.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use glam::DVec2;

use crate::geometry::defaults;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub(crate) fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities, zero and negative values.
#[inline]
pub(crate) fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// A point (or displacement) in model space. Y grows upward.
pub type Point = DVec2;

/// Shorthand for building a [`Point`].
#[inline]
pub const fn pt(x: f64, y: f64) -> Point {
    DVec2::new(x, y)
}

/// Create a point with validation (rejects NaN/infinite coordinates)
pub fn try_point(x: f64, y: f64) -> Result<Point, NumericError> {
    Ok(pt(check_finite(x)?, check_finite(y)?))
}

/// Angle in degrees, measured counter-clockwise from the positive X axis.
///
/// Angles are unbounded; use [`Angle::normalized`] to bring one into [0, 360).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const FULL_TURN: Angle = Angle(360.0);

    /// Build from radians
    #[inline]
    pub fn from_radians(rad: f64) -> Angle {
        Angle(rad.to_degrees())
    }

    /// Get the raw value in degrees
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Map into [0, 360).
    #[inline]
    pub fn normalized(self) -> Angle {
        let a = self.0.rem_euclid(360.0);
        // rem_euclid of a tiny negative value rounds up to exactly 360
        if a >= 360.0 { Angle(0.0) } else { Angle(a) }
    }

    /// Check if this angle is finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle { Angle(self.0 + rhs.0) }
}
impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle { Angle(self.0 - rhs.0) }
}
impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle { Angle(-self.0) }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Comparison tolerances.
///
/// `point` is a Euclidean distance, `angle` is in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub point: f64,
    pub angle: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            point: defaults::POINT_TOLERANCE,
            angle: defaults::ANGLE_TOLERANCE,
        }
    }
}

impl Tolerance {
    /// Create a Tolerance with validation (finite, non-negative)
    pub fn try_new(point: f64, angle: f64) -> Result<Self, NumericError> {
        for val in [point, angle] {
            check_finite(val)?;
            if val < 0.0 {
                return Err(NumericError::Negative);
            }
        }
        Ok(Tolerance { point, angle })
    }

    /// Same angle tolerance, different point tolerance.
    pub fn with_point(self, point: f64) -> Self {
        Tolerance { point, ..self }
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    pub min: Point,
    pub max: Point,
}

impl Default for Extents {
    fn default() -> Self {
        Self::new()
    }
}

impl Extents {
    /// Create an empty box (will expand on first point)
    pub fn new() -> Self {
        Extents {
            min: pt(f64::MAX, f64::MAX),
            max: pt(f64::MIN, f64::MIN),
        }
    }

    /// Check if the box is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include another box
    pub fn expand(&mut self, other: &Extents) {
        if !other.is_empty() {
            self.expand_point(other.min);
            self.expand_point(other.max);
        }
    }

    pub fn width(&self) -> f64 { self.max.x - self.min.x }

    pub fn height(&self) -> f64 { self.max.y - self.min.y }

    /// Get the center point
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }
}

impl FromIterator<Point> for Extents {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut ext = Extents::new();
        for p in iter {
            ext.expand_point(p);
        }
        ext
    }
}
