//! Output coordinate frame.
//!
//! Models are Y-up; SVG-style renderers are Y-down with the top-left corner
//! at (0, 0). A [`Frame`] remaps copies of paths into that space with a
//! mirror, a scale and a relative move, leaving the model untouched.

use crate::geometry::measure;
use crate::path::Path;
use crate::types::{Extents, NumericError, Point, check_finite, check_positive, pt};

/// Maps model space to output space: `out = ((x - left) * scale, (top - y) * scale)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    scale: f64,
    left: f64,
    top: f64,
}

impl Frame {
    /// Create a Frame with validation (positive scale, finite corner)
    pub fn try_new(scale: f64, top_left: Point) -> Result<Self, NumericError> {
        Ok(Frame {
            scale: check_positive(scale)?,
            left: check_finite(top_left.x)?,
            top: check_finite(top_left.y)?,
        })
    }

    /// A frame whose top-left corner is the top-left of everything in `paths`.
    ///
    /// Returns `None` when there is nothing to frame.
    pub fn fit(paths: &[Path], scale: f64) -> Result<Option<Self>, NumericError> {
        let mut ext = Extents::new();
        for path in paths {
            ext.expand(&measure::extents(&path.primitive));
        }
        if ext.is_empty() {
            return Ok(None);
        }
        Self::try_new(scale, pt(ext.min.x, ext.max.y)).map(Some)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a single point.
    pub fn point(&self, p: Point) -> Point {
        pt((p.x - self.left) * self.scale, (self.top - p.y) * self.scale)
    }

    /// A remapped copy of `path`. The layer is carried over.
    pub fn apply(&self, path: &Path) -> Path {
        let mut out = path.mirrored(false, true);
        out.scale(self.scale)
            .move_relative(pt(-self.left * self.scale, self.top * self.scale), false);
        out
    }

    pub fn apply_all(&self, paths: &[Path]) -> Vec<Path> {
        paths.iter().map(|p| self.apply(p)).collect()
    }
}
