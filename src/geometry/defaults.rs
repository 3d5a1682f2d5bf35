//! Default tolerances and sampling settings

/// Euclidean distance under which two points are considered equal
pub const POINT_TOLERANCE: f64 = 1e-7;

/// Degrees under which two angles are considered equal
pub const ANGLE_TOLERANCE: f64 = 1e-4;

/// Segments used when flattening a bezier for length and extents
pub const BEZIER_SAMPLES: usize = 64;

/// Ternary refinement rounds when searching the nearest curve parameter
pub const BEZIER_REFINE_STEPS: usize = 60;
