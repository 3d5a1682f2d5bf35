//! Point and angle arithmetic plus measurement helpers
//!
//! This module is organized into submodules:
//! - `defaults`: Tolerances and sampling constants
//! - `point`: Point arithmetic (mirror, rotate, polar conversion, equality)
//! - `angle`: Degree arithmetic (normalize, mirror, arc end/span)
//! - `measure`: Betweenness, on-path tests, length and extents

pub mod angle;
pub mod defaults;
pub mod measure;
pub mod point;
