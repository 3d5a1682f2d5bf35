//! 2D path kernel: lines, circles, arcs and bezier curves with in-place
//! transforms, tolerant equality and path breaking.
//!
//! ```
//! use pathkern::{Angle, Arc, Path, pt};
//!
//! let mut arc = Path::from(Arc::new(pt(0.0, 0.0), 5.0, Angle(350.0), Angle(10.0)));
//! let back = arc.break_at_angle(Angle(5.0)).unwrap().into_piece().unwrap();
//! assert_eq!(back.to_string(), "arc (0, 0) r=5 5°..10°");
//! ```

pub mod errors;
pub mod frame;
pub mod geometry;
pub mod log;
pub mod path;
pub mod types;

pub use errors::{BreakError, ConstructError};
pub use frame::Frame;
pub use path::equal::are_equal;
pub use path::{
    Arc, Bezier, Broken, Circle, Controls, Line, MoveGuard, Path, PathKind, Primitive,
    PrimitiveOps, move_temporary,
};
pub use types::{Angle, Extents, NumericError, Point, Tolerance, pt, try_point};
