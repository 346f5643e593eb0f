//! C FFI entry points for geomval.
//!
//! Geometry exports use the plain C names callers look up (`origin`, `create_line`,
//! `ORIGIN`, ...). Error, string and logging support functions carry a `geomval_` prefix.

pub mod error;
mod ffi;
pub mod format;
pub mod geometry;
pub mod logging;
pub mod points;

pub use error::GeometryError;
pub use geometry::{geomval_line_t, geomval_point_t};
