//! C bindings for constructing and combining points and lines.

use std::os::raw::c_int;

use crate::geometry::{geomval_line_t, geomval_point_t};

/// The point `(0, 0)`, exported as a data symbol.
#[unsafe(no_mangle)]
pub static ORIGIN: geomval_point_t = geomval_point_t::ORIGIN;

/// The point `(1, 1)`, exported as a data symbol.
#[unsafe(no_mangle)]
pub static UNIT_POINT: geomval_point_t = geomval_point_t::UNIT;

/// Returns the point `(0, 0)`.
#[unsafe(no_mangle)]
pub extern "C" fn origin() -> geomval_point_t {
    ORIGIN
}

/// Returns the point `(1, 1)`.
#[unsafe(no_mangle)]
pub extern "C" fn unit_point() -> geomval_point_t {
    UNIT_POINT
}

/// Builds a point from its coordinates. The result is returned by value; nothing is allocated.
#[unsafe(no_mangle)]
pub extern "C" fn create_point(x: c_int, y: c_int) -> geomval_point_t {
    geomval_point_t::new(x, y)
}

/// Overwrites the coordinates of a caller-owned point.
///
/// `point` must be live and exclusively writable for the duration of the call.
/// A null pointer is ignored.
#[unsafe(no_mangle)]
pub extern "C" fn set_point(x: c_int, y: c_int, point: *mut geomval_point_t) {
    // Safety: caller guarantees a valid, exclusive point pointer when non-null.
    let Some(point) = (unsafe { point.as_mut() }) else {
        log::debug!("set_point called with a null point");
        return;
    };
    point.set(x, y);
}

/// Builds a line between two points.
#[unsafe(no_mangle)]
pub extern "C" fn create_line(begin: geomval_point_t, end: geomval_point_t) -> geomval_line_t {
    geomval_line_t::new(begin, end)
}

/// Adds two points component-wise. Overflow wraps.
#[unsafe(no_mangle)]
pub extern "C" fn add_point(first: geomval_point_t, second: geomval_point_t) -> geomval_point_t {
    first + second
}
