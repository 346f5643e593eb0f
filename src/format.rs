//! C bindings for rendering points as text.
//!
//! Two variants are exported: `point_to_new_string` hands ownership of a freshly allocated
//! string to the caller, `point_to_buffer` writes into caller-owned memory.

use std::ffi::CString;
use std::fmt::Write as _;
use std::os::raw::{c_char, c_int};
use std::ptr;

use crate::error::{GeometryError, clear_error, geomval_error_t, write_geometry_error};
use crate::ffi::write_nul_terminated;
use crate::geometry::geomval_point_t;

/// Longest rendering of a point: `Point[x=-2147483648, y=-2147483648]`.
pub const MAX_POINT_TEXT_LEN: usize = 35;

/// Renders `point` as `Point[x=<x>, y=<y>]`.
///
/// Storage for the text and a trailing NUL is reserved up front so allocation failure is
/// reported instead of aborting.
pub fn render_point(point: &geomval_point_t) -> Result<String, GeometryError> {
    let requested = MAX_POINT_TEXT_LEN + 1;
    let mut text = String::new();
    text.try_reserve_exact(requested)
        .map_err(|_| GeometryError::OutOfMemory { requested })?;
    write!(text, "{point}").map_err(|_| GeometryError::OutOfMemory { requested })?;
    Ok(text)
}

/// Renders `point` into an owned C string, reusing the reserved capacity for the terminator.
pub fn render_point_cstring(point: &geomval_point_t) -> Result<CString, GeometryError> {
    let text = render_point(point)?;
    // Integer formatting never yields NUL, so the only failure left is the allocation.
    CString::new(text).map_err(|_| GeometryError::OutOfMemory {
        requested: MAX_POINT_TEXT_LEN + 1,
    })
}

/// Formats a point into a newly allocated, NUL-terminated string.
///
/// The returned string is heap-allocated and must be freed with `geomval_string_free`.
/// Returns null and writes an out-of-memory error to `out_error` if allocation fails.
#[unsafe(no_mangle)]
pub extern "C" fn point_to_new_string(
    point: geomval_point_t,
    out_error: *mut *mut geomval_error_t,
) -> *mut c_char {
    clear_error(out_error);
    match render_point_cstring(&point) {
        Ok(value) => {
            log::trace!("rendered {point}");
            value.into_raw()
        }
        Err(err) => {
            log::warn!("failed to render {point:?}: {err}");
            write_geometry_error(out_error, &err);
            ptr::null_mut()
        }
    }
}

/// Formats a point into a caller-owned buffer of `len` bytes.
///
/// On success the text is followed by a NUL terminator and the number of text bytes
/// (terminator excluded) is returned. If `len` is too small, zero or negative,
/// `GEOMVAL_BUFFER_TOO_SMALL` is returned and the buffer is left untouched. A null buffer
/// yields `GEOMVAL_NULL_BUFFER`.
#[unsafe(no_mangle)]
pub extern "C" fn point_to_buffer(
    point: geomval_point_t,
    buffer: *mut c_char,
    len: c_int,
) -> c_int {
    let written = render_point(&point).and_then(|text| write_nul_terminated(buffer, len, &text));
    match written {
        // Bounded by MAX_POINT_TEXT_LEN.
        Ok(written) => written as c_int,
        Err(err) => {
            log::debug!("point_to_buffer rejected: {err}");
            err.status()
        }
    }
}
