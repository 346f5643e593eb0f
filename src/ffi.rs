//! Shared utilities for geomval's C FFI bindings.

use std::os::raw::{c_char, c_int};
use std::ptr;

use crate::error::GeometryError;

/// Copies `text` plus a NUL terminator into a caller-owned buffer of `len` bytes.
///
/// Nothing is written unless the whole text and its terminator fit. A negative `len` is
/// treated as an empty buffer.
pub(crate) fn write_nul_terminated(
    buffer: *mut c_char,
    len: c_int,
    text: &str,
) -> Result<usize, GeometryError> {
    if buffer.is_null() {
        return Err(GeometryError::NullBuffer);
    }
    let available = usize::try_from(len).unwrap_or(0);
    let needed = text.len() + 1;
    if available < needed {
        return Err(GeometryError::BufferTooSmall { needed, available });
    }
    // Safety: caller guarantees `buffer` is writable for `len` bytes and `needed <= len`.
    unsafe {
        ptr::copy_nonoverlapping(text.as_ptr().cast::<c_char>(), buffer, text.len());
        *buffer.add(text.len()) = 0;
    }
    Ok(text.len())
}
