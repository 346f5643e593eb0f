use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::ptr;

use thiserror::Error;

/// Failures reported by geomval.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("failed to allocate {requested} bytes")]
    OutOfMemory { requested: usize },
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
    #[error("buffer was null")]
    NullBuffer,
    #[error("{0}")]
    Logging(&'static str),
}

/// Returned by `point_to_buffer` when the buffer cannot hold the text and its terminator.
pub const GEOMVAL_BUFFER_TOO_SMALL: c_int = -1;
/// Returned by `point_to_buffer` when the buffer pointer is null.
pub const GEOMVAL_NULL_BUFFER: c_int = -2;
/// Returned by `point_to_buffer` when the text could not be allocated.
pub const GEOMVAL_OUT_OF_MEMORY: c_int = -3;
/// Status for logging failures; never returned by `point_to_buffer`.
pub const GEOMVAL_LOGGING_FAILED: c_int = -4;

impl GeometryError {
    pub fn kind(&self) -> geomval_error_kind_t {
        match self {
            GeometryError::OutOfMemory { .. } => geomval_error_kind_t::GEOMVAL_ERROR_OUT_OF_MEMORY,
            GeometryError::BufferTooSmall { .. } => {
                geomval_error_kind_t::GEOMVAL_ERROR_BUFFER_TOO_SMALL
            }
            GeometryError::NullBuffer => geomval_error_kind_t::GEOMVAL_ERROR_NULL_BUFFER,
            GeometryError::Logging(_) => geomval_error_kind_t::GEOMVAL_ERROR_LOGGING,
        }
    }

    /// Negative status code reported to callers that return a length.
    pub fn status(&self) -> c_int {
        match self {
            GeometryError::OutOfMemory { .. } => GEOMVAL_OUT_OF_MEMORY,
            GeometryError::BufferTooSmall { .. } => GEOMVAL_BUFFER_TOO_SMALL,
            GeometryError::NullBuffer => GEOMVAL_NULL_BUFFER,
            GeometryError::Logging(_) => GEOMVAL_LOGGING_FAILED,
        }
    }
}

/// Error categories exposed to C callers.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(C)]
pub enum geomval_error_kind_t {
    GEOMVAL_ERROR_OUT_OF_MEMORY = 1,
    GEOMVAL_ERROR_BUFFER_TOO_SMALL = 2,
    GEOMVAL_ERROR_NULL_BUFFER = 3,
    GEOMVAL_ERROR_LOGGING = 4,
    GEOMVAL_ERROR_OTHER = 100,
}

/// Opaque error type for C callers.
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct geomval_error_t;

struct ErrorHandle {
    kind: geomval_error_kind_t,
    message: CString,
}

pub(crate) fn cstring_from_str_lossy(value: &str) -> CString {
    let sanitized: Vec<u8> = value
        .bytes()
        .map(|byte| if byte == 0 { b' ' } else { byte })
        .collect();
    // No interior NULs remain after sanitizing.
    CString::new(sanitized).unwrap_or_default()
}

pub(crate) fn clear_error(out_error: *mut *mut geomval_error_t) {
    if !out_error.is_null() {
        // Safety: caller provided a valid out_error pointer.
        unsafe {
            *out_error = ptr::null_mut();
        }
    }
}

pub(crate) fn write_error(
    out_error: *mut *mut geomval_error_t,
    kind: geomval_error_kind_t,
    message: impl Into<String>,
) {
    if out_error.is_null() {
        return;
    }
    let message = cstring_from_str_lossy(&message.into());
    let handle = Box::new(ErrorHandle { kind, message });
    // Safety: out_error is non-null and points to writable memory.
    unsafe {
        *out_error = Box::into_raw(handle) as *mut geomval_error_t;
    }
}

pub(crate) fn write_geometry_error(out_error: *mut *mut geomval_error_t, error: &GeometryError) {
    write_error(out_error, error.kind(), error.to_string());
}

/// Returns the message for an error allocated by geomval.
///
/// The returned pointer is valid as long as the error handle is alive.
#[unsafe(no_mangle)]
pub extern "C" fn geomval_error_message(error: *const geomval_error_t) -> *const c_char {
    if error.is_null() {
        return ptr::null();
    }
    // Safety: error must be a valid handle allocated by geomval.
    let handle = unsafe { &*(error as *const ErrorHandle) };
    handle.message.as_ptr()
}

/// Returns the category of an error allocated by geomval.
///
/// A null handle reports `GEOMVAL_ERROR_OTHER`.
#[unsafe(no_mangle)]
pub extern "C" fn geomval_error_kind(error: *const geomval_error_t) -> geomval_error_kind_t {
    if error.is_null() {
        return geomval_error_kind_t::GEOMVAL_ERROR_OTHER;
    }
    // Safety: error must be a valid handle allocated by geomval.
    let handle = unsafe { &*(error as *const ErrorHandle) };
    handle.kind
}

/// Frees an error returned by geomval.
#[unsafe(no_mangle)]
pub extern "C" fn geomval_error_free(error: *mut geomval_error_t) {
    if error.is_null() {
        return;
    }
    // Safety: error must be a valid handle allocated by geomval.
    unsafe {
        drop(Box::from_raw(error as *mut ErrorHandle));
    }
}

/// Frees a string allocated by geomval.
#[unsafe(no_mangle)]
pub extern "C" fn geomval_string_free(value: *mut c_char) {
    if value.is_null() {
        return;
    }
    // Safety: value must be a string returned by `point_to_new_string`.
    unsafe {
        drop(CString::from_raw(value));
    }
}
