use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

use geomval::error::{
    GEOMVAL_BUFFER_TOO_SMALL, GEOMVAL_NULL_BUFFER, geomval_error_t, geomval_string_free,
};
use geomval::format::{point_to_buffer, point_to_new_string};
use geomval::points::create_point;

fn new_string(x: i32, y: i32) -> String {
    let mut error: *mut geomval_error_t = ptr::null_mut();
    let raw = point_to_new_string(create_point(x, y), &mut error);
    assert!(error.is_null());
    assert!(!raw.is_null());
    let text = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_owned();
    geomval_string_free(raw);
    text
}

#[test]
fn new_string_formats_point() {
    assert_eq!(new_string(3, 4), "Point[x=3, y=4]");
    assert_eq!(new_string(-12, 0), "Point[x=-12, y=0]");
}

#[test]
fn new_string_accepts_null_out_error() {
    let raw = point_to_new_string(create_point(1, 1), ptr::null_mut());
    assert!(!raw.is_null());
    geomval_string_free(raw);
}

#[test]
fn buffer_too_small_is_rejected_without_writing() {
    let mut buffer = [b'#' as c_char; 8];
    let written = point_to_buffer(create_point(3, 4), buffer.as_mut_ptr(), 3);
    assert_eq!(written, GEOMVAL_BUFFER_TOO_SMALL);
    assert!(buffer.iter().all(|&byte| byte == b'#' as c_char));
}

#[test]
fn buffer_receives_same_text_as_new_string() {
    let mut buffer = [0 as c_char; 80];
    let written = point_to_buffer(create_point(3, 4), buffer.as_mut_ptr(), 80);
    assert_eq!(written, 15);
    let text = unsafe { CStr::from_ptr(buffer.as_ptr()) }.to_str().unwrap();
    assert_eq!(text, new_string(3, 4));
    assert_eq!(text.len(), written as usize);
}

#[test]
fn zero_and_negative_lengths_are_rejected_without_writing() {
    let mut buffer = [b'#' as c_char; 8];
    for len in [0, -1, -80, i32::MIN] {
        let written = point_to_buffer(create_point(3, 4), buffer.as_mut_ptr(), len);
        assert_eq!(written, GEOMVAL_BUFFER_TOO_SMALL, "len {len}");
    }
    assert!(buffer.iter().all(|&byte| byte == b'#' as c_char));
}

#[test]
fn null_buffer_is_rejected() {
    let written = point_to_buffer(create_point(3, 4), ptr::null_mut(), 80);
    assert_eq!(written, GEOMVAL_NULL_BUFFER);
}

#[test]
fn extreme_coordinates_fit_documented_maximum() {
    let mut buffer = [0 as c_char; 36];
    let written = point_to_buffer(
        create_point(i32::MIN, i32::MIN),
        buffer.as_mut_ptr(),
        buffer.len() as i32,
    );
    assert_eq!(written, 35);
    let text = unsafe { CStr::from_ptr(buffer.as_ptr()) }.to_str().unwrap();
    assert_eq!(text, "Point[x=-2147483648, y=-2147483648]");
}
