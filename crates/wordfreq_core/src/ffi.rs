//! C ABI for hosts that load the library dynamically.
//!
//! Every buffer returned by [`process_text_raw`] (exported as `process_text`)
//! is owned by the caller and must be passed to [`release_report`] exactly once.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

/// Analyze a NUL-terminated buffer and return a newly allocated,
/// NUL-terminated report. A null `raw` yields the input error message.
///
/// # Safety
///
/// `raw` must be null or point to a NUL-terminated buffer that stays valid and
/// unmodified for the duration of the call. Its bytes need not be UTF-8.
#[export_name = "process_text"]
pub unsafe extern "C" fn process_text_raw(raw: *const c_char) -> *mut c_char {
    let input = if raw.is_null() {
        None
    } else {
        // SAFETY: the caller guarantees a live NUL-terminated buffer.
        Some(unsafe { CStr::from_ptr(raw) }.to_bytes())
    };
    into_raw_report(crate::process_text(input))
}

/// Free a buffer returned by [`process_text_raw`]. Null is ignored.
///
/// # Safety
///
/// `report` must be null or a pointer obtained from [`process_text_raw`] that
/// has not been released yet.
#[export_name = "release_report"]
pub unsafe extern "C" fn release_report(report: *mut c_char) {
    if report.is_null() {
        return;
    }
    // SAFETY: the pointer came from `CString::into_raw` in `into_raw_report`.
    drop(unsafe { CString::from_raw(report) });
}

fn into_raw_report(mut report: Vec<u8>) -> *mut c_char {
    report.retain(|&b| b != 0);
    match CString::new(report) {
        Ok(report) => report.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}
