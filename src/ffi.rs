//! FFI interface for C/C++ interop
//!
//! Both entry points take raw HTML bytes and hand back an owned string:
//! the report as JSON or as formatted text.

use std::ffi::{c_char, CString};
use std::ptr;

use crate::error::GridError;
use crate::extractors::{extract_grid_default, Report};
use crate::format::{format_report, report_to_json};

/// Result struct returned to C/C++
/// Both pointers are owned by Rust and must be freed via live_grid_free_result
#[repr(C)]
pub struct GridResultFFI {
    /// Output string (null-terminated), or null on failure
    pub data_ptr: *mut c_char,
    /// Error message if extraction failed (null-terminated), or null on success
    pub error_ptr: *mut c_char,
}

/// Extract the grid report as a JSON array of rows.
///
/// # Safety
/// - `html_ptr` must point to valid memory of at least `html_len` bytes
/// - Caller must free the result via `live_grid_free_result`
#[no_mangle]
pub unsafe extern "C" fn live_grid_extract_json(
    html_ptr: *const c_char,
    html_len: usize,
) -> GridResultFFI {
    run(html_ptr, html_len, report_to_json)
}

/// Extract the grid report as formatted text.
///
/// # Safety
/// Same as live_grid_extract_json
#[no_mangle]
pub unsafe extern "C" fn live_grid_extract_text(
    html_ptr: *const c_char,
    html_len: usize,
) -> GridResultFFI {
    run(html_ptr, html_len, |report| Ok(format_report(report)))
}

/// Free a GridResultFFI returned by one of the extract functions
///
/// # Safety
/// - `result` must have been returned by this library
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn live_grid_free_result(result: GridResultFFI) {
    if !result.data_ptr.is_null() {
        drop(CString::from_raw(result.data_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

unsafe fn run(
    html_ptr: *const c_char,
    html_len: usize,
    render: impl FnOnce(&Report) -> Result<String, GridError>,
) -> GridResultFFI {
    if html_ptr.is_null() {
        return make_error_result("HTML pointer is null");
    }

    let slice = std::slice::from_raw_parts(html_ptr as *const u8, html_len);
    let html = match std::str::from_utf8(slice) {
        Ok(s) => s,
        Err(_) => return make_error_result("Invalid UTF-8 in HTML content"),
    };

    let rendered = extract_grid_default(html).and_then(|report| render(&report));

    match rendered {
        Ok(out) => match CString::new(out) {
            Ok(cstr) => GridResultFFI {
                data_ptr: cstr.into_raw(),
                error_ptr: ptr::null_mut(),
            },
            Err(_) => make_error_result("Result contains null bytes"),
        },
        Err(e) => make_error_result(&e.to_string()),
    }
}

// Helper to create error result
fn make_error_result(msg: &str) -> GridResultFFI {
    let error_ptr = CString::new(msg.replace('\0', " "))
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut());
    GridResultFFI {
        data_ptr: ptr::null_mut(),
        error_ptr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    const HTML: &str = r#"
        <div class="live-grid-container">
            <h2>Row 1</h2>
            <div>
                <div class="grid-card">
                    <img class="position" src="/img/liveGridPositions2013/1.png">
                    <div class="driver-bust"><img src="/d.png"></div>
                    <h5>ALEX<br>PALOU</h5>
                    <h6>Chip Ganassi Racing</h6>
                </div>
            </div>
        </div>
    "#;

    unsafe fn take(result: GridResultFFI) -> (Option<String>, Option<String>) {
        let data = (!result.data_ptr.is_null())
            .then(|| CStr::from_ptr(result.data_ptr).to_string_lossy().into_owned());
        let error = (!result.error_ptr.is_null())
            .then(|| CStr::from_ptr(result.error_ptr).to_string_lossy().into_owned());
        live_grid_free_result(result);
        (data, error)
    }

    #[test]
    fn test_text_roundtrip() {
        let (data, error) =
            unsafe { take(live_grid_extract_text(HTML.as_ptr() as *const c_char, HTML.len())) };

        assert!(error.is_none());
        assert_eq!(
            data.unwrap(),
            "Row 1:\n1. Alex Palou (Unknown, Chip Ganassi Racing, Unknown) - /d.png\n\n"
        );
    }

    #[test]
    fn test_json_output() {
        let (data, _) =
            unsafe { take(live_grid_extract_json(HTML.as_ptr() as *const c_char, HTML.len())) };

        let json: serde_json::Value = serde_json::from_str(&data.unwrap()).unwrap();
        assert_eq!(json[0]["records"][0]["driverName"], "Alex Palou");
    }

    #[test]
    fn test_null_and_invalid_input() {
        let (data, error) = unsafe { take(live_grid_extract_text(ptr::null(), 0)) };
        assert!(data.is_none());
        assert_eq!(error.unwrap(), "HTML pointer is null");

        let bad = [0xffu8, 0xfe];
        let (_, error) =
            unsafe { take(live_grid_extract_json(bad.as_ptr() as *const c_char, bad.len())) };
        assert_eq!(error.unwrap(), "Invalid UTF-8 in HTML content");
    }

    #[test]
    fn test_missing_container_reported() {
        let html = "<p>maintenance</p>";
        let (_, error) =
            unsafe { take(live_grid_extract_text(html.as_ptr() as *const c_char, html.len())) };
        assert!(error.unwrap().contains(".live-grid-container"));
    }
}
