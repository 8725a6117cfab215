//! FFI bindings for the fitness tracker
//!
//! This module provides C-compatible functions for calling the tracker from
//! other languages. All functions use C strings (null-terminated) and return
//! allocated memory that must be freed by the caller using `tracker_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::error::ComputeError;
use crate::pipeline::WorkoutProcessor;
use crate::schema::WorkoutPackage;
use crate::types::SensorReading;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Build a package from a workout code and a JSON array of sensor values
unsafe fn read_package(
    workout_type: *const c_char,
    data_json: *const c_char,
) -> Result<WorkoutPackage, String> {
    let workout_type =
        cstr_to_string(workout_type).ok_or_else(|| "Invalid workout type pointer".to_string())?;
    let data_json =
        cstr_to_string(data_json).ok_or_else(|| "Invalid data string pointer".to_string())?;
    let data: SensorReading = serde_json::from_str(&data_json)
        .map_err(|e| ComputeError::from(e).to_string())?;
    Ok(WorkoutPackage::new(workout_type, data))
}

// ============================================================================
// Workout API
// ============================================================================

/// Summarize one workout and return its report line.
///
/// `data_json` is a JSON array of the workout's positional sensor values,
/// e.g. `[15000, 1, 75]` for `RUN`. An unknown workout code yields the fixed
/// error line, not NULL.
///
/// # Safety
/// - `workout_type` and `data_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `tracker_free_string`.
/// - Returns NULL on error; call `tracker_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn tracker_summarize(
    workout_type: *const c_char,
    data_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let package = match read_package(workout_type, data_json) {
        Ok(package) => package,
        Err(msg) => {
            set_last_error(&msg);
            return ptr::null_mut();
        }
    };

    match WorkoutProcessor::new().process(&package) {
        Ok(line) => string_to_cstr(&line),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Summarize one workout and return its summary as JSON.
///
/// Returns the JSON literal `null` for an unknown workout code.
///
/// # Safety
/// - `workout_type` and `data_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `tracker_free_string`.
/// - Returns NULL on error; call `tracker_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn tracker_summarize_json(
    workout_type: *const c_char,
    data_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let package = match read_package(workout_type, data_json) {
        Ok(package) => package,
        Err(msg) => {
            set_last_error(&msg);
            return ptr::null_mut();
        }
    };

    let json = WorkoutProcessor::new()
        .summarize(&package)
        .and_then(|summary| serde_json::to_string(&summary).map_err(ComputeError::from));

    match json {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by tracker functions.
///
/// # Safety
/// - `ptr` must be a pointer returned by a tracker function, or NULL.
/// - Must not be called twice on the same pointer.
#[no_mangle]
pub unsafe extern "C" fn tracker_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next tracker call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn tracker_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

/// Get the library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn tracker_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
