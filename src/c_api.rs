// Stateless C ABI: every call analyzes one verse and hands back JSON.
// Panics are caught so they never unwind into the host.
use crate::core::analyzer::ProsodyAnalyzer;
use crate::core::segmenter::is_verse_whitespace;
use crate::export::to_csv_string;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

/// Reads a borrowed C string, `None` for null pointers, invalid UTF-8 or blank text.
unsafe fn verse_from_ptr<'a>(verse: *const c_char) -> Option<&'a str> {
    if verse.is_null() {
        return None;
    }
    let text = CStr::from_ptr(verse).to_str().ok()?;
    if text.chars().all(is_verse_whitespace) {
        None
    } else {
        Some(text)
    }
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).map_or(ptr::null_mut(), CString::into_raw)
}

/// Returns the full analysis of `verse` as a JSON object, or NULL.
/// The caller releases the result with `chandas_free_string`.
///
/// # Safety
/// `verse` must be NULL or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn chandas_analyze_json(verse: *const c_char) -> *mut c_char {
    let Some(text) = verse_from_ptr(verse) else {
        return ptr::null_mut();
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let analysis = ProsodyAnalyzer::new().analyze(text);
        serde_json::to_string(&analysis).ok()
    }));
    match result {
        Ok(Some(json)) => into_c_string(json),
        Ok(None) => ptr::null_mut(),
        Err(_) => {
            tracing::error!("panic in chandas_analyze_json");
            ptr::null_mut()
        }
    }
}

/// Returns the `Index,Syllable,L/G` CSV table for `verse`, or NULL.
///
/// # Safety
/// `verse` must be NULL or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn chandas_csv(verse: *const c_char) -> *mut c_char {
    let Some(text) = verse_from_ptr(verse) else {
        return ptr::null_mut();
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let analysis = ProsodyAnalyzer::new().analyze(text);
        to_csv_string(&analysis.segmentation)
    }));
    match result {
        Ok(csv) => into_c_string(csv),
        Err(_) => {
            tracing::error!("panic in chandas_csv");
            ptr::null_mut()
        }
    }
}

/// Releases a string returned by this library.
///
/// # Safety
/// `s` must be NULL or a pointer previously returned by this library.
#[no_mangle]
pub unsafe extern "C" fn chandas_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
