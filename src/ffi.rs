//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API so parsers written in other
//! languages can hand over a JSON document tree and receive HTML.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::render::{AttributeEscaping, JsonFormat, RenderOptions};
use crate::{render_json_with_options, Node};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct MdhtmlResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `mdhtml_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `mdhtml_free_result`.
    pub error: *mut c_char,
}

impl MdhtmlResult {
    fn success(data: String) -> Self {
        match CString::new(data) {
            Ok(data) => Self {
                success: true,
                data: data.into_raw(),
                error: ptr::null_mut(),
            },
            Err(_) => Self::error("Rendered output contains NUL byte".to_string()),
        }
    }

    fn error(message: String) -> Self {
        let message = CString::new(message.replace('\0', "")).unwrap_or_default();
        Self {
            success: false,
            data: ptr::null_mut(),
            error: message.into_raw(),
        }
    }

    fn from_result(result: crate::Result<String>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

unsafe fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, MdhtmlResult> {
    if ptr.is_null() {
        return Err(MdhtmlResult::error(format!("{} cannot be null", what)));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| MdhtmlResult::error(format!("Invalid UTF-8 {}", what.to_lowercase())))
}

/// Render a JSON document tree to HTML with default options.
///
/// # Safety
///
/// The `json` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `mdhtml_free_result`.
#[no_mangle]
pub unsafe extern "C" fn mdhtml_render_json(json: *const c_char) -> MdhtmlResult {
    let json = match read_str(json, "JSON") {
        Ok(s) => s,
        Err(result) => return result,
    };
    MdhtmlResult::from_result(render_json_with_options(json, &RenderOptions::default()))
}

/// Options for rendering via FFI.
#[repr(C)]
pub struct MdhtmlOptions {
    /// Escape `&` and `"` in attribute values.
    pub escape_attributes: bool,
    /// Maximum tree depth (0 = unlimited).
    pub max_depth: u32,
    /// Reject out-of-range heading levels and list starts.
    pub strict: bool,
}

impl Default for MdhtmlOptions {
    fn default() -> Self {
        Self {
            escape_attributes: true,
            max_depth: 0,
            strict: false,
        }
    }
}

impl From<&MdhtmlOptions> for RenderOptions {
    fn from(options: &MdhtmlOptions) -> Self {
        let escaping = if options.escape_attributes {
            AttributeEscaping::Quote
        } else {
            AttributeEscaping::Verbatim
        };
        let mut render = RenderOptions::new()
            .with_attribute_escaping(escaping)
            .with_strict(options.strict);
        if options.max_depth > 0 {
            render = render.with_max_depth(options.max_depth as usize);
        }
        render
    }
}

/// Render a JSON document tree to HTML with options.
///
/// # Safety
///
/// The `json` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `mdhtml_free_result`.
#[no_mangle]
pub unsafe extern "C" fn mdhtml_render_json_with_options(
    json: *const c_char,
    options: MdhtmlOptions,
) -> MdhtmlResult {
    let json = match read_str(json, "JSON") {
        Ok(s) => s,
        Err(result) => return result,
    };
    MdhtmlResult::from_result(render_json_with_options(json, &(&options).into()))
}

/// Normalize a JSON document tree (validate and re-serialize).
///
/// # Safety
///
/// The `json` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `mdhtml_free_result`.
#[no_mangle]
pub unsafe extern "C" fn mdhtml_normalize_json(json: *const c_char, pretty: bool) -> MdhtmlResult {
    let json = match read_str(json, "JSON") {
        Ok(s) => s,
        Err(result) => return result,
    };
    let format = if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    };
    MdhtmlResult::from_result(
        Node::from_json(json).and_then(|node| crate::render::to_json(&node, format)),
    )
}

/// Free a result returned by any mdhtml function.
///
/// # Safety
///
/// The `result` must have been returned by an mdhtml function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn mdhtml_free_result(result: MdhtmlResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Get the version of the mdhtml library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn mdhtml_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
