//! Textual rendering of compared values
//!
//! Values render through their `Display` implementation. Absent values on the
//! null-aware rules render as [`NULL_TOKEN`].

use std::ffi::CStr;
use std::fmt::Display;

/// Rendering used for an absent value
pub const NULL_TOKEN: &str = "null";

/// Render a value through `Display`
pub fn render<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

/// Render an optional value, substituting [`NULL_TOKEN`] when absent
pub fn render_optional<T: Display + ?Sized>(value: Option<&T>) -> String {
    value.map_or_else(|| NULL_TOKEN.to_string(), render)
}

/// Render an optional C string, lossily decoding non-UTF-8 bytes
pub fn render_cstr(value: Option<&CStr>) -> String {
    value.map_or_else(
        || NULL_TOKEN.to_string(),
        |s| s.to_string_lossy().into_owned(),
    )
}
