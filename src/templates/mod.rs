//! Fixed templates for every generated file.
//!
//! Rendering is pure: the same inputs always produce the same bytes.

pub mod app;
pub mod config_files;
pub mod docs;

/// Quote `value` as a JavaScript string literal
pub fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
