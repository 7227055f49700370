//! Structured configuration merges that never drop user content

pub mod jsonc;
pub mod manifest;
pub mod tsconfig;

pub use manifest::{merge_scripts, ScriptChanges, NEXT_SCRIPTS};
pub use tsconfig::TsconfigChanges;

use serde::Serialize;

/// Two-space pretty JSON with a trailing newline, as npm writes it
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
