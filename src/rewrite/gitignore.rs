use crate::fs::FileSystem;
use anyhow::Result;
use std::path::Path;

pub const NEXT_IGNORE_ENTRIES: &[&str] = &[".next", "next-env.d.ts", "dist"];

const SECTION_HEADER: &str = "# Next.js";

/// Append the entries not already ignored. Returns the new text and the
/// entries that were added; an empty list means the text is unchanged.
pub fn append_missing(existing: &str, entries: &[&str]) -> (String, Vec<String>) {
    let present: Vec<&str> = existing
        .lines()
        .map(|l| l.trim().trim_start_matches('/').trim_end_matches('/'))
        .collect();

    let missing: Vec<String> = entries
        .iter()
        .filter(|e| !present.contains(e))
        .map(|e| e.to_string())
        .collect();

    if missing.is_empty() {
        return (existing.to_string(), missing);
    }

    let mut out = existing.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(SECTION_HEADER);
    out.push('\n');
    for entry in &missing {
        out.push_str(entry);
        out.push('\n');
    }

    (out, missing)
}

/// Make sure the ignore file at `path` lists `entries`, creating it when
/// absent
pub fn ensure_entries(fs: &dyn FileSystem, path: &Path, entries: &[&str]) -> Result<Vec<String>> {
    let existing = fs.read_optional(path)?.unwrap_or_default();
    let (updated, added) = append_missing(&existing, entries);
    if !added.is_empty() {
        fs.write(path, &updated)?;
    }
    Ok(added)
}
