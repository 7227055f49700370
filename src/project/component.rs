//! Root component and global stylesheet detection.
//!
//! Both are ordered candidate tables: the first candidate that exists as a
//! file wins. Nothing is parsed, so a match is only a conventional location,
//! not a verified entry point.

use crate::fs::FileSystem;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Ordered candidate paths with an optional fallback
#[derive(Debug, Clone, Copy)]
pub struct CandidateTable {
    pub candidates: &'static [&'static str],
    pub fallback: Option<&'static str>,
}

/// Root UI component locations used by the common Vite React templates
pub const COMPONENT_CANDIDATES: CandidateTable = CandidateTable {
    candidates: &[
        "src/App.tsx",
        "src/App.jsx",
        "src/App.js",
        "src/app.tsx",
        "src/app.jsx",
        "src/components/App.tsx",
        "src/components/App.jsx",
        "src/main/App.tsx",
    ],
    fallback: Some("src/App.tsx"),
};

pub const STYLESHEET_CANDIDATES: CandidateTable = CandidateTable {
    candidates: &[
        "src/index.css",
        "src/globals.css",
        "src/styles/globals.css",
        "src/styles/index.css",
        "src/App.css",
    ],
    fallback: None,
};

/// First candidate that is a file under `root`, else the fallback.
/// Returned paths are relative to `root`.
pub fn resolve_candidate(
    fs: &dyn FileSystem,
    root: &Path,
    table: &CandidateTable,
) -> Option<PathBuf> {
    for candidate in table.candidates {
        if fs.is_file(&root.join(candidate)) {
            debug!(candidate, "Candidate found");
            return Some(PathBuf::from(candidate));
        }
    }

    if let Some(fallback) = table.fallback {
        debug!(fallback, "No candidate found, using fallback");
    }
    table.fallback.map(PathBuf::from)
}

/// Resolve the root component. Total: always yields a path.
pub fn resolve_component(fs: &dyn FileSystem, root: &Path) -> PathBuf {
    resolve_candidate(fs, root, &COMPONENT_CANDIDATES)
        .unwrap_or_else(|| PathBuf::from("src/App.tsx"))
}

/// Module specifier importing `target` from a file in `from_dir`, both
/// relative to the project root. With `strip_extension` the file
/// extension is dropped, as bundlers resolve `.tsx`/`.jsx` themselves.
pub fn relative_import(from_dir: &Path, target: &Path, strip_extension: bool) -> String {
    let from: Vec<Component> = from_dir.components().collect();
    let to: Vec<Component> = target.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..from.len() {
        parts.push("..".to_string());
    }
    for (i, component) in to.iter().enumerate().skip(common) {
        let text = component.as_os_str().to_string_lossy().to_string();
        if strip_extension && i == to.len() - 1 {
            let stem = Path::new(&text)
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or(text);
            parts.push(stem);
        } else {
            parts.push(text);
        }
    }

    let joined = parts.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{}", joined)
    }
}
