//! Title and description from the legacy `index.html`.
//!
//! This is a first-match pattern heuristic, not an HTML parser: only the
//! first `<title>` element and the first description `<meta>` tag are
//! considered, and anything unusual falls back to the defaults.

use crate::fs::FileSystem;
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

pub const DEFAULT_TITLE: &str = "Next.js App";
pub const DEFAULT_DESCRIPTION: &str = "Migrated from Vite to Next.js";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

fn title_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid regex"))
}

fn description_regexes() -> &'static [Regex; 2] {
    static RE: OnceLock<[Regex; 2]> = OnceLock::new();
    RE.get_or_init(|| {
        [
            Regex::new(
                r#"(?is)<meta\s[^>]*?name\s*=\s*["']description["'][^>]*?content\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
            )
            .expect("valid regex"),
            Regex::new(
                r#"(?is)<meta\s[^>]*?content\s*=\s*(?:"([^"]*)"|'([^']*)')[^>]*?name\s*=\s*["']description["']"#,
            )
            .expect("valid regex"),
        ]
    })
}

impl Metadata {
    /// Extract from document text. Each field is looked up independently.
    pub fn extract(html: &str) -> Self {
        let defaults = Self::default();

        let title = first_capture(title_regex(), html).unwrap_or(defaults.title);

        let description = description_regexes()
            .iter()
            .filter_map(|re| re.captures(html))
            .min_by_key(|caps| caps.get(0).map(|m| m.start()).unwrap_or(usize::MAX))
            .and_then(|caps| non_empty(caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())))
            .unwrap_or(defaults.description);

        Self { title, description }
    }

    /// Extract from the entry document at `path`; missing or unreadable
    /// documents yield the defaults
    pub fn from_document(fs: &dyn FileSystem, path: &Path) -> Self {
        match fs.read_to_string(path) {
            Ok(html) => Self::extract(&html),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Entry document unavailable, using default metadata");
                Self::default()
            }
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    non_empty(re.captures(text)?.get(1).map(|m| m.as_str()))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
