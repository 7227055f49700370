//! `VITE_` → `NEXT_PUBLIC_` renaming in `.env*` files

use crate::fs::FileSystem;
use crate::project::layout::{LEGACY_ENV_PREFIX, NEXT_ENV_PREFIX};
use anyhow::Result;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

/// A file that was rewritten and how many prefixes changed in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvRewrite {
    pub file: String,
    pub replacements: usize,
}

/// Replace every occurrence of `from` with `to`, returning the new text and
/// the number of replacements
pub fn replace_prefix(text: &str, from: &str, to: &str) -> (String, usize) {
    let count = text.matches(from).count();
    if count == 0 {
        return (text.to_string(), 0);
    }
    (text.replace(from, to), count)
}

/// Rewrite each listed env file under `root` that exists. Files that are
/// absent are skipped; files without the legacy prefix are not written.
pub fn rewrite_env_files(
    fs: &dyn FileSystem,
    root: &Path,
    files: &[&str],
) -> Result<Vec<EnvRewrite>> {
    let mut rewritten = Vec::new();

    for name in files {
        let path = root.join(name);
        let Some(content) = fs.read_optional(&path)? else {
            debug!(file = %name, "Env file not present, skipping");
            continue;
        };

        let (updated, replacements) = replace_prefix(&content, LEGACY_ENV_PREFIX, NEXT_ENV_PREFIX);
        if replacements == 0 {
            debug!(file = %name, "No legacy prefixes found");
            continue;
        }

        fs.write(&path, &updated)?;
        info!(file = %name, replacements, "Renamed environment variables");
        rewritten.push(EnvRewrite {
            file: name.to_string(),
            replacements,
        });
    }

    Ok(rewritten)
}

fn public_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^\s*(?:export\s+)?(?:VITE_|NEXT_PUBLIC_)([A-Za-z0-9_]+)\s*=")
            .expect("valid regex")
    })
}

/// Names of public variables defined in `text`, without their prefix
pub fn public_names(text: &str) -> Vec<String> {
    public_name_regex()
        .captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Sorted, de-duplicated public variable names across the listed env files
/// that exist under `root`. Works before and after prefix renaming.
pub fn collect_public_names(fs: &dyn FileSystem, root: &Path, files: &[&str]) -> Result<Vec<String>> {
    let mut names = BTreeSet::new();
    for name in files {
        if let Some(content) = fs.read_optional(&root.join(name))? {
            names.extend(public_names(&content));
        }
    }
    Ok(names.into_iter().collect())
}
