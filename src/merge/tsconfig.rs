//! `tsconfig.json` merge policy
//!
//! - `compilerOptions`: required keys are written over same-named keys,
//!   all other options are kept
//! - `include` / `exclude`: ordered union without duplicates
//! - `references` / `files`: removed, they point at Vite's split configs

use serde_json::{json, Map, Value};

/// Keys removed from the root object unconditionally
pub const REMOVED_KEYS: &[&str] = &["references", "files"];

pub const REQUIRED_INCLUDE: &[&str] = &[
    "next-env.d.ts",
    "**/*.ts",
    "**/*.tsx",
    ".next/types/**/*.ts",
    "dist/types/**/*.ts",
];

pub const REQUIRED_EXCLUDE: &[&str] = &["node_modules"];

/// Compiler options Next.js needs
pub fn required_compiler_options() -> Map<String, Value> {
    let options = json!({
        "lib": ["dom", "dom.iterable", "esnext"],
        "allowJs": true,
        "skipLibCheck": true,
        "esModuleInterop": true,
        "module": "esnext",
        "moduleResolution": "bundler",
        "resolveJsonModule": true,
        "isolatedModules": true,
        "jsx": "preserve",
        "incremental": true,
        "noEmit": true,
        "plugins": [{ "name": "next" }]
    });
    match options {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// What a merge changed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TsconfigChanges {
    /// Compiler options whose previous, different value was overwritten
    pub overridden: Vec<String>,
    pub include_added: usize,
    pub exclude_added: usize,
    pub removed: Vec<String>,
}

impl TsconfigChanges {
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("{} include entries added", self.include_added),
            format!("{} exclude entries added", self.exclude_added),
        ];
        if !self.removed.is_empty() {
            parts.push(format!("removed {}", self.removed.join(", ")));
        }
        if !self.overridden.is_empty() {
            parts.push(format!(
                "overrode compilerOptions {}",
                self.overridden.join(", ")
            ));
        }
        parts.join("; ")
    }
}

/// Merge the Next.js requirements into a parsed tsconfig in place
pub fn merge(config: &mut Value) -> Result<TsconfigChanges, String> {
    let root = config
        .as_object_mut()
        .ok_or_else(|| "tsconfig root is not a JSON object".to_string())?;

    let mut changes = TsconfigChanges::default();

    let options = root
        .entry("compilerOptions")
        .or_insert_with(|| Value::Object(Map::new()));
    if options.is_null() {
        *options = Value::Object(Map::new());
    }
    let options = options
        .as_object_mut()
        .ok_or_else(|| "\"compilerOptions\" is not a JSON object".to_string())?;

    for (key, value) in required_compiler_options() {
        if let Some(old) = options.get(&key) {
            if *old != value {
                changes.overridden.push(key.clone());
            }
        }
        options.insert(key, value);
    }

    changes.include_added = union_into(root, "include", REQUIRED_INCLUDE)?;
    changes.exclude_added = union_into(root, "exclude", REQUIRED_EXCLUDE)?;

    for key in REMOVED_KEYS {
        if root.shift_remove(*key).is_some() {
            changes.removed.push(key.to_string());
        }
    }

    Ok(changes)
}

/// Union `required` into the array at `root[key]`, keeping the first
/// occurrence of every entry. Returns how many required entries were new.
/// The key keeps its position in `root`.
fn union_into(root: &mut Map<String, Value>, key: &str, required: &[&str]) -> Result<usize, String> {
    let slot = root.entry(key).or_insert(Value::Null);
    let existing = match slot.take() {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::String(single) => vec![Value::String(single)],
        other => {
            *slot = other;
            return Err(format!("\"{}\" is not an array", key));
        }
    };

    let mut merged: Vec<Value> = Vec::with_capacity(existing.len() + required.len());
    for item in existing {
        if !merged.contains(&item) {
            merged.push(item);
        }
    }

    let mut added = 0;
    for entry in required {
        let item = Value::String(entry.to_string());
        if !merged.contains(&item) {
            merged.push(item);
            added += 1;
        }
    }

    *slot = Value::Array(merged);
    Ok(added)
}
