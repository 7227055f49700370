//! `package.json` script merge

use serde_json::{Map, Value};

/// Scripts every migrated project gets, overwriting same-named entries
pub const NEXT_SCRIPTS: &[(&str, &str)] = &[
    ("dev", "next dev"),
    ("build", "next build"),
    ("start", "next start"),
    ("lint", "next lint"),
];

/// Outcome of merging scripts into a manifest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptChanges {
    pub added: Vec<String>,
    pub replaced: Vec<(String, String)>,
}

impl ScriptChanges {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.replaced.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "scripts already up to date".to_string();
        }
        let mut parts = Vec::new();
        if !self.added.is_empty() {
            parts.push(format!("added {}", self.added.join(", ")));
        }
        if !self.replaced.is_empty() {
            let names: Vec<String> = self
                .replaced
                .iter()
                .map(|(name, old)| format!("{} (was `{}`)", name, old))
                .collect();
            parts.push(format!("replaced {}", names.join(", ")));
        }
        parts.join("; ")
    }
}

/// Shallow-merge [`NEXT_SCRIPTS`] into `manifest["scripts"]`.
///
/// Only the listed script names are touched; every other key of the
/// manifest and of `scripts` keeps its value and position.
pub fn merge_scripts(manifest: &mut Value) -> Result<ScriptChanges, String> {
    let root = manifest
        .as_object_mut()
        .ok_or_else(|| "manifest root is not a JSON object".to_string())?;

    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if scripts.is_null() {
        *scripts = Value::Object(Map::new());
    }
    let scripts = scripts
        .as_object_mut()
        .ok_or_else(|| "\"scripts\" is not a JSON object".to_string())?;

    let mut changes = ScriptChanges::default();
    for (name, command) in NEXT_SCRIPTS {
        match scripts.get(*name) {
            Some(Value::String(old)) if old == command => {}
            Some(old) => {
                let old = old.as_str().map(str::to_string).unwrap_or_else(|| old.to_string());
                changes.replaced.push((name.to_string(), old));
                scripts.insert(name.to_string(), Value::String(command.to_string()));
            }
            None => {
                changes.added.push(name.to_string());
                scripts.insert(name.to_string(), Value::String(command.to_string()));
            }
        }
    }

    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vite_scripts_replaced() {
        let mut manifest = json!({
            "name": "shop",
            "scripts": {
                "dev": "vite",
                "build": "tsc -b && vite build",
                "preview": "vite preview",
                "lint": "eslint ."
            },
            "dependencies": {"react": "^18.3.1"}
        });

        let changes = merge_scripts(&mut manifest).unwrap();

        assert_eq!(manifest["scripts"]["dev"], "next dev");
        assert_eq!(manifest["scripts"]["build"], "next build");
        assert_eq!(manifest["scripts"]["start"], "next start");
        assert_eq!(manifest["scripts"]["lint"], "next lint");
        assert_eq!(manifest["scripts"]["preview"], "vite preview");
        assert_eq!(manifest["dependencies"]["react"], "^18.3.1");
        assert_eq!(changes.added, vec!["start"]);
        assert_eq!(changes.replaced.len(), 3);
        assert!(changes.summary().contains("dev (was `vite`)"));
    }

    #[test]
    fn test_key_order_preserved() {
        let mut manifest = json!({
            "name": "shop",
            "private": true,
            "scripts": {"test": "vitest", "dev": "vite"},
            "devDependencies": {}
        });

        merge_scripts(&mut manifest).unwrap();

        let keys: Vec<&String> = manifest.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["name", "private", "scripts", "devDependencies"]);
        let script_keys: Vec<&String> = manifest["scripts"].as_object().unwrap().keys().collect();
        assert_eq!(script_keys, vec!["test", "dev", "build", "start", "lint"]);
    }

    #[test]
    fn test_missing_scripts_created() {
        let mut manifest = json!({"name": "shop"});
        let changes = merge_scripts(&mut manifest).unwrap();
        assert_eq!(changes.added.len(), NEXT_SCRIPTS.len());
        assert_eq!(manifest["scripts"]["dev"], "next dev");
    }

    #[test]
    fn test_null_scripts_replaced_by_object() {
        let mut manifest = json!({"scripts": null});
        merge_scripts(&mut manifest).unwrap();
        assert_eq!(manifest["scripts"]["start"], "next start");
    }

    #[test]
    fn test_second_merge_is_noop() {
        let mut manifest = json!({"scripts": {"dev": "vite"}});
        merge_scripts(&mut manifest).unwrap();
        let snapshot = manifest.clone();

        let changes = merge_scripts(&mut manifest).unwrap();
        assert!(changes.is_empty());
        assert_eq!(manifest, snapshot);
        assert_eq!(changes.summary(), "scripts already up to date");
    }

    #[test]
    fn test_non_object_root_rejected() {
        let mut manifest = json!(["not", "a", "manifest"]);
        assert!(merge_scripts(&mut manifest).is_err());
    }

    #[test]
    fn test_non_object_scripts_rejected() {
        let mut manifest = json!({"scripts": "vite"});
        let err = merge_scripts(&mut manifest).unwrap_err();
        assert!(err.contains("scripts"));
        assert_eq!(manifest["scripts"], "vite");
    }
}
