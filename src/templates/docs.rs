//! Documentation written next to the migrated project

use crate::process::PackageManager;
use crate::project::layout;
use crate::project::Metadata;

pub struct GuideInputs<'a> {
    pub metadata: &'a Metadata,
    pub component: &'a str,
    pub stylesheet: Option<&'a str>,
    pub package_manager: PackageManager,
    pub env_names: &'a [String],
}

/// `NEXTJS_MIGRATION.md`
pub fn migration_guide(inputs: &GuideInputs<'_>) -> String {
    let pm = inputs.package_manager.executable();
    let stylesheet = inputs
        .stylesheet
        .map(|s| format!("`{}` (imported by the root layout)", s))
        .unwrap_or_else(|| "none detected".to_string());

    format!(
        r#"# Migration to Next.js

**{title}** has been moved from Vite to the Next.js App Router as a statically
exported single-page application.

## What changed

| Area | Result |
|---|---|
| Root component | `{component}` (loaded client-side from `{client}`) |
| Global stylesheet | {stylesheet} |
| Root layout | `{layout}` (title and description taken from `index.html`) |
| Routing | `{page}` serves every path |
| Next.js config | `{next_config}` with `output: 'export'` and `distDir: './dist'` |
| Scripts | `dev`, `build`, `start`, `lint` now run `next` |
| TypeScript | `tsconfig.json` merged with the options Next.js requires |
| Environment | `VITE_*` variables renamed to `NEXT_PUBLIC_*`, see `{env_guide}` |

## Next steps

1. Start the dev server with `{pm} run dev` and open http://localhost:3000.
2. Replace `import.meta.env.VITE_*` reads in your code with
   `process.env.NEXT_PUBLIC_*` or the helpers in `{env_helper}`.
3. Move static assets referenced from `index.html` into `public/` if they
   are not there already.
4. Run `{pm} run build`; the exported site is written to `dist/`.
5. When everything works, remove the Vite leftovers with
   `sh {cleanup}` (or `nextport cleanup`).

Nothing was deleted during the migration. `index.html`, `vite.config.*`
and `src/main.*` stay in place until you run the cleanup.
"#,
        title = inputs.metadata.title,
        component = inputs.component,
        client = layout::CLIENT_WRAPPER,
        stylesheet = stylesheet,
        layout = layout::ROOT_LAYOUT,
        page = layout::ENTRY_PAGE,
        next_config = layout::NEXT_CONFIG,
        env_guide = layout::ENV_GUIDE,
        env_helper = layout::ENV_HELPER,
        cleanup = layout::CLEANUP_SCRIPT,
        pm = pm,
    )
}

/// `ENVIRONMENT_VARIABLES.md`
pub fn env_guide(inputs: &GuideInputs<'_>) -> String {
    let variables = if inputs.env_names.is_empty() {
        "No public variables were found in the project's `.env` files.\n".to_string()
    } else {
        let mut rows = String::from("| Before | After |\n|---|---|\n");
        for name in inputs.env_names {
            rows.push_str(&format!(
                "| `import.meta.env.VITE_{name}` | `process.env.NEXT_PUBLIC_{name}` |\n",
                name = name
            ));
        }
        rows
    };

    format!(
        r#"# Environment variables

Vite exposes variables prefixed with `VITE_` through `import.meta.env`.
Next.js exposes variables prefixed with `NEXT_PUBLIC_` through `process.env`
and inlines them into the client bundle at build time.

The migration renamed the prefix in these files when present:
{files}

## Variables

{variables}
## Reading variables

Next.js only inlines static property reads, so always write the full name:

```ts
const apiUrl = process.env.NEXT_PUBLIC_API_URL
```

or use the generated helper:

```ts
import {{ getEnv }} from '@/utils/env'

const apiUrl = getEnv('API_URL')
```

Variables without the `NEXT_PUBLIC_` prefix are only available on the
server and are `undefined` in the exported single-page app.
"#,
        files = layout::ENV_FILES
            .iter()
            .map(|f| format!("`{}`", f))
            .collect::<Vec<_>>()
            .join(", "),
        variables = variables,
    )
}

/// `cleanup-vite.sh`
pub fn cleanup_script(package_manager: PackageManager) -> String {
    let packages: Vec<String> = layout::LEGACY_PACKAGES.iter().map(|p| p.to_string()).collect();
    let uninstall = package_manager.remove_command(&packages);

    format!(
        r#"#!/bin/sh
# Removes what Vite left behind after the migration to Next.js.
# Run it once the Next.js dev server and build work: sh {script}
set -e

rm -f {files}

{uninstall} || echo "Could not uninstall Vite packages, remove them manually"

echo "Vite cleanup complete"
"#,
        script = layout::CLEANUP_SCRIPT,
        files = layout::LEGACY_FILES.join(" "),
        uninstall = uninstall,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs<'a>(metadata: &'a Metadata, env_names: &'a [String]) -> GuideInputs<'a> {
        GuideInputs {
            metadata,
            component: "src/App.tsx",
            stylesheet: Some("src/index.css"),
            package_manager: PackageManager::Pnpm,
            env_names,
        }
    }

    #[test]
    fn test_migration_guide() {
        let metadata = Metadata {
            title: "Shop".to_string(),
            ..Metadata::default()
        };
        let guide = migration_guide(&inputs(&metadata, &[]));

        assert!(guide.starts_with("# Migration to Next.js\n"));
        assert!(guide.contains("**Shop**"));
        assert!(guide.contains("| Root component | `src/App.tsx`"));
        assert!(guide.contains("`src/index.css` (imported by the root layout)"));
        assert!(guide.contains("`pnpm run dev`"));
    }

    #[test]
    fn test_env_guide_lists_variables() {
        let metadata = Metadata::default();
        let names = vec!["API_URL".to_string()];
        let guide = env_guide(&inputs(&metadata, &names));

        assert!(guide.contains("| `import.meta.env.VITE_API_URL` | `process.env.NEXT_PUBLIC_API_URL` |"));
        assert!(guide.contains("import { getEnv } from '@/utils/env'"));
    }

    #[test]
    fn test_env_guide_without_variables() {
        let metadata = Metadata::default();
        let guide = env_guide(&inputs(&metadata, &[]));
        assert!(guide.contains("No public variables were found"));
    }

    #[test]
    fn test_cleanup_script() {
        let script = cleanup_script(PackageManager::Npm);

        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains("rm -f index.html src/main.tsx"));
        assert!(script.contains("npm uninstall vite @vitejs/plugin-react @vitejs/plugin-react-swc ||"));
    }

    #[test]
    fn test_cleanup_script_uses_package_manager() {
        let script = cleanup_script(PackageManager::Yarn);
        assert!(script.contains("yarn remove vite"));
    }
}
