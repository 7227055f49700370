//! Fixed locations read and written by the migration, relative to the
//! project root

pub const ENTRY_DOCUMENT: &str = "index.html";
pub const MANIFEST: &str = "package.json";
pub const TYPE_CONFIG: &str = "tsconfig.json";
pub const IGNORE_FILE: &str = ".gitignore";

pub const TAILWIND_CONFIGS: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.ts",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
];

pub const ENV_FILES: &[&str] = &[
    ".env",
    ".env.local",
    ".env.development",
    ".env.development.local",
    ".env.production",
    ".env.production.local",
    ".env.example",
];

pub const SOURCE_ROOT: &str = "src";
pub const APP_DIR: &str = "src/app";
pub const ROOT_LAYOUT: &str = "src/app/layout.tsx";
pub const CATCH_ALL_DIR: &str = "src/app/[[...slug]]";
pub const ENTRY_PAGE: &str = "src/app/[[...slug]]/page.tsx";
pub const CLIENT_WRAPPER: &str = "src/app/[[...slug]]/client.tsx";
pub const ENV_HELPER: &str = "src/utils/env.ts";

pub const NEXT_CONFIG: &str = "next.config.mjs";
pub const NEXT_ENV_DTS: &str = "next-env.d.ts";

pub const MIGRATION_GUIDE: &str = "NEXTJS_MIGRATION.md";
pub const ENV_GUIDE: &str = "ENVIRONMENT_VARIABLES.md";
pub const CLEANUP_SCRIPT: &str = "cleanup-vite.sh";

/// Vite-only files that the cleanup utility deletes once the migration
/// has been verified
pub const LEGACY_FILES: &[&str] = &[
    "index.html",
    "src/main.tsx",
    "src/main.jsx",
    "src/vite-env.d.ts",
    "vite.config.ts",
    "vite.config.js",
    "vite.config.mjs",
    "tsconfig.node.json",
    "tsconfig.app.json",
];

/// Dev dependencies the cleanup utility uninstalls
pub const LEGACY_PACKAGES: &[&str] = &["vite", "@vitejs/plugin-react", "@vitejs/plugin-react-swc"];

pub const LEGACY_ENV_PREFIX: &str = "VITE_";
pub const NEXT_ENV_PREFIX: &str = "NEXT_PUBLIC_";
