//! Targeted text edits on files the migration does not own

pub mod env_prefix;
pub mod gitignore;
pub mod tailwind;

pub use env_prefix::{collect_public_names, rewrite_env_files, EnvRewrite};
pub use gitignore::{ensure_entries, NEXT_IGNORE_ENTRIES};
pub use tailwind::{add_app_content_glob, TailwindEdit, APP_CONTENT_GLOB};
