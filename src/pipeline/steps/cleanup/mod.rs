//! Steps of `nextport cleanup`, run once the migrated app works

#[path = "01_verify_migrated.rs"]
pub mod verify_migrated;
#[path = "02_remove_legacy.rs"]
pub mod remove_legacy;
#[path = "03_uninstall_vite.rs"]
pub mod uninstall_vite;

pub use remove_legacy::RemoveLegacyFilesStep;
pub use uninstall_vite::UninstallViteStep;
pub use verify_migrated::VerifyMigratedStep;
