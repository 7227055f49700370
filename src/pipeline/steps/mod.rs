//! Migration steps, in the order they run

#[path = "01_verify_manifest.rs"]
pub mod verify_manifest;
#[path = "02_install_next.rs"]
pub mod install_next;
#[path = "03_package_scripts.rs"]
pub mod package_scripts;
#[path = "04_tsconfig.rs"]
pub mod tsconfig;
#[path = "05_next_config.rs"]
pub mod next_config;
#[path = "06_next_env.rs"]
pub mod next_env;
#[path = "07_metadata.rs"]
pub mod metadata;
#[path = "08_entry_component.rs"]
pub mod entry_component;
#[path = "09_root_layout.rs"]
pub mod root_layout;
#[path = "10_entry_page.rs"]
pub mod entry_page;
#[path = "11_env_helper.rs"]
pub mod env_helper;
#[path = "12_env_prefixes.rs"]
pub mod env_prefixes;
#[path = "13_tailwind.rs"]
pub mod tailwind;
#[path = "14_gitignore.rs"]
pub mod gitignore;
#[path = "15_guides.rs"]
pub mod guides;

pub mod cleanup;

pub use entry_component::DetectEntryComponentStep;
pub use entry_page::GenerateEntryPageStep;
pub use env_helper::GenerateEnvHelperStep;
pub use env_prefixes::RewriteEnvPrefixesStep;
pub use gitignore::UpdateGitignoreStep;
pub use guides::WriteGuidesStep;
pub use install_next::InstallNextStep;
pub use metadata::ExtractMetadataStep;
pub use next_config::WriteNextConfigStep;
pub use next_env::WriteNextEnvStep;
pub use package_scripts::UpdatePackageScriptsStep;
pub use root_layout::GenerateRootLayoutStep;
pub use tailwind::UpdateTailwindConfigStep;
pub use tsconfig::MergeTsconfigStep;
pub use verify_manifest::VerifyManifestStep;
