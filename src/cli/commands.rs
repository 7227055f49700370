use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::process::PackageManager;

/// Move a Vite React project onto the Next.js App Router
#[derive(Parser, Debug)]
#[command(
    name = "nextport",
    about = "Move a Vite React project onto the Next.js App Router",
    version,
    author,
    long_about = "nextport turns a Vite single-page application into a statically exported \
                  Next.js app: it installs next, rewrites the package scripts, merges \
                  tsconfig.json, generates the app directory and renames VITE_ environment \
                  variables. Nothing is deleted until you run `nextport cleanup`."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Migrate a Vite project to Next.js",
        long_about = "Runs every migration step in order. The first three steps are critical \
                      and stop the run when they fail; the rest are reported and skipped.\n\n\
                      Examples:\n  \
                      nextport migrate\n  \
                      nextport migrate ./my-app --skip-install\n  \
                      nextport migrate --package-manager pnpm --next-version 14.2.3\n  \
                      nextport migrate --format json --output report.json"
    )]
    Migrate(MigrateArgs),

    #[command(
        about = "Remove Vite leftovers from a migrated project",
        long_about = "Deletes index.html, the Vite entry point and configs, and uninstalls the \
                      Vite packages. Refuses to run before `nextport migrate`.\n\n\
                      Examples:\n  \
                      nextport cleanup\n  \
                      nextport cleanup ./my-app --skip-uninstall"
    )]
    Cleanup(CleanupArgs),

    #[command(about = "List the migration and cleanup steps")]
    Steps(StepsArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct MigrateArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the Vite project (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(long, help = "Do not install next")]
    pub skip_install: bool,

    #[arg(
        long,
        value_enum,
        help = "Package manager to use (detected from lockfiles by default)"
    )]
    pub package_manager: Option<PackageManager>,

    #[arg(long, value_name = "VERSION", help = "Next.js version to install [default: latest]")]
    pub next_version: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the report to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CleanupArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the migrated project (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(long, help = "Do not uninstall the Vite packages")]
    pub skip_uninstall: bool,

    #[arg(long, value_enum, help = "Package manager to use")]
    pub package_manager: Option<PackageManager>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct StepsArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
