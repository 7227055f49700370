use nextport::cli::commands::{CliArgs, Commands};
use nextport::cli::handlers::{handle_cleanup, handle_migrate, handle_steps};
use nextport::config::MigrationConfig;
use nextport::util::logging::{init_logging, parse_level, LoggingConfig};
use nextport::VERSION;

use clap::Parser;
use tracing::{debug, Level};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse();

    let mut config = MigrationConfig::default();
    if let Some(level) = &args.log_level {
        config.log_level = level.to_lowercase();
    }
    init_logging_from_args(&args, &config);

    debug!("nextport v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Migrate(migrate_args) => handle_migrate(migrate_args, config).await,
        Commands::Cleanup(cleanup_args) => handle_cleanup(cleanup_args, config).await,
        Commands::Steps(steps_args) => handle_steps(steps_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs, config: &MigrationConfig) {
    let mut logging = LoggingConfig::from_env();
    logging.level = if args.log_level.is_some() {
        parse_level(&config.log_level)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        parse_level(&config.log_level)
    };
    init_logging(logging);
}
