pub mod commands;
pub mod logging;
pub mod types;

use std::path::PathBuf;

use clap::Parser;
use log::error;

/// Run the command-line interface. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = types::Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet);
    logging::configure_backtrace(cli.trace);

    let project_dir = cli
        .source
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let result = match &cli.command {
        types::Commands::Serve { .. } => commands::handle_serve_command(&cli, &project_dir).await,
        types::Commands::Build { .. } => commands::handle_build_command(&cli, &project_dir),
        types::Commands::Check => commands::handle_check_command(&cli, &project_dir),
        types::Commands::Clean => commands::handle_clean_command(&cli, &project_dir),
    };

    match result {
        Ok(()) => 0,
        Err(err) => {
            error!("{}", err);
            1
        }
    }
}
