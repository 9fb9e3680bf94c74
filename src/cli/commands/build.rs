use std::path::Path;

use log::info;

use crate::builder;
use crate::cli::types::{Cli, Commands};
use crate::config;
use crate::utils::error::BoxResult;

/// Handle the build command
pub fn handle_build_command(cli: &Cli, project_dir: &Path) -> BoxResult<()> {
    if let Commands::Build { destination } = &cli.command {
        let mut config = config::load_config(project_dir, cli.config.as_deref())?;
        if let Some(destination) = destination {
            config.destination = destination.to_string_lossy().into_owned();
        }

        let stats = builder::build_site(&config, project_dir)?;
        info!(
            "Site generated at {}: {} pages, {} static files",
            config.destination_dir(project_dir).display(),
            stats.pages,
            stats.assets
        );
    }
    Ok(())
}
