use std::path::Path;

use crate::builder;
use crate::cli::types::{Cli, Commands};
use crate::config;
use crate::utils::error::BoxResult;

/// Handle the clean command
pub fn handle_clean_command(cli: &Cli, project_dir: &Path) -> BoxResult<()> {
    if let Commands::Clean = &cli.command {
        let config = config::load_config(project_dir, cli.config.as_deref())?;
        builder::clean_site(&config, project_dir)?;
    }
    Ok(())
}
