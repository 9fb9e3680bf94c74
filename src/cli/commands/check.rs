use std::path::Path;

use log::{info, warn};

use crate::builder;
use crate::cli::types::{Cli, Commands};
use crate::config;
use crate::utils::error::{BoxResult, DocshelfError};

/// Handle the check command
pub fn handle_check_command(cli: &Cli, project_dir: &Path) -> BoxResult<()> {
    if let Commands::Check = &cli.command {
        let config = config::load_config(project_dir, cli.config.as_deref())?;
        let broken = builder::check_site(&config, project_dir)?;

        if !broken.is_empty() {
            for link in &broken {
                warn!("{}", link);
            }
            return Err(
                DocshelfError::Build(format!("{} broken references", broken.len())).into(),
            );
        }
        info!("All internal references resolve");
    }
    Ok(())
}
