use std::path::Path;

use crate::cli::types::{Cli, Commands};
use crate::config;
use crate::server::{self, ServeOptions};
use crate::utils::error::BoxResult;

/// Handle the serve command
pub async fn handle_serve_command(cli: &Cli, project_dir: &Path) -> BoxResult<()> {
    if let Commands::Serve {
        host,
        port,
        open_url,
        ssl_cert,
        ssl_key,
    } = &cli.command
    {
        let config = config::load_config(project_dir, cli.config.as_deref())?;

        // Command line overrides beat the config file.
        let options = ServeOptions {
            host: host.clone().unwrap_or_else(|| config.server.host.clone()),
            port: port.unwrap_or(config.server.port),
            project_dir: project_dir.to_path_buf(),
            ssl_cert: ssl_cert.clone(),
            ssl_key: ssl_key.clone(),
            open_url: *open_url,
        };

        server::serve(&options, config).await?;
    }
    Ok(())
}
