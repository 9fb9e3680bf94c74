use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "docshelf")]
#[command(about = "Markdown documentation server and static site generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory holding the docs tree and config (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Custom configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Print verbose output
    #[arg(short, long, default_value_t = false, global = true)]
    pub verbose: bool,

    /// Silence everything below warnings
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the docs locally, rendering pages on request
    #[command(alias = "s", alias = "server")]
    Serve {
        /// Host to bind to (defaults to the configured host)
        #[arg(short = 'H', long, value_name = "HOST")]
        host: Option<String>,

        /// Port to listen on (defaults to the configured port)
        #[arg(short = 'P', long, value_name = "PORT")]
        port: Option<u16>,

        /// Launch the docs in a browser once the server is up
        #[arg(short = 'o', long, default_value_t = false)]
        open_url: bool,

        /// X.509 certificate for https, PEM format
        #[arg(long, value_name = "FILE")]
        ssl_cert: Option<PathBuf>,

        /// Private key for https, PEM format
        #[arg(long, value_name = "FILE")]
        ssl_key: Option<PathBuf>,
    },

    /// Render the docs to a static site
    #[command(alias = "b")]
    Build {
        /// Destination directory (defaults to the configured destination)
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,
    },

    /// Verify that internal links point at real documents
    Check,

    /// Remove the build output directory
    Clean,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from(["docshelf", "serve", "-H", "0.0.0.0", "-P", "8080", "-o"]);
        match cli.command {
            Commands::Serve {
                host,
                port,
                open_url,
                ..
            } => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
                assert!(open_url);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["docshelf", "build", "--source", "proj", "--verbose"]);
        assert_eq!(cli.source.as_deref(), Some(Path::new("proj")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_serve_alias() {
        let cli = Cli::parse_from(["docshelf", "s"]);
        assert!(matches!(cli.command, Commands::Serve { .. }));
    }
}
