//! Server option types.

use std::path::PathBuf;

/// Resolved options for one `serve` run, after the CLI and the config
/// file have been merged.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub host: String,
    pub port: u16,
    /// Project directory the docs root is resolved against.
    pub project_dir: PathBuf,
    /// PEM certificate path; TLS turns on when both this and `ssl_key`
    /// are set.
    pub ssl_cert: Option<PathBuf>,
    pub ssl_key: Option<PathBuf>,
    /// Open the docs home in a browser once the server is up.
    pub open_url: bool,
}

impl ServeOptions {
    pub fn address_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn tls_enabled(&self) -> bool {
        self.ssl_cert.is_some() && self.ssl_key.is_some()
    }

    /// Human-facing url for banners and browser opening.
    pub fn url(&self) -> String {
        let scheme = if self.tls_enabled() { "https" } else { "http" };
        format!("{}://{}:{}/docs", scheme, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ServeOptions {
        ServeOptions {
            host: "127.0.0.1".to_string(),
            port: 4000,
            project_dir: PathBuf::from("."),
            ssl_cert: None,
            ssl_key: None,
            open_url: false,
        }
    }

    #[test]
    fn test_address_and_url() {
        let opts = options();
        assert_eq!(opts.address_string(), "127.0.0.1:4000");
        assert_eq!(opts.url(), "http://127.0.0.1:4000/docs");
    }

    #[test]
    fn test_tls_requires_both_paths() {
        let mut opts = options();
        opts.ssl_cert = Some(PathBuf::from("cert.pem"));
        assert!(!opts.tls_enabled());
        opts.ssl_key = Some(PathBuf::from("key.pem"));
        assert!(opts.tls_enabled());
        assert!(opts.url().starts_with("https://"));
    }
}
