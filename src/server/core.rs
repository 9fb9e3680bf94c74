//! Server startup and lifecycle.

use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use log::{error, info, warn};

use crate::config::SiteConfig;
use crate::docs::DocStore;
use crate::server::app::build_router;
use crate::server::browser::open_browser;
use crate::server::types::ServeOptions;
use crate::utils::error::BoxResult;
use crate::utils::fs as site_fs;

/// Serve the docs site until the process is interrupted.
pub async fn serve(options: &ServeOptions, config: SiteConfig) -> BoxResult<()> {
    let docs_root = config.docs_root(&options.project_dir);
    if !site_fs::is_directory(&docs_root) {
        return Err(format!("docs directory {} does not exist", docs_root.display()).into());
    }

    let store = DocStore::new(docs_root.clone());
    let app = build_router(Arc::new(config), store);

    let address = options.address_string();
    let addr: SocketAddr = address
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| format!("could not resolve {}", address))?;

    info!("Serving docs from {}", docs_root.display());
    info!("Docs available at {}", options.url());

    if options.open_url {
        let url = options.url();
        info!("Opening browser at {}", url);
        if !open_browser(&url) {
            error!("Failed to open browser automatically");
        }
    }

    if options.ssl_cert.is_some() != options.ssl_key.is_some() {
        warn!("TLS needs both --ssl-cert and --ssl-key; serving plain HTTP");
    }

    match (&options.ssl_cert, &options.ssl_key) {
        (Some(cert), Some(key)) => {
            let tls_config = match RustlsConfig::from_pem_file(cert, key).await {
                Ok(tls_config) => tls_config,
                Err(err) => {
                    error!("Failed to load TLS certificates: {}", err);
                    return Err(format!("TLS configuration error: {}", err).into());
                }
            };

            info!("TLS enabled");
            let server = axum_server::bind_rustls(addr, tls_config).serve(app.into_make_service());
            tokio::select! {
                result = server => {
                    result?;
                    info!("Server stopped");
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutting down (received Ctrl+C)");
                }
            }
        }
        _ => {
            let server = axum_server::bind(addr).serve(app.into_make_service());
            tokio::select! {
                result = server => {
                    result?;
                    info!("Server stopped");
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutting down (received Ctrl+C)");
                }
            }
        }
    }

    Ok(())
}
