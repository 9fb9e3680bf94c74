//! Router assembly.

use std::sync::Arc;

use axum::middleware;
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::docs::DocStore;
use crate::layout::STYLESHEET_ROUTE;
use crate::server::handlers;
use crate::server::middleware::{
    create_cache_control_layer, create_timeout_layer, security_middleware,
};

/// Shared state for handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub store: DocStore,
}

/// Build the application router: the docs routes, the embedded
/// stylesheet, a redirect from the root, and the middleware stack.
pub fn build_router(config: Arc<SiteConfig>, store: DocStore) -> Router {
    let state = AppState { config, store };

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/docs") }))
        .route("/docs", get(handlers::docs_home))
        .route("/docs/{*slug}", get(handlers::docs_page))
        .route(STYLESHEET_ROUTE, get(handlers::stylesheet))
        .fallback(handlers::fallback)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::new())
                .layer(TraceLayer::new_for_http())
                .layer(create_timeout_layer())
                .layer(CompressionLayer::new())
                .layer(create_cache_control_layer())
                .layer(middleware::from_fn(security_middleware))
                .layer(CorsLayer::permissive()),
        )
}
