//! Request handlers for the docs server.
//!
//! Pages are assembled and rendered per request, so edits to the
//! markdown sources show up on the next reload. Conditional requests are
//! answered from content ETags; markdown targets always render as pages
//! while other file extensions under `/docs/` serve raw (images and
//! downloads referenced from documents).

use std::path::Path as FilePath;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use log::{debug, error};

use crate::docs;
use crate::docs::slug::split_slug;
use crate::layout;
use crate::server::app::AppState;
use crate::server::middleware::{check_etag_match, generate_etag};

const INTERNAL_ERROR_BODY: &str = "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\" /><title>Internal Error</title></head>\n<body><h1>Something went wrong rendering this page.</h1><p><a href=\"/docs\">Back to Documentation</a></p></body></html>\n";

const FALLBACK_BODY: &str = "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\" /><title>Not Found</title></head>\n<body><h1>Page not found.</h1><p><a href=\"/docs\">Go to Documentation</a></p></body></html>\n";

/// `GET /docs`
pub async fn docs_home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    doc_response(&state, &[], &headers)
}

/// `GET /docs/{*slug}`
pub async fn docs_page(
    State(state): State<AppState>,
    Path(raw_slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    let slug = split_slug(&raw_slug);

    if !targets_markdown(&slug) {
        if let Some(path) = state.store.resolve_file(&slug) {
            return serve_raw_file(&path, &headers).await;
        }
    }

    doc_response(&state, &slug, &headers)
}

/// `GET /assets/docshelf.css`
pub async fn stylesheet(headers: HeaderMap) -> Response {
    let etag = generate_etag(layout::STYLESHEET.as_bytes());
    if check_etag_match(&headers, &etag) {
        return not_modified(etag);
    }

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8".to_string()),
            (header::ETAG, etag),
        ],
        layout::STYLESHEET,
    )
        .into_response()
}

/// Routes outside `/docs` and the assets.
pub async fn fallback() -> Response {
    (StatusCode::NOT_FOUND, Html(FALLBACK_BODY)).into_response()
}

fn doc_response(state: &AppState, slug: &[String], request_headers: &HeaderMap) -> Response {
    match docs::assemble(&state.store, &state.config, slug) {
        Ok(page) => {
            debug!(
                "Serving {} ({})",
                page.canonical_path,
                if page.not_found { "not found" } else { "ok" }
            );
            let status = if page.not_found {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            let html = layout::render_page(&page, &state.config);
            html_response(status, html, request_headers)
        }
        Err(err) => {
            error!("Failed to render /docs/{}: {}", slug.join("/"), err);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_BODY)).into_response()
        }
    }
}

fn html_response(status: StatusCode, html: String, request_headers: &HeaderMap) -> Response {
    let etag = generate_etag(html.as_bytes());
    if status == StatusCode::OK && check_etag_match(request_headers, &etag) {
        return not_modified(etag);
    }

    (
        status,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::ETAG, etag),
        ],
        html,
    )
        .into_response()
}

fn not_modified(etag: String) -> Response {
    (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response()
}

async fn serve_raw_file(path: &FilePath, request_headers: &HeaderMap) -> Response {
    let content = match tokio::fs::read(path).await {
        Ok(content) => content,
        Err(err) => {
            error!("Failed to read {}: {}", path.display(), err);
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let etag = generate_etag(&content);
    if check_etag_match(request_headers, &etag) {
        return not_modified(etag);
    }

    let mime_type = mime_guess::from_path(path).first_or_octet_stream();
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type.as_ref())
        .header(header::ETAG, etag);

    if let Ok(metadata) = tokio::fs::metadata(path).await {
        if let Ok(modified) = metadata.modified() {
            builder = builder.header(header::LAST_MODIFIED, httpdate::fmt_http_date(modified));
        }
    }

    match builder.body(Body::from(content)) {
        Ok(response) => response,
        Err(err) => {
            error!("Failed to build file response: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Markdown-suffixed slugs always go through page rendering, never raw
/// serving, regardless of suffix case.
fn targets_markdown(slug: &[String]) -> bool {
    slug.last()
        .map(|segment| segment.to_lowercase().ends_with(".md"))
        .unwrap_or(false)
}
