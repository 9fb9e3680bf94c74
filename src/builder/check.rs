//! Cross-document link checking.
//!
//! `check_site` walks every markdown document under the docs root, pulls
//! link and image targets out of the parsed tree, and verifies that each
//! internal target resolves the same way the server would. External urls
//! are never probed.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::Path;

use comrak::nodes::{AstNode, NodeValue};
use comrak::Arena;
use log::info;

use crate::builder::sources::{collect_sources, posix_string};
use crate::config::SiteConfig;
use crate::docs::resolver::DocStore;
use crate::docs::slug::route_slug;
use crate::markdown::engine;
use crate::markdown::links::{self, DOCS_BASE};
use crate::utils::error::{BoxResult, DocshelfError};
use crate::utils::fs as site_fs;
use crate::utils::path as posix;

/// A link whose target does not resolve to a document or file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// Docs-relative path of the file containing the link.
    pub source: String,
    /// The target as written in the document.
    pub href: String,
    /// What went wrong.
    pub reason: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.source, self.href, self.reason)
    }
}

struct Target {
    href: String,
    image: bool,
}

/// Check every internal link and image reference in the docs tree.
///
/// Returns the broken references; an empty vec means the tree is clean.
/// Only real I/O failures return `Err`.
pub fn check_site(config: &SiteConfig, project_dir: &Path) -> BoxResult<Vec<BrokenLink>> {
    let docs_root = config.docs_root(project_dir);
    if !site_fs::is_directory(&docs_root) {
        return Err(DocshelfError::Build(format!(
            "docs directory {} does not exist",
            docs_root.display()
        ))
        .into());
    }

    let sources = collect_sources(&docs_root, &config.exclude)?;
    let store = DocStore::new(docs_root.clone());
    info!("Checking links in {} documents...", sources.markdown.len());

    let mut broken = Vec::new();
    for relative in &sources.markdown {
        let relative_str = posix_string(relative);
        let content = fs::read_to_string(docs_root.join(relative))?;
        check_document(&relative_str, &content, &store, &docs_root, &mut broken)?;
    }

    info!(
        "Checked {} documents, found {} broken references",
        sources.markdown.len(),
        broken.len()
    );
    Ok(broken)
}

fn check_document(
    source: &str,
    content: &str,
    store: &DocStore,
    docs_root: &Path,
    broken: &mut Vec<BrokenLink>,
) -> BoxResult<()> {
    let arena = Arena::new();
    let root = engine::parse(&arena, content);
    let mut targets = Vec::new();
    collect_targets(root, &mut targets);

    for target in targets {
        if target.image {
            check_image(source, &target.href, docs_root, broken);
        } else {
            check_link(source, &target.href, store, broken)?;
        }
    }
    Ok(())
}

fn check_link(
    source: &str,
    href: &str,
    store: &DocStore,
    broken: &mut Vec<BrokenLink>,
) -> BoxResult<()> {
    if links::is_passthrough(href) {
        return Ok(());
    }

    let route = if href.starts_with('/') {
        // Site-absolute: only docs routes are ours to verify.
        if !is_docs_route(href) {
            return Ok(());
        }
        href.to_string()
    } else {
        let rewritten = links::rewrite_href(href, Some(source));
        if !rewritten.starts_with(DOCS_BASE) {
            broken.push(BrokenLink {
                source: source.to_string(),
                href: href.to_string(),
                reason: "target escapes the docs directory".to_string(),
            });
            return Ok(());
        }
        rewritten
    };

    let path = route_path(&route);
    let decoded = urlencoding::decode(path).unwrap_or(Cow::Borrowed(path));
    let slug = route_slug(&decoded);
    if store.resolve(&slug)?.is_none() && store.resolve_file(&slug).is_none() {
        broken.push(BrokenLink {
            source: source.to_string(),
            href: href.to_string(),
            reason: format!("no document at {}", path),
        });
    }
    Ok(())
}

fn check_image(source: &str, src: &str, docs_root: &Path, broken: &mut Vec<BrokenLink>) {
    if links::is_passthrough(src) || src.starts_with('/') {
        return;
    }

    let joined = posix::normalize(&posix::join(posix::dirname(source), src));
    if posix::escapes_root(&joined) || joined.is_empty() {
        broken.push(BrokenLink {
            source: source.to_string(),
            href: src.to_string(),
            reason: "image escapes the docs directory".to_string(),
        });
        return;
    }

    let decoded = urlencoding::decode(&joined).unwrap_or(Cow::Borrowed(&joined));
    if !docs_root.join(decoded.as_ref()).is_file() {
        broken.push(BrokenLink {
            source: source.to_string(),
            href: src.to_string(),
            reason: "missing image file".to_string(),
        });
    }
}

fn collect_targets<'a>(node: &'a AstNode<'a>, targets: &mut Vec<Target>) {
    match &node.data.borrow().value {
        NodeValue::Link(link) => targets.push(Target {
            href: link.url.clone(),
            image: false,
        }),
        NodeValue::Image(image) => targets.push(Target {
            href: image.url.clone(),
            image: true,
        }),
        _ => {}
    }

    for child in node.children() {
        collect_targets(child, targets);
    }
}

fn is_docs_route(href: &str) -> bool {
    match href.strip_prefix(DOCS_BASE) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Route with any query string or fragment cut off.
fn route_path(route: &str) -> &str {
    let end = route
        .find(|c| c == '#' || c == '?')
        .unwrap_or(route.len());
    &route[..end]
}
