//! Relative link rewriting.
//!
//! Markdown documents cross-reference each other with repository-relative
//! hrefs like `../api/webhooks.md`. Served pages live under `/docs/...`,
//! so those hrefs are resolved against the current document's directory
//! and rewritten to site paths. Absolute urls, fragments, and anything
//! that would escape the docs root pass through untouched.

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::path as posix;

/// Route prefix every rewritten link lands under.
pub const DOCS_BASE: &str = "/docs";

lazy_static! {
    static ref PASSTHROUGH_REGEX: Regex = Regex::new(r"(?i)^(https?:|mailto:|tel:|#)").unwrap();
}

/// Rewrite a markdown href to a site path.
///
/// `current_doc` is the docs-root-relative path of the document being
/// rendered (e.g. `guides/intro.md`); relative hrefs resolve against its
/// directory. `None` resolves against the docs root itself.
///
/// Absolute urls, `mailto:`/`tel:` schemes, bare fragments, and
/// site-absolute paths are returned unchanged, as is any href whose
/// normalized form would climb out of the docs root. Query strings and
/// fragments survive the rewrite in their original positions.
pub fn rewrite_href(href: &str, current_doc: Option<&str>) -> String {
    if is_passthrough(href) {
        return href.to_string();
    }
    if href.starts_with('/') {
        return href.to_string();
    }

    let (before_hash, fragment) = split_off(href, '#');
    let (raw_path, query) = split_off(before_hash, '?');

    let base_dir = match current_doc {
        Some(doc) => posix::dirname(doc),
        None => "",
    };
    let joined = posix::normalize(&posix::join(base_dir, raw_path));

    if posix::escapes_root(&joined) {
        return href.to_string();
    }

    let path = posix::strip_suffix_ci(&joined, ".md").unwrap_or(&joined);
    let path = posix::strip_suffix_ci(path, "/README").unwrap_or(path);
    let path = path.strip_prefix('/').unwrap_or(path);

    let mut rewritten = if path.is_empty() {
        DOCS_BASE.to_string()
    } else {
        format!("{}/{}", DOCS_BASE, path)
    };
    if !query.is_empty() {
        rewritten.push('?');
        rewritten.push_str(query);
    }
    if !fragment.is_empty() {
        rewritten.push('#');
        rewritten.push_str(fragment);
    }
    rewritten
}

/// Rewrite a relative asset reference (an image src) to a site path.
///
/// Same resolution as [`rewrite_href`] minus the markdown suffix
/// handling: assets keep their extension. Making srcs route-absolute is
/// what lets the same HTML resolve correctly both served (page url
/// `/docs/a/b`) and built (page url `/docs/a/b/`).
pub fn rewrite_asset_href(href: &str, current_doc: Option<&str>) -> String {
    if is_passthrough(href) || href.starts_with('/') {
        return href.to_string();
    }

    let base_dir = match current_doc {
        Some(doc) => posix::dirname(doc),
        None => "",
    };
    let joined = posix::normalize(&posix::join(base_dir, href));

    if posix::escapes_root(&joined) || joined.is_empty() {
        return href.to_string();
    }

    format!("{}/{}", DOCS_BASE, joined)
}

/// True when the href points outside the site entirely.
pub fn is_external(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// True for hrefs the rewriter never touches: absolute urls, `mailto:`
/// and `tel:` schemes, and bare fragments.
pub fn is_passthrough(href: &str) -> bool {
    PASSTHROUGH_REGEX.is_match(href)
}

fn split_off(input: &str, sep: char) -> (&str, &str) {
    match input.split_once(sep) {
        Some((head, tail)) => (head, tail),
        None => (input, ""),
    }
}
