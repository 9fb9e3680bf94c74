//! Slug handling for docs routes.
//!
//! A slug is the decoded path tail of a `/docs/...` url, split on `/`.
//! These helpers reject suspicious slugs before any filesystem work,
//! compute the canonical route for a slug, and turn file-ish segment
//! names into human labels for breadcrumbs and navigation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::links::DOCS_BASE;
use crate::utils::path as posix;

lazy_static! {
    static ref NUMERIC_PREFIX_REGEX: Regex = Regex::new(r"^\d+-").unwrap();
}

/// Reject slugs that could be aimed at the filesystem rather than a
/// document. Any segment containing `..` (even embedded) or a backslash
/// disqualifies the whole slug before path resolution starts.
pub fn is_unsafe_slug(slug: &[String]) -> bool {
    slug.iter()
        .any(|segment| segment.contains("..") || segment.contains('\\'))
}

/// Canonical route for a slug.
///
/// The empty slug is the docs home. A trailing `readme` / `readme.md`
/// segment (any case) folds into its parent directory route, so
/// `/docs/api/README.md` and `/docs/api` identify the same page.
pub fn canonical_path(slug: &[String]) -> String {
    if slug.is_empty() {
        return DOCS_BASE.to_string();
    }

    let mut parts: Vec<&str> = slug.iter().map(String::as_str).collect();
    if let Some(last) = parts.last() {
        let lower = last.to_lowercase();
        if lower == "readme" || lower == "readme.md" {
            parts.pop();
        }
    }

    if parts.is_empty() {
        return DOCS_BASE.to_string();
    }

    let path = format!("{}/{}", DOCS_BASE, parts.join("/"));
    path.trim_end_matches('/').to_string()
}

/// Human label for a path segment: `05-environment-and-deployment` becomes
/// `Environment And Deployment`, and any `readme` maps to `Overview`.
pub fn format_label(value: &str) -> String {
    let trimmed = posix::strip_suffix_ci(value, ".md").unwrap_or(value);
    if trimmed.eq_ignore_ascii_case("readme") {
        return "Overview".to_string();
    }

    let unnumbered = NUMERIC_PREFIX_REGEX.replace(trimmed, "");
    unnumbered
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Split a raw route tail into slug segments, dropping empty pieces so
/// `guides//setup/` and `guides/setup` are the same slug.
pub fn split_slug(raw: &str) -> Vec<String> {
    raw.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Route served for a markdown source file, given its path relative to the
/// docs root. `guides/setup.md` maps to `/docs/guides/setup` and any
/// `README.md` maps to its directory route.
pub fn route_for_doc(relative_path: &str) -> String {
    let trimmed = posix::strip_suffix_ci(relative_path, ".md").unwrap_or(relative_path);
    canonical_path(&split_slug(trimmed))
}

/// Slug segments for a canonical `/docs/...` route.
pub fn route_slug(route: &str) -> Vec<String> {
    let tail = route.strip_prefix(DOCS_BASE).unwrap_or(route);
    split_slug(tail)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_unsafe_slugs_rejected() {
        assert!(is_unsafe_slug(&slug(&["..", "etc"])));
        assert!(is_unsafe_slug(&slug(&["a..b"])));
        assert!(is_unsafe_slug(&slug(&["win\\path"])));
        assert!(!is_unsafe_slug(&slug(&["guides", "setup.md"])));
        assert!(!is_unsafe_slug(&slug(&[])));
    }

    #[test]
    fn test_canonical_path_home() {
        assert_eq!(canonical_path(&slug(&[])), "/docs");
        assert_eq!(canonical_path(&slug(&["README.md"])), "/docs");
        assert_eq!(canonical_path(&slug(&["readme"])), "/docs");
    }

    #[test]
    fn test_canonical_path_folds_trailing_readme() {
        assert_eq!(canonical_path(&slug(&["api", "README.md"])), "/docs/api");
        assert_eq!(canonical_path(&slug(&["api", "ReadMe"])), "/docs/api");
        assert_eq!(canonical_path(&slug(&["guides", "setup"])), "/docs/guides/setup");
    }

    #[test]
    fn test_canonical_path_only_trailing_readme_folds() {
        assert_eq!(
            canonical_path(&slug(&["readme", "nested"])),
            "/docs/readme/nested"
        );
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("quick-start"), "Quick Start");
        assert_eq!(format_label("05-environment-and-deployment"), "Environment And Deployment");
        assert_eq!(format_label("README.md"), "Overview");
        assert_eq!(format_label("readme"), "Overview");
        assert_eq!(format_label("api-basics.md"), "Api Basics");
    }

    #[test]
    fn test_split_slug_drops_empty_segments() {
        assert_eq!(split_slug("guides//setup/"), slug(&["guides", "setup"]));
        assert_eq!(split_slug(""), Vec::<String>::new());
        assert_eq!(split_slug("/"), Vec::<String>::new());
    }

    #[test]
    fn test_route_for_doc() {
        assert_eq!(route_for_doc("README.md"), "/docs");
        assert_eq!(route_for_doc("guides/setup.md"), "/docs/guides/setup");
        assert_eq!(route_for_doc("api/README.md"), "/docs/api");
        assert_eq!(route_for_doc("api/readme.MD"), "/docs/api");
    }

    #[test]
    fn test_route_slug_inverts_routes() {
        assert_eq!(route_slug("/docs"), Vec::<String>::new());
        assert_eq!(route_slug("/docs/guides/setup"), slug(&["guides", "setup"]));
        assert_eq!(route_slug("/docs/"), Vec::<String>::new());
    }
}
