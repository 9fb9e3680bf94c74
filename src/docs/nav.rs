//! Site navigation model.
//!
//! The sidebar is config-driven: sections of links in reading order. The
//! same flattened order feeds the previous/next footer cards, so curating
//! the nav also curates the reading sequence.

use serde::{Deserialize, Serialize};

use crate::docs::slug::format_label;
use crate::markdown::links::DOCS_BASE;

/// One sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A titled group of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    pub title: String,
    #[serde(default)]
    pub icon: String,
    pub items: Vec<NavItem>,
}

/// A single breadcrumb step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
}

/// Whether `href` should highlight as active for the current route.
/// The docs home only matches itself; every other link also matches its
/// descendants.
pub fn is_path_active(current_path: &str, href: &str) -> bool {
    if href == DOCS_BASE {
        return current_path == DOCS_BASE;
    }
    current_path == href || current_path.starts_with(&format!("{}/", href))
}

/// Previous and next nav items around the current route, taken from the
/// flattened section order. Routes that are not in the nav get neither.
pub fn neighbors<'a>(
    sections: &'a [NavSection],
    canonical_path: &str,
) -> (Option<&'a NavItem>, Option<&'a NavItem>) {
    let sequence: Vec<&NavItem> = sections.iter().flat_map(|s| s.items.iter()).collect();
    let index = match sequence.iter().position(|item| item.href == canonical_path) {
        Some(index) => index,
        None => return (None, None),
    };

    let previous = if index > 0 {
        Some(sequence[index - 1])
    } else {
        None
    };
    let next = if index + 1 < sequence.len() {
        Some(sequence[index + 1])
    } else {
        None
    };
    (previous, next)
}

/// Title of the nav section the current route belongs to, or
/// `Documentation` for routes outside every section (including the home).
pub fn family_label(sections: &[NavSection], canonical_path: &str) -> String {
    for section in sections {
        for item in &section.items {
            if item.href == DOCS_BASE {
                continue;
            }
            if is_path_active(canonical_path, &item.href) {
                return section.title.clone();
            }
        }
    }
    "Documentation".to_string()
}

/// Breadcrumb trail for a canonical route: site home, docs home, then one
/// crumb per path segment with cumulative hrefs.
pub fn breadcrumbs(canonical_path: &str) -> Vec<Breadcrumb> {
    let mut crumbs = vec![
        Breadcrumb {
            label: "Home".to_string(),
            href: "/".to_string(),
        },
        Breadcrumb {
            label: "Docs".to_string(),
            href: DOCS_BASE.to_string(),
        },
    ];

    if canonical_path != DOCS_BASE {
        let tail = canonical_path
            .strip_prefix("/docs/")
            .unwrap_or(canonical_path);
        let parts: Vec<&str> = tail.split('/').filter(|p| !p.is_empty()).collect();
        for (index, part) in parts.iter().enumerate() {
            crumbs.push(Breadcrumb {
                label: format_label(part),
                href: format!("{}/{}", DOCS_BASE, parts[..=index].join("/")),
            });
        }
    }

    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_nav() -> Vec<NavSection> {
        vec![
            NavSection {
                title: "Overview".to_string(),
                icon: "🧭".to_string(),
                items: vec![NavItem {
                    title: "Documentation Home".to_string(),
                    href: "/docs".to_string(),
                    description: Some("Entry point".to_string()),
                }],
            },
            NavSection {
                title: "User Guide".to_string(),
                icon: "📘".to_string(),
                items: vec![
                    NavItem {
                        title: "Overview".to_string(),
                        href: "/docs/user-guide".to_string(),
                        description: None,
                    },
                    NavItem {
                        title: "Quick Start".to_string(),
                        href: "/docs/user-guide/quick-start".to_string(),
                        description: None,
                    },
                ],
            },
        ]
    }

    #[test]
    fn test_home_is_only_active_on_itself() {
        assert!(is_path_active("/docs", "/docs"));
        assert!(!is_path_active("/docs/user-guide", "/docs"));
    }

    #[test]
    fn test_section_links_match_descendants() {
        assert!(is_path_active("/docs/user-guide", "/docs/user-guide"));
        assert!(is_path_active("/docs/user-guide/faq", "/docs/user-guide"));
        assert!(!is_path_active("/docs/user-guidefaq", "/docs/user-guide"));
    }

    #[test]
    fn test_neighbors_follow_flattened_order() {
        let nav = sample_nav();
        let (previous, next) = neighbors(&nav, "/docs/user-guide");
        assert_eq!(previous.unwrap().href, "/docs");
        assert_eq!(next.unwrap().href, "/docs/user-guide/quick-start");
    }

    #[test]
    fn test_neighbors_at_sequence_edges() {
        let nav = sample_nav();
        let (previous, next) = neighbors(&nav, "/docs");
        assert!(previous.is_none());
        assert_eq!(next.unwrap().href, "/docs/user-guide");

        let (previous, next) = neighbors(&nav, "/docs/user-guide/quick-start");
        assert_eq!(previous.unwrap().href, "/docs/user-guide");
        assert!(next.is_none());
    }

    #[test]
    fn test_neighbors_absent_for_unlisted_routes() {
        let nav = sample_nav();
        let (previous, next) = neighbors(&nav, "/docs/not-in-nav");
        assert!(previous.is_none());
        assert!(next.is_none());
    }

    #[test]
    fn test_family_label_from_active_section() {
        let nav = sample_nav();
        assert_eq!(family_label(&nav, "/docs/user-guide/quick-start"), "User Guide");
        assert_eq!(family_label(&nav, "/docs"), "Documentation");
        assert_eq!(family_label(&nav, "/docs/elsewhere"), "Documentation");
    }

    #[test]
    fn test_breadcrumbs_accumulate_hrefs() {
        let crumbs = breadcrumbs("/docs/developer/02-architecture-and-services");
        let pairs: Vec<(&str, &str)> = crumbs
            .iter()
            .map(|c| (c.label.as_str(), c.href.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Home", "/"),
                ("Docs", "/docs"),
                ("Developer", "/docs/developer"),
                ("Architecture And Services", "/docs/developer/02-architecture-and-services"),
            ]
        );
    }

    #[test]
    fn test_breadcrumbs_for_home() {
        let crumbs = breadcrumbs("/docs");
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[1].href, "/docs");
    }
}
