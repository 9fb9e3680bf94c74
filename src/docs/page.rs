//! Page assembly.
//!
//! One call takes a request slug to a fully described page: resolved
//! content rendered to HTML, ToC, breadcrumbs, family badge, reading
//! estimate, and the previous/next links from the nav sequence. Missing
//! documents still assemble into a page, flagged `not_found`, so the
//! layout can draw the same chrome around an explanatory body.

use crate::config::SiteConfig;
use crate::docs::nav::{self, Breadcrumb, NavItem};
use crate::docs::resolver::DocStore;
use crate::docs::slug;
use crate::markdown::renderer::render_document;
use crate::markdown::text::{lead_paragraph, reading_minutes};
use crate::markdown::toc::TocItem;
use crate::utils::error::BoxResult;

/// Everything the layout needs to draw one docs page.
#[derive(Debug, Clone)]
pub struct DocPage {
    pub canonical_path: String,
    /// Browser title.
    pub title: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Section badge above the article, e.g. `User Guide`.
    pub family_label: String,
    /// Intro line under the badges; falls back to the site description.
    pub lead: String,
    pub reading_minutes: usize,
    pub toc: Vec<TocItem>,
    /// Rendered article body; empty when `not_found`.
    pub html: String,
    pub previous: Option<NavItem>,
    pub next: Option<NavItem>,
    pub not_found: bool,
}

/// Assemble the page for a slug.
///
/// Only real I/O failures return `Err`; an unresolvable slug comes back
/// as a `not_found` page.
pub fn assemble(store: &DocStore, config: &SiteConfig, slug_parts: &[String]) -> BoxResult<DocPage> {
    let doc = match store.resolve(slug_parts)? {
        Some(doc) => doc,
        None => return Ok(not_found_page(config, slug_parts)),
    };

    let canonical = slug::canonical_path(slug_parts);
    let crumbs = nav::breadcrumbs(&canonical);
    let family = nav::family_label(&config.nav, &canonical);
    let (previous, next) = nav::neighbors(&config.nav, &canonical);

    let rendered = render_document(&doc.content, Some(&doc.relative_path));
    let lead = lead_paragraph(&doc.content).unwrap_or_else(|| config.description.clone());

    Ok(DocPage {
        title: page_title(&crumbs, &config.title, false),
        canonical_path: canonical,
        breadcrumbs: crumbs,
        family_label: family,
        lead,
        reading_minutes: reading_minutes(&doc.content),
        toc: rendered.toc,
        html: rendered.html,
        previous: previous.cloned(),
        next: next.cloned(),
        not_found: false,
    })
}

/// Not-found page for a slug. `assemble` uses this when resolution misses;
/// the static builder uses it directly for its `404.html` output.
pub fn not_found_page(config: &SiteConfig, slug_parts: &[String]) -> DocPage {
    let canonical = slug::canonical_path(slug_parts);
    let crumbs = nav::breadcrumbs(&canonical);
    let family = nav::family_label(&config.nav, &canonical);
    let (previous, next) = nav::neighbors(&config.nav, &canonical);

    DocPage {
        title: page_title(&crumbs, &config.title, true),
        canonical_path: canonical,
        breadcrumbs: crumbs,
        family_label: family,
        lead: String::new(),
        reading_minutes: 0,
        toc: Vec::new(),
        html: String::new(),
        previous: previous.cloned(),
        next: next.cloned(),
        not_found: true,
    }
}

fn page_title(crumbs: &[Breadcrumb], site_title: &str, not_found: bool) -> String {
    if not_found {
        return format!("Document Not Found | {}", site_title);
    }
    match crumbs.last() {
        Some(crumb) if crumb.href != "/docs" => format!("{} | {}", crumb.label, site_title),
        _ => format!("Docs | {}", site_title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::nav::NavSection;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, DocStore, SiteConfig) {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("README.md"),
            "# Welcome\n\nStart here for everything.\n\n## Sections\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("guides")).unwrap();
        fs::write(
            dir.path().join("guides/setup.md"),
            "# Setup\n\nInstall and configure.\n\n## Install\n\n## Configure\n",
        )
        .unwrap();

        let store = DocStore::new(dir.path().to_path_buf());
        let config = SiteConfig {
            title: "Acme".to_string(),
            nav: vec![NavSection {
                title: "Guides".to_string(),
                icon: String::new(),
                items: vec![
                    NavItem {
                        title: "Home".to_string(),
                        href: "/docs".to_string(),
                        description: None,
                    },
                    NavItem {
                        title: "Setup".to_string(),
                        href: "/docs/guides/setup".to_string(),
                        description: None,
                    },
                ],
            }],
            ..SiteConfig::default()
        };
        (dir, store, config)
    }

    fn slug_of(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_found_page_is_fully_populated() {
        let (_dir, store, config) = fixture();
        let page = assemble(&store, &config, &slug_of(&["guides", "setup"])).unwrap();

        assert!(!page.not_found);
        assert_eq!(page.canonical_path, "/docs/guides/setup");
        assert_eq!(page.title, "Setup | Acme");
        assert_eq!(page.lead, "Install and configure.");
        assert_eq!(page.reading_minutes, 1);
        assert_eq!(page.toc.len(), 2);
        assert!(page.html.contains("<h2 id=\"install\""));
        assert_eq!(page.previous.as_ref().unwrap().href, "/docs");
        assert!(page.next.is_none());
    }

    #[test]
    fn test_home_page_from_empty_slug() {
        let (_dir, store, config) = fixture();
        let page = assemble(&store, &config, &[]).unwrap();

        assert_eq!(page.canonical_path, "/docs");
        assert_eq!(page.title, "Docs | Acme");
        assert_eq!(page.breadcrumbs.len(), 2);
        assert_eq!(page.next.as_ref().unwrap().href, "/docs/guides/setup");
    }

    #[test]
    fn test_readme_slug_folds_to_same_canonical_page() {
        let (_dir, store, config) = fixture();
        let direct = assemble(&store, &config, &[]).unwrap();
        let explicit = assemble(&store, &config, &slug_of(&["README.md"])).unwrap();
        assert_eq!(direct.canonical_path, explicit.canonical_path);
        assert_eq!(direct.html, explicit.html);
    }

    #[test]
    fn test_missing_doc_becomes_not_found_page() {
        let (_dir, store, config) = fixture();
        let page = assemble(&store, &config, &slug_of(&["nope"])).unwrap();

        assert!(page.not_found);
        assert!(page.html.is_empty());
        assert!(page.toc.is_empty());
        assert_eq!(page.reading_minutes, 0);
        assert_eq!(page.title, "Document Not Found | Acme");
        assert_eq!(page.canonical_path, "/docs/nope");
    }

    #[test]
    fn test_lead_falls_back_to_site_description() {
        let (dir, store, config) = fixture();
        fs::write(dir.path().join("bare.md"), "# Only A Title\n").unwrap();
        let page = assemble(&store, &config, &slug_of(&["bare"])).unwrap();
        assert_eq!(page.lead, config.description);
    }
}
