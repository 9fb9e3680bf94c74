//! HTML shell around a rendered document.
//!
//! Draws the full page: top bar, breadcrumbs, sidebar navigation, the
//! meta strip with family badge and reading estimate, the article body or
//! the not-found state, previous/next cards, and the on-page ToC panel.
//! Everything that originates in config or documents is escaped here.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::SiteConfig;
use crate::docs::nav::{is_path_active, NavItem};
use crate::docs::DocPage;
use crate::layout::STYLESHEET_ROUTE;

const NOT_FOUND_HINT: &str =
    "We could not locate this page. Try using the left navigation or return to the docs home.";

pub fn render_page(page: &DocPage, config: &SiteConfig) -> String {
    let mut html = String::with_capacity(page.html.len() + 8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n");
    push_head(page, config, &mut html);
    html.push_str("<body>\n");
    push_top_bar(config, &mut html);
    html.push_str("<div class=\"page\">\n");
    push_breadcrumbs(page, &mut html);
    html.push_str("<div class=\"grid\">\n");
    push_sidebar(page, config, &mut html);
    html.push_str("<main>\n");
    push_meta_strip(page, &mut html);
    push_article(page, &mut html);
    push_pager(page, &mut html);
    html.push_str("</main>\n");
    push_toc_panel(page, &mut html);
    html.push_str("</div>\n</div>\n</body>\n</html>\n");

    html
}

fn push_head(page: &DocPage, config: &SiteConfig, html: &mut String) {
    let description = if page.lead.is_empty() {
        &config.description
    } else {
        &page.lead
    };

    html.push_str("<head>\n<meta charset=\"utf-8\" />\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    html.push_str(&format!("<title>{}</title>\n", encode_text(&page.title)));
    html.push_str(&format!(
        "<meta name=\"description\" content=\"{}\" />\n",
        encode_double_quoted_attribute(description)
    ));
    html.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\" />\n",
        STYLESHEET_ROUTE
    ));
    html.push_str("</head>\n");
}

fn push_top_bar(config: &SiteConfig, html: &mut String) {
    let initial = config.title.chars().next().unwrap_or('D');
    html.push_str("<nav class=\"top-bar\">\n");
    html.push_str(&format!(
        "<a class=\"brand\" href=\"/\"><span class=\"brand-mark\">{}</span>{}</a>\n",
        encode_text(&initial.to_string()),
        encode_text(&config.title)
    ));
    html.push_str("<a class=\"back-home\" href=\"/\">Back to Home</a>\n</nav>\n");
}

fn push_breadcrumbs(page: &DocPage, html: &mut String) {
    html.push_str("<nav class=\"breadcrumbs\">\n");
    let last = page.breadcrumbs.len().saturating_sub(1);
    for (index, crumb) in page.breadcrumbs.iter().enumerate() {
        if index > 0 {
            html.push_str("<span class=\"sep\">&rsaquo;</span>\n");
        }
        let class = if index == last { " class=\"current\"" } else { "" };
        html.push_str(&format!(
            "<a{} href=\"{}\">{}</a>\n",
            class,
            encode_double_quoted_attribute(&crumb.href),
            encode_text(&crumb.label)
        ));
    }
    html.push_str("</nav>\n");
}

fn push_sidebar(page: &DocPage, config: &SiteConfig, html: &mut String) {
    html.push_str("<aside class=\"panel sidebar\">\n");
    html.push_str("<p class=\"sidebar-heading\">Documentation</p>\n");

    for section in &config.nav {
        html.push_str("<div class=\"nav-section\">\n");
        html.push_str(&format!(
            "<div class=\"nav-section-title\">{} {}</div>\n",
            encode_text(&section.icon),
            encode_text(&section.title)
        ));
        for item in &section.items {
            let active = is_path_active(&page.canonical_path, &item.href);
            let class = if active { "nav-link active" } else { "nav-link" };
            html.push_str(&format!(
                "<a class=\"{}\" href=\"{}\">{}",
                class,
                encode_double_quoted_attribute(&item.href),
                encode_text(&item.title)
            ));
            if let Some(description) = &item.description {
                html.push_str(&format!(
                    "<span class=\"nav-desc\">{}</span>",
                    encode_text(description)
                ));
            }
            html.push_str("</a>\n");
        }
        html.push_str("</div>\n");
    }

    html.push_str("</aside>\n");
}

fn push_meta_strip(page: &DocPage, html: &mut String) {
    html.push_str("<section class=\"panel meta-strip\">\n<div class=\"badges\">\n");
    html.push_str(&format!(
        "<span class=\"badge family\">{}</span>\n",
        encode_text(&page.family_label)
    ));
    if !page.not_found {
        html.push_str(&format!(
            "<span class=\"badge\">{} min read</span>\n",
            page.reading_minutes
        ));
        html.push_str(&format!(
            "<span class=\"badge\">{} sections</span>\n",
            page.toc.len()
        ));
    }
    html.push_str("</div>\n");

    if page.not_found {
        html.push_str(&format!("<p class=\"lead\">{}</p>\n", NOT_FOUND_HINT));
    } else {
        html.push_str(&format!(
            "<p class=\"lead\">{}</p>\n",
            encode_text(&page.lead)
        ));
    }
    html.push_str("</section>\n");
}

fn push_article(page: &DocPage, html: &mut String) {
    html.push_str("<article class=\"panel article\">\n");
    if page.not_found {
        html.push_str("<div class=\"not-found\">\n<h2>Document Not Found</h2>\n");
        html.push_str(&format!("<p>{}</p>\n", NOT_FOUND_HINT));
        html.push_str("<a class=\"home-link\" href=\"/docs\">Back to Documentation</a>\n</div>\n");
    } else {
        // Already-rendered, already-escaped markdown body.
        html.push_str(&page.html);
        html.push('\n');
    }
    html.push_str("</article>\n");
}

fn push_pager(page: &DocPage, html: &mut String) {
    if page.not_found || (page.previous.is_none() && page.next.is_none()) {
        return;
    }

    html.push_str("<div class=\"pager\">\n");
    match &page.previous {
        Some(item) => push_pager_card(item, "Previous", "previous", html),
        None => html.push_str("<div></div>\n"),
    }
    if let Some(item) = &page.next {
        push_pager_card(item, "Next", "next", html);
    }
    html.push_str("</div>\n");
}

fn push_pager_card(item: &NavItem, label: &str, class: &str, html: &mut String) {
    html.push_str(&format!(
        "<a class=\"pager-card {}\" href=\"{}\"><span class=\"pager-label\">{}</span><span class=\"pager-title\">{}</span></a>\n",
        class,
        encode_double_quoted_attribute(&item.href),
        label,
        encode_text(&item.title)
    ));
}

fn push_toc_panel(page: &DocPage, html: &mut String) {
    html.push_str("<aside class=\"toc-panel\">\n<div class=\"panel toc-box\">\n");
    html.push_str("<h3>On this page</h3>\n");

    if page.toc.is_empty() {
        html.push_str("<p class=\"toc-empty\">No section headings found for this page.</p>\n");
    } else {
        html.push_str("<nav>\n");
        for item in &page.toc {
            let depth = if item.level == 3 { " class=\"depth-3\"" } else { "" };
            html.push_str(&format!(
                "<a{} href=\"#{}\">{}</a>\n",
                depth,
                encode_double_quoted_attribute(&item.id),
                encode_text(&item.text)
            ));
        }
        html.push_str("</nav>\n");
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"panel toc-box\">\n<h3>Reading Tips</h3>\n");
    html.push_str("<p class=\"toc-tip\">Use the left navigation for section jumps, and this panel for quick heading-level jumps.</p>\n");
    html.push_str("</div>\n</aside>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::nav::Breadcrumb;
    use crate::markdown::toc::TocItem;

    fn sample_page() -> DocPage {
        DocPage {
            canonical_path: "/docs/guides/setup".to_string(),
            title: "Setup | Acme".to_string(),
            breadcrumbs: vec![
                Breadcrumb { label: "Home".to_string(), href: "/".to_string() },
                Breadcrumb { label: "Docs".to_string(), href: "/docs".to_string() },
                Breadcrumb { label: "Guides".to_string(), href: "/docs/guides".to_string() },
            ],
            family_label: "Guides".to_string(),
            lead: "Install & configure.".to_string(),
            reading_minutes: 3,
            toc: vec![
                TocItem { id: "install".to_string(), text: "Install".to_string(), level: 2 },
                TocItem { id: "tuning".to_string(), text: "Tuning".to_string(), level: 3 },
            ],
            html: "<h2 id=\"install\" class=\"doc-h2\">Install</h2>".to_string(),
            previous: Some(NavItem {
                title: "Home".to_string(),
                href: "/docs".to_string(),
                description: None,
            }),
            next: None,
            not_found: false,
        }
    }

    #[test]
    fn test_page_shell_contains_all_regions() {
        let config = SiteConfig::default();
        let html = render_page(&sample_page(), &config);

        assert!(html.contains("<title>Setup | Acme</title>"));
        assert!(html.contains(STYLESHEET_ROUTE));
        assert!(html.contains("class=\"breadcrumbs\""));
        assert!(html.contains("3 min read"));
        assert!(html.contains("2 sections"));
        assert!(html.contains("Install &amp; configure."));
        assert!(html.contains("<h2 id=\"install\""));
        assert!(html.contains("href=\"#install\""));
        assert!(html.contains("class=\"depth-3\" href=\"#tuning\""));
        assert!(html.contains("Previous"));
    }

    #[test]
    fn test_active_nav_link_highlighted() {
        let mut config = SiteConfig::default();
        config.nav[0].items[0].href = "/docs/guides".to_string();
        let html = render_page(&sample_page(), &config);
        assert!(html.contains("nav-link active"));
    }

    #[test]
    fn test_not_found_page_renders_hint_and_link() {
        let config = SiteConfig::default();
        let page = DocPage {
            not_found: true,
            html: String::new(),
            toc: Vec::new(),
            ..sample_page()
        };
        let html = render_page(&page, &config);

        assert!(html.contains("Document Not Found"));
        assert!(html.contains("Back to Documentation"));
        assert!(html.contains("No section headings found for this page."));
        assert!(!html.contains("min read"));
        assert!(!html.contains("pager"));
    }
}
