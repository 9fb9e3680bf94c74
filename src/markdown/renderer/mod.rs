//! Markdown rendering pipeline.

pub mod html;
pub mod ids;

pub use html::HtmlRenderer;
pub use ids::HeadingIdQueue;

use comrak::Arena;

use crate::markdown::engine;
use crate::markdown::toc::{extract_toc, TocItem};

/// A rendered document body together with its table of contents.
#[derive(Debug, Clone)]
pub struct RenderedDoc {
    pub html: String,
    pub toc: Vec<TocItem>,
}

/// Render markdown to HTML with heading anchors bound to the extracted ToC.
///
/// This is the one entry point pages go through: extraction and rendering
/// happen against the same source text, so the sidebar ToC and the heading
/// ids in the body always agree.
pub fn render_document(content: &str, current_doc: Option<&str>) -> RenderedDoc {
    let toc = extract_toc(content);
    let arena = Arena::new();
    let root = engine::parse(&arena, content);
    let mut renderer = HtmlRenderer::new(&toc, current_doc);
    let html = renderer.render(root);
    RenderedDoc { html, toc }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toc_ids_match_rendered_anchors() {
        let doc = "## Install\n\n### Install\n\n## Install\n\n### ???\n";
        let rendered = render_document(doc, None);
        for item in &rendered.toc {
            assert!(
                rendered.html.contains(&format!(" id=\"{}\"", item.id)),
                "missing anchor for {}",
                item.id
            );
        }
    }

    #[test]
    fn test_empty_document_renders_empty() {
        let rendered = render_document("", None);
        assert!(rendered.html.is_empty());
        assert!(rendered.toc.is_empty());
    }
}
