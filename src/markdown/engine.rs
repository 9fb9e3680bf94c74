//! Comrak engine configuration.
//!
//! One options profile for the whole site, tuned for GitHub-flavored
//! sources. Two settings are load-bearing and must not drift: heading ids
//! stay off (the renderer binds them from the ToC queue) and smart
//! punctuation stays off (it would rewrite heading text between
//! extraction and rendering, so extracted ids would stop matching).

use comrak::nodes::AstNode;
use comrak::{parse_document, Arena, Options};

/// Comrak options for docs rendering.
pub fn create_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.header_ids = None;

    options.parse.smart = false;

    options
}

/// Parse markdown into the comrak AST.
pub fn parse<'a>(arena: &'a Arena<AstNode<'a>>, content: &str) -> &'a AstNode<'a> {
    parse_document(arena, content, &create_options())
}
