//! Table of contents extraction.
//!
//! Scans raw markdown line by line for h2/h3 headings and assigns each a
//! stable anchor id. The renderer consumes the same id sequence through
//! the heading id queue, so the sidebar ToC always points at real anchors
//! in the rendered page.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::markdown::text::{slugify, strip_decorations};

lazy_static! {
    static ref HEADING_LINE_REGEX: Regex = Regex::new(r"^(#{2,3})\s+(.+)$").unwrap();
}

/// One ToC entry, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocItem {
    /// Anchor id, unique within the document.
    pub id: String,
    /// Heading text with inline markdown stripped.
    pub text: String,
    /// Heading level, 2 or 3.
    pub level: u8,
}

/// Extract h2/h3 headings from raw markdown.
///
/// Headings whose text strips down to nothing are skipped. Ids come from
/// [`slugify`], with `section-{line}` (1-based) as the fallback for
/// punctuation-only headings. Duplicate slugs get `-2`, `-3`, ... suffixes
/// in order of appearance; the first occurrence keeps the bare slug.
pub fn extract_toc(content: &str) -> Vec<TocItem> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut toc = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let caps = match HEADING_LINE_REGEX.captures(line) {
            Some(caps) => caps,
            None => continue,
        };

        let level = caps[1].len() as u8;
        let text = strip_decorations(&caps[2]);
        if text.is_empty() {
            continue;
        }

        let slug = slugify(&text);
        let base = if slug.is_empty() {
            format!("section-{}", index + 1)
        } else {
            slug
        };

        let count = seen.entry(base.clone()).or_insert(0);
        *count += 1;
        let id = if *count == 1 {
            base
        } else {
            format!("{}-{}", base, count)
        };

        toc.push(TocItem { id, text, level });
    }

    toc
}
