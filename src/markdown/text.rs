//! Plain-text utilities shared by the ToC extractor, the heading id
//! binder, and the page model.
//!
//! The decoration stripper and the slugifier are the two primitives that
//! keep extraction and rendering in lockstep. Anything that computes a
//! heading id goes through these functions and nowhere else.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IMAGE_REGEX: Regex = Regex::new(r"!\[([^\]]*)\]\([^)]+\)").unwrap();
    static ref LINK_REGEX: Regex = Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap();
    static ref INLINE_CODE_REGEX: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref BOLD_REGEX: Regex = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    static ref ITALIC_REGEX: Regex = Regex::new(r"\*([^*]+)\*").unwrap();
    static ref HTML_TAG_REGEX: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref MARKUP_CHARS_REGEX: Regex = Regex::new(r"[#>*`\[\]()]").unwrap();
    static ref BARE_ENUMERATOR_REGEX: Regex = Regex::new(r"^\d+\.$").unwrap();
}

/// Punctuation removed outright by [`slugify`]. Hyphens and underscores
/// survive so existing anchor links keep working.
const STRIPPED_PUNCTUATION: &str = "`~!@#$%^&*()+=[]{}|\\;:'\",.<>/?";

/// Reading speed used for the estimated-minutes badge.
const WORDS_PER_MINUTE: f64 = 220.0;

/// Reduce a fragment of inline markdown to its visible text.
///
/// Images collapse to their alt text, links to their label, inline code
/// and emphasis markers to their contents, and HTML tags disappear. The
/// result is trimmed. Order matters: images before links, bold before
/// italic.
pub fn strip_decorations(text: &str) -> String {
    let text = IMAGE_REGEX.replace_all(text, "$1");
    let text = LINK_REGEX.replace_all(&text, "$1");
    let text = INLINE_CODE_REGEX.replace_all(&text, "$1");
    let text = BOLD_REGEX.replace_all(&text, "$1");
    let text = ITALIC_REGEX.replace_all(&text, "$1");
    let text = HTML_TAG_REGEX.replace_all(&text, "");
    text.trim().to_string()
}

/// Turn heading text into a url-safe anchor id.
///
/// Lowercases, drops the punctuation set above, converts whitespace runs
/// to single hyphens, and collapses hyphen runs. May return an empty
/// string when the input holds nothing but punctuation; callers supply a
/// positional fallback in that case.
pub fn slugify(text: &str) -> String {
    let mut slug = String::new();

    for c in text.to_lowercase().trim().chars() {
        if STRIPPED_PUNCTUATION.contains(c) {
            continue;
        }
        if c.is_whitespace() || c == '-' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else {
            slug.push(c);
        }
    }

    slug
}

/// Estimate reading time in whole minutes, never less than one.
///
/// Markup characters are blanked out before counting whitespace-separated
/// words at 220 words per minute.
pub fn reading_minutes(content: &str) -> usize {
    let cleaned = MARKUP_CHARS_REGEX.replace_all(content, " ");
    let words = cleaned.split_whitespace().count();
    let minutes = (words as f64 / WORDS_PER_MINUTE).round() as usize;
    std::cmp::max(1, minutes)
}

/// First body line of a document, stripped of inline markdown.
///
/// Skips blank lines, headings, rule/front-matter markers, and bare list
/// enumerators like `1.`. Returns `None` for documents with no usable
/// body text.
pub fn lead_paragraph(content: &str) -> Option<String> {
    for line in content.lines() {
        let stripped = strip_decorations(line.trim());
        if stripped.is_empty() {
            continue;
        }
        if stripped.starts_with('#') || stripped.starts_with("---") {
            continue;
        }
        if BARE_ENUMERATOR_REGEX.is_match(&stripped) {
            continue;
        }
        return Some(stripped);
    }
    None
}
