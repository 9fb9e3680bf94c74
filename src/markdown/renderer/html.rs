//! AST-to-HTML rendering with the site's markdown hooks.
//!
//! Walks the engine's AST directly instead of using the stock formatter,
//! because several hooks need structure the finished HTML no longer has:
//! h2/h3 elements take their anchor ids from the heading id queue, link
//! targets go through the rewriter, bullet items lose decorative
//! checkmark prefixes, and fenced code picks up a language badge. Raw
//! HTML in the source is dropped rather than passed through.

use comrak::nodes::{AstNode, ListType, NodeValue};
use html_escape::{encode_double_quoted_attribute, encode_text};
use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::links::{is_external, rewrite_asset_href, rewrite_href};
use crate::markdown::renderer::ids::HeadingIdQueue;
use crate::markdown::text::strip_decorations;
use crate::markdown::toc::TocItem;

lazy_static! {
    static ref CHECKLIST_PREFIX_REGEX: Regex = Regex::new(r"^\s*(✅|☑️|✔️)\s*").unwrap();
}

pub struct HtmlRenderer<'d> {
    ids: HeadingIdQueue,
    current_doc: Option<&'d str>,
}

impl<'d> HtmlRenderer<'d> {
    /// `toc` seeds the heading id queue; `current_doc` is the docs-root
    /// relative path links resolve against.
    pub fn new(toc: &[TocItem], current_doc: Option<&'d str>) -> Self {
        HtmlRenderer {
            ids: HeadingIdQueue::from_toc(toc),
            current_doc,
        }
    }

    pub fn render<'a>(&mut self, root: &'a AstNode<'a>) -> String {
        let mut out = String::new();
        self.render_children(root, &mut out);
        out
    }

    fn render_children<'a>(&mut self, node: &'a AstNode<'a>, out: &mut String) {
        for child in node.children() {
            self.render_node(child, out);
        }
    }

    fn render_to_string<'a>(&mut self, node: &'a AstNode<'a>) -> String {
        let mut out = String::new();
        self.render_children(node, &mut out);
        out
    }

    fn render_node<'a>(&mut self, node: &'a AstNode<'a>, out: &mut String) {
        let data = node.data.borrow();
        match &data.value {
            NodeValue::Document => self.render_children(node, out),
            NodeValue::Heading(heading) => self.render_heading(node, heading.level, out),
            NodeValue::Paragraph => {
                let inner = self.render_to_string(node);
                out.push_str(&format!("<p>{}</p>", inner));
            }
            NodeValue::Text(literal) => out.push_str(&encode_text(literal)),
            NodeValue::SoftBreak => out.push('\n'),
            NodeValue::LineBreak => out.push_str("<br />"),
            NodeValue::Emph => {
                let inner = self.render_to_string(node);
                out.push_str(&format!("<em>{}</em>", inner));
            }
            NodeValue::Strong => {
                let inner = self.render_to_string(node);
                out.push_str(&format!("<strong>{}</strong>", inner));
            }
            NodeValue::Strikethrough => {
                let inner = self.render_to_string(node);
                out.push_str(&format!("<del>{}</del>", inner));
            }
            NodeValue::Code(code) => {
                out.push_str(&format!(
                    "<code class=\"doc-code-inline\">{}</code>",
                    encode_text(&code.literal)
                ));
            }
            NodeValue::CodeBlock(block) => self.render_code_block(&block.info, &block.literal, out),
            NodeValue::Link(link) => self.render_link(node, &link.url, &link.title, out),
            NodeValue::Image(link) => {
                let src = rewrite_asset_href(&link.url, self.current_doc);
                let alt = collect_text(node);
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\"",
                    encode_double_quoted_attribute(&src),
                    encode_double_quoted_attribute(&alt)
                ));
                if !link.title.is_empty() {
                    out.push_str(&format!(
                        " title=\"{}\"",
                        encode_double_quoted_attribute(&link.title)
                    ));
                }
                out.push_str(" />");
            }
            NodeValue::List(list) => {
                let start = list.start;
                let ordered = list.list_type == ListType::Ordered;
                let inner = self.render_to_string(node);
                if ordered {
                    if start == 1 {
                        out.push_str(&format!("<ol class=\"doc-list-ordered\">{}</ol>", inner));
                    } else {
                        out.push_str(&format!(
                            "<ol class=\"doc-list-ordered\" start=\"{}\">{}</ol>",
                            start, inner
                        ));
                    }
                } else {
                    out.push_str(&format!("<ul class=\"doc-list\">{}</ul>", inner));
                }
            }
            NodeValue::Item(_) => self.render_item(node, None, out),
            NodeValue::TaskItem(symbol) => self.render_item(node, Some(symbol.is_some()), out),
            NodeValue::BlockQuote => {
                let inner = self.render_to_string(node);
                out.push_str(&format!("<blockquote class=\"doc-quote\">{}</blockquote>", inner));
            }
            NodeValue::ThematicBreak => out.push_str("<hr class=\"doc-rule\" />"),
            NodeValue::Table(_) => self.render_table(node, out),
            NodeValue::TableRow(_) | NodeValue::TableCell => self.render_children(node, out),
            // Raw HTML never reaches the output.
            NodeValue::HtmlBlock(_) | NodeValue::HtmlInline(_) => {}
            NodeValue::FootnoteDefinition(def) => {
                let inner = self.render_to_string(node);
                out.push_str(&format!(
                    "<div class=\"doc-footnote\" id=\"fn-{}\">{}</div>",
                    encode_double_quoted_attribute(&def.name),
                    inner
                ));
            }
            NodeValue::FootnoteReference(reference) => {
                out.push_str(&format!(
                    "<sup class=\"doc-footnote-ref\"><a href=\"#fn-{}\">{}</a></sup>",
                    encode_double_quoted_attribute(&reference.name),
                    encode_text(&reference.name)
                ));
            }
            _ => self.render_children(node, out),
        }
    }

    fn render_heading<'a>(&mut self, node: &'a AstNode<'a>, level: u8, out: &mut String) {
        let inner = self.render_to_string(node);
        if level == 2 || level == 3 {
            let text = strip_decorations(&collect_text(node));
            let id = self.ids.bind(level, &text);
            out.push_str(&format!(
                "<h{} id=\"{}\" class=\"doc-h{}\">{}</h{}>",
                level,
                encode_double_quoted_attribute(&id),
                level,
                inner,
                level
            ));
        } else {
            out.push_str(&format!("<h{}>{}</h{}>", level, inner, level));
        }
    }

    fn render_link<'a>(&mut self, node: &'a AstNode<'a>, url: &str, title: &str, out: &mut String) {
        let href = rewrite_href(url, self.current_doc);
        let external = is_external(&href);
        let inner = self.render_to_string(node);

        out.push_str(&format!("<a href=\"{}\"", encode_double_quoted_attribute(&href)));
        if !title.is_empty() {
            out.push_str(&format!(" title=\"{}\"", encode_double_quoted_attribute(title)));
        }
        if external {
            out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
        }
        out.push('>');
        out.push_str(&inner);
        if external {
            out.push_str("<span class=\"doc-external-mark\">\u{2197}</span>");
        }
        out.push_str("</a>");
    }

    fn render_code_block(&mut self, info: &str, literal: &str, out: &mut String) {
        let language = info.split_whitespace().next().unwrap_or("");
        let language = if language.is_empty() { "text" } else { language };
        out.push_str(&format!(
            "<figure class=\"doc-code\"><figcaption class=\"doc-code-bar\"><span>Code</span><span class=\"doc-code-lang\">{}</span></figcaption><pre><code class=\"language-{}\">{}</code></pre></figure>",
            encode_text(language),
            encode_double_quoted_attribute(language),
            encode_text(literal)
        ));
    }

    /// Bullet items drop a leading checkmark emoji so hand-written
    /// checklists read cleanly next to real task lists. Ordered items are
    /// left alone.
    fn render_item<'a>(&mut self, node: &'a AstNode<'a>, task_checked: Option<bool>, out: &mut String) {
        let list = parent_list_info(node);
        let tight = matches!(list, Some((_, true)));
        let bullet = matches!(list, Some((ListType::Bullet, _)));

        let mut inner = String::new();
        if let Some(checked) = task_checked {
            inner.push_str("<input type=\"checkbox\" disabled");
            if checked {
                inner.push_str(" checked");
            }
            inner.push_str(" /> ");
        }
        for child in node.children() {
            let unwrap_paragraph = tight && matches!(&child.data.borrow().value, NodeValue::Paragraph);
            if unwrap_paragraph {
                self.render_children(child, &mut inner);
            } else {
                self.render_node(child, &mut inner);
            }
        }

        let inner = if bullet && task_checked.is_none() {
            CHECKLIST_PREFIX_REGEX.replace(&inner, "").into_owned()
        } else {
            inner
        };

        if task_checked.is_some() {
            out.push_str(&format!("<li class=\"doc-task\">{}</li>", inner));
        } else {
            out.push_str(&format!("<li>{}</li>", inner));
        }
    }

    fn render_table<'a>(&mut self, node: &'a AstNode<'a>, out: &mut String) {
        let mut head = String::new();
        let mut body = String::new();

        for row in node.children() {
            let is_header = matches!(&row.data.borrow().value, NodeValue::TableRow(true));
            let tag = if is_header { "th" } else { "td" };
            let mut cells = String::new();
            for cell in row.children() {
                cells.push_str(&format!("<{}>{}</{}>", tag, self.render_to_string(cell), tag));
            }
            if is_header {
                head.push_str(&format!("<tr>{}</tr>", cells));
            } else {
                body.push_str(&format!("<tr>{}</tr>", cells));
            }
        }

        out.push_str("<div class=\"doc-table-wrap\"><table class=\"doc-table\">");
        if !head.is_empty() {
            out.push_str(&format!("<thead>{}</thead>", head));
        }
        if !body.is_empty() {
            out.push_str(&format!("<tbody>{}</tbody>", body));
        }
        out.push_str("</table></div>");
    }
}

/// Visible text of a node's descendants.
///
/// Mirrors what [`strip_decorations`] leaves behind for the same source:
/// code spans contribute their literal, raw HTML contributes nothing, and
/// line breaks count as spaces. Keeping the two in agreement is what makes
/// extracted ToC ids land on the rendered headings.
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.children() {
        push_node_text(child, &mut text);
    }
    text
}

fn push_node_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(literal) => out.push_str(literal),
        NodeValue::Code(code) => out.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
        NodeValue::HtmlInline(_) => {}
        _ => {
            for child in node.children() {
                push_node_text(child, out);
            }
        }
    }
}

fn parent_list_info<'a>(node: &'a AstNode<'a>) -> Option<(ListType, bool)> {
    let parent = node.parent()?;
    let data = parent.data.borrow();
    match &data.value {
        NodeValue::List(list) => Some((list.list_type, list.tight)),
        _ => None,
    }
}
