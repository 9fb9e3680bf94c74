//! Markdown processing for the docs site.
//!
//! Raw markdown goes through two coordinated passes: a line-level scan
//! that extracts the table of contents and assigns anchor ids, and an
//! AST render that binds those same ids onto the h2/h3 elements while
//! rewriting relative links to site paths.

pub mod engine;
pub mod links;
pub mod renderer;
pub mod text;
pub mod toc;

pub use renderer::{render_document, RenderedDoc};
pub use toc::{extract_toc, TocItem};
