//! Page layout and embedded assets.

pub mod page;

pub use page::render_page;

/// Route the embedded stylesheet is served and linked under.
pub const STYLESHEET_ROUTE: &str = "/assets/docshelf.css";

/// The site stylesheet, compiled into the binary so serving and building
/// need no asset directory.
pub const STYLESHEET: &str = include_str!("docshelf.css");
