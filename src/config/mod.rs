//! Configuration loading, defaults, and validation.

pub mod defaults;
pub mod loader;
pub mod types;
pub mod validation;

pub use loader::load_config;
pub use types::{ServerSection, SiteConfig};
