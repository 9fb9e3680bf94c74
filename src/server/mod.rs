//! HTTP serving of the docs site.

pub mod app;
pub mod browser;
pub mod core;
pub mod handlers;
pub mod middleware;
pub mod types;

pub use self::core::serve;
pub use types::ServeOptions;
