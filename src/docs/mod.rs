//! Document store, slug handling, navigation, and page assembly.

pub mod nav;
pub mod page;
pub mod resolver;
pub mod slug;

pub use page::{assemble, DocPage};
pub use resolver::{DocStore, LoadedDoc};
