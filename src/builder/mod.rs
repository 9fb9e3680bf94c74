pub mod check;
pub mod clean;
pub mod site;
pub mod sources;

pub use check::{check_site, BrokenLink};
pub use clean::clean_site;
pub use site::{build_site, BuildStats};
