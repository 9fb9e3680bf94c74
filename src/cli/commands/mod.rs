mod build;
mod check;
mod clean;
mod serve;

pub use build::handle_build_command;
pub use check::handle_check_command;
pub use clean::handle_clean_command;
pub use serve::handle_serve_command;
