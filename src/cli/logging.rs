use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging for the chosen verbosity. Verbose wins over quiet.
pub fn init_logging(verbose: bool, quiet: bool) -> LevelFilter {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let _ = SimpleLogger::new().with_level(level).init();
    level
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
