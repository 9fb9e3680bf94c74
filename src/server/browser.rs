//! Opening the served site in a browser.

use std::process::Command;

use log::debug;

/// Best-effort browser launch; returns whether the spawn succeeded.
pub fn open_browser(url: &str) -> bool {
    let result = if cfg!(target_os = "macos") {
        Command::new("open").arg(url).spawn()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", url]).spawn()
    } else {
        Command::new("xdg-open").arg(url).spawn()
    };

    match result {
        Ok(_) => {
            debug!("Opened browser for {}", url);
            true
        }
        Err(err) => {
            debug!("Could not open browser: {}", err);
            false
        }
    }
}
