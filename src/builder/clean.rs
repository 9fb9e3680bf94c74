//! Destination cleanup.

use std::path::Path;

use log::info;

use crate::config::SiteConfig;
use crate::utils::error::BoxResult;
use crate::utils::fs as site_fs;

/// Remove the build output directory.
pub fn clean_site(config: &SiteConfig, project_dir: &Path) -> BoxResult<()> {
    let destination = config.destination_dir(project_dir);
    if site_fs::is_directory(&destination) {
        info!("Removing {}", destination.display());
        site_fs::remove_directory(&destination)?;
    } else {
        info!("Nothing to clean at {}", destination.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_destination() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("_site");
        fs::create_dir_all(dest.join("docs")).unwrap();
        fs::write(dest.join("docs/index.html"), "stale").unwrap();

        clean_site(&SiteConfig::default(), dir.path()).unwrap();
        assert!(!dest.exists());
    }

    #[test]
    fn test_clean_without_destination_is_ok() {
        let dir = TempDir::new().unwrap();
        assert!(clean_site(&SiteConfig::default(), dir.path()).is_ok());
    }
}
