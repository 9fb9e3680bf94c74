//! Site configuration types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::docs::nav::NavSection;

/// Top-level configuration, usually loaded from `docshelf.yml`.
///
/// Every field has a default so an empty or missing config file yields a
/// servable site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name shown in the top bar and page titles.
    #[serde(default = "defaults::title")]
    pub title: String,

    /// One-line site description. Also the fallback lead paragraph for
    /// documents with no usable body text.
    #[serde(default = "defaults::description")]
    pub description: String,

    /// Directory holding the markdown sources, relative to the project.
    #[serde(default = "defaults::docs_dir")]
    pub docs_dir: String,

    /// Output directory for `build`, relative to the project.
    #[serde(default = "defaults::destination")]
    pub destination: String,

    /// Glob patterns (relative to `docs_dir`) excluded from builds.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Sidebar sections in reading order; also drives previous/next links.
    #[serde(default = "defaults::nav")]
    pub nav: Vec<NavSection>,

    #[serde(default)]
    pub server: ServerSection,
}

/// The `server:` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "defaults::host")]
    pub host: String,
    #[serde(default = "defaults::port")]
    pub port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            title: defaults::title(),
            description: defaults::description(),
            docs_dir: defaults::docs_dir(),
            destination: defaults::destination(),
            exclude: Vec::new(),
            nav: defaults::nav(),
            server: ServerSection::default(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        ServerSection {
            host: defaults::host(),
            port: defaults::port(),
        }
    }
}

impl SiteConfig {
    /// Absolute docs source directory.
    pub fn docs_root(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.docs_dir)
    }

    /// Absolute build output directory.
    pub fn destination_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: SiteConfig = serde_yaml::from_str("title: Example").unwrap();
        assert_eq!(config.title, "Example");
        assert_eq!(config.docs_dir, "docs");
        assert_eq!(config.destination, "_site");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.nav.len(), 1);
    }

    #[test]
    fn test_nav_from_yaml() {
        let yaml = r#"
nav:
  - title: User Guide
    icon: "📘"
    items:
      - title: Overview
        href: /docs/user-guide
        description: Basics
      - title: FAQ
        href: /docs/user-guide/faq
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.nav.len(), 1);
        assert_eq!(config.nav[0].items[0].description.as_deref(), Some("Basics"));
        assert!(config.nav[0].items[1].description.is_none());
    }

    #[test]
    fn test_paths_join_project_dir() {
        let config = SiteConfig::default();
        let root = Path::new("/srv/site");
        assert_eq!(config.docs_root(root), Path::new("/srv/site/docs"));
        assert_eq!(config.destination_dir(root), Path::new("/srv/site/_site"));
    }
}
