//! Configuration loading.
//!
//! An explicit `--config` path always wins; otherwise the project
//! directory is probed for `docshelf.yml`, `docshelf.yaml`, then
//! `docshelf.toml`. No file at all is fine and yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::types::SiteConfig;
use crate::config::validation::validate_config;
use crate::utils::error::{BoxResult, DocshelfError};

const CONFIG_CANDIDATES: &[&str] = &["docshelf.yml", "docshelf.yaml", "docshelf.toml"];

pub fn load_config(project_dir: &Path, explicit: Option<&Path>) -> BoxResult<SiteConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(project_dir),
    };

    let config = match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            SiteConfig::default()
        }
    };

    validate_config(&config)?;
    Ok(config)
}

fn find_config(project_dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|candidate| project_dir.join(candidate))
        .find(|path| path.is_file())
}

fn parse_config_file(path: &Path) -> BoxResult<SiteConfig> {
    let raw = fs::read_to_string(path).map_err(|err| {
        DocshelfError::Config(format!("could not read {}: {}", path.display(), err))
    })?;

    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    let config = match extension {
        "yml" | "yaml" => serde_yaml::from_str(&raw).map_err(|err| {
            DocshelfError::Config(format!("invalid YAML in {}: {}", path.display(), err))
        })?,
        "toml" => toml::from_str(&raw).map_err(|err| {
            DocshelfError::Config(format!("invalid TOML in {}: {}", path.display(), err))
        })?,
        other => {
            return Err(DocshelfError::Config(format!(
                "unsupported config format '{}' for {}",
                other,
                path.display()
            ))
            .into())
        }
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.title, "Documentation");
    }

    #[test]
    fn test_yaml_config_discovered() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("docshelf.yml"), "title: Yaml Site\n").unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.title, "Yaml Site");
    }

    #[test]
    fn test_toml_config_discovered() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("docshelf.toml"), "title = \"Toml Site\"\n").unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.title, "Toml Site");
    }

    #[test]
    fn test_explicit_path_wins_over_candidates() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("docshelf.yml"), "title: Ignored\n").unwrap();
        let custom = dir.path().join("other.yaml");
        fs::write(&custom, "title: Chosen\n").unwrap();
        let config = load_config(dir.path(), Some(&custom)).unwrap();
        assert_eq!(config.title, "Chosen");
    }

    #[test]
    fn test_invalid_yaml_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("docshelf.yml"), "title: [unterminated\n").unwrap();
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("config.json5");
        fs::write(&custom, "{}").unwrap();
        let err = load_config(dir.path(), Some(&custom)).unwrap_err();
        assert!(err.to_string().contains("unsupported config format"));
    }
}
