//! Configuration validation.
//!
//! Catches the mistakes that would otherwise surface as confusing
//! behavior later: a build that deletes its own sources, or nav links the
//! active-route matching can never highlight.

use crate::config::types::SiteConfig;
use crate::utils::error::{BoxResult, DocshelfError};

pub fn validate_config(config: &SiteConfig) -> BoxResult<()> {
    if config.docs_dir.trim().is_empty() {
        return Err(DocshelfError::Config("docs_dir must not be empty".to_string()).into());
    }

    if config.destination.trim().is_empty() {
        return Err(DocshelfError::Config("destination must not be empty".to_string()).into());
    }

    if config.destination == config.docs_dir {
        return Err(DocshelfError::Config(
            "destination must differ from docs_dir, builds clean the destination".to_string(),
        )
        .into());
    }

    for section in &config.nav {
        if section.title.trim().is_empty() {
            return Err(
                DocshelfError::Config("nav sections must have a title".to_string()).into(),
            );
        }
        for item in &section.items {
            if !item.href.starts_with('/') {
                return Err(DocshelfError::Config(format!(
                    "nav link '{}' must be site-absolute (start with '/')",
                    item.href
                ))
                .into());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::nav::{NavItem, NavSection};

    #[test]
    fn test_defaults_validate() {
        assert!(validate_config(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_docs_dir_rejected() {
        let config = SiteConfig {
            docs_dir: "  ".to_string(),
            ..SiteConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_destination_must_differ() {
        let config = SiteConfig {
            docs_dir: "docs".to_string(),
            destination: "docs".to_string(),
            ..SiteConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_relative_nav_href_rejected() {
        let config = SiteConfig {
            nav: vec![NavSection {
                title: "Broken".to_string(),
                icon: String::new(),
                items: vec![NavItem {
                    title: "Bad".to_string(),
                    href: "docs/bad".to_string(),
                    description: None,
                }],
            }],
            ..SiteConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("site-absolute"));
    }
}
