//! Default configuration values.
//!
//! Collected in one place so the serde defaults and `SiteConfig::default`
//! cannot drift apart.

use crate::docs::nav::{NavItem, NavSection};

pub fn title() -> String {
    "Documentation".to_string()
}

pub fn description() -> String {
    "Technical docs for integration, operations, and development workflows.".to_string()
}

pub fn docs_dir() -> String {
    "docs".to_string()
}

pub fn destination() -> String {
    "_site".to_string()
}

pub fn host() -> String {
    "127.0.0.1".to_string()
}

pub fn port() -> u16 {
    4000
}

/// Minimal sidebar used when the config file defines no `nav`: a single
/// section pointing at the docs home.
pub fn nav() -> Vec<NavSection> {
    vec![NavSection {
        title: "Overview".to_string(),
        icon: "🧭".to_string(),
        items: vec![NavItem {
            title: "Documentation Home".to_string(),
            href: "/docs".to_string(),
            description: Some("Entry point for all guides".to_string()),
        }],
    }]
}
