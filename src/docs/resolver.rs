//! Slug to file resolution.
//!
//! Maps a request slug onto a markdown file under the docs root without
//! ever trusting the slug as a path. Unsafe slugs short-circuit, every
//! candidate is normalized and containment-checked against the root, and
//! only not-found errors move resolution along to the next candidate.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::docs::slug::is_unsafe_slug;
use crate::utils::error::BoxResult;
use crate::utils::path as posix;

/// A markdown file pulled from the docs root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDoc {
    /// Raw markdown.
    pub content: String,
    /// Normalized docs-root-relative path, e.g. `guides/setup.md`.
    /// Relative links in the content resolve against its directory.
    pub relative_path: String,
}

/// Read access to one docs directory.
#[derive(Debug, Clone)]
pub struct DocStore {
    root: PathBuf,
}

impl DocStore {
    pub fn new(root: PathBuf) -> Self {
        DocStore { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a slug to a document.
    ///
    /// The empty slug reads the root `README.md`. A slug already ending in
    /// `.md` (exact case) is tried verbatim; anything else tries
    /// `{slug}.md` first and `{slug}/README.md` second. `Ok(None)` covers
    /// both unsafe slugs and files that do not exist; I/O failures other
    /// than not-found are returned as errors.
    pub fn resolve(&self, slug: &[String]) -> BoxResult<Option<LoadedDoc>> {
        if is_unsafe_slug(slug) {
            return Ok(None);
        }

        let joined = slug.join("/");
        let candidates: Vec<String> = if slug.is_empty() {
            vec!["README.md".to_string()]
        } else if joined.ends_with(".md") {
            vec![joined]
        } else {
            vec![format!("{}.md", joined), format!("{}/README.md", joined)]
        };

        for candidate in candidates {
            let normalized = posix::normalize(&candidate);
            if posix::escapes_root(&normalized) || normalized.is_empty() {
                continue;
            }

            let absolute = self.root.join(&normalized);
            if !absolute.starts_with(&self.root) {
                continue;
            }

            match fs::read_to_string(&absolute) {
                Ok(content) => {
                    return Ok(Some(LoadedDoc {
                        content,
                        relative_path: normalized,
                    }));
                }
                Err(err) if err.kind() == ErrorKind::NotFound => continue,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(None)
    }

    /// Resolve a slug to a non-markdown file for raw serving (images and
    /// other assets referenced from docs). Same guards as [`resolve`],
    /// but no candidate expansion: the slug must name the file exactly.
    ///
    /// [`resolve`]: DocStore::resolve
    pub fn resolve_file(&self, slug: &[String]) -> Option<PathBuf> {
        if slug.is_empty() || is_unsafe_slug(slug) {
            return None;
        }

        let normalized = posix::normalize(&slug.join("/"));
        if posix::escapes_root(&normalized) || normalized.is_empty() {
            return None;
        }

        let absolute = self.root.join(&normalized);
        if !absolute.starts_with(&self.root) {
            return None;
        }

        if absolute.is_file() {
            Some(absolute)
        } else {
            None
        }
    }
}
