//! Source discovery shared by builds and link checks.

use std::path::{Path, PathBuf};

use glob::Pattern;
use log::debug;
use walkdir::WalkDir;

use crate::utils::error::{BoxResult, DocshelfError};

/// Files found under the docs root, split by how the build treats them.
#[derive(Debug, Default)]
pub struct SourceSet {
    /// Markdown documents, relative to the docs root.
    pub markdown: Vec<PathBuf>,
    /// Everything else, copied through verbatim.
    pub assets: Vec<PathBuf>,
}

/// Walk the docs root and classify every file, honoring the configured
/// exclude patterns. Paths come back relative to the docs root in a
/// stable sorted order.
pub fn collect_sources(docs_root: &Path, exclude: &[String]) -> BoxResult<SourceSet> {
    let patterns = compile_patterns(exclude)?;
    let mut set = SourceSet::default();

    for entry in WalkDir::new(docs_root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(docs_root)?.to_path_buf();
        let relative_str = posix_string(&relative);

        if is_excluded(&relative_str, &patterns) {
            debug!("Excluding {}", relative_str);
            continue;
        }

        if relative_str.to_lowercase().ends_with(".md") {
            set.markdown.push(relative);
        } else {
            set.assets.push(relative);
        }
    }

    Ok(set)
}

/// Forward-slash form of a relative path, as used in routes and links.
pub fn posix_string(path: &Path) -> String {
    path.iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// A pattern excludes a file when it matches the full relative path or
/// any of its leading directory paths, so `drafts` shadows everything
/// under `drafts/`.
fn is_excluded(relative: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|pattern| {
        let mut prefix = String::new();
        for part in relative.split('/') {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(part);
            if pattern.matches(&prefix) {
                return true;
            }
        }
        false
    })
}

fn compile_patterns(exclude: &[String]) -> BoxResult<Vec<Pattern>> {
    exclude
        .iter()
        .map(|raw| {
            Pattern::new(raw).map_err(|err| {
                DocshelfError::Config(format!("invalid exclude pattern '{}': {}", raw, err)).into()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn docs_tree(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for path in files {
            let full = dir.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, "content").unwrap();
        }
        dir
    }

    #[test]
    fn test_markdown_and_assets_split() {
        let dir = docs_tree(&["README.md", "guides/setup.md", "guides/diagram.svg"]);
        let set = collect_sources(dir.path(), &[]).unwrap();

        let markdown: Vec<String> = set.markdown.iter().map(|p| posix_string(p)).collect();
        let assets: Vec<String> = set.assets.iter().map(|p| posix_string(p)).collect();
        assert_eq!(markdown, vec!["README.md", "guides/setup.md"]);
        assert_eq!(assets, vec!["guides/diagram.svg"]);
    }

    #[test]
    fn test_uppercase_extension_counts_as_markdown() {
        let dir = docs_tree(&["NOTES.MD"]);
        let set = collect_sources(dir.path(), &[]).unwrap();
        assert_eq!(set.markdown.len(), 1);
        assert!(set.assets.is_empty());
    }

    #[test]
    fn test_exclude_patterns() {
        let dir = docs_tree(&["README.md", "scratch.tmp", "drafts/wip.md", "drafts/img.png"]);
        let exclude = vec!["*.tmp".to_string(), "drafts".to_string()];
        let set = collect_sources(dir.path(), &exclude).unwrap();

        let markdown: Vec<String> = set.markdown.iter().map(|p| posix_string(p)).collect();
        assert_eq!(markdown, vec!["README.md"]);
        assert!(set.assets.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let dir = docs_tree(&["README.md"]);
        let exclude = vec!["[".to_string()];
        assert!(collect_sources(dir.path(), &exclude).is_err());
    }

    #[test]
    fn test_order_is_stable() {
        let dir = docs_tree(&["b.md", "a.md", "c/inner.md"]);
        let set = collect_sources(dir.path(), &[]).unwrap();
        let markdown: Vec<String> = set.markdown.iter().map(|p| posix_string(p)).collect();
        assert_eq!(markdown, vec!["a.md", "b.md", "c/inner.md"]);
    }
}
