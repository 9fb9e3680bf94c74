//! Posix-style string path helpers.
//!
//! Document locations and markdown link targets are tracked as posix-style
//! relative strings (`guides/intro.md`) so that slug handling and link
//! rewriting behave the same on every platform. These helpers mirror the
//! posix path rules for the few operations the docs pipeline needs.

/// Normalize a posix-style path string, resolving `.` and `..` components.
///
/// Leading `..` components that would escape the starting point are kept
/// (`../outside.md` stays `../outside.md`), which is what lets callers detect
/// root escapes after normalization. An input that collapses to nothing
/// (e.g. `"."`) normalizes to the empty string.
pub fn normalize(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();

    for component in path.split('/') {
        match component {
            "" | "." => continue,
            ".." => {
                match stack.last() {
                    Some(&last) if last != ".." => {
                        stack.pop();
                    }
                    _ => stack.push(".."),
                }
            }
            other => stack.push(other),
        }
    }

    stack.join("/")
}

/// Join two posix-style path fragments without normalizing.
///
/// Callers are expected to run the result through [`normalize`].
pub fn join(base: &str, path: &str) -> String {
    if base.is_empty() {
        path.to_string()
    } else if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Return the directory portion of a posix-style path.
///
/// `guides/intro.md` → `guides`; a bare file name has the directory `.`
/// (matching posix `dirname`).
pub fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => ".",
    }
}

/// True when a normalized path points above its starting directory.
pub fn escapes_root(normalized: &str) -> bool {
    normalized == ".." || normalized.starts_with("../")
}

/// Strip an ASCII suffix case-insensitively, returning `None` when the
/// suffix is absent. Used for `.md` and `/README` handling.
pub fn strip_suffix_ci<'a>(input: &'a str, suffix: &str) -> Option<&'a str> {
    let bytes = input.as_bytes();
    let tail = suffix.as_bytes();
    if bytes.len() >= tail.len() && bytes[bytes.len() - tail.len()..].eq_ignore_ascii_case(tail) {
        Some(&input[..input.len() - tail.len()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_resolves_dots() {
        assert_eq!(normalize("guides/./setup.md"), "guides/setup.md");
        assert_eq!(normalize("guides/../setup.md"), "setup.md");
        assert_eq!(normalize("a/b/../../c"), "c");
        assert_eq!(normalize("./README.md"), "README.md");
    }

    #[test]
    fn test_normalize_keeps_escaping_components() {
        assert_eq!(normalize("../outside.md"), "../outside.md");
        assert_eq!(normalize("a/../../b"), "../b");
        assert_eq!(normalize(".."), "..");
    }

    #[test]
    fn test_normalize_collapses_to_empty() {
        assert_eq!(normalize("."), "");
        assert_eq!(normalize("a/.."), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("guides", "setup.md"), "guides/setup.md");
        assert_eq!(join("", "setup.md"), "setup.md");
        assert_eq!(join("guides", ""), "guides");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("guides/intro.md"), "guides");
        assert_eq!(dirname("a/b/c.md"), "a/b");
        assert_eq!(dirname("README.md"), ".");
        assert_eq!(dirname("/rooted"), "/");
    }

    #[test]
    fn test_escapes_root() {
        assert!(escapes_root(".."));
        assert!(escapes_root("../outside.md"));
        assert!(!escapes_root("guides/setup.md"));
        assert!(!escapes_root("..hidden"));
    }

    #[test]
    fn test_strip_suffix_ci() {
        assert_eq!(strip_suffix_ci("setup.md", ".md"), Some("setup"));
        assert_eq!(strip_suffix_ci("SETUP.MD", ".md"), Some("SETUP"));
        assert_eq!(strip_suffix_ci("api/README", "/readme"), Some("api"));
        assert_eq!(strip_suffix_ci("setup.txt", ".md"), None);
        assert_eq!(strip_suffix_ci("md", ".md"), None);
    }
}
