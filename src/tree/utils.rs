//! Shared utility functions for tree walking

use std::path::Path;

/// Express `path` relative to `base`.
///
/// `base` is normalized to end with `/`. A path outside `base` comes back
/// unchanged. A trailing slash is dropped from the relative result.
pub fn relative_path(path: &str, base: &str) -> String {
    let mut base = base.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    match path.strip_prefix(base.as_str()) {
        Some(rel) => rel.strip_suffix('/').unwrap_or(rel).to_string(),
        None => path.to_string(),
    }
}

/// Final component of a path, ignoring a trailing slash.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Minimal wildcard match.
///
/// Supports exact equality, `*suffix` and `prefix*`. Any other wildcard
/// placement is compared literally.
pub fn match_pattern(candidate: &str, pattern: &str) -> bool {
    if candidate == pattern {
        return true;
    }

    if let Some(suffix) = pattern.strip_prefix('*')
        && candidate.ends_with(suffix)
    {
        return true;
    }

    if let Some(prefix) = pattern.strip_suffix('*')
        && candidate.starts_with(prefix)
    {
        return true;
    }

    false
}
