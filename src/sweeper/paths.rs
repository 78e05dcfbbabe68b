//! Path normalization helpers.
//!
//! Candidate paths and descriptor references are compared case-insensitively,
//! so every path entering the pipeline is reduced to a normalized comparison
//! key first. Normalization is lexical: referenced files may not exist on
//! disk, which rules out `canonicalize`.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: resolve `.` and `..` components without
/// touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is left as-is
                if !result.pop() {
                    result.push(component.as_os_str());
                }
            }
            _ => result.push(component.as_os_str()),
        }
    }

    result
}

/// Case-insensitive comparison key for a path.
pub fn comparison_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

/// Check whether a path's extension equals `extension` case-insensitively.
/// `extension` must not include the dot.
pub fn extension_matches(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Strip a single leading dot from a user-supplied extension.
pub fn strip_dot(extension: &str) -> &str {
    extension.strip_prefix('.').unwrap_or(extension)
}
