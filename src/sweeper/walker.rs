//! Directory walker for discovering candidate and descriptor files.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::paths::extension_matches;

/// Files discovered under a root directory, as absolute paths.
#[derive(Debug, Clone)]
pub struct DiscoveredFiles {
    /// Regular files matching the target extension, before any filtering.
    pub candidates: Vec<PathBuf>,
    /// Project descriptor files.
    pub descriptors: Vec<PathBuf>,
}

/// Recursively enumerate files under `root` matching the target extension
/// and, separately, the project descriptor extension.
///
/// `root` must already be an absolute, existing directory; existence is the
/// caller's responsibility. Unreadable entries are logged and skipped.
pub fn discover(root: &Path, extension: &str, descriptor_extension: &str) -> DiscoveredFiles {
    let mut candidates = Vec::new();
    let mut descriptors = Vec::new();

    for result in WalkDir::new(root) {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if extension_matches(path, extension) {
            candidates.push(path.to_path_buf());
        }
        if extension_matches(path, descriptor_extension) {
            descriptors.push(path.to_path_buf());
        }
    }

    // Walk order is filesystem-dependent; sort for stable output
    candidates.sort();
    descriptors.sort();

    DiscoveredFiles {
        candidates,
        descriptors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        File::create(root.join("a.tmp")).unwrap();
        File::create(root.join("b.TMP")).unwrap();
        File::create(root.join("keep.cpp")).unwrap();
        File::create(root.join("proj.vcxproj")).unwrap();

        fs::create_dir(root.join("sub")).unwrap();
        File::create(root.join("sub/c.tmp")).unwrap();
        File::create(root.join("sub/inner.vcxproj")).unwrap();

        dir
    }

    #[test]
    fn discovers_matching_files_recursively() {
        let dir = create_test_tree();
        let found = discover(dir.path(), "tmp", "vcxproj");

        assert_eq!(found.candidates.len(), 3);
        assert_eq!(found.descriptors.len(), 2);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = create_test_tree();
        let found = discover(dir.path(), "tmp", "vcxproj");

        assert!(found.candidates.iter().any(|p| p.ends_with("b.TMP")));
    }

    #[test]
    fn returns_absolute_paths() {
        let dir = create_test_tree();
        let found = discover(dir.path(), "tmp", "vcxproj");

        assert!(found.candidates.iter().all(|p| p.is_absolute()));
        assert!(found.descriptors.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn output_is_sorted() {
        let dir = create_test_tree();
        let found = discover(dir.path(), "tmp", "vcxproj");

        let mut sorted = found.candidates.clone();
        sorted.sort();
        assert_eq!(found.candidates, sorted);
    }

    #[test]
    fn directories_are_not_candidates() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("dir.tmp")).unwrap();
        File::create(dir.path().join("dir.tmp/file.tmp")).unwrap();

        let found = discover(dir.path(), "tmp", "vcxproj");

        assert_eq!(found.candidates.len(), 1);
        assert!(found.candidates[0].ends_with("file.tmp"));
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let found = discover(dir.path(), "tmp", "vcxproj");

        assert!(found.candidates.is_empty());
        assert!(found.descriptors.is_empty());
    }
}
