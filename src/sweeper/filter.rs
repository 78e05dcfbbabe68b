//! Exception filter for removing protected files from the candidate set.

use std::path::{Path, PathBuf};

use crate::config::ExclusionConfig;

use super::paths::comparison_key;

/// Removes files that must never be treated as deletion candidates:
/// descriptor and companion files, and anything under an excluded subtree.
///
/// Subtree exclusion is a case-insensitive string-prefix match of the file's
/// containing directory against `root/<name>`, mirroring how the exclusion
/// list has always been applied.
pub struct ExceptionFilter {
    excluded_extensions: Vec<String>,
    excluded_prefixes: Vec<String>,
}

impl ExceptionFilter {
    /// Build a filter for `root` from the exclusion configuration.
    pub fn new(root: &Path, descriptor_extension: &str, exclusions: &ExclusionConfig) -> Self {
        let mut excluded_extensions: Vec<String> = exclusions
            .companion_extensions
            .iter()
            .map(|e| e.to_lowercase())
            .collect();
        excluded_extensions.push(descriptor_extension.to_lowercase());

        let mut excluded_prefixes: Vec<String> = exclusions
            .directory_names
            .iter()
            .map(|name| comparison_key(&root.join(name)))
            .collect();
        excluded_prefixes.extend(
            exclusions
                .nested_paths
                .iter()
                .map(|rel| comparison_key(&root.join(rel))),
        );

        Self {
            excluded_extensions,
            excluded_prefixes,
        }
    }

    /// Filter the candidate list, preserving input order.
    pub fn apply(&self, candidates: Vec<PathBuf>) -> Vec<PathBuf> {
        tracing::debug!(
            total = candidates.len(),
            "Filtering out exception files"
        );

        let kept: Vec<PathBuf> = candidates
            .into_iter()
            .filter(|path| !self.is_excluded(path))
            .collect();

        tracing::debug!(kept = kept.len(), "Exception filtering complete");
        kept
    }

    /// Check whether a single path is excluded.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext = ext.to_string_lossy().to_lowercase();
            if self.excluded_extensions.contains(&ext) {
                return true;
            }
        }

        if let Some(parent) = path.parent() {
            let dir_key = comparison_key(parent);
            if self
                .excluded_prefixes
                .iter()
                .any(|prefix| dir_key.starts_with(prefix))
            {
                return true;
            }
        }

        false
    }
}
