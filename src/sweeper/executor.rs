//! Deletion pass over resolved orphans.

use std::fs;
use std::path::PathBuf;

/// Result of deleting a single orphan.
#[derive(Debug, Clone)]
pub enum DeleteResult {
    /// File was deleted (or would be, under dry-run).
    Deleted { path: PathBuf, bytes: u64 },
    /// Deletion failed; the pass continues with the remaining files.
    Failed { path: PathBuf, error: String },
}

/// Options for the deletion pass.
#[derive(Debug, Clone, Default)]
pub struct DeleteOptions {
    /// If true, don't actually delete anything.
    pub dry_run: bool,
}

/// Totals accumulated over a deletion pass.
#[derive(Debug, Clone, Default)]
pub struct SweepSummary {
    pub deleted_count: usize,
    pub failed_count: usize,
    pub total_bytes: u64,
}

impl SweepSummary {
    /// Total size in whole kilobytes, truncating.
    pub fn total_kb(&self) -> u64 {
        self.total_bytes / 1024
    }

    /// Total size in whole megabytes, truncating.
    pub fn total_mb(&self) -> u64 {
        self.total_bytes / 1024 / 1024
    }
}

/// Executor for the deletion pass.
///
/// Failures are collected rather than aborting: deleting the remaining
/// orphans is still correct when one file is locked or already gone.
pub struct DeleteExecutor {
    options: DeleteOptions,
}

impl DeleteExecutor {
    pub fn new(options: DeleteOptions) -> Self {
        Self { options }
    }

    /// Delete each orphan in order, returning one result per file.
    pub fn delete_all(&self, orphans: &[PathBuf]) -> Vec<DeleteResult> {
        orphans.iter().map(|path| self.delete_one(path)).collect()
    }

    fn delete_one(&self, path: &PathBuf) -> DeleteResult {
        let bytes = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                return DeleteResult::Failed {
                    path: path.clone(),
                    error: e.to_string(),
                }
            }
        };

        if !self.options.dry_run {
            if let Err(e) = fs::remove_file(path) {
                tracing::warn!("Failed to delete {}: {}", path.display(), e);
                return DeleteResult::Failed {
                    path: path.clone(),
                    error: e.to_string(),
                };
            }
        }

        DeleteResult::Deleted {
            path: path.clone(),
            bytes,
        }
    }

    /// Accumulate totals over a pass.
    pub fn summarize(results: &[DeleteResult]) -> SweepSummary {
        let mut summary = SweepSummary::default();
        for result in results {
            match result {
                DeleteResult::Deleted { bytes, .. } => {
                    summary.deleted_count += 1;
                    summary.total_bytes += bytes;
                }
                DeleteResult::Failed { .. } => summary.failed_count += 1,
            }
        }
        summary
    }
}
