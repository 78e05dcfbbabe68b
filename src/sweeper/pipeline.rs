//! Pure planning pass: walk, filter, extract, resolve.
//!
//! Planning performs no deletion and no terminal interaction, so it can be
//! driven directly from tests and from non-interactive invocations. The
//! interactive shell and the deletion pass sit on top of the plan.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, SweepError};

use super::filter::ExceptionFilter;
use super::paths::strip_dot;
use super::project::extract_references;
use super::resolver::{resolve_orphans, ReferenceSet};
use super::walker::discover;

/// Result of the planning pass.
#[derive(Debug)]
pub struct SweepPlan {
    /// Canonical root directory that was processed.
    pub root: PathBuf,
    /// Target extension, dot-stripped.
    pub extension: String,
    /// Count of matching files on disk, before exception filtering.
    pub total_on_disk: usize,
    /// Number of project descriptors found.
    pub descriptor_count: usize,
    /// Candidate files classified as orphans, in candidate order.
    pub orphans: Vec<PathBuf>,
}

/// Compute the orphan set for `root` and `extension`.
///
/// Fails if the root does not exist or if any descriptor cannot be parsed;
/// a descriptor parse failure aborts the whole run, since deleting against
/// an incomplete reference set is never safe.
pub fn plan(root: &Path, extension: &str, config: &Config) -> Result<SweepPlan> {
    let root = root
        .canonicalize()
        .map_err(|_| SweepError::PathNotFound(root.to_path_buf()))?;
    let extension = strip_dot(extension);

    tracing::info!(root = %root.display(), extension, "Planning sweep");

    let discovered = discover(&root, extension, &config.descriptor.extension);
    let total_on_disk = discovered.candidates.len();

    let filter = ExceptionFilter::new(&root, &config.descriptor.extension, &config.exclusions);
    let candidates = filter.apply(discovered.candidates);

    let mut referenced = Vec::new();
    for descriptor in &discovered.descriptors {
        referenced.extend(extract_references(descriptor)?);
    }
    let references = ReferenceSet::from_paths(&referenced);

    let orphans = resolve_orphans(&candidates, &references);

    tracing::info!(
        total_on_disk,
        candidates = candidates.len(),
        descriptors = discovered.descriptors.len(),
        references = references.len(),
        orphans = orphans.len(),
        "Sweep planned"
    );

    Ok(SweepPlan {
        root,
        extension: extension.to_string(),
        total_on_disk,
        descriptor_count: discovered.descriptors.len(),
        orphans,
    })
}
