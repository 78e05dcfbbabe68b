//! Project descriptor parsing.
//!
//! Descriptors are MSBuild-style XML documents with a default namespace.
//! File references live in top-level `ItemGroup` elements as `CustomBuild`,
//! `ClCompile` and `ClInclude` children carrying an `Include` attribute with
//! a path relative to the descriptor's own directory.

use std::path::{Path, PathBuf};

use crate::error::{Result, SweepError};

use super::paths::normalize;

/// Item element kinds whose `Include` attribute names a member file.
const FILE_ITEM_KINDS: &[&str] = &["CustomBuild", "ClCompile", "ClInclude"];

/// Extract the absolute paths of all files referenced by a project
/// descriptor.
///
/// Entries without an `Include` attribute are skipped. A descriptor with no
/// `ItemGroup` elements yields an empty list. Malformed XML is an error;
/// the caller decides whether that aborts the run.
pub fn extract_references(descriptor: &Path) -> Result<Vec<PathBuf>> {
    let descriptor_dir = descriptor
        .parent()
        .ok_or_else(|| SweepError::InvalidPath(descriptor.display().to_string()))?;

    let content = std::fs::read_to_string(descriptor).map_err(|e| SweepError::Io {
        path: descriptor.to_path_buf(),
        source: e,
    })?;

    let doc = roxmltree::Document::parse(&content).map_err(|e| SweepError::ProjectParse {
        path: descriptor.to_path_buf(),
        source: e,
    })?;

    let mut references = Vec::new();

    let item_groups = doc
        .root_element()
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "ItemGroup");

    for group in item_groups {
        for item in group.children().filter(|n| n.is_element()) {
            if !FILE_ITEM_KINDS.contains(&item.tag_name().name()) {
                continue;
            }

            if let Some(include) = item.attribute("Include") {
                // Descriptor paths use Windows separators
                let relative = include.replace('\\', "/");
                let absolute = normalize(&descriptor_dir.join(relative));
                references.push(absolute);
            }
        }
    }

    tracing::debug!(
        descriptor = %descriptor.display(),
        count = references.len(),
        "Extracted project references"
    );

    Ok(references)
}
