//! Orphan detection and deletion pipeline.
//!
//! This module provides:
//! - Discovery of candidate and project descriptor files
//! - Exception filtering of protected files and subtrees
//! - Extraction of file references from project descriptors
//! - Orphan resolution and the deletion pass

mod executor;
mod filter;
mod paths;
mod pipeline;
mod project;
mod resolver;
mod walker;

pub use executor::{DeleteExecutor, DeleteOptions, DeleteResult, SweepSummary};
pub use filter::ExceptionFilter;
pub use pipeline::{plan, SweepPlan};
pub use project::extract_references;
pub use resolver::{resolve_orphans, ReferenceSet};
pub use walker::{discover, DiscoveredFiles};
