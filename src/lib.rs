//! Orphan Sweeper - deletes build-artifact files not referenced by any
//! project descriptor.
//!
//! This crate provides functionality for:
//! - Discovering files by extension under a directory tree
//! - Extracting file references from MSBuild-style project descriptors
//! - Resolving and deleting orphaned files with a summary report

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod sweeper;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SweepError};
