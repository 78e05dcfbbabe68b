//! Sweep command implementation.

use crate::cli::SweepArgs;
use crate::config::Config;
use crate::sweeper::{self, DeleteExecutor, DeleteOptions, DeleteResult};
use anyhow::Result;
use humansize::{format_size, BINARY};
use std::io::{self, Write};

/// Run the sweep command.
pub fn run(args: SweepArgs, config: &Config) -> Result<()> {
    if !args.path.is_dir() {
        eprintln!("Specified directory does not exist: {}", args.path.display());
        std::process::exit(3);
    }

    println!("Processing directory: {}", args.path.display());

    print!("Filtering out exceptions...");
    io::stdout().flush()?;
    let plan = sweeper::plan(&args.path, &args.extension, config)?;
    println!("Done!");

    if !args.force && !args.dry_run {
        println!(
            "!!! This utility will delete '.{}' files under '{}' !!!",
            plan.extension,
            plan.root.display()
        );
        print!("Do you want to continue? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("User cancelled");
            std::process::exit(4);
        }
    }

    if args.dry_run {
        println!("\n[DRY RUN] Would delete:");
    }

    let executor = DeleteExecutor::new(DeleteOptions {
        dry_run: args.dry_run,
    });
    let results = executor.delete_all(&plan.orphans);

    for result in &results {
        match result {
            DeleteResult::Deleted { path, .. } => println!("{}", path.display()),
            DeleteResult::Failed { path, error } => {
                eprintln!("Error deleting {}: {}", path.display(), error)
            }
        }
    }

    let summary = DeleteExecutor::summarize(&results);

    println!();
    println!("Total number of files on disk: {}", plan.total_on_disk);
    println!("Number of orphaned files: {}", plan.orphans.len());
    println!("Total length: {} Kb", summary.total_kb());
    println!("Total length: {} Mb", summary.total_mb());
    println!(
        "{}: {}",
        if args.dry_run { "Would free" } else { "Freed" },
        format_size(summary.total_bytes, BINARY)
    );

    if summary.failed_count > 0 {
        eprintln!(
            "Failed to delete {} file{}",
            summary.failed_count,
            if summary.failed_count == 1 { "" } else { "s" }
        );
        std::process::exit(5); // Partial failure
    }

    println!("\nProcessing complete!");

    Ok(())
}
