//! # clean-bin-obj
//!
//! Finds `bin/` and `obj/` build folders under a directory and deletes them
//! after asking for confirmation.
//!
//! ## Usage
//!
//! ```bash
//! # Clean the current directory
//! clean-bin-obj
//!
//! # Clean another directory without prompting
//! clean-bin-obj ~/src/MySolution --yes
//! ```

use std::{env, io, process::exit, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use clean_bin_obj::{
    cli::Cli,
    output::{ConsoleOutput, Output},
    runner::{RunOutcome, run},
};

/// Entry point for the clean-bin-obj application.
///
/// Errors from [`inner_main`] are printed to stderr before exiting with a
/// non-zero status code. Scan and deletion failures are not errors here:
/// they are reported as they happen and the run still exits cleanly.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Resolves the directory to scan
/// 3. Runs the scan, confirm and delete sequence against the terminal
/// 4. Waits for deletions to finish and prints a summary
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("Failed to determine the current directory")?,
    };

    let output: Arc<dyn Output> = Arc::new(ConsoleOutput);
    let outcome = run(
        &dir,
        io::stdin().lock(),
        Arc::clone(&output),
        &args.run_options(),
    );

    if let RunOutcome::Deleting(handle) = outcome {
        let report = handle.wait();
        report.print_summary(output.as_ref());
    }

    Ok(())
}
