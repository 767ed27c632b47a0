//! Configuration types and options for the application.
//!
//! This module contains the option structures produced by the CLI and consumed
//! by the scanner and the orchestrator.

pub mod execution;
pub mod scan;

pub use execution::ExecutionOptions;
pub use scan::ScanOptions;

/// Options for a single run of the orchestrator.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// How the directory walk is presented
    pub scan: ScanOptions,

    /// How confirmation and deletion proceed
    pub execution: ExecutionOptions,
}
