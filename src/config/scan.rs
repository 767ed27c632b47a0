//! Scanning configuration.
//!
//! Options that affect how the directory walk is presented while it runs.

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Hide the progress spinner shown while the tree is walked
    pub quiet: bool,
}
