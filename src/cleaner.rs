//! Build folder deletion.
//!
//! This module removes confirmed build folders. Every folder gets its own
//! task on the rayon thread pool, so deletions run concurrently and finish in
//! no particular order. The caller gets a [`DeletionHandle`] back straight
//! away and decides whether to wait for the [`DeletionReport`].

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, mpsc},
};

use anyhow::Result;
use colored::Colorize;
use humansize::{DECIMAL, format_size};
use walkdir::WalkDir;

use crate::output::Output;

/// Result of deleting one folder.
#[derive(Debug)]
pub enum DeletionStatus {
    /// The folder is gone; `freed_bytes` is what it held just before removal
    Deleted { freed_bytes: u64 },

    /// Removal failed
    Failed(anyhow::Error),
}

/// Outcome of a single deletion task.
#[derive(Debug)]
pub struct DeletionOutcome {
    pub path: PathBuf,
    pub status: DeletionStatus,
}

impl DeletionOutcome {
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self.status, DeletionStatus::Deleted { .. })
    }
}

/// In-flight deletions started by [`Cleaner::spawn`].
pub struct DeletionHandle {
    receiver: mpsc::Receiver<DeletionOutcome>,
    issued: usize,
}

impl DeletionHandle {
    /// Number of deletion tasks that were started.
    #[must_use]
    pub const fn issued(&self) -> usize {
        self.issued
    }

    /// Block until every task has finished and collect their outcomes.
    ///
    /// Outcomes are in completion order, not input order.
    #[must_use]
    pub fn wait(self) -> DeletionReport {
        DeletionReport {
            outcomes: self.receiver.into_iter().collect(),
            issued: self.issued,
        }
    }
}

/// Collected outcomes of a batch of deletions.
#[derive(Debug)]
pub struct DeletionReport {
    outcomes: Vec<DeletionOutcome>,
    issued: usize,
}

impl DeletionReport {
    #[must_use]
    pub fn outcomes(&self) -> &[DeletionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn deleted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_deleted()).count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.deleted_count()
    }

    /// Total bytes held by the folders that were deleted.
    #[must_use]
    pub fn freed_bytes(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                DeletionStatus::Deleted { freed_bytes } => freed_bytes,
                DeletionStatus::Failed(_) => 0,
            })
            .sum()
    }

    /// Print totals for the batch.
    pub fn print_summary(&self, output: &dyn Output) {
        output.info(&format!(
            "Deleted {} of {} folders, freed {}",
            self.deleted_count().to_string().green(),
            self.issued,
            format_size(self.freed_bytes(), DECIMAL).bright_green().bold()
        ));

        let failed = self.failed_count();
        if failed > 0 {
            output.info(&format!(
                "Failed to delete {} folders",
                failed.to_string().red()
            ));
        }
    }
}

/// Deletes build folders.
pub struct Cleaner;

impl Cleaner {
    /// Start one independent recursive delete per folder and return at once.
    ///
    /// Each task reports its own success or failure through `output`. A
    /// failure on one folder has no effect on the others, and nothing is
    /// rolled back. No existence check is made up front: a missing folder
    /// simply fails.
    #[must_use]
    pub fn spawn(folders: &[PathBuf], output: Arc<dyn Output>) -> DeletionHandle {
        let (sender, receiver) = mpsc::channel();

        for folder in folders {
            let sender = sender.clone();
            let output = Arc::clone(&output);
            let folder = folder.clone();

            rayon::spawn(move || {
                let outcome = delete_folder(folder, output.as_ref());
                // The handle may have been dropped without waiting.
                let _ = sender.send(outcome);
            });
        }

        DeletionHandle {
            receiver,
            issued: folders.len(),
        }
    }
}

/// Delete one folder and report the result.
fn delete_folder(path: PathBuf, output: &dyn Output) -> DeletionOutcome {
    let status = match remove_folder(&path) {
        Ok(freed_bytes) => {
            output.info(&format!("{} folder deleted successfully.", path.display()));
            DeletionStatus::Deleted { freed_bytes }
        }
        Err(e) => {
            output.error(
                &format!("Error occurred while deleting {}!", path.display()),
                &e,
            );
            DeletionStatus::Failed(e)
        }
    };

    DeletionOutcome { path, status }
}

/// Measure then recursively remove a folder.
fn remove_folder(path: &Path) -> Result<u64> {
    let size = calculate_directory_size(path);
    fs::remove_dir_all(path)?;
    Ok(size)
}

/// Sum the sizes of all files under `path`, skipping anything unreadable.
fn calculate_directory_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}
