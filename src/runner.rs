//! The scan, confirm and delete sequence.

use std::{io::BufRead, path::Path, sync::Arc};

use crate::{
    cleaner::{Cleaner, DeletionHandle},
    config::RunOptions,
    output::Output,
    prompt::confirm_delete,
    scanner::Scanner,
};

/// Where a run stopped.
pub enum RunOutcome {
    /// The scan found nothing; no prompt was shown
    Empty,

    /// The user declined; nothing was deleted
    Cancelled,

    /// Deletions were started and may still be running
    Deleting(DeletionHandle),
}

impl RunOutcome {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The in-flight deletions, if the run got that far.
    #[must_use]
    pub fn into_handle(self) -> Option<DeletionHandle> {
        match self {
            Self::Deleting(handle) => Some(handle),
            Self::Empty | Self::Cancelled => None,
        }
    }
}

/// Find build folders under `root`, ask for confirmation, then delete them.
///
/// Returns as soon as the deletions have been issued. Wait on the handle in
/// [`RunOutcome::Deleting`] to learn how they went.
///
/// `input` is only read when there is something to confirm and
/// `assume_yes` is off. It is dropped before this function returns.
pub fn run<R: BufRead>(
    root: &Path,
    input: R,
    output: Arc<dyn Output>,
    options: &RunOptions,
) -> RunOutcome {
    let scanner = Scanner::new(options.scan.clone());
    let folders = scanner.scan(root, output.as_ref());

    if folders.is_empty() {
        output.info("Folders not found.");
        return RunOutcome::Empty;
    }

    let confirmed =
        options.execution.assume_yes || confirm_delete(&folders, input, output.as_ref());

    if !confirmed {
        output.info("Deletion cancelled by user.");
        return RunOutcome::Cancelled;
    }

    RunOutcome::Deleting(Cleaner::spawn(&folders, output))
}
