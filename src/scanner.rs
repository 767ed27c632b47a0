//! Directory scanning and build folder detection.
//!
//! This module walks a directory tree and collects every directory named
//! `bin` or `obj`. The walk is post-order: children are reported before the
//! directory that contains them.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::{config::ScanOptions, output::Output};

/// Directory names treated as build output.
pub const BUILD_FOLDER_NAMES: [&str; 2] = ["bin", "obj"];

/// A walked entry reduced to what matching needs.
struct WalkedEntry {
    path: PathBuf,
    is_dir: bool,
}

/// Directory scanner for build folders.
///
/// Symbolic links are never followed, so a link pointing back up the tree
/// cannot make the walk loop. A linked `bin` is not reported and a dangling
/// link is not an error.
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self { scan_options }
    }

    /// Scan a directory tree for build folders.
    ///
    /// Any I/O error during the walk aborts the whole scan: the error is
    /// reported through `output` and an empty list is returned. A partial
    /// list is never returned, since it could not be trusted to be complete.
    ///
    /// # Arguments
    ///
    /// * `root` - The directory to start scanning from. It is not itself tested.
    /// * `output` - Where the failure message goes
    ///
    /// # Returns
    ///
    /// The paths of every matching directory, in traversal order.
    pub fn scan(&self, root: &Path, output: &dyn Output) -> Vec<PathBuf> {
        let progress = self.progress_bar();

        let result = Self::collect_build_folders(root, &progress);

        progress.finish_and_clear();

        match result {
            Ok(folders) => folders,
            Err(e) => {
                output.error("Error occurred while gathering directory paths!", &e);
                Vec::new()
            }
        }
    }

    fn progress_bar(&self) -> ProgressBar {
        if self.scan_options.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Scanning directories...");
        pb
    }

    /// Walk `root` and return every build folder, or the first error hit.
    fn collect_build_folders(root: &Path, progress: &ProgressBar) -> Result<Vec<PathBuf>> {
        ensure!(
            fs::metadata(root)?.is_dir(),
            "{} is not a directory",
            root.display()
        );

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .contents_first(true)
            .sort_by_file_name();

        let entries = walker.into_iter().map(|entry| -> Result<WalkedEntry> {
            progress.tick();
            let entry = entry?;
            Ok(WalkedEntry {
                is_dir: entry.file_type().is_dir(),
                path: entry.into_path(),
            })
        });

        Self::gather_build_folders(entries)
    }

    /// Keep the build folders from `entries`, failing on the first error.
    ///
    /// Matches seen before the error are dropped along with the rest.
    fn gather_build_folders(
        entries: impl IntoIterator<Item = Result<WalkedEntry>>,
    ) -> Result<Vec<PathBuf>> {
        let mut folders = Vec::new();

        for entry in entries {
            let entry = entry?;

            if entry.is_dir && entry.path.file_name().is_some_and(Self::is_build_folder) {
                folders.push(entry.path);
            }
        }

        Ok(folders)
    }

    /// Whether a directory name is exactly one of [`BUILD_FOLDER_NAMES`].
    fn is_build_folder(name: &OsStr) -> bool {
        BUILD_FOLDER_NAMES.iter().any(|target| name == *target)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}
