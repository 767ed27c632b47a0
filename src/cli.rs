//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ExecutionOptions, RunOptions, ScanOptions};

#[derive(Parser)]
struct ExecutionArgs {
    /// Don't ask for confirmation; delete every build folder found
    #[arg(short = 'y', long)]
    yes: bool,
}

#[derive(Parser)]
struct ScanningArgs {
    /// Hide the progress spinner while scanning
    #[arg(short = 'q', long)]
    quiet: bool,
}

#[derive(Parser)]
#[command(name = "clean-bin-obj")]
#[command(version, about = "Recursively find and delete bin and obj build folders")]
pub struct Cli {
    /// The directory to search for build folders [default: current directory]
    pub dir: Option<PathBuf>,

    /// Execution options
    #[command(flatten)]
    execution: ExecutionArgs,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    #[must_use]
    pub fn execution_options(&self) -> ExecutionOptions {
        ExecutionOptions {
            assume_yes: self.execution.yes,
        }
    }

    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            quiet: self.scanning.quiet,
        }
    }

    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            scan: self.scan_options(),
            execution: self.execution_options(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["clean-bin-obj"]);

        assert!(cli.dir.is_none());
        assert!(!cli.execution_options().assume_yes);
        assert!(!cli.scan_options().quiet);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from(["clean-bin-obj", "-y", "--quiet", "some/dir"]);
        let options = cli.run_options();

        assert_eq!(cli.dir, Some(PathBuf::from("some/dir")));
        assert!(options.execution.assume_yes);
        assert!(options.scan.quiet);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["clean-bin-obj", "--dry-run"]).is_err());
    }
}
