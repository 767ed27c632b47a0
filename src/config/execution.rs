//! Execution configuration for the deletion step.
//!
//! This module defines the options that control how the orchestrator moves
//! from the confirmation step to deletion.

/// Configuration for how a run proceeds once build folders are found.
#[derive(Clone, Debug, Default)]
pub struct ExecutionOptions {
    /// Skip the confirmation prompt and treat the answer as "yes"
    pub assume_yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_options_default_asks_for_confirmation() {
        let exec_opts = ExecutionOptions::default();

        assert!(!exec_opts.assume_yes);
    }

    #[test]
    fn test_execution_options_clone() {
        let original = ExecutionOptions { assume_yes: true };
        let cloned = original.clone();

        assert_eq!(original.assume_yes, cloned.assume_yes);
    }
}
