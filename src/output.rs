//! Output sinks for user-facing messages.
//!
//! Every component writes through the [`Output`] trait instead of printing
//! directly, so the same code drives the terminal in the binary and an
//! in-memory recorder in tests.

use std::io::{self, Write};
use std::sync::Mutex;

use colored::Colorize;

/// Destination for informational lines, errors and interactive prompts.
///
/// Implementations must be shareable across threads because deletion tasks
/// report from the rayon pool.
pub trait Output: Send + Sync {
    /// Write a single informational line.
    fn info(&self, line: &str);

    /// Write an error message followed by its underlying cause.
    fn error(&self, message: &str, cause: &anyhow::Error);

    /// Write prompt text without a trailing newline and flush it.
    fn prompt(&self, text: &str);
}

/// Terminal output: info and prompts on stdout, errors on stderr.
#[derive(Clone, Copy, Default)]
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn info(&self, line: &str) {
        println!("{line}");
    }

    fn error(&self, message: &str, cause: &anyhow::Error) {
        eprintln!("{} {cause:#}", message.red());
    }

    fn prompt(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        // A broken stdout leaves nothing useful to report to.
        let _ = write!(stdout, "{text}");
        let _ = stdout.flush();
    }
}

/// A single line recorded by [`MemoryOutput`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLine {
    Info(String),
    Error { message: String, cause: String },
    Prompt(String),
}

/// Records everything written to it, in call order.
#[derive(Default)]
pub struct MemoryOutput {
    lines: Mutex<Vec<OutputLine>>,
}

impl MemoryOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, line: OutputLine) {
        // A poisoned lock still holds every line pushed before the panic.
        let mut lines = self
            .lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        lines.push(line);
    }

    /// Snapshot of every recorded line.
    #[must_use]
    pub fn lines(&self) -> Vec<OutputLine> {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Only the informational lines.
    #[must_use]
    pub fn infos(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                OutputLine::Info(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Only the error messages, without their causes.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                OutputLine::Error { message, .. } => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Only the prompt texts.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                OutputLine::Prompt(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}

impl Output for MemoryOutput {
    fn info(&self, line: &str) {
        self.push(OutputLine::Info(line.to_string()));
    }

    fn error(&self, message: &str, cause: &anyhow::Error) {
        self.push(OutputLine::Error {
            message: message.to_string(),
            cause: format!("{cause:#}"),
        });
    }

    fn prompt(&self, text: &str) {
        self.push(OutputLine::Prompt(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_output_keeps_call_order() {
        let output = MemoryOutput::new();

        output.info("first");
        output.prompt("question?");
        output.error("failed", &anyhow::anyhow!("disk on fire"));
        output.info("second");

        assert_eq!(
            output.lines(),
            vec![
                OutputLine::Info("first".to_string()),
                OutputLine::Prompt("question?".to_string()),
                OutputLine::Error {
                    message: "failed".to_string(),
                    cause: "disk on fire".to_string(),
                },
                OutputLine::Info("second".to_string()),
            ]
        );
    }

    #[test]
    fn test_memory_output_filters() {
        let output = MemoryOutput::new();

        output.info("a");
        output.error("b", &anyhow::anyhow!("cause"));
        output.prompt("c");

        assert_eq!(output.infos(), vec!["a".to_string()]);
        assert_eq!(output.errors(), vec!["b".to_string()]);
        assert_eq!(output.prompts(), vec!["c".to_string()]);
    }

    #[test]
    fn test_memory_output_records_cause_chain() {
        let output = MemoryOutput::new();
        let cause = anyhow::anyhow!("root cause").context("outer");

        output.error("message", &cause);

        assert_eq!(
            output.lines(),
            vec![OutputLine::Error {
                message: "message".to_string(),
                cause: "outer: root cause".to_string(),
            }]
        );
    }
}
