//! Interactive confirmation before deletion.

use std::{io::BufRead, path::PathBuf};

use anyhow::Context;

use crate::output::Output;

/// Render the question shown before deleting `folders`.
#[must_use]
pub fn confirmation_message(folders: &[PathBuf]) -> String {
    let listing = folders
        .iter()
        .map(|folder| folder.display().to_string())
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Following folders will be deleted:\n\n{listing}\n\nAre you sure you want to delete them? (y/n): "
    )
}

/// Whether an answer line means "yes".
///
/// Only a lone `y` (any case, surrounding whitespace ignored) counts.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Ask the user to confirm deletion of `folders`.
///
/// Reads exactly one line from `input`; there is no re-prompt on an
/// unrecognised answer. `input` is consumed so the reader is released as soon
/// as the answer is in, whatever it was.
///
/// # Returns
///
/// `true` only when the answer is `y`. EOF, read errors and every other
/// answer return `false`.
pub fn confirm_delete<R: BufRead>(folders: &[PathBuf], mut input: R, output: &dyn Output) -> bool {
    output.prompt(&confirmation_message(folders));

    let mut answer = String::new();
    match input
        .read_line(&mut answer)
        .context("could not read from standard input")
    {
        Ok(_) => is_affirmative(&answer),
        Err(e) => {
            output.error("Failed to read confirmation answer!", &e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemoryOutput;
    use std::io::{self, Cursor, Read};

    fn ask(answer: &str) -> bool {
        let folders = vec![PathBuf::from("/mock/folder")];
        confirm_delete(&folders, Cursor::new(answer.as_bytes()), &MemoryOutput::new())
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stdin closed"))
        }
    }

    #[test]
    fn test_confirm_accepts_y() {
        assert!(ask("y\n"));
        assert!(ask("Y\n"));
        assert!(ask("  y  \n"));
        assert!(ask("y"));
    }

    #[test]
    fn test_confirm_rejects_n() {
        assert!(!ask("n\n"));
    }

    #[test]
    fn test_confirm_rejects_other_answers() {
        for answer in ["b", "v", "c", "l", "", "\n", "yes", "yy", "no", "y n"] {
            assert!(!ask(answer), "answer {answer:?} should cancel");
        }
    }

    #[test]
    fn test_confirm_reads_only_first_line() {
        assert!(!ask("n\ny\n"));
        assert!(ask("y\nn\n"));
    }

    #[test]
    fn test_confirm_on_eof_cancels() {
        let output = MemoryOutput::new();

        let confirmed = confirm_delete(&[PathBuf::from("bin")], io::empty(), &output);

        assert!(!confirmed);
        assert!(output.errors().is_empty());
    }

    #[test]
    fn test_confirm_read_error_cancels_and_logs() {
        let output = MemoryOutput::new();

        let confirmed = confirm_delete(
            &[PathBuf::from("bin")],
            io::BufReader::new(FailingReader),
            &output,
        );

        assert!(!confirmed);
        assert_eq!(
            output.errors(),
            vec!["Failed to read confirmation answer!".to_string()]
        );
    }

    #[test]
    fn test_confirm_prompt_lists_every_folder() {
        let output = MemoryOutput::new();
        let folders = vec![PathBuf::from("/root/a/bin"), PathBuf::from("/root/b/obj")];

        confirm_delete(&folders, Cursor::new("n\n"), &output);

        assert_eq!(
            output.prompts(),
            vec![
                "Following folders will be deleted:\n\n/root/a/bin\n/root/b/obj\n\nAre you sure you want to delete them? (y/n): "
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_confirmation_message_with_no_folders() {
        let message = confirmation_message(&[]);

        assert!(message.starts_with("Following folders will be deleted:"));
        assert!(message.ends_with("Are you sure you want to delete them? (y/n): "));
    }
}
