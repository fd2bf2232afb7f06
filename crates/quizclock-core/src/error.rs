//! Quiz error types.
//!
//! Every failure here is fatal to a run. A timeout is not an error and never
//! shows up in this enum.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can end a quiz run.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question file does not exist.
    #[error("question file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The question file could not be parsed, or a record is not a
    /// `prompt,answer` pair.
    #[error("malformed question file {}{}: {reason}", .path.display(), fmt_line(.line))]
    MalformedInput {
        path: PathBuf,
        line: Option<u64>,
        reason: String,
    },

    /// Reading from or writing to the terminal failed.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended while an answer was expected.
    #[error("input closed before an answer was given")]
    InputClosed,

    /// The answer collector stopped without reporting why.
    #[error("answer collector stopped unexpectedly")]
    CollectorLost,
}

fn fmt_line(line: &Option<u64>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

impl QuizError {
    /// Returns `true` for failures of the input stream (start prompt or answers).
    pub fn is_io_failure(&self) -> bool {
        matches!(self, QuizError::Io(_) | QuizError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_includes_line() {
        let err = QuizError::MalformedInput {
            path: PathBuf::from("q.csv"),
            line: Some(3),
            reason: "expected 2 fields, found 3".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed question file q.csv (line 3): expected 2 fields, found 3"
        );
    }

    #[test]
    fn classify_io_failures() {
        assert!(QuizError::InputClosed.is_io_failure());
        assert!(QuizError::Io(std::io::Error::other("boom")).is_io_failure());
        assert!(!QuizError::NotFound {
            path: PathBuf::from("x")
        }
        .is_io_failure());
    }
}
