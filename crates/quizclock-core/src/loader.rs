//! CSV question loader.
//!
//! Reads header-less `prompt,answer` records and builds a [`QuestionSet`].

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::QuizError;
use crate::model::{Question, QuestionSet};

/// Load every question from a CSV file, in file order.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, QuizError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => QuizError::NotFound {
            path: path.to_path_buf(),
        },
        _ => QuizError::Io(e),
    })?;

    parse_questions(file, path)
}

/// Parse questions from any reader. `source` is only used in error messages.
pub fn parse_questions<R: Read>(reader: R, source: &Path) -> Result<Vec<Question>, QuizError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut questions = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| malformed(source, &e))?;
        let line = record.position().map(|p| p.line());
        if record.len() != 2 {
            return Err(QuizError::MalformedInput {
                path: source.to_path_buf(),
                line,
                reason: format!("expected 2 fields, found {}", record.len()),
            });
        }
        questions.push(Question::new(&record[0], &record[1]));
    }

    tracing::debug!(
        "loaded {} questions from {}",
        questions.len(),
        source.display()
    );
    Ok(questions)
}

/// Load a question set and optionally shuffle it once.
pub fn build_question_set<R: Rng + ?Sized>(
    path: &Path,
    shuffle: Option<&mut R>,
) -> Result<QuestionSet, QuizError> {
    let set = QuestionSet::new(load_questions(path)?);
    Ok(match shuffle {
        Some(rng) => set.shuffled(rng),
        None => set,
    })
}

fn malformed(source: &Path, err: &csv::Error) -> QuizError {
    QuizError::MalformedInput {
        path: PathBuf::from(source),
        line: err.position().map(|p| p.line()),
        reason: err.to_string(),
    }
}
