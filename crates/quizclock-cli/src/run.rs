//! Runs one quiz from the command line.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use quizclock_core::input::LineInput;
use quizclock_core::model::ShuffleSeed;
use quizclock_core::runner::ProgressReporter;
use quizclock_core::{Outcome, QuizRunner, QuizSession, RunResult};

use crate::config::QuizConfig;

/// Console progress reporter.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_start(&self, num_questions: usize, time_limit: Duration) {
        tracing::debug!(
            "clock started: {num_questions} questions in {}s",
            time_limit.as_secs()
        );
    }

    fn on_answer(&self, num_answered: usize, correct: bool) {
        tracing::debug!("answer {num_answered} graded, correct: {correct}");
    }

    fn on_finish(&self, result: &RunResult) {
        if result.outcome == Outcome::TimedOut {
            println!("\nTime's up!");
        }
    }
}

pub async fn execute(config: QuizConfig) -> Result<RunResult> {
    let shuffle = config.shuffle.then(|| match config.seed {
        Some(seed) => ShuffleSeed::Fixed(seed),
        None => ShuffleSeed::Entropy,
    });

    let session = QuizSession::load(
        &config.file,
        Duration::from_secs(config.limit_secs),
        shuffle,
    )
    .with_context(|| format!("failed to load questions from {}", config.file.display()))?;

    let result = QuizRunner::new(session)
        .with_reporter(Arc::new(ConsoleReporter))
        .run(LineInput::stdio())
        .await
        .context("quiz aborted")?;

    println!("\n{result}");
    Ok(result)
}
