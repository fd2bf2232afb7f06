//! Timed quiz runner.
//!
//! Waits for the user to confirm the start, then races the answer collector
//! against a single deadline. The run ends in exactly one of three ways: all
//! questions answered, time up (partial score), or an input failure (no score).

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;

use crate::collector::{event_channel, AnswerCollector, CollectorEvent};
use crate::error::QuizError;
use crate::input::InputSource;
use crate::loader::build_question_set;
use crate::model::{QuestionSet, ShuffleSeed};

/// The questions and time limit for one invocation.
#[derive(Debug)]
pub struct QuizSession {
    questions: QuestionSet,
    time_limit: Duration,
}

impl QuizSession {
    pub fn new(questions: QuestionSet, time_limit: Duration) -> Self {
        Self {
            questions,
            time_limit,
        }
    }

    /// Load questions from a CSV file, shuffling them once if a seed is given.
    pub fn load(
        path: &Path,
        time_limit: Duration,
        shuffle: Option<ShuffleSeed>,
    ) -> Result<Self, QuizError> {
        let questions = match shuffle {
            Some(seed) => build_question_set(path, Some(&mut seed.rng()))?,
            None => build_question_set::<StdRng>(path, None)?,
        };
        Ok(Self::new(questions, time_limit))
    }

    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every question was answered before the deadline.
    Completed,
    /// The deadline passed first.
    TimedOut,
}

/// Final score of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    pub num_correct: usize,
    pub num_answered: usize,
    pub num_questions: usize,
    pub outcome: Outcome,
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The quiz had {} questions. You got {} right.",
            self.num_questions, self.num_correct
        )
    }
}

/// Progress hooks called by the runner.
pub trait ProgressReporter: Send + Sync {
    fn on_start(&self, num_questions: usize, time_limit: Duration);
    fn on_answer(&self, num_answered: usize, correct: bool);
    fn on_finish(&self, result: &RunResult);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_start(&self, _: usize, _: Duration) {}
    fn on_answer(&self, _: usize, _: bool) {}
    fn on_finish(&self, _: &RunResult) {}
}

/// Runs one quiz session to its final score.
pub struct QuizRunner {
    session: QuizSession,
    reporter: Arc<dyn ProgressReporter>,
}

impl QuizRunner {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            reporter: Arc::new(NoopReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Run the quiz, reading the start confirmation and all answers from `input`.
    ///
    /// The clock starts only after the start confirmation is read. Once the
    /// run is decided the collector task is aborted; its pending read is
    /// never observed.
    pub async fn run<I>(self, mut input: I) -> Result<RunResult, QuizError>
    where
        I: InputSource + 'static,
    {
        let QuizSession {
            questions,
            time_limit,
        } = self.session;
        let num_questions = questions.len();

        input
            .read_line(&format!(
                "Press ENTER to start the quiz. You'll have {} seconds to complete it.",
                time_limit.as_secs()
            ))
            .await?;

        tracing::info!(
            num_questions,
            time_limit_secs = time_limit.as_secs(),
            "quiz started"
        );
        self.reporter.on_start(num_questions, time_limit);

        let deadline = tokio::time::sleep(time_limit);
        tokio::pin!(deadline);
        let (events_tx, mut events) = event_channel(num_questions);
        let collector = AnswerCollector::new(questions, input, events_tx).spawn();

        let mut num_correct = 0usize;
        let mut num_answered = 0usize;

        let outcome = loop {
            tokio::select! {
                () = &mut deadline => break Ok(Outcome::TimedOut),
                event = events.recv() => match event {
                    Some(CollectorEvent::Answered { correct }) => {
                        num_answered += 1;
                        if correct {
                            num_correct += 1;
                        }
                        self.reporter.on_answer(num_answered, correct);
                    }
                    Some(CollectorEvent::Finished) => break Ok(Outcome::Completed),
                    Some(CollectorEvent::Failed(e)) => break Err(e),
                    None => break Err(QuizError::CollectorLost),
                },
            }
        };

        collector.abort();

        let outcome = outcome.inspect_err(|e| {
            tracing::debug!(num_answered, "quiz aborted: {e}");
        })?;

        let result = RunResult {
            num_correct,
            num_answered,
            num_questions,
            outcome,
        };
        tracing::info!(
            num_correct,
            num_answered,
            num_questions,
            ?outcome,
            "quiz finished"
        );
        self.reporter.on_finish(&result);
        Ok(result)
    }
}
