//! The answer collector task.
//!
//! Presents questions one at a time, reads an answer for each, and reports
//! the outcome to the runner over a single ordered channel.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::QuizError;
use crate::input::InputSource;
use crate::model::{Question, QuestionSet};

/// A message from the collector to the runner.
#[derive(Debug)]
pub enum CollectorEvent {
    /// One question was answered.
    Answered { correct: bool },
    /// Every question was answered; nothing follows.
    Finished,
    /// Reading an answer failed; nothing follows.
    Failed(QuizError),
}

/// Create the collector-to-runner channel for a set of `num_questions`.
///
/// Sized so the collector never waits on a slow receiver: one slot per answer
/// plus the terminal event.
pub fn event_channel(
    num_questions: usize,
) -> (mpsc::Sender<CollectorEvent>, mpsc::Receiver<CollectorEvent>) {
    mpsc::channel(num_questions + 1)
}

/// Asks each question in order and grades the answers.
pub struct AnswerCollector<I> {
    questions: QuestionSet,
    input: I,
    events: mpsc::Sender<CollectorEvent>,
}

impl<I> AnswerCollector<I>
where
    I: InputSource + 'static,
{
    pub fn new(questions: QuestionSet, input: I, events: mpsc::Sender<CollectorEvent>) -> Self {
        Self {
            questions,
            input,
            events,
        }
    }

    /// Start the collector as its own task.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Run the collector to completion on the current task.
    pub async fn run(self) {
        let Self {
            questions,
            mut input,
            events,
        } = self;

        for (index, question) in questions.into_iter().enumerate() {
            let event = match ask(&mut input, &question).await {
                Ok(correct) => {
                    tracing::debug!(question = index + 1, correct, "answer graded");
                    CollectorEvent::Answered { correct }
                }
                Err(e) => {
                    tracing::debug!(question = index + 1, "answer read failed: {e}");
                    // Receiver may already be gone; nothing left to do either way.
                    let _ = events.send(CollectorEvent::Failed(e)).await;
                    return;
                }
            };
            if events.send(event).await.is_err() {
                tracing::debug!("runner stopped listening, collector exiting");
                return;
            }
        }

        let _ = events.send(CollectorEvent::Finished).await;
    }
}

async fn ask<I: InputSource>(input: &mut I, question: &Question) -> Result<bool, QuizError> {
    let line = input
        .read_line(&format!("Question: {}. Your answer: ", question.prompt()))
        .await?;
    Ok(question.is_correct(&line))
}
