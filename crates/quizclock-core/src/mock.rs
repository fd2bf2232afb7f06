//! Scripted input source for testing the collector and runner without a terminal.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::QuizError;
use crate::input::InputSource;

/// One scripted reaction to a prompt.
#[derive(Debug, Clone)]
pub enum Step {
    /// Answer immediately.
    Line(String),
    /// Wait, then answer.
    Delayed(Duration, String),
    /// Fail the read with an I/O error.
    Fail,
    /// Never answer.
    Hang,
}

/// An [`InputSource`] that replays a fixed script.
///
/// Once the script runs out every further read reports
/// [`QuizError::InputClosed`], like a closed terminal.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    steps: VecDeque<Step>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedInput {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer each line immediately, in order.
    pub fn lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::new(lines.into_iter().map(|l| Step::Line(l.into())))
    }

    /// Shared log of every prompt shown, readable after the input was moved away.
    pub fn prompt_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl InputSource for ScriptedInput {
    async fn read_line(&mut self, prompt: &str) -> Result<String, QuizError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match self.steps.pop_front() {
            Some(Step::Line(line)) => Ok(line),
            Some(Step::Delayed(delay, line)) => {
                tokio::time::sleep(delay).await;
                Ok(line)
            }
            Some(Step::Fail) => Err(QuizError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "scripted failure",
            ))),
            Some(Step::Hang) => std::future::pending().await,
            None => Err(QuizError::InputClosed),
        }
    }
}
