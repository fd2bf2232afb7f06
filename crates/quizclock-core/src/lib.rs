//! quizclock-core — Question loading, answer collection, and the timed quiz runner.
//!
//! A run loads a [`model::QuestionSet`], waits for the user to start, and then
//! races an [`collector::AnswerCollector`] task against a single deadline in
//! [`runner::QuizRunner`].

pub mod collector;
pub mod error;
pub mod input;
pub mod loader;
pub mod mock;
pub mod model;
pub mod runner;

pub use error::QuizError;
pub use runner::{Outcome, QuizRunner, QuizSession, RunResult};
