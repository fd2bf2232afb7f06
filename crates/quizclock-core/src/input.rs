//! Line-oriented user input.
//!
//! The runner reads the start confirmation through an [`InputSource`] and then
//! moves it into the answer collector, which owns it for the rest of the run.

use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

use crate::error::QuizError;

/// Source of user answers.
#[async_trait]
pub trait InputSource: Send {
    /// Show `prompt` and wait for one line of input.
    ///
    /// Returns the line without its terminator. End of stream is reported as
    /// [`QuizError::InputClosed`].
    async fn read_line(&mut self, prompt: &str) -> Result<String, QuizError>;
}

/// An [`InputSource`] over any async reader/writer pair.
#[derive(Debug)]
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl LineInput<BufReader<Stdin>, Stdout> {
    /// Read from standard input, prompt on standard output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> LineInput<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Take back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[async_trait]
impl<R, W> InputSource for LineInput<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_line(&mut self, prompt: &str) -> Result<String, QuizError> {
        self.writer.write_all(prompt.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(QuizError::InputClosed);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }
}
