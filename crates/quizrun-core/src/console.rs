//! Line-oriented console abstraction.
//!
//! The runner only needs to read a line and write a line. [`LineConsole`]
//! does that over any tokio reader/writer pair (stdin/stdout in the binary);
//! [`ScriptedConsole`] replays canned input for tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

use crate::error::Result;

/// A device that supplies lines of user input and displays lines of text.
#[async_trait]
pub trait Console: Send {
    /// Read one line without its line terminator. `None` means end of input.
    async fn read_line(&mut self) -> Result<Option<String>>;

    /// Display one line of text.
    async fn write_line(&mut self, line: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Reader/writer backed console
// ---------------------------------------------------------------------------

/// Console over an async buffered reader and an async writer.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl LineConsole<BufReader<Stdin>, Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

#[async_trait]
impl<R, W> Console for LineConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Scripted console
// ---------------------------------------------------------------------------

/// An in-memory console that replays scripted input and records output.
///
/// Once the script runs out it reports end of input, or, after
/// [`ScriptedConsole::stalling`], waits forever like a player who stopped
/// typing.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    stall_when_exhausted: bool,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            stall_when_exhausted: false,
        }
    }

    /// Block forever instead of reporting end of input.
    pub fn stalling(mut self) -> Self {
        self.stall_when_exhausted = true;
        self
    }

    /// Lines written so far, one entry per `write_line` call.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Everything written so far, newline-joined.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn read_line(&mut self) -> Result<Option<String>> {
        if let Some(line) = self.input.pop_front() {
            return Ok(Some(line));
        }
        if self.stall_when_exhausted {
            std::future::pending::<()>().await;
        }
        Ok(None)
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
