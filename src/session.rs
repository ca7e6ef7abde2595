//! Interactive query loop over an [`Engine`].
//!
//! Two states: `Prompting` until the exit keyword (or end of input), then
//! `Terminated`. A lookup miss is reported and the loop carries on.

use std::io::{self, BufRead, Write};

use crate::config::QueryConfig;
use crate::engine::Engine;
use crate::error::QueryError;
use crate::model::Recommendation;

pub const BANNER: &str = "BookBuddy Recommendation System is running!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Prompting,
    Terminated,
}

/// Outcome of one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Recommendations(Vec<Recommendation>),
    NotFound { title: String },
    Goodbye,
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recommendations(recs) if recs.is_empty() => {
                write!(f, "No other books to recommend.")
            }
            Self::Recommendations(recs) => {
                write!(f, "Top {} recommendations:", recs.len())?;
                for rec in recs {
                    write!(f, "\n{rec}")?;
                }
                Ok(())
            }
            Self::NotFound { .. } => {
                write!(f, "Book not found in dataset. Please try another title.")
            }
            Self::Goodbye => write!(f, "Exiting the recommendation system. Goodbye!"),
        }
    }
}

pub struct Session<'e> {
    engine: &'e Engine,
    config: QueryConfig,
    state: SessionState,
}

impl<'e> Session<'e> {
    pub fn new(engine: &'e Engine, config: QueryConfig) -> Self {
        Self {
            engine,
            config,
            state: SessionState::Prompting,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    fn prompt(&self) -> String {
        format!(
            "Enter a book title to get recommendations (or type '{}' to quit): ",
            self.config.exit_keyword
        )
    }

    /// Handle one raw input line.
    pub fn handle(&mut self, line: &str) -> Reply {
        let input = line.trim();
        if input.eq_ignore_ascii_case(self.config.exit_keyword.trim()) {
            self.state = SessionState::Terminated;
            return Reply::Goodbye;
        }

        match self.engine.recommend(input, self.config.top_k) {
            Ok(recs) => Reply::Recommendations(recs),
            Err(QueryError::TitleNotFound { title }) => {
                tracing::debug!(%title, "query missed");
                Reply::NotFound { title }
            }
        }
    }

    /// Prompt, read, reply until terminated or `input` is exhausted.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{BANNER}")?;
        let mut buf = Vec::new();
        while self.state == SessionState::Prompting {
            write!(output, "{}", self.prompt())?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                self.state = SessionState::Terminated;
                break;
            }
            // Undecodable bytes become U+FFFD and simply miss the lookup.
            let line = String::from_utf8_lossy(&buf);
            let reply = self.handle(&line);
            writeln!(output, "{reply}")?;
        }
        Ok(())
    }
}
