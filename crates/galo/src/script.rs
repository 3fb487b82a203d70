//! Headless driver: a line-based command script in, JSON events out.
//!
//! ```text
//! # comments and blank lines are skipped
//! click 0.0 0.0     # NDC point
//! cell 0 2          # row, column
//! reset
//! ```

use anyhow::{Context, Result};
use derive_more::{Display, Error};
use derive_new::new;
use galo_scene::{Ndc, Presenter};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument};

/// One script command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptCommand {
    /// Click at an NDC point.
    Click(Ndc),
    /// Select a cell directly.
    Cell {
        /// Board row.
        row: usize,
        /// Board column.
        col: usize,
    },
    /// Start a new game.
    Reset,
}

impl FromStr for ScriptCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            ["click", x, y] => {
                let x = x.parse().map_err(|e| format!("Bad x '{}': {}", x, e))?;
                let y = y.parse().map_err(|e| format!("Bad y '{}': {}", y, e))?;
                Ok(ScriptCommand::Click(Ndc::new(x, y)))
            }
            ["cell", row, col] => {
                let row = row.parse().map_err(|e| format!("Bad row '{}': {}", row, e))?;
                let col = col.parse().map_err(|e| format!("Bad column '{}': {}", col, e))?;
                Ok(ScriptCommand::Cell { row, col })
            }
            ["reset"] => Ok(ScriptCommand::Reset),
            _ => Err(format!("Unknown command '{}'", s.trim())),
        }
    }
}

/// A script line that could not be parsed.
#[derive(Debug, Clone, Display, Error, new)]
#[display("Script error on line {}: {}", line, message)]
pub struct ScriptError {
    /// 1-based line number.
    pub line: usize,
    /// What was wrong with it.
    pub message: String,
}

/// Parses one line; `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, String> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }
    content.parse().map(Some)
}

/// Runs every command through `presenter`, writing one JSON line per event.
///
/// Returns the number of events written. Stops at the first malformed line.
#[instrument(skip_all)]
pub fn run_script<R: BufRead, W: Write>(
    presenter: &mut Presenter,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut written = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read script")?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => return Err(ScriptError::new(index + 1, message).into()),
        };
        debug!(line = index + 1, ?command, "Running script command");

        let events = match command {
            ScriptCommand::Click(ndc) => presenter.click(ndc),
            ScriptCommand::Cell { row, col } => presenter.select(row, col),
            ScriptCommand::Reset => presenter.reset(),
        };
        for event in events {
            serde_json::to_writer(&mut output, &event).context("Failed to encode event")?;
            writeln!(output).context("Failed to write event")?;
            written += 1;
        }
    }
    output.flush().context("Failed to flush output")?;
    Ok(written)
}
