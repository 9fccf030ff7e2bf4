//! Interactive session
//!
//! Line-oriented loop over any async reader. A plain line is a search,
//! lines starting with `:` are commands.

use std::io::Write;
use std::str::FromStr;

use application::{LookupOutcome, WeatherLookupService};
use domain::TemperatureScale;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, instrument};

use crate::cli::convert;
use crate::render::{render, render_history};

pub const HELP: &str = "\
Type a location to search for its weather.
Commands:
  :history               show previous searches
  :replay <n>            search the n-th previous search again
  :convert <value> <c|f> convert a temperature to Celsius or Fahrenheit
  :help                  show this help
  :quit                  leave the session";

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Search(String),
    History,
    Replay(usize),
    Convert { value: f64, to: TemperatureScale },
    Help,
    Quit,
}

/// Input line that is not a valid command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SessionCommand {
    /// Parse one line; blank lines yield `None`
    ///
    /// A search keeps the location exactly as typed, only the line
    /// terminator is removed.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown `:` command or bad arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let Some(command) = trimmed.strip_prefix(':') else {
            let location = line.trim_end_matches(['\r', '\n']);
            return Ok(Some(Self::Search(location.to_string())));
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let parsed = match (name, args.as_slice()) {
            ("history" | "h", []) => Self::History,
            ("help" | "?", []) => Self::Help,
            ("quit" | "q" | "exit", []) => Self::Quit,
            ("replay" | "r", [position]) => {
                let position = position.parse().map_err(|_| {
                    CommandError::InvalidArgument(format!("not a position: {position}"))
                })?;
                Self::Replay(position)
            },
            ("replay" | "r", _) => return Err(CommandError::Usage(":replay <n>")),
            ("convert" | "c", [value, scale]) => {
                let value = f64::from_str(value).map_err(|_| {
                    CommandError::InvalidArgument(format!("not a number: {value}"))
                })?;
                let to = TemperatureScale::from_str(scale)
                    .map_err(|e| CommandError::InvalidArgument(e.to_string()))?;
                Self::Convert { value, to }
            },
            ("convert" | "c", _) => return Err(CommandError::Usage(":convert <value> <c|f>")),
            _ => return Err(CommandError::Unknown(trimmed.to_string())),
        };
        Ok(Some(parsed))
    }
}

/// Run the session until `:quit` or end of input
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails. The
/// session continues after any lookup; contract errors such as an unknown
/// history position are printed, external failures print nothing.
#[instrument(skip_all)]
pub async fn run<R, W>(service: &WeatherLookupService, input: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let snapshot = service.snapshot();
    writeln!(out, "{}", render(snapshot.current.as_ref(), &snapshot.history))?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e}. Type :help for the commands.")?;
                continue;
            },
        };
        debug!(?command, "Session command");

        match command {
            SessionCommand::Search(location) => {
                let outcome = service.search(&location).await;
                report(service, outcome, out)?;
            },
            SessionCommand::Replay(position) => {
                let outcome = service.replay_at(position).await;
                report(service, outcome, out)?;
            },
            SessionCommand::History => {
                writeln!(out, "{}", render_history(&service.history()))?;
            },
            SessionCommand::Convert { value, to } => {
                writeln!(out, "{}", convert(value, to))?;
            },
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => break,
        }
    }
    Ok(())
}

/// Print the page for a displayed lookup
///
/// External failures were already logged by the service and leave the
/// previous page in place, so they print nothing.
fn report<W: Write>(
    service: &WeatherLookupService,
    outcome: Result<LookupOutcome, application::ApplicationError>,
    out: &mut W,
) -> std::io::Result<()> {
    match outcome {
        Ok(LookupOutcome::Displayed(view)) => {
            writeln!(out, "{}", render(Some(&view), &service.history()))
        },
        Ok(LookupOutcome::Stale(_) | LookupOutcome::Unchanged) => Ok(()),
        Err(e) => writeln!(out, "Error: {e}"),
    }
}
