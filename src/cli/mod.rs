use crate::constants::{APP_DESCRIPTION, APP_NAME};
use crate::errors::{AppError, AppResult};
use crate::journal_core::EntryTime;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::ffi::OsString;

/// Append timestamped entries to a section of today's markdown note
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(version, long_about = None)]
pub struct CliArgs {
    /// Message to add (words are joined with spaces)
    #[arg(value_name = "MESSAGE")]
    pub message: Vec<String>,

    /// Timestamp for the new entry instead of the current time (H:mm or HH:mm)
    #[arg(short = 't', long, value_name = "HH:mm", allow_hyphen_values = true)]
    pub time: Option<String>,

    /// Lists today's entries (the default with no arguments)
    #[arg(short = 'l', long, conflicts_with_all = ["undo", "message", "time"])]
    pub list: bool,

    /// Removes the chronologically last entry
    #[arg(short = 'u', long, conflicts_with_all = ["list", "message", "time"])]
    pub undo: bool,

    /// Print verbose diagnostics to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// What a successful parse asks the program to do.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Run a command with these arguments.
    Run(CliArgs),
    /// Print this text (help or version) to stdout and exit successfully.
    Display(String),
}

/// The command selected by the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Undo,
    Add {
        message: String,
        /// `None` means "now".
        time: Option<EntryTime>,
    },
}

impl CliArgs {
    /// Resolves the flags and words into a single command.
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidArguments` if `--time` is given without a message,
    ///   or the message is blank
    /// - `AppError::InvalidTimeFormat` if the `--time` value is malformed
    pub fn command(&self) -> AppResult<Command> {
        if self.undo {
            return Ok(Command::Undo);
        }
        if self.list {
            return Ok(Command::List);
        }

        if self.message.is_empty() {
            if self.time.is_some() {
                return Err(AppError::InvalidArguments(
                    "A time was given without a message to add".to_string(),
                ));
            }
            return Ok(Command::List);
        }

        let message = self.message.join(" ").trim().to_string();
        if message.is_empty() {
            return Err(AppError::InvalidArguments(
                "Message cannot be empty".to_string(),
            ));
        }

        let time = self.time.as_deref().map(EntryTime::parse).transpose()?;
        Ok(Command::Add { message, time })
    }
}

/// Parses command-line arguments.
///
/// Help and version requests come back as `ParseOutcome::Display`. Every other
/// clap failure becomes `AppError::InvalidArguments`, so the process exits
/// with the same status as any other failure.
pub fn parse_args_from<I, T>(args: I) -> AppResult<ParseOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliArgs::try_parse_from(args) {
        Ok(args) => Ok(ParseOutcome::Run(args)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(ParseOutcome::Display(err.render().to_string()))
            }
            _ => Err(invalid_arguments(&err)),
        },
    }
}

/// Parse the process arguments
pub fn parse_args() -> AppResult<ParseOutcome> {
    parse_args_from(std::env::args_os())
}

fn invalid_arguments(err: &clap::Error) -> AppError {
    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
            return AppError::InvalidArguments(format!("Unknown option: {}", arg));
        }
    }

    // First line of clap's report, without its "error: " prefix
    let rendered = err.render().to_string();
    let summary = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error:")
        .trim();
    AppError::InvalidArguments(summary.to_string())
}
