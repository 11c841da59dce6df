/*!
# jot - timestamped entries in today's note

```
jot [OPTIONS] [MESSAGE]...

Options:
  -t, --time <HH:mm>  Timestamp for the new entry instead of the current time
  -l, --list          Lists today's entries (the default with no arguments)
  -u, --undo          Removes the chronologically last entry
  -v, --verbose       Print verbose diagnostics to stderr
  -h, --help          Print help
  -V, --version       Print version
```

## Configuration

- `JOT_DIR`: directory of daily notes (defaults to "~/Documents/journal")
- `JOT_HEADER`: section header entries go under (defaults to "## Today")
- `JOT_LOG_FORMAT`: "text" (default) or "json" diagnostics on stderr
- `RUST_LOG`: diagnostic filter (defaults to "warn")
*/

use chrono::Local;
use jot::cli::{self, CliArgs, Command, ParseOutcome};
use jot::config::Config;
use jot::constants::{
    DATE_FORMAT_ISO, DEFAULT_LOG_LEVEL, ENV_VAR_JOT_LOG_FORMAT, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
    TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME, VERBOSE_LOG_LEVEL,
};
use jot::errors::{AppError, AppResult};
use jot::journal_core::EntryTime;
use jot::{journal_io, ops};
use std::env;
use std::io;
use std::process::ExitCode;
use tracing::{debug, info, info_span};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// The main entry point for the jot application.
///
/// 1. Parses command-line arguments (help and version exit here)
/// 2. Initializes logging
/// 3. Resolves the command, loads configuration, checks the journal directory
/// 4. Runs the command against today's note
///
/// Every failure is reported once on stderr and exits with status 1.
fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(ParseOutcome::Run(args)) => args,
        Ok(ParseOutcome::Display(text)) => {
            print!("{}", text);
            return ExitCode::SUCCESS;
        }
        Err(error) => return report_failure(&error),
    };

    init_tracing(args.verbose);

    let root_span = info_span!(TRACING_ROOT_SPAN_NAME, service = TRACING_SERVICE_NAME);
    let _guard = root_span.enter();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_failure(&error),
    }
}

fn run(args: &CliArgs) -> AppResult<()> {
    debug!("CLI arguments: {:?}", args);
    let command = args.command()?;

    info!("Loading configuration");
    let config = Config::load()?;
    debug!("Configuration: {:?}", config);
    journal_io::ensure_journal_directory_writable(&config.journal_dir)?;

    // Obtain current date/time once for the whole invocation
    let now = Local::now();
    let today = now.date_naive();

    match command {
        Command::List => {
            let entries = ops::list_entries(&config, today)?;
            if entries.is_empty() {
                println!("No entries for {}.", today.format(DATE_FORMAT_ISO));
            }
            for entry in entries {
                println!("{}  {}", entry.time, entry.message);
            }
        }
        Command::Add { message, time } => {
            let time = time.unwrap_or_else(|| EntryTime::from_timelike(&now));
            let entry = ops::add_entry(&config, today, time, &message)?;
            println!("Added: {}", entry.raw);
        }
        Command::Undo => {
            let entry = ops::undo_last_entry(&config, today)?;
            println!("Removed: {}", entry.raw);
        }
    }

    Ok(())
}

/// Sets up the tracing subscriber on stderr.
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` is honoured with a
/// default of warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_LEVEL)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    let format = env::var(ENV_VAR_JOT_LOG_FORMAT).unwrap_or_else(|_| LOG_FORMAT_TEXT.to_string());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_timer(ChronoLocal::rfc_3339());

    if format.eq_ignore_ascii_case(LOG_FORMAT_JSON) {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn report_failure(error: &AppError) -> ExitCode {
    debug!("Invocation failed: {:?}", error);
    eprintln!("Error: {}", error);
    if let Some(hint) = error.hint() {
        eprintln!("Hint: {}", hint);
    }
    ExitCode::FAILURE
}
