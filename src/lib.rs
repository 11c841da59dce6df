/*!
# jot

jot keeps a running, timestamped log inside today's markdown note. Each day
has its own `YYYY-MM-DD.md` file, the layout many note-taking apps use for
daily notes, and entries live as `- HH:mm <message>` bullets under one
section header (by default `## Today`).

## Core Features

- Add an entry at the current time, or at a time given with `--time`
- List today's entries in chronological order
- Undo the chronologically last entry
- Leave everything outside the section untouched

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `constants`: Shared names, defaults and formats
- `errors`: Error handling infrastructure
- `journal_core`: The section editor (pure logic, no I/O)
- `journal_io`: Reading and writing daily notes
- `ops`: The add, list and undo operations

## Usage Example

```rust,no_run
use jot::journal_core::EntryTime;
use jot::{ops, Config};

fn main() -> jot::AppResult<()> {
    let config = Config::load()?;
    let today = chrono::Local::now().date_naive();

    ops::add_entry(&config, today, EntryTime::new(9, 30).unwrap(), "Standup")?;
    for entry in ops::list_entries(&config, today)? {
        println!("{}  {}", entry.time, entry.message);
    }
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Section editor for daily notes
pub mod journal_core;
/// Filesystem access for daily notes
pub mod journal_io;
/// Add, list and undo operations
pub mod ops;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
