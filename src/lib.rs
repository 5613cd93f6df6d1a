/*!
# Daybook

Daybook is a small, single-user journal: short entries shown as cards, which can be
written, edited, deleted, bookmarked and sorted. Everything lives in memory for the
lifetime of the process.

## Core Features

- Create entries through an editor that guards unsaved drafts with a discard confirmation
- Edit entries without touching their identity, date or bookmark
- Bookmark entries and sort cards by bookmark or by date
- Switch between the empty-state screen and the card list as the journal fills up

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `journal_core`: the entry store and the editor session state machine
- `editor`: the callback-driven editor sheet over a session
- `screen`: home screen selection and card rendering
- `shell`: line-oriented command loop used by the binary
- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `logging`: tracing subscriber setup

## Usage Example

```rust
use daybook::journal_core::{EditorMode, EditorSession, EntryStore};

fn main() -> daybook::AppResult<()> {
    let mut store = EntryStore::new();

    let mut session = EditorSession::start(EditorMode::New);
    session.set_title("Great Day")?;
    session.attempt_save()?.apply_to(&mut store);

    assert_eq!(store.entries()[0].title, "Great Day");
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
/// Editor sheet wiring a session to commit and cancel callbacks
pub mod editor;
/// Error types and utilities for error handling
pub mod errors;
/// Entry store and editor session
pub mod journal_core;
/// Logging initialization
pub mod logging;
/// Home screen selection and card rendering
pub mod screen;
/// Command loop driving the store and editor from text input
pub mod shell;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::{EditorMode, EditorSession, EntryStore, JournalEntry};
