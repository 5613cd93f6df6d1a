/*!
# Daybook - A Small Card Journal

Daybook keeps a journal of short entries in memory and lets you work with it
through one command per line on stdin. The home screen is re-rendered on stdout
every time the journal changes; logs go to stderr.

## Usage

```
daybook [OPTIONS]

Options:
      --seed-demo                Start with the demo entries instead of an empty journal
      --log-format <LOG_FORMAT>  Log output format written to stderr [possible values: text, json]
  -v, --verbose                  Print verbose (debug) logs
  -h, --help                     Print help
  -V, --version                  Print version
```

## Configuration

- `DAYBOOK_SEED_DEMO`: seed demo entries (`1`/`true`/`yes`)
- `DAYBOOK_LOG_FORMAT`: `text` (default) or `json`
- `DAYBOOK_LOG_LEVEL`: default level filter, overridden by `RUST_LOG`
*/

use clap::Parser;
use daybook::cli::CliArgs;
use daybook::config::Config;
use daybook::constants::{TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use daybook::errors::AppResult;
use daybook::journal_core::EntryStore;
use daybook::logging;
use daybook::shell::Shell;
use std::io;
use tracing::{debug, info, info_span};
use uuid::Uuid;

/// The main entry point for the daybook application.
///
/// 1. Parses command-line arguments
/// 2. Loads configuration and layers the flags on top
/// 3. Initializes logging
/// 4. Creates the journal, seeded with demo entries if requested
/// 5. Runs the command shell over stdin/stdout until `quit` or end of input
fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let mut config = Config::load()?;
    config.apply_cli(&args);
    config.validate()?;

    logging::init_logging(&config)?;

    let invocation_id = Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        invocation_id = %invocation_id
    );
    let _guard = root_span.enter();

    info!("Starting daybook");
    debug!(?config, "Configuration loaded");

    let store = if config.seed_demo {
        EntryStore::with_demo_entries()
    } else {
        EntryStore::new()
    };

    let mut shell = Shell::new(store);
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout.lock())?;

    info!(entries = shell.store().len(), "Daybook closed");
    Ok(())
}
