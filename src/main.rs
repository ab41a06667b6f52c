//! Binary entry point that glues the hosted record store to the TUI.
//! Summarizing the bootstrapping pipeline here keeps the intent obvious when
//! revisiting the code: we resolve configuration, start file logging, build
//! the store client, perform the starting screen's fetch, and drive the
//! Ratatui event loop until the user exits.

use anyhow::Result;
use clap::Parser;

use creatorverse::{
    default_log_dir, init_logging, run_app, App, Cli, RestStore, Route, StoreConfig,
};

/// Resolve configuration, initialize logging and the store client, and
/// launch the Ratatui event loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for
/// example a missing store credential) to the terminal instead of crashing
/// silently; once the event loop runs, failures stay on screen.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = StoreConfig::resolve(cli.url, cli.api_key)?;

    let log_dir = match cli.log_dir {
        Some(dir) => dir,
        None => default_log_dir()?,
    };
    let _logger = init_logging(&log_dir)?;

    let start = match cli.route.as_deref() {
        Some(path) => path.parse::<Route>()?,
        None => Route::List,
    };

    let store = RestStore::connect(&config)?;
    let mut app = App::new(Box::new(store));
    app.navigate(start);
    run_app(&mut app)
}
