//! Core library surface for the Creatorverse TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the integration tests can reuse the same pieces.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod nav;
pub mod store;
pub mod ui;

/// Command-line surface consumed by `main.rs`.
pub use cli::Cli;

/// Startup configuration: store endpoint/credential and the log location.
pub use config::{default_log_dir, StoreConfig};
pub use logging::init_logging;

/// The domain types that every other layer manipulates.
pub use models::{Creator, CreatorDraft, ValidationError};

/// Screen navigation surface.
pub use nav::Route;

/// The record store contract and its two implementations.
pub use store::{CreatorStore, MemoryStore, RestStore, StoreError};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
