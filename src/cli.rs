//! Command-line surface. Everything here is optional: with no arguments the
//! app opens the creator list using configuration from the environment or
//! the config file.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "creatorverse",
    version,
    about = "Terminal front end for a hosted roster of content creators"
)]
pub struct Cli {
    /// Starting route: /, /new, /creator/<id>, or /edit/<id>.
    pub route: Option<String>,

    /// Store endpoint, overriding CREATORVERSE_URL and the config file.
    #[arg(long)]
    pub url: Option<String>,

    /// Store credential, overriding CREATORVERSE_API_KEY and the config file.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Directory for rolling log files (defaults to ~/.creatorverse/logs).
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}
