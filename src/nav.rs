//! Navigation surface shared by the screens and the CLI. Each route maps to
//! exactly one screen; parsing and printing round-trip so a route shown
//! anywhere can be fed back in as a starting point.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One navigable destination. Screens reach each other only through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` — all creators.
    List,
    /// `/new` — blank creation form.
    New,
    /// `/creator/{id}` — a single creator's details.
    Creator(i64),
    /// `/edit/{id}` — the edit form for a single creator.
    Edit(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized route `{0}`; expected /, /new, /creator/<id>, or /edit/<id>")]
pub struct RouteParseError(String);

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let path = input.trim();
        if path == "/" || path.is_empty() {
            return Ok(Route::List);
        }
        if path == "/new" {
            return Ok(Route::New);
        }
        if let Some(id) = parse_id_segment(path, "/creator/") {
            return Ok(Route::Creator(id));
        }
        if let Some(id) = parse_id_segment(path, "/edit/") {
            return Ok(Route::Edit(id));
        }
        Err(RouteParseError(input.to_string()))
    }
}

fn parse_id_segment(path: &str, prefix: &str) -> Option<i64> {
    path.strip_prefix(prefix)?.parse().ok()
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => write!(f, "/"),
            Route::New => write!(f, "/new"),
            Route::Creator(id) => write!(f, "/creator/{id}"),
            Route::Edit(id) => write!(f, "/edit/{id}"),
        }
    }
}
