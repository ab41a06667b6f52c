//! Domain models that mirror the hosted `creators` table and get passed
//! throughout the TUI. The intent is that these types stay light-weight data
//! holders so other layers can focus on presentation and persistence logic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A persisted content creator. The struct mirrors rows in the hosted
/// `creators` table, including the camel-case `imageURL` column name the
/// store uses on the wire.
pub struct Creator {
    /// Primary key assigned by the store on insert. We keep it around even
    /// when the UI only needs display information because edit/delete flows
    /// bubble the id back to the store client.
    pub id: i64,
    /// Display name shown on cards and in the detail header.
    pub name: String,
    /// Link to the creator's channel or page. Required by the front end at
    /// creation time, but kept as raw text so non-web references survive.
    pub url: String,
    /// Optional portrait URL. `None` is a valid, permanent state; cards
    /// render a placeholder glyph instead.
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Short blurb describing the creator's content.
    pub description: String,
}

impl Creator {
    /// Whether a usable portrait URL is present. Blank strings count as
    /// absent so the placeholder logic has a single source of truth.
    pub fn has_image(&self) -> bool {
        self.image_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// An in-memory, not-yet-persisted copy of a creator's editable fields.
/// Produced only by successful form validation, consumed by `insert` and
/// `update` on the store client.
pub struct CreatorDraft {
    pub name: String,
    pub url: String,
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub description: String,
}

/// Local, pre-network validation failures. Surfaced directly in the form and
/// the status footer; the store is never called when one of these fires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    MissingField(&'static str),
}
