//! Record store client split across logical submodules. Every implementation
//! in here exposes the same five operations so the rest of the codebase can
//! stay focused on UI state management.

mod error;
mod memory;
mod rest;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use rest::RestStore;

use crate::models::{Creator, CreatorDraft};

/// Data-access contract for the hosted `creators` table. All operations are
/// remote calls that may fail; the error taxonomy separates "zero matching
/// rows" from transport failure so screens can word their messages.
pub trait CreatorStore {
    /// Every creator, in the store's own order.
    fn list_all(&self) -> StoreResult<Vec<Creator>>;

    /// The creator with the given id, or `NotFound` when no row matches.
    fn get_by_id(&self, id: i64) -> StoreResult<Creator>;

    /// Persist a new draft and return the stored record including the
    /// assigned id, so callers can update UI state without re-querying.
    fn insert(&self, draft: &CreatorDraft) -> StoreResult<Creator>;

    /// Replace the editable fields of an existing record. Surfaces
    /// `NotFound` when zero rows were touched so the UI can show a friendly
    /// message instead of silently continuing.
    fn update(&self, id: i64, patch: &CreatorDraft) -> StoreResult<Creator>;

    /// Remove a record. Deleting an id that no longer exists is not an
    /// error, which keeps repeated delete requests idempotent.
    fn delete_by_id(&self, id: i64) -> StoreResult<()>;
}
