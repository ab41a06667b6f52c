//! In-process implementation of the store contract. Used by the test suite
//! and handy for poking at the UI without a hosted table; it honors the same
//! observable behavior as the REST client, including id assignment and
//! idempotent deletes.

use std::sync::{Mutex, MutexGuard};

use crate::models::{Creator, CreatorDraft};

use super::{CreatorStore, StoreError, StoreResult};

/// A mutex-guarded row set with a monotonic id counter. Ids are never
/// reused, even after deletion, matching the hosted store's behavior.
pub struct MemoryStore {
    inner: Mutex<Shelf>,
}

struct Shelf {
    rows: Vec<Creator>,
    next_id: i64,
}

impl MemoryStore {
    /// An empty store whose first insert receives id 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Shelf {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Pre-populate the store, continuing the id sequence past the highest
    /// seeded id.
    pub fn with_rows(rows: Vec<Creator>) -> Self {
        let next_id = rows.iter().map(|row| row.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Shelf { rows, next_id }),
        }
    }

    fn shelf(&self) -> StoreResult<MutexGuard<'_, Shelf>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("store state poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn hydrate(id: i64, draft: &CreatorDraft) -> Creator {
    Creator {
        id,
        name: draft.name.clone(),
        url: draft.url.clone(),
        image_url: draft.image_url.clone(),
        description: draft.description.clone(),
    }
}

impl CreatorStore for MemoryStore {
    fn list_all(&self) -> StoreResult<Vec<Creator>> {
        Ok(self.shelf()?.rows.clone())
    }

    fn get_by_id(&self, id: i64) -> StoreResult<Creator> {
        self.shelf()?
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn insert(&self, draft: &CreatorDraft) -> StoreResult<Creator> {
        let mut shelf = self.shelf()?;
        let id = shelf.next_id;
        shelf.next_id += 1;
        let creator = hydrate(id, draft);
        shelf.rows.push(creator.clone());
        Ok(creator)
    }

    fn update(&self, id: i64, patch: &CreatorDraft) -> StoreResult<Creator> {
        let mut shelf = self.shelf()?;
        let row = shelf
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *row = hydrate(id, patch);
        Ok(row.clone())
    }

    fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.shelf()?.rows.retain(|row| row.id != id);
        Ok(())
    }
}
