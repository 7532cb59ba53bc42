//! In-memory result cache shared between request handlers.
//!
//! IDs come from an atomic counter that is independent of the map lock, so
//! two racing inserts always get distinct IDs but may land in the map in
//! either order. Entries are write-once and live until the process exits.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;

use crate::core::{CacheEntry, LoanResult};

#[derive(Debug, Default)]
pub struct Store {
    entries: Mutex<HashMap<u32, CacheEntry>>,
    next_id: AtomicU32,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the result under a fresh ID and returns that ID.
    pub fn insert(&self, result: LoanResult) -> u32 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let entry = CacheEntry::new(id, result);
        self.entries.lock().insert(id, entry);
        id
    }

    /// Snapshot of every entry in map iteration order (not sorted by ID).
    pub fn list_all(&self) -> Vec<CacheEntry> {
        self.entries.lock().values().cloned().collect()
    }

    pub fn has_data(&self) -> bool {
        !self.entries.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_data()
    }
}
