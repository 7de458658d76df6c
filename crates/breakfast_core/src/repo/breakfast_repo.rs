//! Breakfast store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide a keyed container of breakfasts for the process lifetime.
//! - Expose the compound check-and-write primitives the service relies on.
//!
//! # Invariants
//! - No validation happens here; the service validates before writing.
//! - Each method runs under one lock acquisition, so `insert_if_absent`,
//!   `put` and `put_latest` observe and mutate the same map state.
//! - `put_latest` never lowers the stored `last_modified_time` of an ID.

use crate::model::breakfast::{Breakfast, BreakfastId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Store interface for breakfast records keyed by `Breakfast::id`.
pub trait BreakfastRepository {
    fn get(&self, id: BreakfastId) -> Option<Breakfast>;

    /// Inserts or replaces unconditionally, returning the replaced value.
    fn put(&self, breakfast: Breakfast) -> Option<Breakfast>;

    /// Inserts or replaces, keeping `last_modified_time` from moving
    /// backwards for the ID. Returns the replaced value.
    ///
    /// A value stamped no later than the stored one is written with the
    /// stored stamp; a newer value is written unchanged.
    fn put_latest(&self, breakfast: Breakfast) -> Option<Breakfast>;

    /// Inserts only when the ID is absent. Returns whether it inserted.
    fn insert_if_absent(&self, breakfast: Breakfast) -> bool;

    /// Removes the record if present; absent IDs are a no-op.
    fn remove(&self, id: BreakfastId) -> Option<Breakfast>;

    fn contains(&self, id: BreakfastId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutex-guarded in-memory breakfast store.
///
/// Share one instance across threads by wrapping the owning service in
/// `Arc`. State is dropped with the instance.
#[derive(Debug, Default)]
pub struct InMemoryBreakfastRepository {
    entries: Mutex<HashMap<BreakfastId, Breakfast>>,
}

impl InMemoryBreakfastRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store pre-sized for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::with_capacity(capacity)),
        }
    }

    // A panic while holding the lock cannot leave the map half-written:
    // every critical section is a single `HashMap` call.
    fn entries(&self) -> MutexGuard<'_, HashMap<BreakfastId, Breakfast>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BreakfastRepository for InMemoryBreakfastRepository {
    fn get(&self, id: BreakfastId) -> Option<Breakfast> {
        self.entries().get(&id).cloned()
    }

    fn put(&self, breakfast: Breakfast) -> Option<Breakfast> {
        self.entries().insert(breakfast.id, breakfast)
    }

    fn put_latest(&self, mut breakfast: Breakfast) -> Option<Breakfast> {
        let mut entries = self.entries();
        if let Some(previous) = entries.get(&breakfast.id) {
            breakfast.last_modified_time = breakfast
                .last_modified_time
                .max(previous.last_modified_time);
        }
        entries.insert(breakfast.id, breakfast)
    }

    fn insert_if_absent(&self, breakfast: Breakfast) -> bool {
        let mut entries = self.entries();
        if entries.contains_key(&breakfast.id) {
            return false;
        }
        entries.insert(breakfast.id, breakfast);
        true
    }

    fn remove(&self, id: BreakfastId) -> Option<Breakfast> {
        self.entries().remove(&id)
    }

    fn contains(&self, id: BreakfastId) -> bool {
        self.entries().contains_key(&id)
    }

    fn len(&self) -> usize {
        self.entries().len()
    }
}
