//! Breakfast use-case service.
//!
//! # Responsibility
//! - Provide create/get/upsert/delete entry points for transport callers.
//! - Validate before every write and translate store outcomes into typed
//!   results.
//!
//! # Invariants
//! - Each operation performs exactly one store call after validation.
//! - `create` never overwrites; `upsert` always fully replaces.
//! - `last_modified_time` of a stored ID never decreases across writes.
//! - `delete` is idempotent and never fails.
//! - Log events carry ids and outcomes only, never field contents.

use crate::error::{BreakfastError, BreakfastResult};
use crate::model::breakfast::{Breakfast, BreakfastId};
use crate::repo::breakfast_repo::BreakfastRepository;
use log::{debug, info, warn};

/// Success marker for `create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Created;

/// Success marker for `delete`, returned whether or not the ID existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted;

/// Outcome of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertResult {
    /// `true` iff no breakfast existed at the ID before the write.
    pub was_created: bool,
}

/// Breakfast service facade over an injected store.
pub struct BreakfastService<R: BreakfastRepository> {
    repo: R,
}

impl<R: BreakfastRepository> BreakfastService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Stores a new breakfast.
    ///
    /// # Errors
    /// - Validation errors when the value violates field bounds.
    /// - `AlreadyExists` when the ID is already stored; the stored value is
    ///   left untouched.
    pub fn create(&self, breakfast: Breakfast) -> BreakfastResult<Created> {
        let id = breakfast.id;
        if let Err(errors) = breakfast.validate() {
            warn!(
                "event=breakfast_create module=service status=rejected id={} error_code={}",
                id,
                errors.codes().join(",")
            );
            return Err(errors);
        }

        if !self.repo.insert_if_absent(breakfast) {
            warn!(
                "event=breakfast_create module=service status=conflict id={} error_code={}",
                id,
                BreakfastError::AlreadyExists(id).code()
            );
            return Err(BreakfastError::AlreadyExists(id).into());
        }

        info!("event=breakfast_create module=service status=ok id={id}");
        Ok(Created)
    }

    /// Returns the stored breakfast for `id`.
    ///
    /// # Errors
    /// - `NotFound` when nothing is stored at `id`.
    pub fn get(&self, id: BreakfastId) -> BreakfastResult<Breakfast> {
        match self.repo.get(id) {
            Some(breakfast) => {
                debug!("event=breakfast_get module=service status=ok id={id}");
                Ok(breakfast)
            }
            None => {
                debug!("event=breakfast_get module=service status=not_found id={id}");
                Err(BreakfastError::NotFound(id).into())
            }
        }
    }

    /// Creates or fully replaces the breakfast at `breakfast.id`.
    ///
    /// `was_created` is derived from the value the write displaced, so it
    /// reflects the state immediately before this write. The stored
    /// `last_modified_time` never moves backwards: a value stamped before the
    /// one it replaces inherits the replaced stamp.
    ///
    /// # Errors
    /// - Validation errors only; a valid value always succeeds.
    pub fn upsert(&self, breakfast: Breakfast) -> BreakfastResult<UpsertResult> {
        let id = breakfast.id;
        if let Err(errors) = breakfast.validate() {
            warn!(
                "event=breakfast_upsert module=service status=rejected id={} error_code={}",
                id,
                errors.codes().join(",")
            );
            return Err(errors);
        }

        let was_created = self.repo.put_latest(breakfast).is_none();
        info!("event=breakfast_upsert module=service status=ok id={id} was_created={was_created}");
        Ok(UpsertResult { was_created })
    }

    /// Removes the breakfast at `id` if present.
    pub fn delete(&self, id: BreakfastId) -> BreakfastResult<Deleted> {
        let existed = self.repo.remove(id).is_some();
        info!("event=breakfast_delete module=service status=ok id={id} existed={existed}");
        Ok(Deleted)
    }
}
