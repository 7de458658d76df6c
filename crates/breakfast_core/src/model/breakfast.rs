//! Breakfast domain model.
//!
//! # Responsibility
//! - Define the canonical breakfast record and its field constraints.
//! - Provide validated factories for fresh and caller-identified records.
//!
//! # Invariants
//! - `id` is stable and never reused for another breakfast.
//! - `name` and `description` character counts stay within their bounds for
//!   every value produced by a factory or by deserialization.
//! - `last_modified_time` is stamped at construction, so every write carries
//!   a fresh timestamp.
//! - `start_time`/`end_time` ordering is not enforced.

use crate::error::{BreakfastError, BreakfastErrors, BreakfastResult};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a breakfast.
pub type BreakfastId = Uuid;

pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 50;
pub const MIN_DESCRIPTION_LENGTH: usize = 10;
pub const MAX_DESCRIPTION_LENGTH: usize = 150;

/// Canonical breakfast record.
///
/// Deserialization goes through [`Breakfast::validate`], so an out-of-bounds
/// payload is rejected instead of producing an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BreakfastRecord")]
pub struct Breakfast {
    pub id: BreakfastId,
    pub name: String,
    pub description: String,
    /// Unix epoch milliseconds.
    pub start_time: i64,
    /// Unix epoch milliseconds. May precede `start_time`.
    pub end_time: i64,
    /// Unix epoch milliseconds, set by the core.
    pub last_modified_time: i64,
    /// Insertion order is significant; duplicates are allowed.
    pub savory_items: Vec<String>,
    pub sweet_items: Vec<String>,
}

impl Breakfast {
    /// Creates a validated breakfast with a generated stable ID.
    ///
    /// # Errors
    /// - Returns every failing field constraint at once, in field order
    ///   (`name` before `description`).
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_time: i64,
        end_time: i64,
        savory_items: Vec<String>,
        sweet_items: Vec<String>,
    ) -> BreakfastResult<Self> {
        Self::with_id(
            Uuid::new_v4(),
            name,
            description,
            start_time,
            end_time,
            savory_items,
            sweet_items,
        )
    }

    /// Creates a validated breakfast with a caller-provided stable ID.
    ///
    /// Used by upsert paths where the ID may target an existing record.
    pub fn with_id(
        id: BreakfastId,
        name: impl Into<String>,
        description: impl Into<String>,
        start_time: i64,
        end_time: i64,
        savory_items: Vec<String>,
        sweet_items: Vec<String>,
    ) -> BreakfastResult<Self> {
        let breakfast = Self {
            id,
            name: name.into(),
            description: description.into(),
            start_time,
            end_time,
            last_modified_time: now_epoch_ms(),
            savory_items,
            sweet_items,
        };
        breakfast.validate()?;
        Ok(breakfast)
    }

    /// Checks field constraints and aggregates every violation.
    pub fn validate(&self) -> BreakfastResult<()> {
        let mut errors = Vec::new();

        let name_length = self.name.chars().count();
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&name_length) {
            errors.push(BreakfastError::InvalidName {
                length: name_length,
            });
        }

        let description_length = self.description.chars().count();
        if !(MIN_DESCRIPTION_LENGTH..=MAX_DESCRIPTION_LENGTH).contains(&description_length) {
            errors.push(BreakfastError::InvalidDescription {
                length: description_length,
            });
        }

        match BreakfastErrors::from_errors(errors) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Clamps to `0` if the clock reads before the epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Unvalidated wire shape; only reachable through `TryFrom`.
#[derive(Deserialize)]
struct BreakfastRecord {
    id: BreakfastId,
    name: String,
    description: String,
    start_time: i64,
    end_time: i64,
    last_modified_time: i64,
    savory_items: Vec<String>,
    sweet_items: Vec<String>,
}

impl TryFrom<BreakfastRecord> for Breakfast {
    type Error = BreakfastErrors;

    fn try_from(record: BreakfastRecord) -> Result<Self, Self::Error> {
        let breakfast = Self {
            id: record.id,
            name: record.name,
            description: record.description,
            start_time: record.start_time,
            end_time: record.end_time,
            last_modified_time: record.last_modified_time,
            savory_items: record.savory_items,
            sweet_items: record.sweet_items,
        };
        breakfast.validate()?;
        Ok(breakfast)
    }
}

#[cfg(test)]
mod tests {
    use super::{now_epoch_ms, Breakfast, MAX_NAME_LENGTH, MIN_NAME_LENGTH};

    #[test]
    fn name_bounds_are_inclusive() {
        for length in [MIN_NAME_LENGTH, MAX_NAME_LENGTH] {
            let name = "n".repeat(length);
            Breakfast::new(name, "long enough text", 0, 0, Vec::new(), Vec::new())
                .expect("boundary length should be accepted");
        }
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // Three characters, nine bytes.
        let breakfast = Breakfast::new("粥粥粥", "long enough text", 0, 0, Vec::new(), Vec::new());
        assert!(breakfast.is_ok());
    }

    #[test]
    fn construction_stamps_last_modified_time() {
        let before = now_epoch_ms();
        let breakfast =
            Breakfast::new("Waffles", "Belgian waffles", 0, 0, Vec::new(), Vec::new()).unwrap();
        assert!(breakfast.last_modified_time >= before);
        assert!(breakfast.last_modified_time <= now_epoch_ms());
    }
}
