//! Typed caller inputs for breakfast writes.
//!
//! # Responsibility
//! - Carry the caller-supplied fields of create/upsert requests.
//! - Route every request through the validated `Breakfast` factories.
//!
//! # Invariants
//! - Requests never carry `id` or `last_modified_time`; the core owns both
//!   (upsert takes the id separately, from the resource address).

use crate::error::BreakfastResult;
use crate::model::breakfast::{Breakfast, BreakfastId};
use serde::{Deserialize, Serialize};

/// Input for creating a breakfast under a fresh ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBreakfastRequest {
    pub name: String,
    pub description: String,
    pub start_time: i64,
    pub end_time: i64,
    #[serde(default)]
    pub savory_items: Vec<String>,
    #[serde(default)]
    pub sweet_items: Vec<String>,
}

/// Input for a full-record create-or-replace at a caller-chosen ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertBreakfastRequest {
    pub name: String,
    pub description: String,
    pub start_time: i64,
    pub end_time: i64,
    #[serde(default)]
    pub savory_items: Vec<String>,
    #[serde(default)]
    pub sweet_items: Vec<String>,
}

impl Breakfast {
    /// Builds a breakfast with a generated ID from a create request.
    pub fn from_create_request(request: CreateBreakfastRequest) -> BreakfastResult<Self> {
        Self::new(
            request.name,
            request.description,
            request.start_time,
            request.end_time,
            request.savory_items,
            request.sweet_items,
        )
    }

    /// Builds a breakfast at `id` from an upsert request.
    pub fn from_upsert_request(
        id: BreakfastId,
        request: UpsertBreakfastRequest,
    ) -> BreakfastResult<Self> {
        Self::with_id(
            id,
            request.name,
            request.description,
            request.start_time,
            request.end_time,
            request.savory_items,
            request.sweet_items,
        )
    }
}
