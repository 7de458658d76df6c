//! Store layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the keyed container contract consumed by services.
//! - Keep locking details out of service orchestration.
//!
//! # Invariants
//! - Stores never validate; writers must call `Breakfast::validate()` first.
//! - Data lives only for the lifetime of the store instance.

pub mod breakfast_repo;
