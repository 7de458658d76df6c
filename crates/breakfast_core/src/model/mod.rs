//! Breakfast domain model.
//!
//! # Responsibility
//! - Define the breakfast record, its field bounds, and validated factories.
//! - Define typed request inputs decoded by outer layers.
//!
//! # Invariants
//! - Every breakfast produced here has passed `Breakfast::validate()`.

pub mod breakfast;
pub mod request;
