//! Core domain logic for the breakfast resource service.
//! This crate is the single source of truth for breakfast invariants.

pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use error::{BreakfastError, BreakfastErrors, BreakfastResult, ErrorKind};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::breakfast::{
    now_epoch_ms, Breakfast, BreakfastId, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
    MIN_DESCRIPTION_LENGTH, MIN_NAME_LENGTH,
};
pub use model::request::{CreateBreakfastRequest, UpsertBreakfastRequest};
pub use repo::breakfast_repo::{BreakfastRepository, InMemoryBreakfastRepository};
pub use service::breakfast_service::{BreakfastService, Created, Deleted, UpsertResult};

/// Minimal health-check API for transport wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
