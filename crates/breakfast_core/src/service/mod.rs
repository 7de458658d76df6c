//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and store calls into use-case level APIs.
//! - Keep transport layers decoupled from storage details.

pub mod breakfast_service;
