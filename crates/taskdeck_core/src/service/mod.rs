//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep UI and host layers decoupled from collection details.

pub mod task_manager;
