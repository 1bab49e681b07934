//! Storage seam beneath the task service.
//!
//! # Responsibility
//! - Define the collection contract the task manager mutates through.
//! - Keep container details out of use-case orchestration.
//!
//! # Invariants
//! - Stores preserve insertion order for reads.
//! - Removal never reorders the remaining tasks.

pub mod task_store;
