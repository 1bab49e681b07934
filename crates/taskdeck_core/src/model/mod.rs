//! Domain model for the in-memory task list.
//!
//! # Responsibility
//! - Define the canonical task record and its request/patch/query shapes.
//! - Keep defaults for omitted fields in one place.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` that is never reused.
//! - `id` and `created_at` cannot be changed through any patch shape.

pub mod task;
