//! Presentation bridge between the task manager and a render surface.
//!
//! # Responsibility
//! - Translate user events into task manager calls.
//! - Build plain view models and hand them to a `RenderSink`.
//!
//! # Invariants
//! - The UI never mutates the collection except through `TaskManager`.
//! - Stats in a rendered view always cover the whole collection.
//!
//! # See also
//! - `service::task_manager`

pub mod todo_ui;
pub mod view;
