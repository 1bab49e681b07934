//! Core domain logic for TaskDeck.
//! This crate is the single source of truth for task list invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod ui;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status, parse_level, LogTarget};
pub use model::task::{
    CustomPriority, NewTask, Priority, Task, TaskFilter, TaskId, TaskPatch, TaskStats, DEFAULT_CATEGORY,
    DEFAULT_TITLE,
};
pub use service::task_manager::TaskManager;
pub use store::task_store::{MemoryTaskStore, TaskStore};
pub use ui::todo_ui::{TaskAction, TaskForm, TodoUi, UiEvent};
pub use ui::view::{
    BoardView, FilterControl, ParseFilterError, RenderSink, StatsView, TaskView, ViewFilter,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
