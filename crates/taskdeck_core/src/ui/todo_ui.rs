//! Event handling and rendering for the task board.
//!
//! # Responsibility
//! - Turn form submissions, row actions and filter picks into manager calls.
//! - Keep the session's active filter and re-render after every change.
//!
//! # Invariants
//! - Blank titles are dropped here, before reaching the manager.
//! - Row actions on unknown ids still re-render; they never fail.

use crate::clock::{Clock, SystemClock};
use crate::model::task::{NewTask, Priority, Task, TaskFilter, TaskId};
use crate::service::task_manager::TaskManager;
use crate::store::task_store::{MemoryTaskStore, TaskStore};
use crate::ui::view::{BoardView, RenderSink, StatsView, TaskView, ViewFilter};
use log::{debug, info};

/// Raw values of the "new task" form, as a surface collects them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub priority: String,
    pub category: String,
}

impl TaskForm {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Converts to a create request, or `None` when the title is blank.
    ///
    /// Blank priority and category fall back to manager defaults.
    pub fn to_request(&self) -> Option<NewTask> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        Some(NewTask {
            title: Some(title.to_string()),
            priority: non_blank(&self.priority).map(Priority::from),
            category: non_blank(&self.category).map(str::to_string),
        })
    }
}

/// Per-row action tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Toggle,
    Delete,
}

/// Input side of the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Submit(TaskForm),
    Task { id: TaskId, action: TaskAction },
    SelectFilter(ViewFilter),
    ClearCompleted,
}

/// Board controller bound to one manager and one render sink.
pub struct TodoUi<'m, R, S = MemoryTaskStore, C = SystemClock>
where
    R: RenderSink,
    S: TaskStore,
    C: Clock,
{
    manager: &'m mut TaskManager<S, C>,
    sink: R,
    current_filter: ViewFilter,
}

impl<'m, R, S, C> TodoUi<'m, R, S, C>
where
    R: RenderSink,
    S: TaskStore,
    C: Clock,
{
    /// Binds `manager` and `sink`; the filter starts at `ViewFilter::All`.
    ///
    /// Nothing is rendered until the first event or an explicit `render()`.
    pub fn new(manager: &'m mut TaskManager<S, C>, sink: R) -> Self {
        Self {
            manager,
            sink,
            current_filter: ViewFilter::default(),
        }
    }

    pub fn current_filter(&self) -> ViewFilter {
        self.current_filter
    }

    pub fn manager(&self) -> &TaskManager<S, C> {
        &*self.manager
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn into_sink(self) -> R {
        self.sink
    }

    /// Routes one surface event to its handler.
    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::Submit(form) => {
                self.handle_add_task(&form);
            }
            UiEvent::Task {
                id,
                action: TaskAction::Toggle,
            } => self.handle_toggle(id),
            UiEvent::Task {
                id,
                action: TaskAction::Delete,
            } => self.handle_delete(id),
            UiEvent::SelectFilter(filter) => self.set_filter(filter),
            UiEvent::ClearCompleted => self.handle_clear_completed(),
        }
    }

    /// Adds a task from form values and re-renders.
    ///
    /// A blank title is ignored silently: nothing is created or rendered.
    pub fn handle_add_task(&mut self, form: &TaskForm) -> Option<Task> {
        let Some(request) = form.to_request() else {
            debug!("event=ui_add_task module=todo_ui status=ignored reason=blank_title");
            return None;
        };
        let task = self.manager.add(request);
        self.render();
        Some(task)
    }

    pub fn handle_toggle(&mut self, id: TaskId) {
        self.manager.toggle(id);
        self.render();
    }

    pub fn handle_delete(&mut self, id: TaskId) {
        self.manager.delete(id);
        self.render();
    }

    pub fn handle_clear_completed(&mut self) {
        self.manager.clear_completed();
        self.render();
    }

    /// Switches the visible subset and re-renders.
    pub fn set_filter(&mut self, filter: ViewFilter) {
        if filter != self.current_filter {
            info!(
                "event=ui_filter module=todo_ui status=ok from={} to={}",
                self.current_filter, filter
            );
        }
        self.current_filter = filter;
        self.render();
    }

    /// Builds the current board view without rendering it.
    pub fn view(&self) -> BoardView {
        let visible = self
            .manager
            .filter(&criteria_for(self.current_filter))
            .iter()
            .map(TaskView::from)
            .collect();
        let stats = StatsView::from(&self.manager.stats());
        BoardView::build(visible, stats, self.current_filter)
    }

    /// Pushes the current board view to the sink.
    pub fn render(&mut self) {
        let view = self.view();
        self.sink.render(&view);
    }
}

fn criteria_for(filter: ViewFilter) -> TaskFilter {
    match filter {
        ViewFilter::All => TaskFilter::default(),
        ViewFilter::Completed => TaskFilter {
            completed: Some(true),
            ..TaskFilter::default()
        },
        ViewFilter::Pending => TaskFilter {
            completed: Some(false),
            ..TaskFilter::default()
        },
        ViewFilter::HighPriority => TaskFilter {
            priority: Some(Priority::High),
            ..TaskFilter::default()
        },
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
