//! View models and the render sink contract.

use crate::model::task::{Task, TaskId, TaskStats};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Visible subset selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewFilter {
    #[default]
    All,
    Completed,
    Pending,
    HighPriority,
}

impl ViewFilter {
    /// Every filter in control display order.
    pub const ALL: [ViewFilter; 4] = [
        ViewFilter::All,
        ViewFilter::Completed,
        ViewFilter::Pending,
        ViewFilter::HighPriority,
    ];

    /// Stable machine name (`all|completed|pending|high-priority`).
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::HighPriority => "high-priority",
        }
    }

    /// Human label for a filter control.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::HighPriority => "High priority",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            Self::All => "No tasks yet. Add one to get started!",
            Self::Completed => "No completed tasks.",
            Self::Pending => "No pending tasks. All done!",
            Self::HighPriority => "No high-priority tasks.",
        }
    }
}

impl Display for ViewFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown filter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterError(pub String);

impl Display for ParseFilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown filter `{}`; expected all|completed|pending|high-priority",
            self.0
        )
    }
}

impl Error for ParseFilterError {}

impl FromStr for ViewFilter {
    type Err = ParseFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            "high-priority" | "high_priority" | "high" => Ok(Self::HighPriority),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

/// One row of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub priority: String,
    pub category: String,
    pub created: String,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            completed: task.completed,
            priority: task.priority.label().to_string(),
            category: task.category.clone(),
            created: task.created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

/// Summary counters panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub completion_rate: u32,
}

impl From<&TaskStats> for StatsView {
    fn from(stats: &TaskStats) -> Self {
        Self {
            total: stats.total,
            completed: stats.completed,
            pending: stats.pending,
            completion_rate: stats.completion_rate,
        }
    }
}

/// Filter selector state; exactly one control is `active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterControl {
    pub filter: ViewFilter,
    pub label: &'static str,
    pub active: bool,
}

/// Everything a surface needs to draw the board once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub tasks: Vec<TaskView>,
    pub stats: StatsView,
    pub filters: Vec<FilterControl>,
    /// Set only when `tasks` is empty.
    pub empty_state: Option<String>,
}

impl BoardView {
    pub(crate) fn build(tasks: Vec<TaskView>, stats: StatsView, active: ViewFilter) -> Self {
        let filters = ViewFilter::ALL
            .into_iter()
            .map(|filter| FilterControl {
                filter,
                label: filter.label(),
                active: filter == active,
            })
            .collect();
        let empty_state = tasks
            .is_empty()
            .then(|| active.empty_message().to_string());
        Self {
            tasks,
            stats,
            filters,
            empty_state,
        }
    }

    pub fn active_filter(&self) -> ViewFilter {
        self.filters
            .iter()
            .find(|control| control.active)
            .map(|control| control.filter)
            .unwrap_or_default()
    }
}

/// Output side of the rendering surface.
pub trait RenderSink {
    fn render(&mut self, view: &BoardView);
}
