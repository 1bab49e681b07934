//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical `Task` record owned by the task manager.
//! - Provide typed option structs for create, patch and filter calls.
//!
//! # Invariants
//! - `id` is assigned by the manager only; nothing here generates ids.
//! - `created_at` is fixed at creation and has no patch field.
//! - Missing create fields fall back to documented defaults, never errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Process-unique task identifier, assigned in strictly increasing order.
pub type TaskId = u64;

/// Title used when a create request omits one.
pub const DEFAULT_TITLE: &str = "Untitled task";

/// Category used when a create request omits one.
pub const DEFAULT_CATEGORY: &str = "general";

/// Task priority.
///
/// The three known levels drive ordering. Any other label is kept as
/// `Custom` and ranks below `Low`. Every value is built through `FromStr`,
/// so a known label can never appear as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Custom(CustomPriority),
}

/// Free-text priority label outside `low|medium|high`.
///
/// Only `Priority`'s parser can build one; the label is trimmed and never
/// matches a known level, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomPriority(String);

impl CustomPriority {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Priority {
    /// Sort rank: high=3, medium=2, low=1, custom=0.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Custom(_) => 0,
        }
    }

    /// Label used for display, stats keys and serialization.
    ///
    /// Known levels are lowercase; custom labels keep their casing.
    pub fn label(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Custom(custom) => custom.as_str(),
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Ok(match trimmed.to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Custom(CustomPriority(trimmed.to_string())),
        })
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(priority) => priority,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Custom(CustomPriority(label)) => label,
            known => known.label().to_string(),
        }
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Applies every set field of `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

/// Create request. Every field is optional.
///
/// - `title` defaults to [`DEFAULT_TITLE`].
/// - `priority` defaults to [`Priority::Medium`].
/// - `category` defaults to [`DEFAULT_CATEGORY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Partial update. Unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.category.is_none()
    }
}

/// Exact-match query over a task list. Unset criteria match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub category: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.category
            .as_ref()
            .map_or(true, |category| &task.category == category)
            && self
                .completed
                .map_or(true, |completed| task.completed == completed)
            && self
                .priority
                .as_ref()
                .map_or(true, |priority| &task.priority == priority)
    }
}

/// Aggregate counters over a whole task collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Integer percentage in `0..=100`; `0` for an empty collection.
    pub completion_rate: u32,
    /// Keyed by priority label; only labels present in the collection.
    pub priority_stats: BTreeMap<String, usize>,
    /// Keyed by category; only categories present in the collection.
    pub category_stats: BTreeMap<String, usize>,
}

impl TaskStats {
    /// Computes stats over `tasks` in a single pass.
    pub fn collect<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut stats = Self::default();
        for task in tasks {
            stats.total += 1;
            if task.completed {
                stats.completed += 1;
            }
            *stats
                .priority_stats
                .entry(task.priority.label().to_string())
                .or_default() += 1;
            *stats
                .category_stats
                .entry(task.category.clone())
                .or_default() += 1;
        }
        stats.pending = stats.total - stats.completed;
        stats.completion_rate = completion_rate(stats.completed, stats.total);
        stats
    }
}

/// Rounded percentage with halves rounding up.
fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed * 200 + total) / (total * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::{completion_rate, CustomPriority, Priority};

    #[test]
    fn completion_rate_rounds_half_up() {
        assert_eq!(completion_rate(0, 0), 0);
        assert_eq!(completion_rate(1, 2), 50);
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(1, 8), 13);
        assert_eq!(completion_rate(3, 3), 100);
    }

    #[test]
    fn priority_parse_is_case_insensitive_for_known_labels() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" low ".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!(
            "urgent".parse::<Priority>().unwrap(),
            Priority::Custom(CustomPriority("urgent".to_string()))
        );
    }

    #[test]
    fn custom_priority_label_is_trimmed() {
        let priority = " Urgent ".parse::<Priority>().unwrap();
        assert_eq!(priority, Priority::Custom(CustomPriority("Urgent".to_string())));
        assert_eq!(priority.label(), "Urgent");
        assert_eq!(String::from(priority), "Urgent");
    }
}
