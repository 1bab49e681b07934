//! Task list use-case service.
//!
//! # Responsibility
//! - Own the task collection and every mutation of it.
//! - Provide deterministic queries (filter, stats, priority ordering).
//!
//! # Invariants
//! - Ids are strictly increasing and never reused, even after deletes.
//! - Unknown ids are a silent `None`, never an error or a panic.
//! - Queries return fresh vectors and never reorder the collection.
//! - Logs carry ids and counts only, never task titles.

use crate::clock::{Clock, SystemClock};
use crate::model::task::{
    NewTask, Task, TaskFilter, TaskId, TaskPatch, TaskStats, DEFAULT_CATEGORY, DEFAULT_TITLE,
};
use crate::store::task_store::{MemoryTaskStore, TaskStore};
use log::debug;

/// Single owner of one task collection.
pub struct TaskManager<S: TaskStore = MemoryTaskStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    last_id: TaskId,
}

impl TaskManager {
    /// Creates an empty in-memory manager stamped by the wall clock.
    pub fn new() -> Self {
        Self::with_parts(MemoryTaskStore::new(), SystemClock)
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskManager<MemoryTaskStore, C> {
    /// Creates an empty in-memory manager using `clock` for `created_at`.
    pub fn with_clock(clock: C) -> Self {
        Self::with_parts(MemoryTaskStore::new(), clock)
    }
}

impl<S: TaskStore, C: Clock> TaskManager<S, C> {
    /// Creates a manager over an existing store.
    ///
    /// Id assignment continues after the highest id already in `store`.
    pub fn with_parts(store: S, clock: C) -> Self {
        let last_id = store.tasks().iter().map(|task| task.id).max().unwrap_or(0);
        Self {
            store,
            clock,
            last_id,
        }
    }

    /// Creates a task from `request`, filling defaults for missing fields.
    ///
    /// # Contract
    /// - `completed` starts as `false`; `created_at` is read from the clock.
    /// - The title is stored as given; blank titles are accepted here.
    pub fn add(&mut self, request: NewTask) -> Task {
        self.last_id += 1;
        let task = Task {
            id: self.last_id,
            title: request.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            completed: false,
            priority: request.priority.unwrap_or_default(),
            category: request
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            created_at: self.clock.now(),
        };
        self.store.insert(task.clone());
        debug!(
            "event=task_add module=task_manager status=ok id={} priority={} total={}",
            task.id,
            task.priority,
            self.store.len()
        );
        task
    }

    /// Flips `completed` and returns the updated task.
    pub fn toggle(&mut self, id: TaskId) -> Option<Task> {
        let Some(task) = self.store.get_mut(id) else {
            debug!("event=task_toggle module=task_manager status=not_found id={id}");
            return None;
        };
        task.completed = !task.completed;
        debug!(
            "event=task_toggle module=task_manager status=ok id={id} completed={}",
            task.completed
        );
        Some(task.clone())
    }

    /// Removes the task and returns it.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.store.remove(id);
        debug!(
            "event=task_delete module=task_manager status={} id={id}",
            if removed.is_some() { "ok" } else { "not_found" }
        );
        removed
    }

    /// Merges `patch` into the task and returns the updated task.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> Option<Task> {
        let Some(task) = self.store.get_mut(id) else {
            debug!("event=task_update module=task_manager status=not_found id={id}");
            return None;
        };
        let empty = patch.is_empty();
        task.apply(patch);
        debug!("event=task_update module=task_manager status=ok id={id} noop={empty}");
        Some(task.clone())
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Full collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Tasks matching every set criterion of `filter`, in insertion order.
    pub fn filter(&self, filter: &TaskFilter) -> Vec<Task> {
        self.tasks()
            .iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect()
    }

    /// Tasks whose title contains `text`, ignoring case.
    ///
    /// Blank `text` matches every task.
    pub fn search(&self, text: &str) -> Vec<Task> {
        let needle = text.trim().to_lowercase();
        self.tasks()
            .iter()
            .filter(|task| needle.is_empty() || task.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Aggregates over the whole collection.
    pub fn stats(&self) -> TaskStats {
        TaskStats::collect(self.tasks())
    }

    /// All tasks ordered high > medium > low > custom.
    ///
    /// Equal ranks keep insertion order (`sort_by` is stable).
    pub fn tasks_by_priority(&self) -> Vec<Task> {
        let mut sorted = self.tasks().to_vec();
        sorted.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
        sorted
    }

    /// Removes every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.store.retain(&mut |task| !task.completed);
        debug!(
            "event=task_clear_completed module=task_manager status=ok removed={removed} remaining={}",
            self.store.len()
        );
        removed
    }
}
