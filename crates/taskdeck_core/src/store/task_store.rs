//! Task store contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the task collection in insertion order.
//! - Offer lookup and mutation by `TaskId`.
//!
//! # Invariants
//! - Callers guarantee id uniqueness; the store does not assign ids.
//! - `tasks()` always reflects insertion order minus removals.

use crate::model::task::{Task, TaskId};

/// Collection contract used by `TaskManager`.
pub trait TaskStore {
    fn insert(&mut self, task: Task);
    fn get(&self, id: TaskId) -> Option<&Task>;
    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task>;
    fn remove(&mut self, id: TaskId) -> Option<Task>;
    /// Keeps only tasks for which `keep` returns true; returns removed count.
    fn retain(&mut self, keep: &mut dyn FnMut(&Task) -> bool) -> usize;
    fn tasks(&self) -> &[Task];

    fn len(&self) -> usize {
        self.tasks().len()
    }

    fn is_empty(&self) -> bool {
        self.tasks().is_empty()
    }
}

/// Vector-backed store. Lookups are linear, which suits a personal list.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaskStore {
    tasks: Vec<Task>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskStore for MemoryTaskStore {
    fn insert(&mut self, task: Task) {
        self.tasks.push(task);
    }

    fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        Some(self.tasks.remove(index))
    }

    fn retain(&mut self, keep: &mut dyn FnMut(&Task) -> bool) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| keep(task));
        before - self.tasks.len()
    }

    fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
