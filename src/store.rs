// Ordered in-memory task list

use crate::models::{Task, TaskId, TaskStatus};
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Owned copy of the whole list at a given revision
///
/// Every mutation on [`TaskList`] hands one of these back, so the view always
/// redraws from a complete state and never from a half-applied change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub revision: u64,
    pub tasks: Vec<Task>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// (description, completed) pairs in display order
    pub fn entries(&self) -> Vec<(&str, bool)> {
        self.tasks.iter().map(|t| (t.description.as_str(), t.completed)).collect()
    }
}

/// Ordered task collection, newest appended at the end
///
/// Tasks are addressed either by display position (what the view hands back
/// from a click) or by their stable [`TaskId`].
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    revision: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of applied mutations; no-ops don't count
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            revision: self.revision,
            tasks: self.tasks.clone(),
        }
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Current display position of a task
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    // ========================================================================
    // Positional API
    // ========================================================================

    /// Append a pending task
    ///
    /// Blank (whitespace-only) text is ignored without error; the returned
    /// snapshot is then identical to the current one. The text is stored as
    /// entered.
    pub fn add_task(&mut self, description: &str) -> Snapshot {
        if description.trim().is_empty() {
            debug!("add_task: ignoring blank description");
            return self.snapshot();
        }

        let task = Task::new(description);
        debug!(id = %task.id, position = self.tasks.len(), "add_task: appending");
        self.tasks.push(task);
        self.bump()
    }

    /// Set the completion flag of the task at `index`
    pub fn set_completed(&mut self, index: usize, completed: bool) -> Result<Snapshot> {
        self.check_index(index)?;

        if self.tasks[index].completed == completed {
            debug!(index, completed, "set_completed: already in requested state");
            return Ok(self.snapshot());
        }

        let updated = self.tasks[index].with_completed(completed);
        self.tasks[index] = updated;
        debug!(index, completed, "set_completed: updated");
        Ok(self.bump())
    }

    /// Flip the completion flag of the task at `index`
    pub fn toggle(&mut self, index: usize) -> Result<Snapshot> {
        self.check_index(index)?;
        let next = self.tasks[index].status().toggled();
        self.set_completed(index, next == TaskStatus::Completed)
    }

    /// Remove the task at `index`; later tasks shift down by one
    pub fn remove_task(&mut self, index: usize) -> Result<Snapshot> {
        self.check_index(index)?;

        let removed = self.tasks.remove(index);
        info!(id = %removed.id, index, "Removed task");
        Ok(self.bump())
    }

    // ========================================================================
    // Id-keyed API
    // ========================================================================

    pub fn set_completed_by_id(&mut self, id: &TaskId, completed: bool) -> Result<Snapshot> {
        let index = self.require_position(id)?;
        self.set_completed(index, completed)
    }

    pub fn toggle_by_id(&mut self, id: &TaskId) -> Result<Snapshot> {
        let index = self.require_position(id)?;
        self.toggle(index)
    }

    pub fn remove_by_id(&mut self, id: &TaskId) -> Result<Snapshot> {
        let index = self.require_position(id)?;
        self.remove_task(index)
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn bump(&mut self) -> Snapshot {
        self.revision += 1;
        self.snapshot()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(eyre!(
                "Task index {} out of range (len {})",
                index,
                self.tasks.len()
            ));
        }
        Ok(())
    }

    fn require_position(&self, id: &TaskId) -> Result<usize> {
        self.position(id).ok_or_else(|| eyre!("Task not found: {}", id))
    }
}
