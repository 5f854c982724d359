use chrono::Utc;

use crate::model::task::{Priority, Task, TaskId};
use crate::ops::reorder::{reorder, ReorderError};
use crate::ops::task_ops::{TaskDraft, TaskError};

/// The owned task collection for one session.
///
/// Holds the ordered sequence plus the high-water mark for id assignment.
/// All mutation goes through methods here; callers persist the full
/// collection after each successful mutation.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_id: i64,
}

impl TaskStore {
    /// Wrap a loaded collection. The id high-water mark is recovered from
    /// the tasks themselves so ids stay unique across sessions.
    pub fn new(tasks: Vec<Task>) -> TaskStore {
        let last_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        TaskStore { tasks, last_id }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Position of a task in the full (unfiltered) collection.
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Wall-clock-derived id, clamped so consecutive creates within one
    /// millisecond still increase strictly.
    fn next_id(&mut self) -> TaskId {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        TaskId(id)
    }

    /// Validate a draft and append the new task. `default_priority` is used
    /// when the draft does not specify one.
    pub fn add(&mut self, draft: &TaskDraft, default_priority: Priority) -> Result<TaskId, TaskError> {
        let normalized = draft.normalize()?;
        let id = self.next_id();
        self.tasks.push(Task {
            id,
            title: normalized.title,
            category: normalized.category,
            due_date: normalized.due_date,
            priority: normalized.priority.unwrap_or(default_priority),
            completed: false,
        });
        Ok(id)
    }

    /// Validate a draft and apply it to an existing task. Title, category,
    /// and due date are replaced wholesale; priority only when specified.
    /// A failing draft leaves the task untouched.
    pub fn edit(&mut self, id: TaskId, draft: &TaskDraft) -> Result<(), TaskError> {
        let normalized = draft.normalize()?;
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.title = normalized.title;
        task.category = normalized.category;
        task.due_date = normalized.due_date;
        if let Some(priority) = normalized.priority {
            task.priority = priority;
        }
        Ok(())
    }

    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> Result<(), TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.completed = completed;
        Ok(())
    }

    /// Flip the completion flag; returns the new value.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Remove a task permanently. Its id is never reassigned.
    pub fn remove(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let idx = self.position(id).ok_or(TaskError::NotFound(id))?;
        Ok(self.tasks.remove(idx))
    }

    /// Relocate the task at `from` to position `to` (full-collection
    /// indices). Out-of-range indices leave the collection unchanged.
    pub fn move_task(&mut self, from: usize, to: usize) -> Result<(), ReorderError> {
        self.tasks = reorder(&self.tasks, from, to)?;
        Ok(())
    }
}
