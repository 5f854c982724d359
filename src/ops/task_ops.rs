use chrono::NaiveDate;

use crate::model::task::{Priority, TaskId};

/// Error type for task validation and lookup
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Raw task fields as they arrive from the boundary (create or edit form).
///
/// `priority` carries the raw label so unrecognized input can be normalized
/// in one place instead of at each call site; `None` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub category: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<String>,
}

/// A draft that passed validation: trimmed text, parsed priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDraft {
    pub title: String,
    pub category: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
}

impl TaskDraft {
    /// Shared validation/normalization for the create and edit paths.
    ///
    /// Trims title and category, rejects an empty trimmed title, and parses
    /// the priority label leniently (unknown labels become the default).
    /// Due dates are parsed at the boundary and arrive here well-formed.
    pub fn normalize(&self) -> Result<NormalizedDraft, TaskError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        Ok(NormalizedDraft {
            title,
            category: self.category.trim().to_string(),
            due_date: self.due_date,
            priority: self.priority.as_deref().map(Priority::parse_lenient),
        })
    }
}
