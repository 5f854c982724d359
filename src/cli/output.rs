use chrono::NaiveDate;
use serde::Serialize;

use crate::model::task::{Priority, Task, TaskId};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: TaskId,
    /// 1-based position in the full collection (stable across filtering)
    pub position: usize,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct AddedJson {
    pub id: TaskId,
}

pub fn task_to_json(task: &Task, position: usize) -> TaskJson {
    TaskJson {
        id: task.id,
        position: position + 1,
        title: task.title.clone(),
        category: task.category.clone(),
        due: task.due_date,
        priority: task.priority,
        completed: task.completed,
    }
}

// ---------------------------------------------------------------------------
// Plain-text formatting
// ---------------------------------------------------------------------------

/// One list row. The position is the 1-based index in the *full* collection,
/// so a row from a filtered listing can be handed straight to `mv`.
pub fn format_task_row(task: &Task, position: usize) -> String {
    let mut row = format!(
        "{:>3}. [{}] {} {}",
        position + 1,
        if task.completed { 'x' } else { ' ' },
        task.priority.marker(),
        task.title,
    );
    if !task.category.is_empty() {
        row.push_str(&format!("  #{}", task.category));
    }
    if let Some(due) = task.due_date {
        row.push_str(&format!("  due:{}", due.format("%Y-%m-%d")));
    }
    row
}

/// Multi-line detail view for `show`
pub fn format_task_detail(task: &Task, position: usize) -> Vec<String> {
    let mut lines = vec![
        format!("id:        {}", task.id),
        format!("position:  {}", position + 1),
        format!("title:     {}", task.title),
        format!(
            "category:  {}",
            if task.category.is_empty() {
                "(none)"
            } else {
                &task.category
            }
        ),
        format!("priority:  {}", task.priority.as_str()),
        format!(
            "completed: {}",
            if task.completed { "yes" } else { "no" }
        ),
    ];
    if let Some(due) = task.due_date {
        lines.insert(4, format!("due:       {}", due.format("%Y-%m-%d")));
    }
    lines
}
