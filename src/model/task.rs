use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parse a priority label. Unrecognized input falls back to the default
    /// rather than being stored raw.
    pub fn parse_lenient(s: &str) -> Priority {
        match s.trim().to_lowercase().as_str() {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Single-character marker used in list output
    pub fn marker(self) -> char {
        match self {
            Priority::Low => 'v',
            Priority::Medium => '-',
            Priority::High => '^',
        }
    }
}

/// Opaque task identifier, assigned at creation and never reused.
///
/// Derived from the creation wall clock in milliseconds; the store clamps
/// each new id to be strictly greater than the last one handed out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(TaskId)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, immutable after creation
    pub id: TaskId,
    /// Title text, never stored empty
    pub title: String,
    /// Free-text category label; empty string means "no category"
    #[serde(default)]
    pub category: String,
    /// Optional due date (calendar date, no time-of-day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Priority, defaults to medium
    #[serde(default)]
    pub priority: Priority,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, title: String) -> Self {
        Task {
            id,
            title,
            category: String::new(),
            due_date: None,
            priority: Priority::default(),
            completed: false,
        }
    }

    /// True if the task has no category label
    pub fn is_uncategorized(&self) -> bool {
        self.category.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parse_lenient_known_values() {
        assert_eq!(Priority::parse_lenient("low"), Priority::Low);
        assert_eq!(Priority::parse_lenient("Medium"), Priority::Medium);
        assert_eq!(Priority::parse_lenient("  HIGH  "), Priority::High);
    }

    #[test]
    fn priority_parse_lenient_unknown_falls_back_to_default() {
        assert_eq!(Priority::parse_lenient("urgent"), Priority::Medium);
        assert_eq!(Priority::parse_lenient(""), Priority::Medium);
    }

    #[test]
    fn priority_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let p: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(p, Priority::Low);
    }

    #[test]
    fn task_serde_defaults_on_minimal_object() {
        // Only id and title are required; the rest default
        let task: Task = serde_json::from_str(r#"{"id":1,"title":"Minimal"}"#).unwrap();
        assert_eq!(task.id, TaskId(1));
        assert_eq!(task.title, "Minimal");
        assert!(task.category.is_empty());
        assert!(task.due_date.is_none());
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
    }

    #[test]
    fn task_id_round_trips_through_display() {
        let id = TaskId(1732000000123);
        let parsed: TaskId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
