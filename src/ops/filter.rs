use chrono::NaiveDate;

use crate::model::task::Task;

/// Completion-status constraint in a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn parse(s: &str) -> Option<StatusFilter> {
        match s {
            "completed" => Some(StatusFilter::Completed),
            "pending" => Some(StatusFilter::Pending),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::Completed => "completed",
            StatusFilter::Pending => "pending",
        }
    }
}

/// A set of optional predicates combined by logical AND.
///
/// Text fields are normalized once at construction: trimmed, lowercased,
/// and dropped entirely when empty (an empty field means "no constraint",
/// not "match the empty string"). Keyword matches title or category as a
/// case-insensitive substring; category matches the whole value. The
/// asymmetry is intentional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    keyword: Option<String>,
    status: Option<StatusFilter>,
    category: Option<String>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
}

impl FilterSpec {
    pub fn new() -> FilterSpec {
        FilterSpec::default()
    }

    /// Keyword predicate; whitespace-only input leaves the spec unchanged.
    pub fn keyword(mut self, raw: &str) -> FilterSpec {
        let normalized = raw.trim().to_lowercase();
        if !normalized.is_empty() {
            self.keyword = Some(normalized);
        }
        self
    }

    pub fn status(mut self, status: StatusFilter) -> FilterSpec {
        self.status = Some(status);
        self
    }

    /// Exact-category predicate; whitespace-only input leaves the spec unchanged.
    pub fn category(mut self, raw: &str) -> FilterSpec {
        let normalized = raw.trim().to_lowercase();
        if !normalized.is_empty() {
            self.category = Some(normalized);
        }
        self
    }

    pub fn date_from(mut self, date: NaiveDate) -> FilterSpec {
        self.date_from = Some(date);
        self
    }

    pub fn date_to(mut self, date: NaiveDate) -> FilterSpec {
        self.date_to = Some(date);
        self
    }

    /// True if no predicate is set (the filter keeps everything).
    pub fn is_empty(&self) -> bool {
        *self == FilterSpec::default()
    }

    /// Evaluate the predicate against a single task.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(keyword) = &self.keyword {
            let title = task.title.to_lowercase();
            let category = task.category.to_lowercase();
            if !title.contains(keyword.as_str()) && !category.contains(keyword.as_str()) {
                return false;
            }
        }

        match self.status {
            Some(StatusFilter::Completed) if !task.completed => return false,
            Some(StatusFilter::Pending) if task.completed => return false,
            _ => {}
        }

        if let Some(category) = &self.category {
            if task.category.to_lowercase() != *category {
                return false;
            }
        }

        // Date bounds only constrain tasks that have a due date. An undated
        // task passes regardless of the bounds; both bounds are inclusive.
        if let Some(due) = task.due_date {
            if let Some(from) = self.date_from {
                if due < from {
                    return false;
                }
            }
            if let Some(to) = self.date_to {
                if due > to {
                    return false;
                }
            }
        }

        true
    }
}

/// Filter a task sequence, preserving relative order.
///
/// Returns a view into the input; the input is never mutated, and calling
/// this repeatedly with the same spec is idempotent.
pub fn filter_tasks<'a>(tasks: &'a [Task], spec: &FilterSpec) -> Vec<&'a Task> {
    tasks.iter().filter(|task| spec.matches(task)).collect()
}
