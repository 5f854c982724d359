use chrono::NaiveDate;

use crate::model::task::Task;

/// Incomplete tasks whose due date is on or before `today`, in collection
/// order. Computing the set is the core's job; alerting on it is not.
pub fn due_tasks<'a>(tasks: &'a [Task], today: NaiveDate) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| !task.completed && task.due_date.is_some_and(|due| due <= today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskId;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn task(id: i64, due: Option<&str>, completed: bool) -> Task {
        Task {
            due_date: due.map(date),
            completed,
            ..Task::new(TaskId(id), format!("Task {id}"))
        }
    }

    #[test]
    fn overdue_and_due_today_are_included() {
        let tasks = vec![
            task(1, Some("2025-11-19"), false),
            task(2, Some("2025-11-20"), false),
            task(3, Some("2025-11-21"), false),
        ];
        let due = due_tasks(&tasks, date("2025-11-20"));
        let ids: Vec<TaskId> = due.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(1), TaskId(2)]);
    }

    #[test]
    fn completed_tasks_are_never_due() {
        let tasks = vec![task(1, Some("2025-01-01"), true)];
        assert!(due_tasks(&tasks, date("2025-11-20")).is_empty());
    }

    #[test]
    fn undated_tasks_are_never_due() {
        let tasks = vec![task(1, None, false)];
        assert!(due_tasks(&tasks, date("2025-11-20")).is_empty());
    }
}
