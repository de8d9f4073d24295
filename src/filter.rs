//! Refinements for task queries

/// Criteria to narrow down a task query.
///
/// This is accepted by [`TodoSource::fetch_tasks`](crate::traits::TodoSource::fetch_tasks), but it is not sent to the server yet:
/// every task is returned, whatever the filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Only return tasks of this project
    pub project_id: Option<u64>,
    /// Only return tasks that have this label
    pub label_id: Option<u64>,
    /// A Todoist filter expression (e.g. `today | overdue`)
    pub expression: Option<String>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.project_id.is_none() && self.label_id.is_none() && self.expression.is_none()
    }
}
