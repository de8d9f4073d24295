use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::Task;

/// Task names, grouped by the day they are due
///
/// Tasks without a due date do not appear in a calendar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskCalendar {
    days: BTreeMap<NaiveDate, Vec<String>>,
}

impl TaskCalendar {
    pub fn from_tasks<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut days: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
        for task in tasks {
            match task.due_day() {
                None => log::trace!("Task {} has no due date, it will not be shown", task.id()),
                Some(day) => days.entry(day).or_default().push(task.content().to_string()),
            }
        }
        Self { days }
    }

    /// The tasks due on a given day (this is empty if there is none)
    pub fn tasks_on(&self, day: NaiveDate) -> &[String] {
        self.days.get(&day).map(|tasks| tasks.as_slice()).unwrap_or(&[])
    }

    pub fn count_on(&self, day: NaiveDate) -> usize {
        self.tasks_on(day).len()
    }

    /// Days that have at least one task, in chronological order
    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<String>)> {
        self.days.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
