//! To-do tasks, as listed by the remote API

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// When a task is due
///
/// The server always sends a `date`. A `datetime` is only present for tasks due at a given time of the day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Due {
    /// Human-readable, as typed by the user (e.g. "every monday")
    string: String,
    date: NaiveDate,
    #[serde(default)]
    datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    recurring: bool,
}

impl Due {
    pub fn on(date: NaiveDate) -> Self {
        Self { string: date.to_string(), date, datetime: None, timezone: None, recurring: false }
    }

    pub fn string(&self) -> &str                    { &self.string }
    pub fn date(&self) -> NaiveDate                 { self.date }
    pub fn datetime(&self) -> Option<&DateTime<Utc>> { self.datetime.as_ref() }
    pub fn timezone(&self) -> Option<&str>          { self.timezone.as_deref() }
    pub fn is_recurring(&self) -> bool              { self.recurring }
}

/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: u64,
    #[serde(default)]
    project_id: Option<u64>,
    /// The display name of the task
    content: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    label_ids: Vec<u64>,

    #[serde(default)]
    order: Option<i64>,
    #[serde(default)]
    indent: Option<u8>,
    /// From 1 (normal) to 4 (urgent)
    #[serde(default)]
    priority: Option<u8>,
    #[serde(default)]
    due: Option<Due>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    comment_count: Option<u32>,

    /// Fields this crate does not know about
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl Task {
    /// Create a task that has no optional field set
    pub fn new(id: u64, content: String, due: Option<Due>) -> Self {
        Self {
            id, content, due,
            project_id: None,
            completed: false,
            label_ids: Vec::new(),
            order: None,
            indent: None,
            priority: None,
            url: None,
            comment_count: None,
            extra: HashMap::new(),
        }
    }

    pub fn id(&self) -> u64                     { self.id }
    pub fn project_id(&self) -> Option<u64>     { self.project_id }
    pub fn content(&self) -> &str               { &self.content }
    pub fn completed(&self) -> bool             { self.completed }
    pub fn label_ids(&self) -> &[u64]           { &self.label_ids }
    pub fn order(&self) -> Option<i64>          { self.order }
    pub fn indent(&self) -> Option<u8>          { self.indent }
    pub fn priority(&self) -> Option<u8>        { self.priority }
    pub fn due(&self) -> Option<&Due>           { self.due.as_ref() }
    pub fn url(&self) -> Option<&str>           { self.url.as_deref() }
    pub fn comment_count(&self) -> Option<u32>  { self.comment_count }
    pub fn extra(&self) -> &HashMap<String, Value> { &self.extra }

    /// The calendar day this task is due, if any.
    /// This is the day in the user's timezone, even for tasks that have a (UTC) `datetime`
    pub fn due_day(&self) -> Option<NaiveDate> {
        self.due.as_ref().map(|due| due.date())
    }
}
