//! Projects, as listed by the remote API

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Todoist project
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: u64,
    name: String,

    #[serde(default)]
    order: Option<i64>,
    /// Nesting level, from 1 (top-level) to 4
    #[serde(default)]
    indent: Option<u8>,
    #[serde(default)]
    comment_count: Option<u32>,

    /// Fields this crate does not know about
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl Project {
    pub fn new(id: u64, name: String) -> Self {
        Self { id, name, order: None, indent: None, comment_count: None, extra: HashMap::new() }
    }

    pub fn id(&self) -> u64                         { self.id }
    pub fn name(&self) -> &str                      { &self.name }
    pub fn order(&self) -> Option<i64>              { self.order }
    pub fn indent(&self) -> Option<u8>              { self.indent }
    pub fn comment_count(&self) -> Option<u32>      { self.comment_count }
    pub fn extra(&self) -> &HashMap<String, Value>  { &self.extra }
}
