//! Labels, as listed by the remote API

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Todoist label
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    id: u64,
    name: String,
    #[serde(default)]
    order: Option<i64>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl Label {
    pub fn new(id: u64, name: String) -> Self {
        Self { id, name, order: None, extra: HashMap::new() }
    }

    pub fn id(&self) -> u64             { self.id }
    pub fn name(&self) -> &str          { &self.name }
    pub fn order(&self) -> Option<i64>  { self.order }
    pub fn extra(&self) -> &HashMap<String, Value> { &self.extra }
}
