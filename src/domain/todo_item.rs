use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One submitted to-do entry: an arbitrary JSON object, stored as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoItem(Map<String, Value>);

impl TodoItem {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
