// ABOUTME: Aggregate view over the store: record count and the sum of amounts.
// ABOUTME: Works on stored elements as raw JSON so hand-edited entries still count.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub total: f64,
}

impl Summary {
    /// Count every stored element and sum their `amount` keys. An element
    /// without a numeric amount contributes 0.
    pub fn from_entries(entries: &[Value]) -> Self {
        Self {
            count: entries.len(),
            total: entries
                .iter()
                .map(|e| e.get("amount").and_then(Value::as_f64).unwrap_or(0.0))
                .sum(),
        }
    }
}
