// ABOUTME: Defines the Record struct, a single expense entry in the store.
// ABOUTME: Records are identified only by their position in the stored sequence.

use serde::{Deserialize, Serialize};

/// A validated expense entry, as appended to the store. Elements already in
/// the file are kept as raw JSON and never decoded into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub amount: f64,
    /// Calendar date in `YYYY-MM-DD` form, kept as the caller sent it.
    pub date: String,
}

impl Record {
    pub fn new(title: impl Into<String>, amount: f64, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            amount,
            date: date.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_expected_keys() {
        let record = Record::new("coffee", 3.5, "2024-01-15");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["title"], "coffee");
        assert_eq!(json["amount"], 3.5);
        assert_eq!(json["date"], "2024-01-15");
    }

    #[test]
    fn non_ascii_title_survives_serde() {
        let record = Record::new("점심 식사", 9000.0, "2024-03-01");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("점심 식사"));

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
