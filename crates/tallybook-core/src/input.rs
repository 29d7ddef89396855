// ABOUTME: Raw record input as decoded from a request body, and the rules that turn it into a Record.
// ABOUTME: Every rejection is a ValidationError naming the offending field.

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

use crate::record::Record;

/// Reasons a RecordInput is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Title must be a string")]
    InvalidTitle,

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Amount must be a number")]
    InvalidAmount,

    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Date must be a valid YYYY-MM-DD date")]
    InvalidDate,
}

impl ValidationError {
    /// The field this error is about, or None when it may concern several.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingFields => None,
            ValidationError::InvalidTitle | ValidationError::EmptyTitle => Some("title"),
            ValidationError::InvalidAmount | ValidationError::NonPositiveAmount => Some("amount"),
            ValidationError::InvalidDate => Some("date"),
        }
    }
}

/// Untyped fields of a create-record request. Kept as JSON values so that a
/// wrong type is reported as a validation failure rather than a decode error.
#[derive(Debug, Clone, Default)]
pub struct RecordInput {
    pub title: Option<Value>,
    pub amount: Option<Value>,
    pub date: Option<Value>,
}

impl RecordInput {
    /// Build an input from an arbitrary JSON body. Anything that is not an
    /// object has none of the required fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self {
                title: map.remove("title"),
                amount: map.remove("amount"),
                date: map.remove("date"),
            },
            _ => Self::default(),
        }
    }

    /// Check all fields and produce the record to store. The title is
    /// trimmed; the date is kept verbatim.
    pub fn validate(&self) -> Result<Record, ValidationError> {
        let (Some(title), Some(amount), Some(date)) = (
            present(&self.title),
            present(&self.amount),
            present(&self.date),
        ) else {
            return Err(ValidationError::MissingFields);
        };

        let title = parse_title(title)?;
        let amount = parse_amount(amount)?;
        let date = parse_date(date)?;

        Ok(Record::new(title, amount, date))
    }
}

// null counts as absent
fn present(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|v| !v.is_null())
}

fn parse_title(value: &Value) -> Result<String, ValidationError> {
    let title = value.as_str().ok_or(ValidationError::InvalidTitle)?.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title.to_string())
}

fn parse_amount(value: &Value) -> Result<f64, ValidationError> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|a| a.is_finite())
    .ok_or(ValidationError::InvalidAmount)?;

    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(amount)
}

fn parse_date(value: &Value) -> Result<String, ValidationError> {
    let date = value.as_str().ok_or(ValidationError::InvalidDate)?;
    if !matches_calendar_pattern(date) || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(ValidationError::InvalidDate);
    }
    Ok(date.to_string())
}

/// Literal `DDDD-DD-DD` shape. chrono alone accepts unpadded fields.
fn matches_calendar_pattern(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
