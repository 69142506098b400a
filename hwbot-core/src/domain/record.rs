//! Homework record parsing
//!
//! Parses one raw homework entry from a validated response into a typed
//! record. All downstream code (state tracking, notification text) works
//! on the typed value, never on the raw JSON map.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::domain::status::HomeworkStatus;

/// Errors that can occur when parsing a single homework entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field is absent from the entry
    #[error("homework entry is missing field `{0}`")]
    MissingField(&'static str),

    /// The status value is not in the verdict table
    #[error("unrecognized homework status `{0}`")]
    UnknownStatus(String),
}

/// A single homework submission with its current review status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    /// Name of the homework as reported by the API
    pub name: String,

    /// Current review status
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    /// Parses a raw homework entry into a typed record
    ///
    /// Requires both `status` and `homework_name` to be present string
    /// fields and `status` to be a key of the verdict table.
    pub fn from_raw(raw: &JsonValue) -> Result<Self, RecordError> {
        let status_value = raw
            .get("status")
            .and_then(JsonValue::as_str)
            .ok_or(RecordError::MissingField("status"))?;

        let name = raw
            .get("homework_name")
            .and_then(JsonValue::as_str)
            .ok_or(RecordError::MissingField("homework_name"))?;

        let status = HomeworkStatus::parse(status_value)
            .ok_or_else(|| RecordError::UnknownStatus(status_value.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }

    /// Returns the message text announcing this record's status
    pub fn notification_text(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}
