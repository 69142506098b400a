//! Response validation
//!
//! Validates a raw API payload against the documented shape and produces a
//! typed `PollResult`. There is no partial success: a payload either yields
//! a complete result with a cursor, or a `SchemaError` naming the offending
//! field.

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Errors that can occur when validating a poll response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The payload is not a JSON object
    #[error("response body is not a JSON object")]
    NotAnObject,

    /// A required top-level field is absent
    #[error("response is missing field `{0}`")]
    MissingField(&'static str),

    /// A top-level field has the wrong JSON type
    #[error("response field `{field}` is not {expected}")]
    WrongType {
        /// Name of the offending field
        field: &'static str,
        /// Expected JSON type
        expected: &'static str,
    },
}

/// A validated poll response
///
/// `homeworks` keeps the raw entries (most recent first); per-entry parsing
/// is a separate step so one malformed entry is reported as a record error,
/// not a schema error.
#[derive(Debug, Clone, PartialEq)]
pub struct PollResult {
    /// Raw homework entries, most recent first
    pub homeworks: Vec<JsonValue>,

    /// Server timestamp to use as the next request's `from_date`
    pub current_date: i64,
}

impl PollResult {
    /// Validates a raw payload against the expected schema
    ///
    /// Checks, in order: the payload is an object, `homeworks` is an array,
    /// `current_date` is an integer.
    pub fn validate(raw: &JsonValue) -> Result<Self, SchemaError> {
        let object = raw.as_object().ok_or(SchemaError::NotAnObject)?;

        let homeworks = object
            .get("homeworks")
            .ok_or(SchemaError::MissingField("homeworks"))?
            .as_array()
            .ok_or(SchemaError::WrongType {
                field: "homeworks",
                expected: "an array",
            })?;

        let current_date = object
            .get("current_date")
            .ok_or(SchemaError::MissingField("current_date"))?
            .as_i64()
            .ok_or(SchemaError::WrongType {
                field: "current_date",
                expected: "an integer",
            })?;

        Ok(Self {
            homeworks: homeworks.clone(),
            current_date,
        })
    }

    /// Returns the most recent homework entry, if any
    ///
    /// An empty list is a legitimate "no update" outcome, not an error.
    pub fn latest(&self) -> Option<&JsonValue> {
        self.homeworks.first()
    }
}
