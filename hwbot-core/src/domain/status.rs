//! Homework review statuses
//!
//! The verdict table is fixed: every status the API may report maps to a
//! human-readable verdict. The Russian text is reproduced verbatim for
//! compatibility with the messages recipients already receive.

use serde::{Deserialize, Serialize};

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    /// The reviewer has picked the work up
    Reviewing,

    /// The reviewer accepted the work
    Approved,

    /// The reviewer returned the work with comments
    Rejected,
}

impl HomeworkStatus {
    /// Parses a wire status value into a known status
    ///
    /// Returns `None` for any value outside the verdict table; the caller
    /// decides whether that is an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "reviewing" => Some(Self::Reviewing),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns the verdict text for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    /// Returns the status name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reviewing => "reviewing",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(
            HomeworkStatus::parse("reviewing"),
            Some(HomeworkStatus::Reviewing)
        );
        assert_eq!(
            HomeworkStatus::parse("approved"),
            Some(HomeworkStatus::Approved)
        );
        assert_eq!(
            HomeworkStatus::parse("rejected"),
            Some(HomeworkStatus::Rejected)
        );
    }

    #[test]
    fn test_parse_unknown_status() {
        assert_eq!(HomeworkStatus::parse("in_review"), None);
        assert_eq!(HomeworkStatus::parse(""), None);
        assert_eq!(HomeworkStatus::parse("Approved"), None);
    }

    #[test]
    fn test_verdict_text() {
        assert_eq!(
            HomeworkStatus::Approved.verdict(),
            "Работа проверена: ревьюеру всё понравилось. Ура!"
        );
        assert_eq!(
            HomeworkStatus::Reviewing.verdict(),
            "Работа взята на проверку ревьюером."
        );
        assert_eq!(
            HomeworkStatus::Rejected.verdict(),
            "Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(HomeworkStatus::Reviewing.to_string(), "reviewing");
        assert_eq!(HomeworkStatus::Approved.to_string(), "approved");
        assert_eq!(HomeworkStatus::Rejected.to_string(), "rejected");
    }
}
