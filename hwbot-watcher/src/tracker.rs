//! Notification state tracking
//!
//! Decides whether the latest homework record warrants a notification.
//! `decide` is pure: it takes the current state and the parsed record and
//! returns a decision value; the loop stores the returned state back. The
//! new state is committed whether or not delivery later succeeds, so a
//! transition is announced at most once even under repeated delivery
//! failures.

use hwbot_core::{HomeworkRecord, HomeworkStatus};

/// Last-notified status, held in memory for the process lifetime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    /// Status announced by the most recent notification
    pub last_status: Option<HomeworkStatus>,

    /// Homework name from the most recent notification
    pub last_name: Option<String>,
}

/// Outcome of a notification decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Send `text` and commit `new_state`
    Notify {
        /// Message to deliver
        text: String,
        /// State to store back after the decision fires
        new_state: NotificationState,
    },

    /// Nothing new; leave the state untouched
    Skip,
}

/// Decides whether `record` warrants a notification
///
/// No record at all is a quiet cycle. A record notifies when no status has
/// been announced yet or when the status differs from the last announced
/// one; an unchanged status is skipped.
pub fn decide(state: &NotificationState, record: Option<&HomeworkRecord>) -> Decision {
    let Some(record) = record else {
        return Decision::Skip;
    };

    if state.last_status == Some(record.status) {
        return Decision::Skip;
    }

    Decision::Notify {
        text: record.notification_text(),
        new_state: NotificationState {
            last_status: Some(record.status),
            last_name: Some(record.name.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, status: HomeworkStatus) -> HomeworkRecord {
        HomeworkRecord {
            name: name.to_string(),
            status,
        }
    }

    #[test]
    fn test_no_record_skips() {
        let state = NotificationState::default();
        assert_eq!(decide(&state, None), Decision::Skip);
    }

    #[test]
    fn test_first_record_notifies() {
        let state = NotificationState::default();
        let rec = record("X", HomeworkStatus::Reviewing);

        match decide(&state, Some(&rec)) {
            Decision::Notify { text, new_state } => {
                assert_eq!(
                    text,
                    "Изменился статус проверки работы \"X\". \
                     Работа взята на проверку ревьюером."
                );
                assert_eq!(new_state.last_status, Some(HomeworkStatus::Reviewing));
                assert_eq!(new_state.last_name.as_deref(), Some("X"));
            }
            Decision::Skip => panic!("expected a notification for the first record"),
        }
    }

    #[test]
    fn test_unchanged_status_skips() {
        let state = NotificationState {
            last_status: Some(HomeworkStatus::Reviewing),
            last_name: Some("X".to_string()),
        };
        let rec = record("X", HomeworkStatus::Reviewing);
        assert_eq!(decide(&state, Some(&rec)), Decision::Skip);
    }

    #[test]
    fn test_status_transition_notifies() {
        let state = NotificationState {
            last_status: Some(HomeworkStatus::Reviewing),
            last_name: Some("X".to_string()),
        };
        let rec = record("X", HomeworkStatus::Approved);

        match decide(&state, Some(&rec)) {
            Decision::Notify { text, new_state } => {
                assert!(text.contains("Работа проверена: ревьюеру всё понравилось. Ура!"));
                assert_eq!(new_state.last_status, Some(HomeworkStatus::Approved));
            }
            Decision::Skip => panic!("expected a notification for the status change"),
        }
    }

    #[test]
    fn test_every_distinct_transition_notifies_once() {
        let mut state = NotificationState::default();
        let sequence = [
            HomeworkStatus::Reviewing,
            HomeworkStatus::Reviewing,
            HomeworkStatus::Rejected,
            HomeworkStatus::Rejected,
            HomeworkStatus::Reviewing,
            HomeworkStatus::Approved,
        ];

        let mut notified = 0;
        for status in sequence {
            let rec = record("X", status);
            if let Decision::Notify { new_state, .. } = decide(&state, Some(&rec)) {
                state = new_state;
                notified += 1;
            }
        }

        // reviewing, rejected, reviewing, approved
        assert_eq!(notified, 4);
        assert_eq!(state.last_status, Some(HomeworkStatus::Approved));
    }
}
