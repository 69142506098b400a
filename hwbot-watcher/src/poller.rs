//! Status poller
//!
//! Drives the polling cycle forever: fetch, validate, extract, decide,
//! notify, advance the cursor, sleep. Any failure abandons the current
//! cycle without touching the cursor or the notification state, so the
//! next cycle re-derives the same decision from the same inputs. No cycle
//! failure is fatal to the process.

use std::sync::Arc;

use thiserror::Error;
use tokio::time;
use tracing::{debug, error, info, warn};

use hwbot_client::{ClientError, HomeworkStatusApi};
use hwbot_core::{HomeworkRecord, PollResult, RecordError, SchemaError};

use crate::config::Config;
use crate::notify::Notifier;
use crate::tracker::{self, Decision, NotificationState};

/// Any failure that can abandon a single poll cycle
#[derive(Debug, Error)]
pub enum CycleError {
    /// The endpoint could not be fetched (transport, non-200, bad JSON)
    #[error(transparent)]
    Fetch(#[from] ClientError),

    /// The payload did not match the documented response shape
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The latest homework entry could not be parsed
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Result of a cycle that ran to completion
#[derive(Debug)]
struct CycleOutcome {
    /// Cursor for the next request, taken from the response
    next_cursor: i64,

    /// New notification state, present exactly when a decision fired
    committed: Option<NotificationState>,
}

/// Poller that continuously watches the homework status endpoint
pub struct StatusPoller {
    config: Config,
    api: Arc<dyn HomeworkStatusApi>,
    notifier: Arc<dyn Notifier>,
}

impl StatusPoller {
    /// Creates a new status poller
    pub fn new(
        config: Config,
        api: Arc<dyn HomeworkStatusApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            api,
            notifier,
        }
    }

    /// Starts the polling loop
    ///
    /// Runs until the process is terminated. The cursor and the
    /// notification state live here and nowhere else; cycles hand back
    /// updated values and this loop stores them.
    pub async fn run(&self) -> anyhow::Result<()> {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.poll_interval
        );

        let mut cursor = chrono::Utc::now().timestamp();
        let mut state = NotificationState::default();

        let mut interval = time::interval(self.config.poll_interval);

        loop {
            interval.tick().await;

            debug!("Polling for status updates (from_date={})", cursor);

            match self.poll_once(cursor, &state).await {
                Ok(outcome) => {
                    cursor = outcome.next_cursor;
                    if let Some(new_state) = outcome.committed {
                        state = new_state;
                    }
                }
                Err(e) => {
                    self.handle_cycle_error(&e).await;
                }
            }
        }
    }

    /// Performs a single poll cycle
    ///
    /// Returns early on the first failure; the caller's cursor and state
    /// are only advanced through the returned outcome, so an abandoned
    /// cycle leaves them exactly as they were.
    async fn poll_once(
        &self,
        cursor: i64,
        state: &NotificationState,
    ) -> Result<CycleOutcome, CycleError> {
        let raw = self.api.homework_statuses(cursor).await?;
        let result = PollResult::validate(&raw)?;

        let record = match result.latest() {
            Some(entry) => Some(HomeworkRecord::from_raw(entry)?),
            None => {
                debug!("Отсутствуют новые статусы");
                None
            }
        };

        let committed = match tracker::decide(state, record.as_ref()) {
            Decision::Notify { text, new_state } => {
                info!(
                    "Status transition for \"{}\": {}",
                    new_state.last_name.as_deref().unwrap_or(""),
                    new_state
                        .last_status
                        .map(|s| s.as_str())
                        .unwrap_or("")
                );

                // Best-effort delivery. The state is committed either way
                // so the same transition is never announced twice.
                if let Err(e) = self
                    .notifier
                    .send(&self.config.telegram_chat_id, &text)
                    .await
                {
                    warn!("Сообщение не отправлено: {}", e);
                }

                Some(new_state)
            }
            Decision::Skip => None,
        };

        Ok(CycleOutcome {
            next_cursor: result.current_date,
            committed,
        })
    }

    /// Classifies a cycle failure and selects the handling action
    ///
    /// Every kind is logged and the cycle is abandoned. Endpoint-level
    /// failures are additionally forwarded to the chat when configured;
    /// schema and parse errors never reach the recipient.
    async fn handle_cycle_error(&self, error: &CycleError) {
        match error {
            CycleError::Fetch(ClientError::BadStatus { status }) => {
                error!(
                    "Эндпоинт {} недоступен. StatusCode: {}",
                    self.config.endpoint, status
                );
            }
            CycleError::Fetch(e) => {
                error!("Ошибка при запросе к основному API: {}", e);
            }
            CycleError::Schema(e) => {
                error!("Ответ API не соответствует документации: {}", e);
            }
            CycleError::Record(e) => {
                error!("Не удалось разобрать домашнюю работу: {}", e);
            }
        }

        if self.config.report_endpoint_failures {
            if let CycleError::Fetch(e) = error {
                let text = format!("Сбой в работе программы: {}", e);
                if let Err(e) = self
                    .notifier
                    .send(&self.config.telegram_chat_id, &text)
                    .await
                {
                    warn!("Сообщение не отправлено: {}", e);
                }
            }
        }
    }
}
