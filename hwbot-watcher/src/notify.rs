//! Notification delivery
//!
//! Delivers status messages to a chat. Delivery is best-effort from the
//! poller's point of view: a failure is reported as a value, logged, and
//! never propagates past the loop boundary.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when delivering a notification
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The HTTP request to the messaging API failed
    #[error("notification request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The messaging API answered with a non-success status code
    #[error("messaging API returned HTTP {status}")]
    BadStatus {
        /// HTTP status code of the response
        status: u16,
    },
}

/// Delivery channel for status messages
///
/// Trait seam to enable testing and dependency injection; the poller only
/// ever talks to this trait.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `text` to the chat identified by `chat_id`
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), NotifyError>;
}

/// Notifier backed by the Telegram Bot API
pub struct TelegramNotifier {
    /// Bot token
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramNotifier {
    /// Creates a notifier for the given bot token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            client: Client::new(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("https://api.telegram.org/bot{}/sendMessage", self.token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&json!({
                "chat_id": chat_id,
                "text": text,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::BadStatus {
                status: status.as_u16(),
            });
        }

        debug!("Сообщение отправлено: {}", text);
        Ok(())
    }
}
