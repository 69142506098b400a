//! Watcher configuration
//!
//! Defines all configurable parameters for the watcher including the
//! required secrets, the status endpoint, and the polling interval.

use std::time::Duration;

/// Default status endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default polling interval in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Watcher configuration
///
/// Constructed once at startup and passed by reference into every
/// component that needs it; there is no ambient global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Token for the homework status API
    pub practicum_token: String,

    /// Telegram bot token used for notification delivery
    pub telegram_token: String,

    /// Destination chat for notifications
    pub telegram_chat_id: String,

    /// Full URL of the status endpoint
    pub endpoint: String,

    /// How often to poll the status endpoint
    pub poll_interval: Duration,

    /// Whether endpoint-level failures are forwarded to the chat
    /// (schema and parse errors never are)
    pub report_endpoint_failures: bool,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - ENDPOINT (optional, default: the Practicum status endpoint)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    /// - REPORT_ENDPOINT_FAILURES (optional bool, default: false)
    pub fn from_env() -> anyhow::Result<Self> {
        let practicum_token = std::env::var("PRACTICUM_TOKEN")
            .map_err(|_| anyhow::anyhow!("PRACTICUM_TOKEN environment variable not set"))?;

        let telegram_token = std::env::var("TELEGRAM_TOKEN")
            .map_err(|_| anyhow::anyhow!("TELEGRAM_TOKEN environment variable not set"))?;

        let telegram_chat_id = std::env::var("TELEGRAM_CHAT_ID")
            .map_err(|_| anyhow::anyhow!("TELEGRAM_CHAT_ID environment variable not set"))?;

        let endpoint = std::env::var("ENDPOINT")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let poll_interval = std::env::var("POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS));

        let report_endpoint_failures = std::env::var("REPORT_ENDPOINT_FAILURES")
            .ok()
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(false);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval,
            report_endpoint_failures,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.practicum_token.is_empty() {
            anyhow::bail!("practicum_token cannot be empty");
        }

        if self.telegram_token.is_empty() {
            anyhow::bail!("telegram_token cannot be empty");
        }

        if self.telegram_chat_id.is_empty() {
            anyhow::bail!("telegram_chat_id cannot be empty");
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            anyhow::bail!("endpoint must start with http:// or https://");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}
