//! Homework status HTTP client
//!
//! A small, type-safe client for the homework status endpoint. It issues
//! the authorized `from_date` query and hands the raw JSON payload back to
//! the caller; schema validation is a separate step so transport failures
//! and malformed payloads stay distinguishable.
//!
//! # Example
//!
//! ```no_run
//! use hwbot_client::PracticumClient;
//!
//! use hwbot_client::HomeworkStatusApi;
//!
//! #[tokio::main]
//! async fn main() -> hwbot_client::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!     );
//!     let payload = client.homework_statuses(1670594662).await?;
//!     println!("{payload}");
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ClientError, Result};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value as JsonValue;
use tracing::debug;

/// Source of homework status payloads
///
/// Trait seam over the status endpoint to enable testing and dependency
/// injection; the poller only ever talks to this trait.
#[async_trait]
pub trait HomeworkStatusApi: Send + Sync {
    /// Fetches all status updates since `from_date`
    ///
    /// Returns the raw JSON payload on HTTP 200, or a typed failure for
    /// transport errors, non-200 codes, and undecodable bodies.
    async fn homework_statuses(&self, from_date: i64) -> Result<JsonValue>;
}

/// HTTP client for the Practicum homework status API
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Full URL of the status endpoint
    endpoint: String,
    /// API token sent as `Authorization: OAuth {token}`
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new client for the given endpoint and token
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Create a client with a custom HTTP client
    ///
    /// Allows configuring timeouts, proxies, TLS settings, etc. A request
    /// timeout configured here surfaces as [`ClientError::Transport`].
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl HomeworkStatusApi for PracticumClient {
    async fn homework_statuses(&self, from_date: i64) -> Result<JsonValue> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
