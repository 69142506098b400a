//! Hwbot Watcher
//!
//! A long-running monitor for homework review statuses.
//!
//! Architecture:
//! - Configuration: required secrets and tunables from the environment
//! - Client: authorized fetches against the status endpoint
//! - Tracker: pure decision on whether a status transition is new
//! - Notifier: best-effort delivery to a Telegram chat
//! - Poller: the fetch/validate/decide/notify cycle on a fixed interval
//!
//! The watcher polls the status endpoint, announces every status
//! transition of the most recent homework exactly once, and survives any
//! single cycle's failure.

mod config;
mod notify;
mod poller;
mod tracker;

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::notify::TelegramNotifier;
use crate::poller::StatusPoller;
use hwbot_client::PracticumClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwbot_watcher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting homework status watcher");

    // Missing secrets are the only fatal path; everything after this
    // point keeps the loop alive.
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Отсутствует обязательный TOKEN или ID: {:#}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Loaded configuration: endpoint={}, poll interval={:?}",
        config.endpoint, config.poll_interval
    );

    let api = Arc::new(PracticumClient::new(
        config.endpoint.clone(),
        config.practicum_token.clone(),
    ));
    let notifier = Arc::new(TelegramNotifier::new(config.telegram_token.clone()));

    let poller = StatusPoller::new(config, api, notifier);

    info!("Starting polling loop");
    if let Err(e) = poller.run().await {
        error!("Poller error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
