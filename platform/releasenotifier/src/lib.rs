//! Posts a release announcement to a Discord channel through a webhook.

pub mod config;
pub mod errors;
pub mod logger;
pub mod message;
pub mod webhook;

use crate::config::Configuration;
use crate::errors::Error;
use crate::webhook::DiscordWebhook;
use tracing::{debug, info};

pub async fn run() -> Result<(), Error> {
    let config = Configuration::from_env()?;

    debug!("loaded configuration: {:?}", config);

    notify(&config).await
}

/// Renders the announcement for `config` and delivers it once.
pub async fn notify(config: &Configuration) -> Result<(), Error> {
    let webhook = DiscordWebhook::new(config.webhook_url.clone())?;

    info!(
        "Announcing release {} on {}",
        config.tag,
        webhook.url.host_str().unwrap_or_default()
    );

    webhook.send(&config.message()).await?;

    Ok(())
}
