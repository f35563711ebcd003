use std::time::Duration;

use reqwest::header;
use reqwest::Client;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::DeliveryError;
use crate::message::Payload;

/// Upper bound on one delivery request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct DiscordWebhook {
    pub url: Url,
    http_client: Client,
}

impl DiscordWebhook {
    pub fn new(url: Url) -> Result<Self, DeliveryError> {
        let http_client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;

        Ok(Self::with_client(url, http_client))
    }

    pub fn with_client(url: Url, http_client: Client) -> Self {
        Self { url, http_client }
    }

    /// Posts `content` once. Only a 2xx response counts as delivered.
    #[tracing::instrument(skip_all, fields(host = self.url.host_str()))]
    pub async fn send(&self, content: &str) -> Result<(), DeliveryError> {
        let payload = Payload::new(content);

        let response = self
            .http_client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                error!("Message failed to send: {}", err);
                DeliveryError::Transport(err)
            })?;

        let status = response.status();

        if status.is_success() {
            info!("Message successfully sent ({})", status);
            return Ok(());
        }

        let detail = response.text().await.unwrap_or_default();

        debug!("Webhook response body: {}", detail);

        Err(DeliveryError::Rejected { status, detail })
    }
}
