use reqwest::StatusCode;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("Environment variable error: {0}")]
    Config(String),
    #[error("Invalid DISCORD_WEBHOOK_URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Discord never confirmed receipt of the message.
#[derive(ThisError, Debug)]
pub enum DeliveryError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook responded with {status}: {detail}")]
    Rejected { status: StatusCode, detail: String },
}

impl DeliveryError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DeliveryError::Transport(error) => error.status(),
            DeliveryError::Rejected { status, .. } => Some(*status),
        }
    }
}
