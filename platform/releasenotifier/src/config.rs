use std::env::VarError;
use std::fmt;

use url::Url;

use crate::errors::Error;
use crate::message;

pub const DISCORD_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
pub const RELEASE_TAG: &str = "RELEASE_TAG";
pub const RELEASE_BODY: &str = "RELEASE_BODY";
pub const RELEASE_URL: &str = "RELEASE_URL";

/// Release details and the webhook to announce them on.
#[derive(Clone)]
pub struct Configuration {
    pub webhook_url: Url,
    pub tag: String,
    pub body: String,
    pub url: String,
}

impl Configuration {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Values must be present; empty release fields are passed through untouched.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let read = |name: &str| {
            lookup(name).map_err(|error| match error {
                VarError::NotPresent => Error::Config(format!("{} must be set", name)),
                VarError::NotUnicode(_) => {
                    Error::Config(format!("{} must be valid unicode", name))
                }
            })
        };

        let webhook_url = Url::parse(&read(DISCORD_WEBHOOK_URL)?)?;

        Ok(Self {
            webhook_url,
            tag: read(RELEASE_TAG)?,
            body: read(RELEASE_BODY)?,
            url: read(RELEASE_URL)?,
        })
    }

    pub fn message(&self) -> String {
        message::render(&self.tag, &self.body, &self.url)
    }
}

// The webhook path embeds its token.
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("webhook_host", &self.webhook_url.host_str())
            .field("tag", &self.tag)
            .field("body", &self.body)
            .field("url", &self.url)
            .finish()
    }
}
