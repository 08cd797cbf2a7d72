use std::sync::LazyLock;

use serde::Serialize;
use thiserror::Error;

pub mod embed;

pub use self::embed::{Embed, Field};

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Discord rejects message content over 2000 characters.
const MAX_CONTENT_LEN: usize = 2000;

#[derive(Debug, Serialize)]
pub struct WebhookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("payload has no content and no embeds")]
    EmptyPayload,
    #[error("content exceeds {MAX_CONTENT_LEN} characters")]
    ContentTooLong,
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

pub struct Webhook {
    url: String,
    content: Option<String>,
    username: Option<String>,
    embeds: Vec<Embed>,
}

impl Webhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: None,
            username: None,
            embeds: Vec::new(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn add_embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    fn validate(&self) -> Result<(), WebhookError> {
        if self.content.is_none() && self.embeds.is_empty() {
            return Err(WebhookError::EmptyPayload);
        }

        if let Some(content) = &self.content
            && content.len() > MAX_CONTENT_LEN
        {
            return Err(WebhookError::ContentTooLong);
        }

        Ok(())
    }

    fn build_payload(&self) -> Result<WebhookPayload, WebhookError> {
        self.validate()?;

        Ok(WebhookPayload {
            content: self.content.clone(),
            username: self.username.clone(),
            embeds: self.embeds.clone(),
        })
    }

    pub async fn post(self) -> Result<(), WebhookError> {
        let payload = self.build_payload()?;

        CLIENT
            .post(&self.url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
