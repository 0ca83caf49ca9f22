use error_stack::{report, Result, ResultExt};
use reqwest::multipart::{Form, Part};
use thiserror::Error;

use crate::config::webhook_config::WebhookConfig;

const IMAGE_FILENAME: &str = "quote.png";

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Failed to reach the webhook")]
    Unreachable,
    #[error("Webhook rejected the payload with status {0}")]
    Rejected(u16),
    #[error("Failed to assemble the multipart payload")]
    BadPayload,
}

/// Discord webhook sink. Either variant is a complete message on its own:
/// plain text, or an image attachment with its JSON payload.
pub struct DiscordWebhook {
    config: WebhookConfig,
    client: reqwest::Client,
}

impl DiscordWebhook {
    pub fn new(config: WebhookConfig) -> Self {
        DiscordWebhook {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn post_text(&self, content: &str) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.config.url.as_ref())
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await
            .change_context(DeliveryError::Unreachable)?;

        check_status(response)
    }

    pub async fn post_image(&self, image: Vec<u8>, content: &str) -> Result<(), DeliveryError> {
        let payload = serde_json::json!({ "content": content }).to_string();
        let image_part = Part::bytes(image)
            .file_name(IMAGE_FILENAME)
            .mime_str("image/png")
            .change_context(DeliveryError::BadPayload)?;
        let form = Form::new()
            .text("payload_json", payload)
            .part("files[0]", image_part);

        let response = self
            .client
            .post(self.config.url.as_ref())
            .multipart(form)
            .send()
            .await
            .change_context(DeliveryError::Unreachable)?;

        check_status(response)
    }
}

fn check_status(response: reqwest::Response) -> Result<(), DeliveryError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(report!(DeliveryError::Rejected(status.as_u16())))
    }
}
