#[derive(serde::Deserialize, Debug, Clone)]
pub struct WebhookConfig {
    pub url: Box<str>,
}
