use std::sync::LazyLock;

use config::Config;

/// Which of the two delivery variants a run executes.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    Text,
    Image,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct DeliveryConfig {
    pub mode: DeliveryMode,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub delivery: DeliveryConfig,
    pub sheets: super::sheets_config::SpreadsheetConfig,
    pub quotes: super::quotes_config::QuotesConfig,
    pub webhook: super::webhook_config::WebhookConfig,
    pub render: super::render_config::RenderConfig,
}

pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    match Config::builder()
        .add_source(config::File::with_name("Config"))
        .build()
    {
        Ok(config) => config,
        Err(e) => match e {
            config::ConfigError::NotFound(property) => {
                panic!("Missing config property: {:?}", property);
            }
            _ => {
                panic!("Error reading config file: {:?}", e);
            }
        },
    }
    .try_deserialize()
    .expect("Should deserialize built config into struct")
});
