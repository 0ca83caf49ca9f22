use error_stack::{report, Result, ResultExt};
use serde::Deserialize;
use thiserror::Error;

use crate::{config::sheets_config::SpreadsheetConfig, sheets::into::IntoStringRows};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    client: reqwest::Client,
}

#[derive(Debug, Error)]
pub enum SpreadsheetManagerError {
    #[error("Failed to fetch the values range")]
    FailedToFetchRange,
    #[error("Sheets API returned status {0}")]
    BadStatus(u16),
    #[error("Failed to decode the values response")]
    FailedToDecodeResponse,
}

/// The subset of the Sheets API v4 `ValueRange` resource the bot reads.
/// `values` is absent entirely when the sheet is empty.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl SpreadsheetManager {
    pub fn new(config: SpreadsheetConfig) -> Self {
        SpreadsheetManager {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Reads the whole configured sheet as rows of cell strings. The API
    /// omits trailing empty cells, so rows may be ragged.
    pub async fn read_rows(&self) -> Result<Vec<Vec<String>>, SpreadsheetManagerError> {
        let url = format!(
            "{}/{}/values/{}?key={}",
            SHEETS_API_BASE,
            self.config.spreadsheet_id,
            self.config.sheet_name,
            self.config.api_key,
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchRange)?;

        let status = response.status();
        if !status.is_success() {
            return Err(report!(SpreadsheetManagerError::BadStatus(
                status.as_u16()
            )));
        }

        let value_range: ValueRange = response
            .json()
            .await
            .change_context(SpreadsheetManagerError::FailedToDecodeResponse)?;

        Ok(value_range.values.into_string_rows())
    }
}
