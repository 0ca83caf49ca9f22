#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    pub api_key: Box<str>,
    pub spreadsheet_id: Box<str>,
    pub sheet_name: Box<str>,
}
