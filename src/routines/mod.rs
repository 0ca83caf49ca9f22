pub mod image_quote;
pub mod routine;
pub mod text_quote;

use error_stack::ResultExt;

use crate::{
    config::app_config::CONFIG,
    quotes::{sheet::QuoteSheet, SelectedQuote},
    sheets::spreadsheet_manager::SpreadsheetManager,
};

use routine::RoutineError;

/// Fetches the configured sheet and validates its shape. Shared by both
/// delivery variants.
pub(crate) async fn fetch_quote_sheet() -> error_stack::Result<QuoteSheet, RoutineError> {
    let manager = SpreadsheetManager::new(CONFIG.sheets.clone());
    let rows = manager
        .read_rows()
        .await
        .change_context_lazy(|| RoutineError::routine_failure("could not fetch the quotes spreadsheet"))?;

    QuoteSheet::try_from(rows)
        .change_context_lazy(|| RoutineError::routine_failure("spreadsheet data has an invalid shape"))
}

/// The message body both variants deliver. The date line disappears when the
/// quote cell carried no date.
pub(crate) fn format_content(selected: &SelectedQuote) -> String {
    match selected.quote.date.as_deref() {
        Some(date) => format!(
            "Name: {}\nQuote: \"{}\"\nDate: {}",
            selected.name, selected.quote.text, date
        ),
        None => format!("Name: {}\nQuote: \"{}\"", selected.name, selected.quote.text),
    }
}
