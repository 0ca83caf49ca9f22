pub mod parser;
pub mod selector;
pub mod sheet;

use rand::Rng;

use parser::ParsedQuote;
use selector::SelectionError;
use sheet::QuoteSheet;

/// A quote picked for delivery, together with the header name it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedQuote {
    pub name: String,
    pub quote: ParsedQuote,
}

/// Picks one quote uniformly at random: first a column among the eligible
/// ones, then a cell among that column's non-empty cells.
pub fn pick_quote<R: Rng>(
    sheet: &QuoteSheet,
    allow_list: &[String],
    rng: &mut R,
) -> Result<SelectedQuote, SelectionError> {
    let eligible = selector::eligible_columns(sheet, allow_list);
    let column = selector::random_column(&eligible, rng)?;
    let raw = selector::random_quote(sheet, column, rng)?;

    Ok(SelectedQuote {
        name: sheet.column_name(column).unwrap_or_default().to_owned(),
        quote: parser::parse(&raw),
    })
}
