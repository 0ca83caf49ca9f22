use thiserror::Error;

/// Row index holding the header names.
pub const NAMES_ROW: usize = 2;
/// First row containing quote cells; everything above is sheet decoration.
pub const FIRST_QUOTE_ROW: usize = 3;

/// A validated quote spreadsheet: at least the rows up to and including the
/// names row exist. Rows may be ragged (the API omits trailing empty cells).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSheet {
    rows: Vec<Vec<String>>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SheetShapeError {
    #[error("Spreadsheet has {0} rows, but the names row sits at index 2")]
    TooFewRows(usize),
}

impl TryFrom<Vec<Vec<String>>> for QuoteSheet {
    type Error = SheetShapeError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        if rows.len() < FIRST_QUOTE_ROW {
            return Err(SheetShapeError::TooFewRows(rows.len()));
        }
        Ok(QuoteSheet { rows })
    }
}

impl QuoteSheet {
    pub fn names(&self) -> &[String] {
        &self.rows[NAMES_ROW]
    }

    pub fn column_name(&self, column: usize) -> Option<&str> {
        self.names().get(column).map(String::as_str)
    }

    pub fn quote_rows(&self) -> &[Vec<String>] {
        &self.rows[FIRST_QUOTE_ROW..]
    }

    /// Non-empty cells of a column among the quote rows, in row order.
    /// Cells missing from ragged rows count as empty.
    pub fn non_empty_cells(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        self.quote_rows()
            .iter()
            .filter_map(move |row| row.get(column))
            .map(String::as_str)
            .filter(|cell| !cell.is_empty())
    }
}
