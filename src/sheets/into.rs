/// Conversion from the raw JSON cell grid of a Sheets API `ValueRange` into
/// plain string rows. Cell positions matter downstream, so rows keep their
/// shape (no flattening) and stay ragged where the API omitted trailing cells.
pub trait IntoStringRows {
    fn into_string_rows(self) -> Vec<Vec<String>>;
}

impl IntoStringRows for Vec<Vec<serde_json::Value>> {
    fn into_string_rows(self) -> Vec<Vec<String>> {
        self.into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| match cell {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect()
    }
}
