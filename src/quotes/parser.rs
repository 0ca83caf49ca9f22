use std::sync::LazyLock;

use regex::Regex;

/// A quote cell split into its text and the optional `(D-M-Y)` date that
/// people append when they write a quote down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuote {
    pub text: String,
    pub date: Option<String>,
}

/// Lazy text capture, then an optional trailing parenthesized date with
/// 1-2 digit day/month and a 2-4 digit year. `(?s)` lets quotes span lines.
static QUOTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(.*?)(?:\s*\((\d{1,2}-\d{1,2}-\d{2,4})\))?$")
        .expect("quote pattern should compile")
});

/// Splits a raw cell into quote text and date. Never fails: a cell without a
/// trailing date pattern (including the empty string) comes back whole, with
/// the text trimmed and no date.
pub fn parse(raw: &str) -> ParsedQuote {
    match QUOTE_PATTERN.captures(raw) {
        Some(captures) => ParsedQuote {
            text: captures
                .get(1)
                .map_or("", |text| text.as_str())
                .trim()
                .to_owned(),
            date: captures.get(2).map(|date| date.as_str().to_owned()),
        },
        None => ParsedQuote {
            text: raw.trim().to_owned(),
            date: None,
        },
    }
}
