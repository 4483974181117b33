// src/error.rs
use thiserror::Error;

/// Per-record failures raised while decoding a source file.
///
/// Each value describes one skipped record; decoding always continues with
/// the remaining records. File-level failures (unreadable file, malformed
/// document) are not represented here and abort the decode instead.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("CSV row {row}: expected at least 2 fields, found {found}")]
    CsvShape { row: usize, found: usize },

    #[error("CSV row {row}: invalid release date '{value}': {source}")]
    CsvDate {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("CSV row {row}: {source}")]
    CsvRow {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("XML car #{index}: missing <{missing}> element")]
    XmlShape { index: usize, missing: &'static str },

    #[error("XML car #{index}: invalid price value '{value}'")]
    XmlPrice { index: usize, value: String },
}

/// Recoverable filter-criterion failures.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid date filter '{value}': {reason} (date criterion ignored)")]
    InvalidDate { value: String, reason: String },
}

/// Sort failures. Raised instead of dereferencing a missing field.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("cannot sort by release year: record #{index} ({label}) has no release date")]
    MissingReleaseDate { index: usize, label: String },
}
