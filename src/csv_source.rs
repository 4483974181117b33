// src/csv_source.rs
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::error::DecodeError;
use crate::model::{CsvRecord, Decoded};

/// Release dates arrive as `MM/DD/YYYY`.
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Read and decode a CSV source file.
///
/// The header row is skipped unconditionally. A row with fewer than two
/// fields or an unparsable date is recorded in `skipped` and decoding
/// continues; only an unreadable file aborts.
pub fn decode_file(path: &Path) -> anyhow::Result<Decoded<CsvRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(decode_str(&content))
}

/// Decode CSV text. Split out from file reading for testability.
pub fn decode_str(content: &str) -> Decoded<CsvRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    // Row numbers are 1-based data rows (the header is row 0).
    for (i, row) in reader.records().enumerate() {
        let row_no = i + 1;
        let row = match row {
            Ok(row) => row,
            Err(source) => {
                skipped.push(DecodeError::CsvRow { row: row_no, source });
                continue;
            }
        };

        if row.len() < 2 {
            skipped.push(DecodeError::CsvShape { row: row_no, found: row.len() });
            continue;
        }

        let brand = row[0].trim().to_string();
        let date_str = row[1].trim().trim_matches('"');
        match NaiveDate::parse_from_str(date_str, DATE_FORMAT) {
            Ok(release_date) => records.push(CsvRecord { brand, release_date }),
            Err(source) => skipped.push(DecodeError::CsvDate {
                row: row_no,
                value: date_str.to_string(),
                source,
            }),
        }
    }

    Decoded { records, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rows_and_skips_header() {
        let decoded = decode_str("Brand,Release Date\nToyota,01/05/2020\nHonda,03/10/2019\n");
        assert!(decoded.skipped.is_empty());
        assert_eq!(decoded.records.len(), 2);
        assert_eq!(decoded.records[0].brand, "Toyota");
        assert_eq!(
            decoded.records[0].release_date,
            NaiveDate::from_ymd_opt(2020, 1, 5).unwrap()
        );
        assert_eq!(decoded.records[1].brand, "Honda");
    }

    #[test]
    fn header_is_skipped_even_when_it_looks_like_data() {
        let decoded = decode_str("Ford,02/02/2022\nToyota,01/05/2020\n");
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.records[0].brand, "Toyota");
    }

    #[test]
    fn bad_date_skips_only_that_row() {
        let decoded = decode_str(
            "Brand,Release Date\nToyota,2020-01-05\nHonda,03/10/2019\n",
        );
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.records[0].brand, "Honda");
        assert_eq!(decoded.skipped.len(), 1);
        assert!(decoded.skipped[0].to_string().contains("row 1"));
    }

    #[test]
    fn short_row_skips_only_that_row() {
        let decoded = decode_str("Brand,Release Date\nToyota\nHonda,03/10/2019\n");
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.skipped.len(), 1);
    }

    #[test]
    fn quoted_date_field_is_accepted() {
        let decoded = decode_str("Brand,Release Date\nToyota,\"01/05/2020\"\n");
        assert_eq!(decoded.records.len(), 1);
        assert!(decoded.skipped.is_empty());
    }

    #[test]
    fn empty_input_decodes_to_nothing() {
        let decoded = decode_str("");
        assert!(decoded.records.is_empty());
        assert!(decoded.skipped.is_empty());
    }
}
