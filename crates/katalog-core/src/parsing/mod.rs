pub mod decode;
pub mod fields;
pub mod values;

use crate::error::KatalogError;
use crate::model::Row;
use decode::decode_windows_1250;
use fields::{non_blank_lines, split_fields};
use tracing::debug;

/// A parsed export file: the header columns and one row per data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUpload {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// Parse an uploaded export file into rows.
///
/// The bytes are decoded as Windows-1250 before anything else. The first
/// non-blank line is the header; every following line becomes one row keyed
/// by the header columns.
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<Row>, KatalogError> {
    Ok(parse_upload(bytes)?.rows)
}

/// Parse already-decoded text into rows.
pub fn parse_rows_str(text: &str) -> Result<Vec<Row>, KatalogError> {
    Ok(parse_upload_str(text)?.rows)
}

/// Like [`parse_rows`], but keeps the header so a header-only file still
/// knows its columns.
pub fn parse_upload(bytes: &[u8]) -> Result<ParsedUpload, KatalogError> {
    let text = decode_windows_1250(bytes);
    parse_upload_str(&text)
}

/// Parse already-decoded text, keeping the header.
///
/// Short lines are padded with empty values and extra fields beyond the
/// header are dropped, so a malformed line never fails the whole file.
pub fn parse_upload_str(text: &str) -> Result<ParsedUpload, KatalogError> {
    let mut lines = non_blank_lines(text);

    let columns = match lines.next() {
        Some(line) => split_fields(line),
        None => return Err(KatalogError::EmptyInput),
    };

    let rows: Vec<Row> = lines.map(|line| zip_with_header(&columns, line)).collect();

    debug!(columns = columns.len(), rows = rows.len(), "parsed product rows");
    Ok(ParsedUpload { columns, rows })
}

fn zip_with_header(header: &[String], line: &str) -> Row {
    let mut values = split_fields(line).into_iter();
    header
        .iter()
        .map(|column| (column.clone(), values.next().unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_rows() {
        let rows = parse_rows_str("Kod;Nazwa;CenaNetto\nR-1;Rękawice;12,50\nK-2;Kask;40").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Kod"), Some("R-1"));
        assert_eq!(rows[0].get("Nazwa"), Some("Rękawice"));
        assert_eq!(rows[1].get("CenaNetto"), Some("40"));
    }

    #[test]
    fn test_row_count_is_lines_minus_header() {
        let text = "A;B\n\n1;2\r\n   \r\n3;4\r5;6\n";
        let rows = parse_rows_str(text).unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_short_line_padded() {
        let rows = parse_rows_str("Kod;Nazwa;CenaNetto\nR-1").unwrap();
        assert_eq!(rows[0].get("Nazwa"), Some(""));
        assert_eq!(rows[0].get("CenaNetto"), Some(""));
        assert_eq!(rows[0].len(), 3);
    }

    #[test]
    fn test_long_line_truncated() {
        let rows = parse_rows_str("Kod;Nazwa\nR-1;Rękawice;extra;more").unwrap();
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0].get("Nazwa"), Some("Rękawice"));
    }

    #[test]
    fn test_quoted_fields() {
        let rows = parse_rows_str("\"Kod\";\"Nazwa\"\n\" R-1 \"; \"Kask \"").unwrap();
        assert_eq!(rows[0].get("Kod"), Some(" R-1 "));
        assert_eq!(rows[0].get("Nazwa"), Some("Kask "));
    }

    #[test]
    fn test_header_only_is_valid() {
        let rows = parse_rows_str("Kod;Nazwa\r\n").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_header_only_keeps_columns() {
        let upload = parse_upload(b"Kod;Nazwa;CenaNetto\r\n").unwrap();
        assert_eq!(upload.columns, vec!["Kod", "Nazwa", "CenaNetto"]);
        assert!(upload.rows.is_empty());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(parse_rows(b""), Err(KatalogError::EmptyInput)));
        assert!(matches!(
            parse_rows(b"\r\n  \n\t"),
            Err(KatalogError::EmptyInput)
        ));
    }

    #[test]
    fn test_bytes_decoded_as_windows_1250() {
        let rows = parse_rows(b"Kod;Nazwa\nR-1;R\xeakawice robocze").unwrap();
        assert_eq!(rows[0].nazwa(), "Rękawice robocze");
    }

    #[test]
    fn test_unknown_columns_pass_through() {
        let rows = parse_rows_str("Kod;Producent;Nazwa\nR-1;Reis;Rękawice").unwrap();
        assert_eq!(
            rows[0].columns().collect::<Vec<_>>(),
            vec!["Kod", "Producent", "Nazwa"]
        );
        assert_eq!(rows[0].get("Producent"), Some("Reis"));
    }
}
