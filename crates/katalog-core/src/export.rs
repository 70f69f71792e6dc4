use crate::error::KatalogError;
use crate::model::{CatalogSection, Row};
use crate::parsing::decode::encode_windows_1250;
use crate::parsing::fields::DELIMITER;
use tracing::{debug, warn};

/// Columns of `rows` in first-seen order.
pub fn header_of(rows: &[Row]) -> Vec<String> {
    export_header(&[], rows)
}

/// `columns` followed by any column that only the rows carry.
pub fn export_header(columns: &[String], rows: &[Row]) -> Vec<String> {
    let mut header = columns.to_vec();
    for row in rows {
        for column in row.columns() {
            if !header.iter().any(|h| h == column) {
                header.push(column.to_string());
            }
        }
    }
    header
}

/// Write rows back in the import format: Windows-1250, `;`-delimited, CRLF.
///
/// Values are written unquoted. A value containing `;` or `"` cannot be read
/// back unchanged, since the format has no escaping. An empty header is
/// refused, since the file could not be imported again.
pub fn write_rows(header: &[String], rows: &[Row]) -> Result<Vec<u8>, KatalogError> {
    if header.is_empty() {
        return Err(KatalogError::NoColumns);
    }

    let delimiter = DELIMITER.to_string();
    let mut text = header.join(delimiter.as_str());
    text.push_str("\r\n");

    for row in rows {
        let values: Vec<&str> = header.iter().map(|c| row.get_or_empty(c)).collect();
        if values.iter().any(|v| v.contains(DELIMITER) || v.contains('"')) {
            warn!(kod = row.kod(), "value contains a delimiter or quote; export is lossy");
        }
        text.push_str(&values.join(delimiter.as_str()));
        text.push_str("\r\n");
    }

    Ok(encode_windows_1250(&text))
}

/// Write a stored catalog back in the import format, every section's rows in
/// stored order under the committed header.
pub fn export_sections(
    columns: &[String],
    sections: &[CatalogSection],
) -> Result<Vec<u8>, KatalogError> {
    let rows: Vec<Row> = sections.iter().flat_map(|s| s.items.iter().cloned()).collect();
    let header = export_header(columns, &rows);
    debug!(columns = header.len(), rows = rows.len(), "exporting catalog");
    write_rows(&header, &rows)
}
