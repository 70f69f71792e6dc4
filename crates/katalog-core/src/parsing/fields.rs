/// Field delimiter of the export format.
pub const DELIMITER: char = ';';

/// Split text into non-blank lines.
///
/// CR, LF and CRLF all end a line. A CRLF pair yields an empty piece between
/// the two characters, which is dropped along with every other blank line.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
}

/// Split one line on the delimiter and normalize every field.
///
/// Quoted semicolons are not special: `"a;b"` becomes two fields.
pub fn split_fields(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(normalize_field).collect()
}

/// Trim a field and strip one pair of surrounding double quotes.
pub fn normalize_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted.to_string()
}
