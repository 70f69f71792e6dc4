use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a decimal that may use a Polish decimal comma.
///
/// Handles formats like:
/// - "12,50" -> 12.50
/// - " 23 " -> 23
/// - "0.5" -> 0.5
///
/// Returns None for anything that is not a plain decimal number, including
/// the empty string and digit separators like "1_000" or "1 000". Sign
/// handling is left to the caller.
pub fn parse_locale_decimal(s: &str) -> Option<Decimal> {
    let normalized = s.replace(',', ".");
    let normalized = normalized.trim();
    if !is_plain_decimal(normalized) {
        return None;
    }
    Decimal::from_str(normalized).ok()
}

// Optional sign, digits, at most one '.', at least one digit.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
    let mut digits = 0;
    let mut points = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}
