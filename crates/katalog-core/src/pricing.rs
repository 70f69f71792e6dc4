use crate::model::{columns, Row};
use crate::parsing::values::parse_locale_decimal;
use rust_decimal::{Decimal, RoundingStrategy};

/// Returned instead of a price when the net price cannot be used.
pub const INVALID_PRICE: &str = "";

/// Shown in place of [`INVALID_PRICE`].
pub const PRICE_PLACEHOLDER: &str = "—";

/// Compute the gross (brutto) price from a net price and a VAT rate.
///
/// Both inputs may use a decimal comma. The result always has exactly two
/// decimals and a `.` separator, rounded half away from zero.
///
/// A missing, non-numeric or negative net price yields [`INVALID_PRICE`].
/// A missing, non-numeric or negative VAT rate counts as 0%.
///
/// Values are exact decimals with at most 28 significant digits. A net price
/// beyond that range, or a gross price that would overflow it, also yields
/// [`INVALID_PRICE`].
pub fn compute_brutto_price(netto: &str, vat_rate: &str) -> String {
    let net = match parse_locale_decimal(netto) {
        // abs() turns "-0" into a plain zero.
        Some(n) if n >= Decimal::ZERO => n.abs(),
        _ => return INVALID_PRICE.to_string(),
    };
    let rate = match parse_locale_decimal(vat_rate) {
        Some(r) if r >= Decimal::ZERO => r,
        _ => Decimal::ZERO,
    };

    match gross(net, rate) {
        Some(g) => format_two_decimals(g),
        None => INVALID_PRICE.to_string(),
    }
}

/// Gross price of a row, from its `CenaNetto` and `StawkaVAT` columns.
pub fn gross_price_for(row: &Row) -> String {
    compute_brutto_price(
        row.get_or_empty(columns::CENA_NETTO),
        row.get_or_empty(columns::STAWKA_VAT),
    )
}

/// Render a computed price for display, with the placeholder for invalid ones.
pub fn format_price_display(price: &str) -> &str {
    if price == INVALID_PRICE {
        PRICE_PLACEHOLDER
    } else {
        price
    }
}

// None on overflow.
fn gross(net: Decimal, rate: Decimal) -> Option<Decimal> {
    let multiplier = Decimal::ONE.checked_add(rate.checked_div(Decimal::ONE_HUNDRED)?)?;
    net.checked_mul(multiplier)
}

fn format_two_decimals(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
