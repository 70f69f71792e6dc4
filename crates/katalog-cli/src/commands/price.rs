use katalog_core::error::KatalogError;
use katalog_core::pricing::{compute_brutto_price, format_price_display};

pub fn run(netto: &str, vat: &str) -> Result<(), KatalogError> {
    let gross = compute_brutto_price(netto, vat);
    println!("{}", format_price_display(&gross));
    Ok(())
}
