use katalog_core::error::KatalogError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), KatalogError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
