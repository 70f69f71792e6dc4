use katalog_core::error::KatalogError;
use std::path::PathBuf;

use crate::output;

pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), KatalogError> {
    let bytes = std::fs::read(&input_file)?;
    let rows = katalog_core::parsing::parse_rows(&bytes)?;

    match output_format {
        "json" => output::json::print(&rows)?,
        _ => output::table::print_rows(&rows),
    }

    Ok(())
}
