use katalog_core::assembly::{AssemblyOptions, ImageIndex};
use katalog_core::error::KatalogError;
use katalog_core::export::export_sections;
use katalog_core::store::{CatalogStore, JsonFileStore};
use std::path::PathBuf;

use crate::output;
use crate::ConfigArgs;

pub fn preview(
    input_file: PathBuf,
    store_dir: Option<PathBuf>,
    show_empty: bool,
    output_format: &str,
    config: &ConfigArgs,
) -> Result<(), KatalogError> {
    let config = config.load()?;
    let images = match store_dir {
        Some(dir) => JsonFileStore::open(dir)?.images()?,
        None => ImageIndex::new(),
    };
    let options = AssemblyOptions {
        include_empty: show_empty,
    };

    let bytes = std::fs::read(&input_file)?;
    let preview = katalog_core::preview_upload(&bytes, &config, &images, &options)?;

    match output_format {
        "json" => output::json::print(&preview)?,
        _ => {
            output::table::print_catalog(&preview.catalog);
            output::table::print_unmatched(&preview.unmatched);
            println!(
                "{} product(s) in {} section(s). Nothing was saved; run `katalog commit` to publish.",
                preview.row_count,
                preview.catalog.sections.len()
            );
        }
    }

    Ok(())
}

pub fn commit(
    input_file: PathBuf,
    store_dir: PathBuf,
    config: &ConfigArgs,
) -> Result<(), KatalogError> {
    let config = config.load()?;
    let mut store = JsonFileStore::open(store_dir)?;

    let bytes = std::fs::read(&input_file)?;
    let sections = katalog_core::commit_upload(&bytes, &config, &mut store)?;

    let products: usize = sections.iter().map(|s| s.items.len()).sum();
    let filled = sections.iter().filter(|s| !s.is_empty()).count();
    println!(
        "Published {} product(s) in {} section(s) to {}",
        products,
        filled,
        store.dir().display()
    );
    Ok(())
}

pub fn live(
    store_dir: PathBuf,
    show_empty: bool,
    parent: Option<&str>,
    output_format: &str,
    config: &ConfigArgs,
) -> Result<(), KatalogError> {
    let config = config.load()?;
    let store = JsonFileStore::open(store_dir)?;
    let images = store.images()?;
    let options = AssemblyOptions {
        include_empty: show_empty,
    };

    let mut catalog = katalog_core::live_catalog(&store, &config, &images, &options)?;
    if let Some(parent) = parent {
        catalog
            .sections
            .retain(|s| s.parent.as_deref() == Some(parent));
    }

    match output_format {
        "json" => output::json::print(&catalog)?,
        _ => output::table::print_catalog(&catalog),
    }
    Ok(())
}

pub fn edit(store_dir: PathBuf, kod: &str, column: &str, value: &str) -> Result<(), KatalogError> {
    let mut store = JsonFileStore::open(store_dir)?;
    store.update_field(kod, column, value)?;
    println!("Set {column} = '{value}' for product {kod}");
    Ok(())
}

pub fn export(store_dir: PathBuf, out: PathBuf) -> Result<(), KatalogError> {
    let store = JsonFileStore::open(store_dir)?;
    let sections = store.sections()?;
    let products: usize = sections.iter().map(|s| s.items.len()).sum();

    let bytes = export_sections(&store.columns()?, &sections)?;
    std::fs::write(&out, bytes)?;
    eprintln!("Exported {} product(s) to {}", products, out.display());
    Ok(())
}
