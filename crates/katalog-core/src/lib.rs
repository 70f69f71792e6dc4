pub mod assembly;
pub mod categorize;
pub mod config;
pub mod error;
pub mod export;
pub mod i18n;
pub mod model;
pub mod parsing;
pub mod pricing;
pub mod rules;
pub mod store;

use assembly::{assemble, AssemblyContext, AssemblyOptions, Catalog, ImageIndex};
use categorize::{categorize, categorize_strict};
use config::CatalogConfig;
use error::KatalogError;
use model::{CatalogSection, Row};
use serde::Serialize;
use store::CatalogStore;
use tracing::info;

/// An uploaded file, categorized and assembled but not yet committed.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    /// Header of the uploaded file.
    pub columns: Vec<String>,
    /// Every section, including empty ones. This is what a commit stores.
    pub sections: Vec<CatalogSection>,
    /// Rows no category rule matched. A commit refuses to drop them.
    pub unmatched: Vec<Row>,
    /// The catalog as it would look once committed.
    pub catalog: Catalog,
    pub row_count: usize,
}

/// Main admin entry point: show what an uploaded file would publish.
///
/// Nothing is stored. The catalog is assembled exactly as [`live_catalog`]
/// would assemble it after a commit.
pub fn preview_upload(
    bytes: &[u8],
    config: &CatalogConfig,
    images: &ImageIndex,
    options: &AssemblyOptions,
) -> Result<Preview, KatalogError> {
    let upload = parsing::parse_upload(bytes)?;
    let categorization = categorize(&upload.rows, &config.rules);
    let catalog = assemble(&categorization.sections, &context(config, images), options);

    Ok(Preview {
        columns: upload.columns,
        row_count: upload.rows.len(),
        sections: categorization.sections,
        unmatched: categorization.unmatched,
        catalog,
    })
}

/// Parse, categorize and store an uploaded file, replacing the live catalog.
///
/// Fails without touching the store when any row matches no category rule.
pub fn commit_upload(
    bytes: &[u8],
    config: &CatalogConfig,
    store: &mut dyn CatalogStore,
) -> Result<Vec<CatalogSection>, KatalogError> {
    let upload = parsing::parse_upload(bytes)?;
    let categorization = categorize_strict(&upload.rows, &config.rules)?;
    store.save_sections(&upload.columns, &categorization.sections)?;
    info!(rows = upload.rows.len(), "upload committed");
    Ok(categorization.sections)
}

/// Store a previously shown preview.
pub fn commit_preview(preview: &Preview, store: &mut dyn CatalogStore) -> Result<(), KatalogError> {
    if let Some(first) = preview.unmatched.first() {
        return Err(KatalogError::UnmatchedRows {
            count: preview.unmatched.len(),
            first_kod: first.kod().to_string(),
        });
    }
    store.save_sections(&preview.columns, &preview.sections)?;
    info!(rows = preview.row_count, "preview committed");
    Ok(())
}

/// The published catalog, assembled from the store's current sections.
pub fn live_catalog(
    store: &dyn CatalogStore,
    config: &CatalogConfig,
    images: &ImageIndex,
    options: &AssemblyOptions,
) -> Result<Catalog, KatalogError> {
    let sections = store.sections()?;
    Ok(assemble(&sections, &context(config, images), options))
}

fn context<'a>(config: &'a CatalogConfig, images: &'a ImageIndex) -> AssemblyContext<'a> {
    AssemblyContext {
        translations: &config.translations,
        images,
        placeholder: &config.placeholder_image,
    }
}
