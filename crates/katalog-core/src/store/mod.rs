pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::KatalogError;
use crate::model::CatalogSection;

/// Where committed catalog sections live.
///
/// The pipeline itself never touches storage; it reads sections through this
/// trait for the live catalog and writes them on commit.
pub trait CatalogStore {
    /// Replace the stored catalog with `sections`. `columns` is the header of
    /// the upload they came from.
    fn save_sections(
        &mut self,
        columns: &[String],
        sections: &[CatalogSection],
    ) -> Result<(), KatalogError>;

    /// All stored sections, in stored order.
    fn sections(&self) -> Result<Vec<CatalogSection>, KatalogError>;

    /// Header columns of the committed upload, plus columns added by edits.
    fn columns(&self) -> Result<Vec<String>, KatalogError>;

    fn slugs(&self) -> Result<Vec<String>, KatalogError> {
        Ok(self.sections()?.into_iter().map(|s| s.slug).collect())
    }

    /// Stored sections whose parent is `parent`.
    fn subsections(&self, parent: &str) -> Result<Vec<CatalogSection>, KatalogError> {
        Ok(self
            .sections()?
            .into_iter()
            .filter(|s| s.parent.as_deref() == Some(parent))
            .collect())
    }

    /// Set one column of the product with the given `Kod` (admin inline edit).
    fn update_field(&mut self, kod: &str, column: &str, value: &str) -> Result<(), KatalogError> {
        let mut sections = self.sections()?;
        apply_field_update(&mut sections, kod, column, value)?;
        let mut columns = self.columns()?;
        if !columns.iter().any(|c| c == column) {
            columns.push(column.to_string());
        }
        self.save_sections(&columns, &sections)
    }
}

/// Set `column` on every row whose `Kod` is `kod`.
///
/// Rows stay in their section even if the edit would categorize them
/// differently; the next upload recategorizes everything.
pub fn apply_field_update(
    sections: &mut [CatalogSection],
    kod: &str,
    column: &str,
    value: &str,
) -> Result<(), KatalogError> {
    if kod.is_empty() {
        return Err(KatalogError::ProductNotFound(String::new()));
    }

    let mut updated = 0;
    for row in sections.iter_mut().flat_map(|s| s.items.iter_mut()) {
        if row.kod() == kod {
            row.set(column, value);
            updated += 1;
        }
    }

    if updated == 0 {
        return Err(KatalogError::ProductNotFound(kod.to_string()));
    }
    Ok(())
}
