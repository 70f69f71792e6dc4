use crate::error::KatalogError;
use crate::model::CatalogSection;
use crate::store::CatalogStore;

/// A store that keeps sections in memory. Used by tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    columns: Vec<String>,
    sections: Vec<CatalogSection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for MemoryStore {
    fn save_sections(
        &mut self,
        columns: &[String],
        sections: &[CatalogSection],
    ) -> Result<(), KatalogError> {
        self.columns = columns.to_vec();
        self.sections = sections.to_vec();
        Ok(())
    }

    fn sections(&self) -> Result<Vec<CatalogSection>, KatalogError> {
        Ok(self.sections.clone())
    }

    fn columns(&self) -> Result<Vec<String>, KatalogError> {
        Ok(self.columns.clone())
    }
}
