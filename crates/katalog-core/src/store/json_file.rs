use crate::assembly::ImageIndex;
use crate::error::KatalogError;
use crate::model::CatalogSection;
use crate::store::CatalogStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

const CATALOG_FILE: &str = "catalog.json";
const IMAGES_FILE: &str = "images.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCatalog {
    #[serde(default)]
    columns: Vec<String>,
    sections: Vec<CatalogSection>,
}

/// A store backed by JSON files in one directory.
///
/// `catalog.json` holds the committed sections and `images.json` the
/// uploaded image URLs by `Kod`. Writes go through a temp file in the same
/// directory and are renamed into place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store in `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, KatalogError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(JsonFileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Uploaded images. A missing `images.json` means no images.
    pub fn images(&self) -> Result<ImageIndex, KatalogError> {
        Ok(self.read_json::<ImageIndex>(IMAGES_FILE)?.unwrap_or_default())
    }

    pub fn save_images(&self, images: &ImageIndex) -> Result<(), KatalogError> {
        self.write_json(IMAGES_FILE, images)
    }

    // A missing catalog.json is an empty catalog.
    fn stored(&self) -> Result<StoredCatalog, KatalogError> {
        Ok(self.read_json::<StoredCatalog>(CATALOG_FILE)?.unwrap_or_default())
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, KatalogError> {
        let path = self.dir.join(name);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| KatalogError::Store(format!("{} is corrupt: {e}", path.display())))?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), KatalogError> {
        let json = serde_json::to_vec_pretty(value)?;
        let mut tmpfile = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmpfile.write_all(&json)?;
        tmpfile
            .persist(self.dir.join(name))
            .map_err(|e| KatalogError::Store(format!("failed to write {name}: {e}")))?;
        Ok(())
    }
}

impl CatalogStore for JsonFileStore {
    fn save_sections(
        &mut self,
        columns: &[String],
        sections: &[CatalogSection],
    ) -> Result<(), KatalogError> {
        let stored = StoredCatalog {
            columns: columns.to_vec(),
            sections: sections.to_vec(),
        };
        self.write_json(CATALOG_FILE, &stored)?;
        info!(
            sections = sections.len(),
            dir = %self.dir.display(),
            "committed catalog"
        );
        Ok(())
    }

    fn sections(&self) -> Result<Vec<CatalogSection>, KatalogError> {
        Ok(self.stored()?.sections)
    }

    fn columns(&self) -> Result<Vec<String>, KatalogError> {
        Ok(self.stored()?.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::ImageRefs;
    use crate::model::Row;

    fn columns() -> Vec<String> {
        vec!["Kod".into(), "Nazwa".into(), "Uwagi".into()]
    }

    fn section(slug: &str, kod: &str) -> CatalogSection {
        CatalogSection {
            slug: slug.into(),
            title_key: "t".into(),
            display_name: None,
            parent: None,
            items: vec![[("Kod", kod), ("Nazwa", "Łopata"), ("Uwagi", "")]
                .into_iter()
                .collect::<Row>()],
        }
    }

    #[test]
    fn test_empty_store_has_no_sections() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(store.sections().unwrap().is_empty());
        assert!(store.columns().unwrap().is_empty());
        assert!(store.images().unwrap().is_empty());
    }

    #[test]
    fn test_sections_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        store
            .save_sections(&columns(), &[section("tools", "T-1"), section("other", "Z-1")])
            .unwrap();

        let reopened = JsonFileStore::open(dir.path()).unwrap();
        let sections = reopened.sections().unwrap();
        assert_eq!(sections, vec![section("tools", "T-1"), section("other", "Z-1")]);
        assert_eq!(
            sections[0].items[0].columns().collect::<Vec<_>>(),
            vec!["Kod", "Nazwa", "Uwagi"]
        );
    }

    #[test]
    fn test_header_only_catalog_keeps_columns() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        store.save_sections(&columns(), &[]).unwrap();

        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert!(reopened.sections().unwrap().is_empty());
        assert_eq!(reopened.columns().unwrap(), columns());
    }

    #[test]
    fn test_file_without_columns_still_reads() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CATALOG_FILE), r#"{ "sections": [] }"#).unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(store.columns().unwrap().is_empty());
    }

    #[test]
    fn test_update_field_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        store.save_sections(&columns(), &[section("tools", "T-1")]).unwrap();
        store.update_field("T-1", "Nazwa", "Szpadel").unwrap();

        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.sections().unwrap()[0].items[0].nazwa(), "Szpadel");
    }

    #[test]
    fn test_images_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        let mut images = ImageIndex::new();
        images.insert(
            "T-1",
            ImageRefs {
                large: Some("/uploads/t-1.webp".into()),
                thumbnail: None,
            },
        );
        store.save_images(&images).unwrap();
        assert_eq!(store.images().unwrap(), images);
    }

    #[test]
    fn test_corrupt_file_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CATALOG_FILE), "{ not json").unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(matches!(store.sections(), Err(KatalogError::Store(_))));
    }
}
