use crate::error::KatalogError;
use serde_json::Value;
use std::path::Path;

const PL_JSON: &str = include_str!("../../../config/translations/pl.json");
const EN_JSON: &str = include_str!("../../../config/translations/en.json");

/// Locales with a built-in translation tree.
pub const LOCALES: &[&str] = &["pl", "en"];

pub const DEFAULT_LOCALE: &str = "pl";

/// A translation tree: nested JSON objects with string leaves.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    tree: Value,
}

impl Translations {
    pub fn from_value(tree: Value) -> Self {
        Translations { tree }
    }

    pub fn from_json(json: &str) -> Result<Self, KatalogError> {
        let tree: Value = serde_json::from_str(json)?;
        if !tree.is_object() {
            return Err(KatalogError::Config(
                "translation file must contain a JSON object".into(),
            ));
        }
        Ok(Translations { tree })
    }

    pub fn load(path: &Path) -> Result<Self, KatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            KatalogError::Config(format!(
                "failed to read translations from {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&content)
    }

    /// Built-in translations for `locale`.
    pub fn builtin(locale: &str) -> Result<Self, KatalogError> {
        match locale {
            "pl" => Self::from_json(PL_JSON),
            "en" => Self::from_json(EN_JSON),
            _ => Err(KatalogError::Config(format!(
                "unknown locale '{}'. Available: {}",
                locale,
                LOCALES.join(", ")
            ))),
        }
    }

    /// Resolve a dot-separated key such as "catalog.categories.gloves".
    ///
    /// Only string leaves resolve; a key that stops at an object, an array or
    /// a number yields None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }
        key.split('.')
            .try_fold(&self.tree, |node, part| node.get(part))
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> Translations {
        Translations::from_value(json!({
            "catalog": {
                "categories": { "gloves": "Rękawice robocze", "count": 3 },
                "title": "Katalog"
            }
        }))
    }

    #[test]
    fn test_nested_lookup() {
        assert_eq!(tree().lookup("catalog.categories.gloves"), Some("Rękawice robocze"));
        assert_eq!(tree().lookup("catalog.title"), Some("Katalog"));
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(tree().lookup("catalog.categories.boots"), None);
        assert_eq!(tree().lookup("nope.deeper.still"), None);
        assert_eq!(tree().lookup(""), None);
    }

    #[test]
    fn test_non_string_leaf() {
        assert_eq!(tree().lookup("catalog.categories"), None);
        assert_eq!(tree().lookup("catalog.categories.count"), None);
    }

    #[test]
    fn test_builtin_locales() {
        for locale in LOCALES {
            let t = Translations::builtin(locale).unwrap();
            assert!(t.lookup("catalog.categories.other").is_some());
        }
        assert!(Translations::builtin("de").is_err());
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(Translations::from_json("[1, 2]").is_err());
    }
}
