use crate::error::KatalogError;
use crate::i18n::Translations;
use crate::rules::{self, builtin, RuleSet};
use std::path::Path;

/// Image shown when a product has no uploaded photo.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/images/placeholder.webp";

/// Everything the pipeline needs besides the rows themselves.
///
/// Built once by the caller and passed into every call; nothing is cached
/// behind the caller's back.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub rules: RuleSet,
    pub translations: Translations,
    pub placeholder_image: String,
    pub locale: String,
}

impl CatalogConfig {
    /// The embedded category rules and translations for `locale`.
    pub fn builtin(locale: &str) -> Result<Self, KatalogError> {
        Ok(CatalogConfig {
            rules: builtin::default_ruleset()?,
            translations: Translations::builtin(locale)?,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            locale: locale.to_string(),
        })
    }

    /// Built-in config with any of the given files substituted.
    pub fn from_files(
        locale: &str,
        rules_path: Option<&Path>,
        translations_path: Option<&Path>,
    ) -> Result<Self, KatalogError> {
        let rules = match rules_path {
            Some(path) => rules::load_ruleset(path)?,
            None => builtin::default_ruleset()?,
        };
        let translations = match translations_path {
            Some(path) => Translations::load(path)?,
            None => Translations::builtin(locale)?,
        };
        Ok(CatalogConfig {
            rules,
            translations,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            locale: locale.to_string(),
        })
    }

    pub fn with_placeholder(mut self, path: impl Into<String>) -> Self {
        self.placeholder_image = path.into();
        self
    }
}
