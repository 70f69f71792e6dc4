use serde::{Deserialize, Serialize};

/// Slug that marks the catch-all rule when `catchAll` is not set explicitly.
pub const CATCH_ALL_SLUG: &str = "other";

/// A single category rule as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRuleDef {
    pub slug: String,
    /// Translation key of the section title, e.g. "catalog.categories.gloves".
    pub title_key: String,
    /// Case-insensitive substrings matched against `Nazwa`.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Case-insensitive prefixes matched against `Kod`.
    #[serde(default)]
    pub kod_prefixes: Vec<String>,
    /// Matches every row. Implied for the slug "other".
    #[serde(default)]
    pub catch_all: bool,
    /// Slug of the parent category, for sub-categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Label shown instead of the translated title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl CategoryRuleDef {
    pub fn is_catch_all(&self) -> bool {
        self.catch_all || self.slug == CATCH_ALL_SLUG
    }
}

/// The category configuration file: an ordered list of rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetDef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub categories: Vec<CategoryRuleDef>,
}
