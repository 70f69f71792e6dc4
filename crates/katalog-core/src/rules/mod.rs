pub mod builtin;
pub mod schema;

use crate::error::KatalogError;
use schema::{CategoryRuleDef, RuleSetDef};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// An ordered, validated list of category rules.
///
/// Only obtainable through validation, so the categorizer never sees an empty
/// list, duplicate slugs or an unreachable rule behind the catch-all.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: Option<String>,
    description: Option<String>,
    rules: Vec<CategoryRuleDef>,
}

impl RuleSet {
    pub fn new(rules: Vec<CategoryRuleDef>) -> Result<Self, KatalogError> {
        validate_rules(&rules)?;
        Ok(RuleSet {
            name: None,
            description: None,
            rules,
        })
    }

    pub fn from_def(def: RuleSetDef) -> Result<Self, KatalogError> {
        validate_rules(&def.categories)?;
        Ok(RuleSet {
            name: def.name,
            description: def.description,
            rules: def.categories,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn rules(&self) -> &[CategoryRuleDef] {
        &self.rules
    }

    pub fn get(&self, slug: &str) -> Option<&CategoryRuleDef> {
        self.rules.iter().find(|r| r.slug == slug)
    }

    /// The rule that matches every row, if the set has one. Always last.
    pub fn catch_all(&self) -> Option<&CategoryRuleDef> {
        self.rules.last().filter(|r| r.is_catch_all())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Load a ruleset from a JSON file.
pub fn load_ruleset(path: &Path) -> Result<RuleSet, KatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| KatalogError::RulesetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_ruleset(&content, path)
}

/// Parse a ruleset from a JSON string.
pub fn parse_ruleset(json: &str, source: &Path) -> Result<RuleSet, KatalogError> {
    let def: RuleSetDef = serde_json::from_str(json).map_err(|e| KatalogError::RulesetLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    RuleSet::from_def(def)
}

/// Parse a ruleset from a JSON string (no file path context).
pub fn parse_ruleset_str(json: &str) -> Result<RuleSet, KatalogError> {
    let def: RuleSetDef = serde_json::from_str(json).map_err(KatalogError::Json)?;
    RuleSet::from_def(def)
}

/// Validate that a list of rules is well-formed.
pub fn validate_rules(rules: &[CategoryRuleDef]) -> Result<(), KatalogError> {
    if rules.is_empty() {
        return Err(KatalogError::RulesetInvalid(
            "categories must not be empty".into(),
        ));
    }

    let mut slugs = HashSet::new();
    for rule in rules {
        if rule.slug.trim().is_empty() {
            return Err(KatalogError::RulesetInvalid(
                "category slug must not be empty".into(),
            ));
        }
        if !slugs.insert(rule.slug.as_str()) {
            return Err(KatalogError::RulesetInvalid(format!(
                "duplicate category slug '{}'",
                rule.slug
            )));
        }
    }

    if let Some(pos) = rules.iter().position(|r| r.is_catch_all()) {
        if pos != rules.len() - 1 {
            return Err(KatalogError::RulesetInvalid(format!(
                "catch-all category '{}' must be the last rule; {} rule(s) after it can never match",
                rules[pos].slug,
                rules.len() - 1 - pos
            )));
        }
    }

    for rule in rules {
        if let Some(ref parent) = rule.parent {
            if parent == &rule.slug {
                return Err(KatalogError::RulesetInvalid(format!(
                    "category '{}' is its own parent",
                    rule.slug
                )));
            }
            if !slugs.contains(parent.as_str()) {
                return Err(KatalogError::RulesetInvalid(format!(
                    "category '{}' references unknown parent '{}'",
                    rule.slug, parent
                )));
            }
        }
    }

    debug!(rules = rules.len(), "validated category rules");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ruleset() {
        let json = r#"{
            "name": "Test",
            "categories": [
                { "slug": "gloves", "titleKey": "catalog.gloves", "keywords": ["RĘKAWICE"], "kodPrefixes": ["R-"] },
                { "slug": "other", "titleKey": "catalog.other" }
            ]
        }"#;
        let rs = parse_ruleset_str(json).unwrap();
        assert_eq!(rs.name(), Some("Test"));
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.rules()[0].kod_prefixes, vec!["R-"]);
        assert_eq!(rs.catch_all().map(|r| r.slug.as_str()), Some("other"));
    }

    #[test]
    fn test_empty_categories_rejected() {
        let json = r#"{ "categories": [] }"#;
        assert!(matches!(
            parse_ruleset_str(json),
            Err(KatalogError::RulesetInvalid(_))
        ));
    }

    #[test]
    fn test_empty_rule_list_rejected() {
        assert!(matches!(
            RuleSet::new(Vec::new()),
            Err(KatalogError::RulesetInvalid(_))
        ));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let json = r#"{
            "categories": [
                { "slug": "gloves", "titleKey": "a" },
                { "slug": "gloves", "titleKey": "b" }
            ]
        }"#;
        let err = parse_ruleset_str(json).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_catch_all_not_last_rejected() {
        let json = r#"{
            "categories": [
                { "slug": "other", "titleKey": "a" },
                { "slug": "gloves", "titleKey": "b", "keywords": ["RĘKAWICE"] }
            ]
        }"#;
        assert!(parse_ruleset_str(json).is_err());
    }

    #[test]
    fn test_explicit_catch_all_flag() {
        let json = r#"{
            "categories": [
                { "slug": "gloves", "titleKey": "a", "keywords": ["RĘKAWICE"] },
                { "slug": "pozostale", "titleKey": "b", "catchAll": true }
            ]
        }"#;
        let rs = parse_ruleset_str(json).unwrap();
        assert_eq!(rs.catch_all().map(|r| r.slug.as_str()), Some("pozostale"));
    }

    #[test]
    fn test_no_catch_all_is_valid() {
        let json = r#"{ "categories": [ { "slug": "gloves", "titleKey": "a" } ] }"#;
        let rs = parse_ruleset_str(json).unwrap();
        assert!(rs.catch_all().is_none());
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let json = r#"{
            "categories": [
                { "slug": "nitrile", "titleKey": "a", "parent": "gloves" },
                { "slug": "other", "titleKey": "b" }
            ]
        }"#;
        let err = parse_ruleset_str(json).unwrap_err();
        assert!(err.to_string().contains("unknown parent"));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_ruleset(Path::new("/nonexistent/categories.json")).unwrap_err();
        assert!(matches!(err, KatalogError::RulesetLoad { .. }));
        assert!(err.to_string().contains("categories.json"));
    }
}
