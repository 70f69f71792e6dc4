use crate::error::KatalogError;
use crate::rules::schema::RuleSetDef;
use crate::rules::RuleSet;

const DEFAULT_CATEGORIES_JSON: &str = include_str!("../../../../config/categories.json");

/// Load the category rules shipped with the crate.
pub fn default_ruleset() -> Result<RuleSet, KatalogError> {
    let def: RuleSetDef = serde_json::from_str(DEFAULT_CATEGORIES_JSON)?;
    RuleSet::from_def(def)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_ruleset() {
        let rs = default_ruleset().unwrap();
        assert!(!rs.is_empty());
        assert_eq!(rs.catch_all().map(|r| r.slug.as_str()), Some("other"));
    }

    #[test]
    fn test_subcategory_precedes_parent() {
        let rs = default_ruleset().unwrap();
        let slugs: Vec<&str> = rs.rules().iter().map(|r| r.slug.as_str()).collect();
        let child = slugs.iter().position(|s| *s == "rekawice-jednorazowe").unwrap();
        let parent = slugs.iter().position(|s| *s == "rekawice").unwrap();
        assert!(child < parent);
    }
}
