use crate::categorize::outcome::Categorization;
use crate::error::KatalogError;
use crate::model::{CatalogSection, Row};
use crate::rules::schema::CategoryRuleDef;
use crate::rules::RuleSet;
use tracing::{debug, warn};

/// A rule with its match terms uppercased once up front.
struct RuleMatcher {
    keywords: Vec<String>,
    kod_prefixes: Vec<String>,
    catch_all: bool,
}

impl RuleMatcher {
    fn new(rule: &CategoryRuleDef) -> Self {
        RuleMatcher {
            keywords: uppercase_terms(&rule.keywords),
            kod_prefixes: uppercase_terms(&rule.kod_prefixes),
            catch_all: rule.is_catch_all(),
        }
    }

    /// Both arguments must already be uppercased.
    fn matches(&self, nazwa: &str, kod: &str) -> bool {
        self.catch_all
            || self.keywords.iter().any(|k| nazwa.contains(k.as_str()))
            || self.kod_prefixes.iter().any(|p| kod.starts_with(p.as_str()))
    }
}

// An empty term would match every row, so it is ignored.
fn uppercase_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| t.to_uppercase())
        .collect()
}

/// Assign every row to the first rule that matches it.
///
/// First match wins, not best match: rule order in the configuration is the
/// priority order. Sections come out in rule order with rows in input order.
/// Rows no rule matches are returned in `unmatched` rather than dropped.
pub fn categorize(rows: &[Row], rules: &RuleSet) -> Categorization {
    let matchers: Vec<RuleMatcher> = rules.rules().iter().map(RuleMatcher::new).collect();

    let mut sections: Vec<CatalogSection> = rules
        .rules()
        .iter()
        .map(|rule| CatalogSection {
            slug: rule.slug.clone(),
            title_key: rule.title_key.clone(),
            display_name: rule.display_name.clone(),
            parent: rule.parent.clone(),
            items: Vec::new(),
        })
        .collect();
    let mut unmatched = Vec::new();

    for row in rows {
        let nazwa = row.nazwa().to_uppercase();
        let kod = row.kod().to_uppercase();

        match matchers.iter().position(|m| m.matches(&nazwa, &kod)) {
            Some(idx) => sections[idx].items.push(row.clone()),
            None => unmatched.push(row.clone()),
        }
    }

    if !unmatched.is_empty() {
        warn!(
            count = unmatched.len(),
            first_kod = unmatched[0].kod(),
            "rows matched no category rule; the ruleset has no catch-all"
        );
    }
    debug!(
        rows = rows.len(),
        sections = sections.iter().filter(|s| !s.is_empty()).count(),
        "categorized rows"
    );

    Categorization {
        sections,
        unmatched,
    }
}

/// Like [`categorize`], but fail when any row matched no rule.
pub fn categorize_strict(rows: &[Row], rules: &RuleSet) -> Result<Categorization, KatalogError> {
    let result = categorize(rows, rules);
    if let Some(first) = result.unmatched.first() {
        return Err(KatalogError::UnmatchedRows {
            count: result.unmatched.len(),
            first_kod: first.kod().to_string(),
        });
    }
    Ok(result)
}
