use crate::model::{CatalogSection, Row};
use serde::{Deserialize, Serialize};

/// Result of assigning rows to category sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Categorization {
    /// One section per rule, in rule order. Sections may be empty.
    pub sections: Vec<CatalogSection>,
    /// Rows no rule matched. Always empty when the ruleset has a catch-all.
    pub unmatched: Vec<Row>,
}

impl Categorization {
    /// Sections with at least one row, in rule order.
    pub fn non_empty(&self) -> impl Iterator<Item = &CatalogSection> {
        self.sections.iter().filter(|s| !s.is_empty())
    }

    /// Drop empty sections, keeping the rest in rule order.
    pub fn into_non_empty(self) -> Vec<CatalogSection> {
        self.sections.into_iter().filter(|s| !s.is_empty()).collect()
    }

    pub fn section(&self, slug: &str) -> Option<&CatalogSection> {
        self.sections.iter().find(|s| s.slug == slug)
    }

    /// Number of rows placed in any section.
    pub fn assigned_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// All assigned rows, section by section.
    pub fn flatten(&self) -> Vec<Row> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter().cloned())
            .collect()
    }
}
