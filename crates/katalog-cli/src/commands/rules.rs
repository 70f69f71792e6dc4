use katalog_core::error::KatalogError;
use katalog_core::rules::{self, builtin, RuleSet};
use std::path::Path;

const NO_CATCH_ALL_NOTE: &str = "There is no catch-all category. Products matching nothing are listed
separately in the preview and block `katalog commit`.";

pub fn list() -> Result<(), KatalogError> {
    let rs = builtin::default_ruleset()?;

    println!("Built-in categories, in matching order:\n");
    for rule in rs.rules() {
        let parent_info = match rule.parent {
            Some(ref p) => format!(" (in {p})"),
            None => String::new(),
        };
        println!("  {:<24} {}{}", rule.slug, rule.title_key, parent_info);
    }
    println!();
    Ok(())
}

pub fn explain(file: Option<&Path>) -> Result<(), KatalogError> {
    let rs = match file {
        Some(path) => rules::load_ruleset(path)?,
        None => builtin::default_ruleset()?,
    };

    if let Some(name) = rs.name() {
        println!("{name}\n");
    }
    if let Some(desc) = rs.description() {
        println!("{desc}\n");
    }

    println!(
        "Each product goes to the FIRST of these {} categories that matches it.",
        rs.len()
    );
    println!("Matching ignores letter case. Later rules never see a product an earlier one took.\n");

    for (i, rule) in rs.rules().iter().enumerate() {
        print!("  {}. {}", i + 1, rule.slug);
        if let Some(ref parent) = rule.parent {
            print!("  (sub-category of {parent})");
        }
        println!();

        if rule.is_catch_all() {
            println!("       every remaining product");
        }
        if !rule.keywords.is_empty() {
            println!("       name contains: {}", rule.keywords.join(", "));
        }
        if !rule.kod_prefixes.is_empty() {
            println!("       code starts with: {}", rule.kod_prefixes.join(", "));
        }
        if !rule.is_catch_all() && rule.keywords.is_empty() && rule.kod_prefixes.is_empty() {
            println!("       (no keywords or prefixes: never matches)");
        }
        println!();
    }

    if rs.catch_all().is_none() {
        println!("{NO_CATCH_ALL_NOTE}\n");
    }

    Ok(())
}

pub fn schema() -> Result<(), KatalogError> {
    print!(
        r#"JSON Category Rule Schema
=========================

A rule file lists the catalog categories in matching order. When an
export is imported, each product is placed in the first category whose
rule matches it.

Top-level fields:
  name          (string, optional)  Human-readable name of the rule file
  description   (string, optional)  What these categories are for
  categories    (array, required)   Ordered list of category rules (see
                                    below). Must not be empty.

Each rule in the "categories" array:
  slug          (string, required)  Unique identifier, used in URLs and
                                    as the storage key.
  titleKey      (string, required)  Translation key of the category title,
                                    e.g. "catalog.categories.gloves".
                                    Falls back to the slug when the key
                                    has no translation.
  keywords      (array, optional)   Matches when any keyword appears in the
                                    product name (Nazwa). Case-insensitive.
  kodPrefixes   (array, optional)   Matches when the product code (Kod)
                                    starts with any prefix. Case-insensitive.
  catchAll      (bool, optional)    Matches every product. Implied for the
                                    slug "other". Must be the last rule.
  parent        (string, optional)  Slug of the parent category. Put the
                                    sub-category before its parent so it
                                    gets the first chance to match.
  displayName   (string, optional)  Label shown instead of the translation.

Example:
{{
  "name": "Shop categories",
  "categories": [
    {{
      "slug": "rekawice-jednorazowe",
      "titleKey": "catalog.categories.disposableGloves",
      "keywords": ["NITRYL", "LATEKS"],
      "parent": "rekawice"
    }},
    {{
      "slug": "rekawice",
      "titleKey": "catalog.categories.gloves",
      "keywords": ["RĘKAWICE"],
      "kodPrefixes": ["R-"]
    }},
    {{
      "slug": "other",
      "titleKey": "catalog.categories.other",
      "catchAll": true
    }}
  ]
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), KatalogError> {
    let rs = rules::load_ruleset(file)?;

    println!(
        "Ruleset '{}' is valid.",
        rs.name().unwrap_or_else(|| file.to_str().unwrap_or("?"))
    );
    println!(
        "  Categories: {}",
        rs.rules()
            .iter()
            .map(|r| r.slug.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let warnings = lint(&rs);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

/// Problems that are legal but probably unintended.
fn lint(rs: &RuleSet) -> Vec<String> {
    let mut warnings = Vec::new();

    if rs.catch_all().is_none() {
        warnings.push(
            "no catch-all category; uploads with unmatched products cannot be committed".into(),
        );
    }

    for (i, rule) in rs.rules().iter().enumerate() {
        if !rule.is_catch_all() && rule.keywords.is_empty() && rule.kod_prefixes.is_empty() {
            warnings.push(format!(
                "category '{}' has no keywords or prefixes and never matches",
                rule.slug
            ));
        }

        // A sub-category listed after its parent only gets what the parent missed.
        if let Some(ref parent) = rule.parent {
            let parent_pos = rs.rules().iter().position(|r| &r.slug == parent);
            if parent_pos.is_some_and(|p| p < i) {
                warnings.push(format!(
                    "sub-category '{}' comes after its parent '{}' and may never match",
                    rule.slug, parent
                ));
            }
        }
    }

    warnings
}
