use crate::i18n::Translations;
use crate::model::{CatalogSection, Row};
use crate::pricing::gross_price_for;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Uploaded image URLs for one product, as stored by the image pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Uploaded images keyed by product `Kod`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageIndex {
    by_kod: BTreeMap<String, ImageRefs>,
}

impl ImageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kod: &str) -> Option<&ImageRefs> {
        self.by_kod.get(kod)
    }

    pub fn insert(&mut self, kod: impl Into<String>, refs: ImageRefs) {
        self.by_kod.insert(kod.into(), refs);
    }

    pub fn len(&self) -> usize {
        self.by_kod.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_kod.is_empty()
    }
}

/// Image URLs ready for display. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedImages {
    pub large: String,
    pub thumbnail: String,
}

/// A product row with everything presentation needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub row: Row,
    /// Two-decimal gross price, or "" when the net price is unusable.
    pub gross_price: String,
    pub images: ResolvedImages,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionView {
    pub slug: String,
    pub title_key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub items: Vec<CatalogItem>,
}

/// The assembled catalog handed to presentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub sections: Vec<SectionView>,
}

impl Catalog {
    pub fn section(&self, slug: &str) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.slug == slug)
    }

    /// Sections whose parent is `parent`.
    pub fn subsections<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a SectionView> {
        self.sections
            .iter()
            .filter(move |s| s.parent.as_deref() == Some(parent))
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// Lookup data shared by every section of one assembly.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyContext<'a> {
    pub translations: &'a Translations,
    pub images: &'a ImageIndex,
    pub placeholder: &'a str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AssemblyOptions {
    /// Keep sections without products (admin view).
    pub include_empty: bool,
}

/// Turn categorized sections into the catalog shown to visitors.
///
/// Used for both the pre-commit preview and the live catalog, so the two
/// always render identically for the same sections.
pub fn assemble(
    sections: &[CatalogSection],
    ctx: &AssemblyContext<'_>,
    options: &AssemblyOptions,
) -> Catalog {
    let sections: Vec<SectionView> = sections
        .iter()
        .filter(|s| options.include_empty || !s.is_empty())
        .map(|s| SectionView {
            slug: s.slug.clone(),
            title_key: s.title_key.clone(),
            label: resolve_label(s, ctx.translations),
            parent: s.parent.clone(),
            items: s.items.iter().map(|row| assemble_item(row, ctx)).collect(),
        })
        .collect();

    debug!(sections = sections.len(), "assembled catalog");
    Catalog { sections }
}

fn assemble_item(row: &Row, ctx: &AssemblyContext<'_>) -> CatalogItem {
    CatalogItem {
        gross_price: gross_price_for(row),
        images: resolve_images(row.kod(), ctx.images, ctx.placeholder),
        row: row.clone(),
    }
}

/// Section label: explicit override, then translated title, then the slug.
pub fn resolve_label(section: &CatalogSection, translations: &Translations) -> String {
    if let Some(ref name) = section.display_name {
        if !name.trim().is_empty() {
            return name.clone();
        }
    }
    translations
        .lookup(&section.title_key)
        .unwrap_or(section.slug.as_str())
        .to_string()
}

/// Image URLs for a product.
///
/// The thumbnail falls back to the large image; both fall back to the
/// placeholder. Products without a `Kod` always get the placeholder.
pub fn resolve_images(kod: &str, images: &ImageIndex, placeholder: &str) -> ResolvedImages {
    let refs = if kod.is_empty() { None } else { images.get(kod) };
    let large = refs.and_then(|r| non_empty(r.large.as_deref()));
    let thumbnail = refs
        .and_then(|r| non_empty(r.thumbnail.as_deref()))
        .or(large);

    ResolvedImages {
        large: large.unwrap_or(placeholder).to_string(),
        thumbnail: thumbnail.unwrap_or(placeholder).to_string(),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
