//! Consistency checks over a loaded catalog.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::catalog::{Catalog, LocalizedText};
use crate::i18n::{Language, SUPPORTED_LANGUAGES, Translations};

/// A non-fatal problem found while validating catalog data or UI strings.
///
/// The catalog still renders with these present: dangling categories are
/// skipped by every view and missing text falls back to another language.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogWarning {
    /// A tool refers to a category id that does not exist.
    #[error("tool '{tool}' refers to unknown category '{category}'")]
    UnknownCategory { tool: String, category: String },

    /// Two categories share the same id.
    #[error("category id '{id}' is defined more than once")]
    DuplicateCategory { id: String },

    /// A localized field has no text for a supported language.
    #[error("{item}: field '{field}' has no '{language}' text")]
    MissingText {
        item: String,
        field: &'static str,
        language: Language,
    },

    /// A rating that is not a finite number between 0 and 5.
    #[error("tool '{tool}' has out-of-range rating {rating}")]
    InvalidRating { tool: String, rating: f64 },

    /// A UI string key defined for some languages but not this one.
    #[error("translation key '{key}' is missing for '{language}'")]
    MissingTranslation { key: String, language: Language },
}

/// Check every invariant of the catalog, in dataset order.
pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogWarning> {
    let mut warnings = Vec::new();
    let mut seen = BTreeSet::new();

    for category in catalog.categories() {
        if !seen.insert(category.id.as_str()) {
            warnings.push(CatalogWarning::DuplicateCategory {
                id: category.id.clone(),
            });
        }
        let item = format!("category '{}'", category.id);
        check_text(&item, "name", &category.name, &mut warnings);
    }

    for tool in catalog.tools() {
        let label = tool.name.resolve(Language::En).to_string();
        if catalog.category(&tool.category).is_none() {
            warnings.push(CatalogWarning::UnknownCategory {
                tool: label.clone(),
                category: tool.category.clone(),
            });
        }
        if !(0.0..=5.0).contains(&tool.rating) {
            warnings.push(CatalogWarning::InvalidRating {
                tool: label.clone(),
                rating: tool.rating,
            });
        }
        let item = format!("tool '{label}'");
        check_text(&item, "name", &tool.name, &mut warnings);
        check_text(&item, "pricing", &tool.pricing, &mut warnings);
        if let Some(description) = &tool.short_description {
            check_text(&item, "short_description", description, &mut warnings);
        }
    }

    warnings
}

/// Report UI string keys that some language lacks.
pub fn validate_translations(translations: &Translations) -> Vec<CatalogWarning> {
    SUPPORTED_LANGUAGES
        .into_iter()
        .flat_map(|language| {
            translations
                .missing_keys(language)
                .into_iter()
                .map(move |key| CatalogWarning::MissingTranslation {
                    key: key.to_string(),
                    language,
                })
        })
        .collect()
}

fn check_text(
    item: &str,
    field: &'static str,
    text: &LocalizedText,
    warnings: &mut Vec<CatalogWarning>,
) {
    for language in text.missing_languages() {
        warnings.push(CatalogWarning::MissingText {
            item: item.to_string(),
            field,
            language,
        });
    }
}
