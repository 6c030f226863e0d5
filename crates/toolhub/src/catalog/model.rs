use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::i18n::{Language, SUPPORTED_LANGUAGES};

/// Text with one entry per language code.
///
/// Serialized as a plain JSON object, e.g. `{"en": "Chat", "ar": "دردشة"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the text for one language, builder style.
    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        self.insert(language, text);
        self
    }

    pub fn insert(&mut self, language: Language, text: impl Into<String>) {
        self.0.insert(language.code().to_string(), text.into());
    }

    /// The exact entry for `language`, ignoring empty strings.
    pub fn get(&self, language: Language) -> Option<&str> {
        self.0
            .get(language.code())
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// The entry for `language`, falling back to English, then to any entry,
    /// then to the empty string.
    pub fn resolve(&self, language: Language) -> &str {
        self.get(language)
            .or_else(|| self.get(Language::En))
            .or_else(|| self.0.values().map(String::as_str).find(|t| !t.is_empty()))
            .unwrap_or_default()
    }

    /// Supported languages with no (or an empty) entry.
    pub fn missing_languages(&self) -> Vec<Language> {
        SUPPORTED_LANGUAGES
            .into_iter()
            .filter(|language| self.get(*language).is_none())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(String::is_empty)
    }
}

/// Creates a [`LocalizedText`] from language/text pairs.
///
/// # Example
///
/// ```
/// use toolhub::{Language, localized};
///
/// let name = localized! { Language::En => "Chat", Language::Ar => "دردشة" };
/// assert_eq!(name.resolve(Language::Ar), "دردشة");
/// ```
#[macro_export]
macro_rules! localized {
    {} => {
        $crate::LocalizedText::new()
    };
    { $($language:expr => $text:expr),+ $(,)? } => {
        {
            let mut text = $crate::LocalizedText::new();
            $(
                text.insert($language, $text);
            )+
            text
        }
    };
}

/// A grouping bucket for tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct Category {
    /// Stable identifier used in URLs and by [`Tool::category`].
    pub id: String,

    /// Font Awesome class list, e.g. `fa-solid fa-comments`.
    #[builder(default)]
    pub icon: String,

    pub name: LocalizedText,
}

/// One AI product or service in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: LocalizedText,

    /// Logo image URL. Broken images fall back to a placeholder when rendered.
    #[builder(default)]
    pub logo: String,

    /// Id of the [`Category`] this tool belongs to.
    pub category: String,

    /// Average user rating, nominally between 0 and 5.
    pub rating: f64,

    #[builder(default)]
    pub review_count: u64,

    #[serde(default)]
    #[builder(default)]
    pub is_sponsored: bool,

    #[builder(default)]
    pub pricing: LocalizedText,

    #[serde(
        default,
        rename = "short_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub short_description: Option<LocalizedText>,

    #[builder(default)]
    pub website: String,
}
