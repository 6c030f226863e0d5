//! UI string tables for every supported language.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::i18n::{Language, SUPPORTED_LANGUAGES};

/// Keys of the bundled UI strings.
pub mod keys {
    pub const SITE_NAME: &str = "siteName";
    pub const DISCOVER: &str = "discover";
    pub const HERO_SUBTITLE: &str = "heroSubtitle";
    pub const SEARCH_AI_TOOLS: &str = "searchAITools";
    pub const CHOOSE_CATEGORY: &str = "chooseCategory";
    pub const BACK_TO_CATEGORIES: &str = "backToCategories";
    pub const VISIT_SITE: &str = "visitSite";
    pub const PRICING: &str = "pricing";
    pub const SWITCH_LANGUAGE: &str = "switchLanguage";
    pub const RIGHTS_RESERVED: &str = "rightsReserved";
}

const EN: &[(&str, &str)] = &[
    (keys::SITE_NAME, "AI Tools Hub"),
    (keys::DISCOVER, "Discover, Rank & Master AI Tools"),
    (
        keys::HERO_SUBTITLE,
        "Your ultimate ranked guide to the best AI tools.",
    ),
    (keys::SEARCH_AI_TOOLS, "Explore AI Tools"),
    (keys::CHOOSE_CATEGORY, "Choose a Category"),
    (keys::BACK_TO_CATEGORIES, "Choose Category"),
    (keys::VISIT_SITE, "Visit Site"),
    (keys::PRICING, "Pricing"),
    (keys::SWITCH_LANGUAGE, "العربية"),
    (keys::RIGHTS_RESERVED, "All rights reserved."),
];

const AR: &[(&str, &str)] = &[
    (keys::SITE_NAME, "مركز أدوات الذكاء الاصطناعي"),
    (keys::DISCOVER, "اكتشف، صنّف، وأتقن أدوات الذكاء الاصطناعي"),
    (
        keys::HERO_SUBTITLE,
        "دليلك النهائي المصنف لأفضل أدوات الذكاء الاصطناعي.",
    ),
    (keys::SEARCH_AI_TOOLS, "تصفح الأدوات"),
    (keys::CHOOSE_CATEGORY, "اختر الفئة"),
    (keys::BACK_TO_CATEGORIES, "اختر الفئة"),
    (keys::VISIT_SITE, "زيارة الموقع"),
    (keys::PRICING, "التسعير"),
    (keys::SWITCH_LANGUAGE, "English"),
    (keys::RIGHTS_RESERVED, "جميع الحقوق محفوظة."),
];

/// Per-language tables of UI strings.
///
/// Lookups never fail: a key with no entry for the requested language is
/// displayed as the raw key.
///
/// # Example
///
/// ```
/// use toolhub::{Language, Translations};
///
/// let translations = Translations::bundled();
/// assert_eq!(translations.t(Language::En, "pricing"), "Pricing");
/// assert_eq!(translations.t(Language::En, "noSuchKey"), "noSuchKey");
/// ```
#[derive(Debug, Clone)]
pub struct Translations {
    tables: BTreeMap<Language, BTreeMap<String, String>>,
}

impl Default for Translations {
    fn default() -> Self {
        Translations::bundled()
    }
}

impl Translations {
    /// Create translations with no strings at all.
    pub fn empty() -> Self {
        Translations {
            tables: BTreeMap::new(),
        }
    }

    /// The strings compiled into the crate.
    pub fn bundled() -> Self {
        let mut translations = Translations::empty();
        for (language, table) in [(Language::En, EN), (Language::Ar, AR)] {
            for (key, text) in table {
                translations.insert(language, *key, *text);
            }
        }
        translations
    }

    /// Translate `key`, falling back to the key itself when it is missing.
    pub fn t<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.get(language, key).unwrap_or(key)
    }

    /// Get the text for `key`, if the language defines it.
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Add or replace a single string.
    pub fn insert(&mut self, language: Language, key: impl Into<String>, text: impl Into<String>) {
        self.tables
            .entry(language)
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Merge strings from a JSON object of `key: text` pairs.
    ///
    /// Entries override existing strings with the same key; other strings are
    /// kept. Returns the number of strings read.
    pub fn load_str(
        &mut self,
        language: Language,
        source: &Path,
        content: &str,
    ) -> Result<usize, LoadError> {
        let table: BTreeMap<String, String> =
            serde_json::from_str(content).map_err(|e| LoadError::json(source, &e))?;
        let count = table.len();
        self.tables.entry(language).or_default().extend(table);
        tracing::debug!(%language, count, source = %source.display(), "loaded translations");
        Ok(count)
    }

    /// Merge strings from a JSON file. See [`Translations::load_str`].
    pub fn load_file(
        &mut self,
        language: Language,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        self.load_str(language, path, &content)
    }

    /// Load `<dir>/<code>.json` for every supported language that has one.
    ///
    /// Missing files are skipped. Returns the number of files read.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, LoadError> {
        let dir = dir.as_ref();
        let mut loaded = 0;
        for language in SUPPORTED_LANGUAGES {
            let path = dir.join(format!("{}.json", language.code()));
            if path.is_file() {
                self.load_file(language, &path)?;
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    /// Keys defined for a language, in sorted order.
    pub fn keys(&self, language: Language) -> impl Iterator<Item = &str> {
        self.tables
            .get(&language)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }

    /// Every key defined in any language, in sorted order.
    pub fn all_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .values()
            .flat_map(|table| table.keys().map(String::as_str))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys present in some language but missing from `language`.
    pub fn missing_keys(&self, language: Language) -> Vec<&str> {
        self.all_keys()
            .into_iter()
            .filter(|key| self.get(language, key).is_none())
            .collect()
    }
}
