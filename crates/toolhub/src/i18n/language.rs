use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_locale_core::LanguageIdentifier;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A language the catalog can be displayed in.
///
/// Arabic is the default: a visitor with no stored preference sees the Arabic
/// site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Ar,
}

/// Every supported language, in display order.
pub const SUPPORTED_LANGUAGES: [Language; 2] = [Language::En, Language::Ar];

/// Writing direction of a language, as used by the HTML `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// A language tag that does not name a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language '{tag}', expected one of: en, ar")]
pub struct UnsupportedLanguage {
    pub tag: String,
}

impl Language {
    /// ISO 639-1 code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::En => TextDirection::Ltr,
            Language::Ar => TextDirection::Rtl,
        }
    }

    /// The other language of the pair, used by the language switcher.
    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Look up a language by its exact two-letter code.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    /// Parse a language tag such as `en`, `AR`, `en-US` or `ar_EG`.
    ///
    /// Only the language subtag is considered; region and script subtags are
    /// accepted and ignored.
    pub fn parse(tag: &str) -> Option<Language> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let identifier: LanguageIdentifier = normalized.parse().ok()?;
        Language::from_code(identifier.language.as_str())
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s).ok_or_else(|| UnsupportedLanguage { tag: s.to_string() })
    }
}
