//! Language selection, UI strings and locale-aware number formatting.

mod language;
mod number;
mod translations;

pub use language::{Language, SUPPORTED_LANGUAGES, TextDirection, UnsupportedLanguage};
pub use number::format_number;
pub use translations::{Translations, keys};
