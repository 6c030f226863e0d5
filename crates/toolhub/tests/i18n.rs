//! Tests for languages, UI string lookup and number formatting.

use std::fs;
use std::path::Path;

use insta::assert_snapshot;
use proptest::prelude::*;
use toolhub::i18n::{SUPPORTED_LANGUAGES, keys};
use toolhub::{Language, LoadError, TextDirection, Translations, format_number};

// =========================================================================
// Language
// =========================================================================

#[test]
fn default_language_is_arabic() {
    assert_eq!(Language::default(), Language::Ar);
}

#[test]
fn arabic_is_right_to_left() {
    assert_eq!(Language::Ar.direction(), TextDirection::Rtl);
    assert_eq!(Language::En.direction(), TextDirection::Ltr);
    assert_eq!(Language::Ar.direction().as_str(), "rtl");
}

#[test]
fn toggled_swaps_the_pair() {
    assert_eq!(Language::En.toggled(), Language::Ar);
    assert_eq!(Language::Ar.toggled(), Language::En);
    assert_eq!(Language::En.toggled().toggled(), Language::En);
}

#[test]
fn parse_accepts_codes_and_tags() {
    assert_eq!(Language::parse("en"), Some(Language::En));
    assert_eq!(Language::parse("AR"), Some(Language::Ar));
    assert_eq!(Language::parse("en-US"), Some(Language::En));
    assert_eq!(Language::parse("ar_EG"), Some(Language::Ar));
    assert_eq!(Language::parse(" en "), Some(Language::En));
}

#[test]
fn parse_rejects_unsupported_languages() {
    assert_eq!(Language::parse("fr"), None);
    assert_eq!(Language::parse("not a tag"), None);
    assert_eq!(Language::parse(""), None);
}

#[test]
fn from_str_error_names_the_tag() {
    let err = "de".parse::<Language>().unwrap_err();
    assert!(err.to_string().contains("'de'"));
}

#[test]
fn display_is_the_code() {
    assert_eq!(Language::En.to_string(), "en");
    assert_eq!(Language::Ar.to_string(), "ar");
}

// =========================================================================
// Translations
// =========================================================================

#[test]
fn bundled_strings_in_both_languages() {
    let translations = Translations::bundled();
    assert_eq!(translations.t(Language::En, keys::SITE_NAME), "AI Tools Hub");
    assert_eq!(
        translations.t(Language::Ar, keys::SITE_NAME),
        "مركز أدوات الذكاء الاصطناعي"
    );
    assert_eq!(translations.t(Language::En, keys::VISIT_SITE), "Visit Site");
    assert_eq!(translations.t(Language::Ar, keys::PRICING), "التسعير");
}

#[test]
fn missing_key_falls_back_to_key() {
    let translations = Translations::bundled();
    assert_eq!(translations.t(Language::En, "unknownKey"), "unknownKey");
    assert_eq!(translations.get(Language::En, "unknownKey"), None);
}

#[test]
fn empty_translations_fall_back_for_every_key() {
    let translations = Translations::empty();
    assert_eq!(translations.t(Language::Ar, keys::PRICING), "pricing");
}

#[test]
fn bundled_strings_cover_every_language() {
    let translations = Translations::bundled();
    for language in SUPPORTED_LANGUAGES {
        assert!(
            translations.missing_keys(language).is_empty(),
            "{language} is missing {:?}",
            translations.missing_keys(language)
        );
    }
}

#[test]
fn missing_keys_reports_keys_from_other_languages() {
    let mut translations = Translations::empty();
    translations.insert(Language::En, "greeting", "Hello");
    translations.insert(Language::En, "farewell", "Bye");
    translations.insert(Language::Ar, "greeting", "مرحبا");

    assert_eq!(translations.missing_keys(Language::Ar), vec!["farewell"]);
    assert!(translations.missing_keys(Language::En).is_empty());
}

#[test]
fn load_str_overrides_and_keeps_other_strings() {
    let mut translations = Translations::bundled();
    let count = translations
        .load_str(
            Language::En,
            Path::new("en.json"),
            r#"{ "siteName": "Tool Atlas", "tagline": "Every tool, ranked" }"#,
        )
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(translations.t(Language::En, keys::SITE_NAME), "Tool Atlas");
    assert_eq!(translations.t(Language::En, "tagline"), "Every tool, ranked");
    assert_eq!(translations.t(Language::En, keys::PRICING), "Pricing");
}

#[test]
fn load_str_reports_json_location() {
    let mut translations = Translations::empty();
    let err = translations
        .load_str(Language::En, Path::new("en.json"), "{\n  \"a\": 1\n}")
        .unwrap_err();

    match err {
        LoadError::Parse { path, line, .. } => {
            assert_eq!(path, Path::new("en.json"));
            assert_eq!(line, 2);
        }
        LoadError::Io { .. } => panic!("expected parse error"),
    }
}

#[test]
fn load_dir_reads_available_languages() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ar.json"), r#"{ "visitSite": "افتح الموقع" }"#).unwrap();

    let mut translations = Translations::bundled();
    let loaded = translations.load_dir(dir.path()).unwrap();

    assert_eq!(loaded, 1);
    assert_eq!(translations.t(Language::Ar, keys::VISIT_SITE), "افتح الموقع");
    assert_eq!(translations.t(Language::En, keys::VISIT_SITE), "Visit Site");
}

#[test]
fn load_file_missing_is_io_error() {
    let mut translations = Translations::empty();
    let err = translations
        .load_file(Language::En, "/nonexistent/en.json")
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/en.json"));
}

// =========================================================================
// Number formatting
// =========================================================================

#[test]
fn small_counts_are_printed_verbatim() {
    assert_eq!(format_number(0, Language::En), "(0)");
    assert_eq!(format_number(999, Language::En), "(999)");
    assert_eq!(format_number(999, Language::Ar), "(999)");
}

#[test]
fn thousands_are_abbreviated_in_english() {
    assert_snapshot!(format_number(1500, Language::En), @"(1.5k)");
    assert_eq!(format_number(1000, Language::En), "(1k)");
    assert_eq!(format_number(2000, Language::En), "(2k)");
    assert_eq!(format_number(25_400, Language::En), "(25.4k)");
}

#[test]
fn thousands_word_leads_in_arabic() {
    assert_snapshot!(format_number(1500, Language::Ar), @"(ألف 1.5)");
    assert_eq!(format_number(12_000, Language::Ar), "(ألف 12)");
}

#[test]
fn thousands_round_to_one_decimal() {
    assert_eq!(format_number(1049, Language::En), "(1k)");
    assert_eq!(format_number(1050, Language::En), "(1.1k)");
    assert_eq!(format_number(9_960, Language::En), "(10k)");
    assert_eq!(format_number(25_400, Language::En), "(25.4k)");
}

#[test]
fn thousands_round_the_stored_float_value() {
    // 1.15, 1.45, 1.95, 2.05 and 3.05 are all stored slightly below the tie.
    assert_eq!(format_number(1150, Language::En), "(1.1k)");
    assert_eq!(format_number(1450, Language::En), "(1.4k)");
    assert_eq!(format_number(1950, Language::En), "(1.9k)");
    assert_eq!(format_number(2050, Language::En), "(2k)");
    assert_eq!(format_number(3050, Language::Ar), "(ألف 3)");
}

#[test]
fn exact_ties_round_up() {
    assert_eq!(format_number(1250, Language::En), "(1.3k)");
    assert_eq!(format_number(1750, Language::En), "(1.8k)");
    assert_eq!(format_number(2250, Language::En), "(2.3k)");
}

proptest! {
    #[test]
    fn below_one_thousand_is_never_abbreviated(count in 0u64..1000) {
        prop_assert_eq!(format_number(count, Language::En), format!("({count})"));
        prop_assert_eq!(format_number(count, Language::Ar), format!("({count})"));
    }

    #[test]
    fn abbreviated_counts_never_show_trailing_zero(count in 1000u64..10_000_000) {
        let text = format_number(count, Language::En);
        prop_assert!(text.ends_with("k)"));
        prop_assert!(!text.contains(".0k"));
    }
}
