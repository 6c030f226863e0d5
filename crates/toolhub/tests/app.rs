//! Tests for the application controller: navigation, history and language.

use toolhub::preferences::stored_language;
use toolhub::{
    App, Catalog, FileStore, LANGUAGE_KEY, Language, MemoryStore, Page, PreferenceStore,
    RouteError,
};

fn app_at(hash: &str, store: MemoryStore) -> App<MemoryStore> {
    App::builder()
        .catalog(Catalog::bundled().unwrap())
        .store(store)
        .hash(hash)
        .build()
}

fn english_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set(LANGUAGE_KEY, "en").unwrap();
    store
}

// =========================================================================
// Startup
// =========================================================================

#[test]
fn starts_on_home_in_arabic_without_preference() {
    let app = app_at("", MemoryStore::new());
    assert_eq!(app.state().page, Page::Home);
    assert_eq!(app.state().language, Language::Ar);
}

#[test]
fn startup_honors_stored_language() {
    let app = app_at("", english_store());
    assert_eq!(app.state().language, Language::En);
}

#[test]
fn explicit_language_overrides_stored_preference() {
    let app = App::builder()
        .catalog(Catalog::bundled().unwrap())
        .store(english_store())
        .language(Language::Ar)
        .build();
    assert_eq!(app.state().language, Language::Ar);
}

#[test]
fn unsupported_stored_language_is_ignored() {
    let mut store = MemoryStore::new();
    store.set(LANGUAGE_KEY, "klingon").unwrap();
    let app = app_at("", store);
    assert_eq!(app.state().language, Language::Ar);
}

#[test]
fn startup_restores_route_from_hash() {
    let app = app_at("#rankedList/audio", MemoryStore::new());
    assert_eq!(app.state().page, Page::RankedList);
    assert_eq!(app.state().category.as_deref(), Some("audio"));

    let rendered = app.render();
    assert_eq!(rendered.hash, "#rankedList/audio");
    assert_eq!(rendered.view.page, Page::RankedList);
    assert!(!rendered.scroll_to_top);
}

#[test]
fn startup_with_unknown_page_shows_home() {
    let app = app_at("#nowhere", MemoryStore::new());
    assert_eq!(app.render().view.page, Page::Home);
}

// =========================================================================
// Navigation
// =========================================================================

#[test]
fn navigate_pushes_hash_and_renders() {
    let mut app = app_at("", english_store());

    let rendered = app.navigate(Page::Categories, None);
    assert_eq!(rendered.hash, "#categories");
    assert_eq!(rendered.view.page, Page::Categories);
    assert!(rendered.scroll_to_top);

    let rendered = app.navigate(Page::RankedList, Some("coding"));
    assert_eq!(rendered.hash, "#rankedList/coding");
    assert_eq!(rendered.view.page, Page::RankedList);
    assert!(rendered.view.main.contains("Coding Assistants"));
    assert_eq!(app.history().entries().len(), 3);
}

#[test]
fn navigate_drops_category_for_pages_without_one() {
    let mut app = app_at("", english_store());

    let rendered = app.navigate(Page::Categories, Some("coding"));
    assert_eq!(rendered.hash, "#categories");
    assert_eq!(app.state().category, None);

    app.navigate(Page::Home, Some("video"));
    assert_eq!(app.state().category, None);
    app.back().unwrap();
    assert_eq!(app.state().page, Page::Categories);
    assert_eq!(app.state().category, None);
}

#[test]
fn navigate_with_empty_category_matches_bare_ranked_list_hash() {
    let mut app = app_at("", english_store());

    let rendered = app.navigate(Page::RankedList, Some(""));
    assert_eq!(rendered.hash, "#rankedList");
    assert_eq!(rendered.view.error, Some(RouteError::MissingCategory));
    assert_eq!(app.state().category, None);

    let from_hash = app_at("#rankedList", english_store()).render();
    assert_eq!(from_hash.view.error, rendered.view.error);
}

#[test]
fn back_from_ranked_list_restores_categories() {
    let mut app = app_at("", MemoryStore::new());
    app.navigate(Page::Home, None);
    app.navigate(Page::Categories, None);
    app.navigate(Page::RankedList, Some("video"));

    let rendered = app.back().unwrap();
    assert_eq!(rendered.hash, "#categories");
    assert_eq!(rendered.view.page, Page::Categories);
    assert_eq!(app.state().page, Page::Categories);
    assert_eq!(app.state().category, None);
    assert!(!rendered.scroll_to_top);
}

#[test]
fn forward_after_back_returns_to_ranked_list() {
    let mut app = app_at("", MemoryStore::new());
    app.navigate(Page::Categories, None);
    app.navigate(Page::RankedList, Some("video"));
    app.back().unwrap();

    let rendered = app.forward().unwrap();
    assert_eq!(rendered.hash, "#rankedList/video");
    assert_eq!(app.state().category.as_deref(), Some("video"));
    assert!(app.forward().is_none());
}

#[test]
fn back_at_session_start_does_nothing() {
    let mut app = app_at("#categories", MemoryStore::new());
    assert!(app.back().is_none());
    assert_eq!(app.state().page, Page::Categories);
}

#[test]
fn back_to_initial_entry_reads_its_hash() {
    let mut app = app_at("#categories", english_store());
    app.navigate(Page::RankedList, Some("audio"));

    let rendered = app.back().unwrap();
    assert_eq!(rendered.hash, "#categories");
    assert_eq!(app.state().page, Page::Categories);
    assert_eq!(app.state().language, Language::En);
}

#[test]
fn back_restores_snapshot_verbatim_including_language() {
    let mut app = app_at("", english_store());
    app.navigate(Page::Categories, None);
    app.toggle_language().unwrap();
    app.navigate(Page::RankedList, Some("design"));
    assert_eq!(app.state().language, Language::Ar);

    let rendered = app.back().unwrap();
    assert_eq!(rendered.language, Language::En);
    assert_eq!(app.state().language, Language::En);
}

#[test]
fn navigating_after_back_drops_forward_history() {
    let mut app = app_at("", MemoryStore::new());
    app.navigate(Page::Categories, None);
    app.navigate(Page::RankedList, Some("audio"));
    app.back().unwrap();
    app.navigate(Page::RankedList, Some("video"));

    assert!(app.forward().is_none());
    assert_eq!(app.history().entries().len(), 3);
}

#[test]
fn open_hash_navigates_to_parsed_route() {
    let mut app = app_at("", MemoryStore::new());
    let rendered = app.open_hash("#rankedList/writing").unwrap();
    assert_eq!(rendered.view.page, Page::RankedList);
    assert_eq!(app.state().category.as_deref(), Some("writing"));
}

#[test]
fn open_hash_rejects_unknown_page() {
    let mut app = app_at("", MemoryStore::new());
    let err = app.open_hash("#settings").unwrap_err();
    assert!(matches!(err, RouteError::UnknownPage { .. }));
    assert_eq!(app.history().entries().len(), 1);
}

// =========================================================================
// Fallbacks
// =========================================================================

#[test]
fn unknown_category_falls_back_to_categories_with_suggestion() {
    let mut app = app_at("", MemoryStore::new());
    let rendered = app.navigate(Page::RankedList, Some("codin"));

    assert_eq!(rendered.hash, "#rankedList/codin");
    assert_eq!(rendered.view.page, Page::Categories);
    assert_eq!(
        rendered.view.error,
        Some(RouteError::UnknownCategory {
            id: "codin".to_string(),
            suggestions: vec!["coding".to_string()],
        })
    );
}

#[test]
fn ranked_list_without_category_falls_back_to_categories() {
    let app = app_at("#rankedList", MemoryStore::new());
    let rendered = app.render();
    assert_eq!(rendered.view.page, Page::Categories);
    assert_eq!(rendered.view.error, Some(RouteError::MissingCategory));
}

// =========================================================================
// Language
// =========================================================================

#[test]
fn toggle_language_rerenders_without_history_entry() {
    let mut app = app_at("", MemoryStore::new());
    app.navigate(Page::Categories, None);

    let rendered = app.toggle_language().unwrap();
    assert_eq!(rendered.language, Language::En);
    assert!(rendered.document.contains("<html lang=\"en\" dir=\"ltr\""));
    assert!(rendered.view.main.contains("Choose a Category"));
    assert_eq!(app.history().entries().len(), 2);
}

#[test]
fn toggle_language_writes_preference() {
    let mut app = app_at("", MemoryStore::new());
    app.toggle_language().unwrap();
    assert_eq!(
        app.store().get(LANGUAGE_KEY).unwrap().as_deref(),
        Some("en")
    );
}

#[test]
fn toggled_language_survives_reload_in_memory() {
    let mut app = app_at("", MemoryStore::new());
    app.toggle_language().unwrap();
    let store = app.into_store();

    let reloaded = app_at("#categories", store);
    assert_eq!(reloaded.state().language, Language::En);
}

#[test]
fn toggled_language_survives_reload_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs").join("toolhub.json");

    let mut app = App::builder()
        .catalog(Catalog::bundled().unwrap())
        .store(FileStore::new(&path))
        .build();
    assert_eq!(app.state().language, Language::Ar);
    app.toggle_language().unwrap();
    drop(app);

    let reloaded = App::builder()
        .catalog(Catalog::bundled().unwrap())
        .store(FileStore::new(&path))
        .build();
    assert_eq!(reloaded.state().language, Language::En);
    assert_eq!(
        stored_language(reloaded.store()),
        Some(Language::En)
    );
}

#[test]
fn borrowed_store_sees_writes() {
    let mut store = MemoryStore::new();
    {
        let mut app = App::builder()
            .catalog(Catalog::bundled().unwrap())
            .store(&mut store)
            .build();
        app.set_language(Language::En).unwrap();
    }
    assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
}
