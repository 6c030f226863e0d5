//! The state controller tying routing, history, preferences and views
//! together.

use bon::bon;

use crate::catalog::Catalog;
use crate::i18n::{Language, Translations};
use crate::preferences::{PreferenceError, PreferenceStore, store_language, stored_language};
use crate::router::{AppState, History, HistoryEntry, Page, Route, RouteError, parse_hash};
use crate::view::{PageView, RenderContext, render_document, render_page};

/// The outcome of a state change: what the browser should now display.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Hash of the current history entry.
    pub hash: String,
    pub language: Language,
    pub view: PageView,
    /// The complete HTML document.
    pub document: String,
    /// Whether the viewport should jump to the top, as after a click.
    pub scroll_to_top: bool,
}

/// The single-page application controller.
///
/// All transitions are synchronous and re-render the whole page. The
/// controller owns the only mutable state: the [`AppState`], the session
/// [`History`] and the preference store.
///
/// # Example
///
/// ```
/// use toolhub::{App, Catalog, MemoryStore, Page};
///
/// let mut app = App::builder()
///     .catalog(Catalog::bundled().unwrap())
///     .store(MemoryStore::new())
///     .build();
///
/// let rendered = app.navigate(Page::Categories, None);
/// assert_eq!(rendered.hash, "#categories");
/// assert_eq!(rendered.view.page, Page::Categories);
/// ```
#[derive(Debug)]
pub struct App<S> {
    state: AppState,
    history: History,
    catalog: Catalog,
    translations: Translations,
    store: S,
}

#[bon]
impl<S: PreferenceStore> App<S> {
    /// Start a session at `hash`.
    ///
    /// The language is `language` when given, else the stored preference,
    /// else the default language.
    #[builder]
    pub fn new(
        catalog: Catalog,
        store: S,
        #[builder(default)] translations: Translations,
        #[builder(default, into)] hash: String,
        language: Option<Language>,
    ) -> Self {
        let language = language
            .or_else(|| stored_language(&store))
            .unwrap_or_default();
        let state = AppState::from_hash(&hash, language);
        tracing::debug!(%hash, %language, page = %state.page, "starting session");
        App {
            state,
            history: History::new(hash),
            catalog,
            translations,
            store,
        }
    }
}

impl<S: PreferenceStore> App<S> {
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Go to `page`, pushing a history entry and re-rendering.
    pub fn navigate(&mut self, page: Page, category: Option<&str>) -> Rendered {
        self.state.apply_route(Route::new(page, category.map(str::to_string)));
        let hash = self.state.route().to_hash();
        tracing::debug!(%hash, "navigate");
        self.history.push(hash, self.state.clone());
        self.render_scrolled(true)
    }

    /// Go to `route`. See [`App::navigate`].
    pub fn navigate_to(&mut self, route: Route) -> Rendered {
        self.navigate(route.page, route.category.as_deref())
    }

    /// Parse `hash` strictly and navigate to it.
    pub fn open_hash(&mut self, hash: &str) -> Result<Rendered, RouteError> {
        let route = parse_hash(hash)?;
        Ok(self.navigate_to(route))
    }

    /// Browser back button. Returns `None` at the start of the session.
    pub fn back(&mut self) -> Option<Rendered> {
        let entry = self.history.back()?.clone();
        self.restore(entry);
        Some(self.render_scrolled(false))
    }

    /// Browser forward button. Returns `None` at the newest entry.
    pub fn forward(&mut self) -> Option<Rendered> {
        let entry = self.history.forward()?.clone();
        self.restore(entry);
        Some(self.render_scrolled(false))
    }

    /// Switch between the two languages and remember the choice.
    pub fn toggle_language(&mut self) -> Result<Rendered, PreferenceError> {
        self.set_language(self.state.language.toggled())
    }

    /// Switch to `language` and remember the choice.
    ///
    /// The preference is written first; on failure the state is unchanged.
    /// No history entry is pushed.
    pub fn set_language(&mut self, language: Language) -> Result<Rendered, PreferenceError> {
        store_language(&mut self.store, language)?;
        self.state.language = language;
        tracing::debug!(%language, "language changed");
        Ok(self.render())
    }

    /// Render the current state without changing it.
    pub fn render(&self) -> Rendered {
        self.render_scrolled(false)
    }

    fn render_scrolled(&self, scroll_to_top: bool) -> Rendered {
        let ctx = RenderContext::new(&self.catalog, &self.translations, self.state.language);
        let view = render_page(&self.state, &ctx);
        let document = render_document(&view, self.state.theme, &ctx);
        Rendered {
            hash: self.history.current().hash.clone(),
            language: self.state.language,
            view,
            document,
            scroll_to_top,
        }
    }

    /// Apply a history entry: its snapshot verbatim, or for the entry the
    /// session started with, the route encoded in its hash.
    fn restore(&mut self, entry: HistoryEntry) {
        match entry.state {
            Some(state) => self.state = state,
            None => self.state.apply_route(Route::from_hash(&entry.hash)),
        }
        tracing::debug!(hash = %entry.hash, page = %self.state.page, "restored history entry");
    }
}
