use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::router::{Page, Route, Theme};

/// Everything that determines what is on screen.
///
/// The state is ephemeral: it is rebuilt from the URL hash on load and
/// restored from history snapshots on back/forward navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct AppState {
    #[builder(default)]
    pub language: Language,

    #[builder(default)]
    pub theme: Theme,

    #[builder(default)]
    pub page: Page,

    /// Category shown by the ranked list.
    pub category: Option<String>,
}

impl AppState {
    /// Rebuild state from a URL hash, keeping the given language.
    pub fn from_hash(hash: &str, language: Language) -> Self {
        let mut state = AppState::builder().language(language).build();
        state.apply_route(Route::from_hash(hash));
        state
    }

    /// The route this state is addressed by.
    pub fn route(&self) -> Route {
        Route::new(self.page, self.category.clone())
    }

    /// Move to `route`, leaving language and theme untouched.
    pub fn apply_route(&mut self, route: Route) {
        self.page = route.page;
        self.category = route.category;
    }
}
