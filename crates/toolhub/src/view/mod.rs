//! HTML renderers for every page.
//!
//! Renderers are pure: they take the current state, the catalog and the UI
//! strings and return markup. Nothing here touches history or preferences.

mod categories;
mod document;
mod home;
mod markup;
mod ranked_list;
mod tool_card;

pub use categories::render_categories;
pub use document::render_document;
pub use home::render_home;
pub use markup::{FALLBACK_DESCRIPTION, PLACEHOLDER_LOGO, html_escape};
pub use ranked_list::{render_ranked_list, resolve_category};
pub use tool_card::render_tool_card;

use crate::catalog::Catalog;
use crate::i18n::{Language, Translations};
use crate::router::{AppState, Page, RouteError};

/// Borrowed inputs shared by all renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub catalog: &'a Catalog,
    pub translations: &'a Translations,
    pub language: Language,
}

impl<'a> RenderContext<'a> {
    pub fn new(catalog: &'a Catalog, translations: &'a Translations, language: Language) -> Self {
        RenderContext {
            catalog,
            translations,
            language,
        }
    }

    /// Translate a UI string key into the context language.
    pub fn t(&self, key: &'a str) -> &'a str {
        self.translations.t(self.language, key)
    }
}

/// Which parts of the page frame are visible around the main content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub header: bool,
    pub footer: bool,
}

impl Chrome {
    /// The home page is full-screen; the ranked list keeps only the footer.
    pub fn for_page(page: Page) -> Self {
        match page {
            Page::Home => Chrome {
                header: false,
                footer: false,
            },
            Page::Categories => Chrome {
                header: true,
                footer: true,
            },
            Page::RankedList => Chrome {
                header: false,
                footer: true,
            },
        }
    }
}

/// The rendered main content of one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// The page actually shown, which differs from the requested one when
    /// the ranked list falls back to the category list.
    pub page: Page,
    pub chrome: Chrome,
    pub main: String,
    /// Why the requested page could not be shown, if it could not.
    pub error: Option<RouteError>,
}

impl PageView {
    fn new(page: Page, main: String) -> Self {
        PageView {
            page,
            chrome: Chrome::for_page(page),
            main,
            error: None,
        }
    }
}

/// Render the main content for `state`.
pub fn render_page(state: &AppState, ctx: &RenderContext<'_>) -> PageView {
    match state.page {
        Page::Home => PageView::new(Page::Home, render_home(ctx)),
        Page::Categories => PageView::new(Page::Categories, render_categories(ctx)),
        Page::RankedList => match resolve_category(ctx.catalog, state.category.as_deref()) {
            Ok(category) => PageView::new(Page::RankedList, render_ranked_list(category, ctx)),
            Err(error) => {
                tracing::warn!(%error, "falling back to the category list");
                PageView {
                    error: Some(error),
                    ..PageView::new(Page::Categories, render_categories(ctx))
                }
            }
        },
    }
}
