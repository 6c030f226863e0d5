pub mod catalog;
pub mod error;
pub mod i18n;
pub mod preferences;
pub mod ranking;
pub mod router;
pub mod view;

pub use catalog::{Catalog, CatalogWarning, Category, LocalizedText, Tool};
pub use error::LoadError;
pub use i18n::{Language, TextDirection, Translations, format_number};
pub use preferences::{FileStore, LANGUAGE_KEY, MemoryStore, PreferenceError, PreferenceStore};
pub use ranking::{RankedTool, SPONSORED_BONUS, rank_tools, score};
pub use router::{App, AppState, Page, Rendered, Route, RouteError, Theme, compute_suggestions};
