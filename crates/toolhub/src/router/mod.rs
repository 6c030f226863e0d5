//! Hash routing and the application state controller.
//!
//! The controller keeps a small [`AppState`], mirrors it into the URL hash
//! through a [`History`] stack, and re-renders the page on every change.

mod app;
mod error;
mod history;
mod page;
mod route;
mod state;

pub use app::{App, Rendered};
pub use error::{RouteError, compute_suggestions};
pub use history::{History, HistoryEntry};
pub use page::{Page, Theme};
pub use route::{Route, parse_hash};
pub use state::AppState;
