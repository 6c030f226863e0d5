//! CLI command implementations.

mod browse;
mod check;
mod export;
mod lang;
mod rank;
mod render;

pub use browse::{run_browse, BrowseArgs};
pub use check::{run_check, CheckArgs};
pub use export::{run_export, ExportArgs};
pub use lang::{run_lang, LangArgs};
pub use rank::{run_rank, RankArgs};
pub use render::{run_render, RenderArgs};
