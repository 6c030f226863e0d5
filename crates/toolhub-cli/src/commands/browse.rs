//! Implementation of the `toolhub browse` command.
//!
//! Replays a sequence of clicks and browser buttons against a fresh session
//! and reports where it ends up. The preferences file is read but never
//! written.

use std::str::FromStr;

use clap::Args;
use miette::IntoDiagnostic;
use serde::Serialize;
use toolhub::router::parse_hash;
use toolhub::{App, Language, Page, PreferenceStore, Rendered, Route, RouteError};

use crate::output::{self, CliError};
use crate::settings::Globals;

/// Arguments for the browse command.
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Steps: `home`, `categories`, `rankedList/<id>`, `back`, `forward`, `toggle`
    #[arg(required = true)]
    pub steps: Vec<Step>,

    /// Hash the session starts at [default: home]
    #[arg(long, default_value = "")]
    pub start: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the final HTML document
    #[arg(long, conflicts_with = "json")]
    pub html: bool,
}

/// One user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Open(Route),
    Back,
    Forward,
    Toggle,
}

impl FromStr for Step {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "back" => Ok(Step::Back),
            "forward" => Ok(Step::Forward),
            "toggle" => Ok(Step::Toggle),
            hash => parse_hash(hash).map(Step::Open),
        }
    }
}

/// JSON output for the end of a session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BrowseJson<'a> {
    hash: &'a str,
    page: Page,
    language: Language,
    direction: &'static str,
    history_position: usize,
    history_length: usize,
    error: Option<String>,
}

/// Apply `steps` in order, returning the last rendering.
fn replay<S: PreferenceStore>(app: &mut App<S>, steps: &[Step]) -> Result<Rendered, CliError> {
    let mut rendered = app.render();
    for step in steps {
        tracing::debug!(?step, "replaying");
        let next = match step {
            Step::Open(route) => Some(app.navigate_to(route.clone())),
            Step::Back => app.back(),
            Step::Forward => app.forward(),
            Step::Toggle => Some(app.toggle_language()?),
        };
        match next {
            Some(next) => rendered = next,
            None => output::warn("no history entry in that direction"),
        }
    }
    Ok(rendered)
}

/// Run the browse command.
pub fn run_browse(globals: &Globals, args: BrowseArgs) -> miette::Result<i32> {
    let mut app = globals.session(&args.start)?;
    let rendered = replay(&mut app, &args.steps)?;

    if args.html {
        print!("{}", rendered.document);
    } else if args.json {
        let json_data = BrowseJson {
            hash: &rendered.hash,
            page: rendered.view.page,
            language: rendered.language,
            direction: rendered.language.direction().as_str(),
            history_position: app.history().position() + 1,
            history_length: app.history().entries().len(),
            error: rendered.view.error.as_ref().map(ToString::to_string),
        };
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        output::heading(format_args!("{} ({})", rendered.view.page, rendered.hash));
        println!(
            "language: {} ({})",
            rendered.language,
            rendered.language.direction().as_str()
        );
        println!(
            "history:  {}/{}",
            app.history().position() + 1,
            app.history().entries().len()
        );
        if let Some(error) = &rendered.view.error {
            output::warn(error);
        }
    }

    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolhub::{Catalog, MemoryStore};

    fn app() -> App<MemoryStore> {
        App::builder()
            .catalog(Catalog::bundled().unwrap())
            .store(MemoryStore::new())
            .build()
    }

    fn steps(names: &[&str]) -> Vec<Step> {
        names.iter().map(|name| name.parse().unwrap()).collect()
    }

    #[test]
    fn parses_steps() {
        assert_eq!("back".parse::<Step>().unwrap(), Step::Back);
        assert_eq!(
            "rankedList/coding".parse::<Step>().unwrap(),
            Step::Open(Route::ranked_list("coding"))
        );
        assert!("#nowhere".parse::<Step>().is_err());
    }

    #[test]
    fn back_from_ranked_list_lands_on_categories() {
        let mut app = app();
        let rendered = replay(
            &mut app,
            &steps(&["home", "categories", "rankedList/coding", "back"]),
        )
        .unwrap();
        assert_eq!(rendered.hash, "#categories");
        assert_eq!(rendered.view.page, Page::Categories);
    }

    #[test]
    fn toggle_switches_language_in_place() {
        let mut app = app();
        let rendered = replay(&mut app, &steps(&["categories", "toggle"])).unwrap();
        assert_eq!(rendered.language, Language::En);
        assert_eq!(rendered.hash, "#categories");
    }

    #[test]
    fn back_at_start_keeps_current_page() {
        let mut app = app();
        let rendered = replay(&mut app, &steps(&["back"])).unwrap();
        assert_eq!(rendered.view.page, Page::Home);
    }
}
