//! Implementation of the `toolhub rank` command.

use clap::Args;
use miette::IntoDiagnostic;
use serde::Serialize;
use toolhub::view::resolve_category;
use toolhub::format_number;

use crate::output::table::format_ranking_table;
use crate::output::{self, CliError};
use crate::settings::Globals;

/// Arguments for the rank command.
#[derive(Debug, Args)]
pub struct RankArgs {
    /// Category id, e.g. `coding`
    pub category: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one ranked tool.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RankJson<'a> {
    rank: usize,
    name: &'a str,
    rating: f64,
    review_count: u64,
    reviews: String,
    is_sponsored: bool,
    score: f64,
}

/// Run the rank command.
pub fn run_rank(globals: &Globals, args: RankArgs) -> miette::Result<i32> {
    let catalog = globals.catalog()?;
    let language = globals.language();
    let category = resolve_category(&catalog, Some(&args.category)).map_err(CliError::from)?;
    let ranked = catalog.ranked(&category.id);

    if args.json {
        let json_data: Vec<RankJson<'_>> = ranked
            .iter()
            .map(|entry| RankJson {
                rank: entry.rank,
                name: entry.tool.name.resolve(language),
                rating: entry.tool.rating,
                review_count: entry.tool.review_count,
                reviews: format_number(entry.tool.review_count, language),
                is_sponsored: entry.tool.is_sponsored,
                score: entry.score,
            })
            .collect();
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        output::heading(category.name.resolve(language));
        println!("{}", format_ranking_table(&ranked, language));
    }

    Ok(exitcode::OK)
}
