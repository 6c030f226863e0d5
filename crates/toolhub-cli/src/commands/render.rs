//! Implementation of the `toolhub render` command.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use toolhub::router::parse_hash;

use crate::output::{self, CliError};
use crate::settings::Globals;

/// Arguments for the render command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Route to render, e.g. `#rankedList/coding` [default: home]
    #[arg(long, default_value = "")]
    pub hash: String,

    /// Write the document to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Run the render command.
pub fn run_render(globals: &Globals, args: RenderArgs) -> miette::Result<i32> {
    parse_hash(&args.hash).map_err(CliError::from)?;
    let app = globals.app(&args.hash)?;
    let rendered = app.render();

    if let Some(error) = &rendered.view.error {
        output::warn(format_args!("{error}; showing the category list"));
    }

    match &args.out {
        Some(path) => {
            fs::write(path, &rendered.document).map_err(|e| CliError::write(path, e))?;
            output::success(format_args!("wrote {}", path.display()));
        }
        None => print!("{}", rendered.document),
    }

    Ok(exitcode::OK)
}
