//! Toolhub CLI entry point.
//!
//! Renders and inspects the AI tools catalog from the command line:
//! - `toolhub render` - Print the HTML document for a route
//! - `toolhub rank` - Show a category's ranking
//! - `toolhub check` - Validate the catalog and UI strings
//! - `toolhub lang` - Show or change the stored language
//! - `toolhub browse` - Replay a navigation session
//! - `toolhub export` - Write every page as static HTML

mod commands;
mod output;
mod settings;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_browse, run_check, run_export, run_lang, run_rank, run_render, BrowseArgs, CheckArgs,
    ExportArgs, LangArgs, RankArgs, RenderArgs,
};
use settings::Globals;
use tracing_subscriber::EnvFilter;

/// AI tools catalog renderer.
#[derive(Debug, Parser)]
#[command(name = "toolhub")]
#[command(about = "Render and inspect the AI tools catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub globals: Globals,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the HTML document for a route
    Render(RenderArgs),
    /// Show the ranking of one category
    Rank(RankArgs),
    /// Validate the catalog and translation coverage
    Check(CheckArgs),
    /// Show or change the stored display language
    Lang(LangArgs),
    /// Replay navigation steps and report where they end up
    Browse(BrowseArgs),
    /// Write every page in every language as static HTML
    Export(ExportArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins unless `--verbose` is given.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let globals = cli.globals;
    let result = match cli.command {
        Commands::Render(args) => run_render(&globals, args),
        Commands::Rank(args) => run_rank(&globals, args),
        Commands::Check(args) => run_check(&globals, args),
        Commands::Lang(args) => run_lang(&globals, args),
        Commands::Browse(args) => run_browse(&globals, args),
        Commands::Export(args) => run_export(&globals, args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(output::exit_code(&e));
        }
    }
}
