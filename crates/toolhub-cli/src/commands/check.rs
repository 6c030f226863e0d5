//! Implementation of the `toolhub check` command.

use clap::Args;
use miette::IntoDiagnostic;
use serde::Serialize;
use toolhub::catalog::validate_translations;
use toolhub::i18n::SUPPORTED_LANGUAGES;
use toolhub::Translations;

use crate::output::table::{format_coverage_table, LanguageCoverage};
use crate::output;
use crate::settings::Globals;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Exit with a non-zero code if any problem is found
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for the whole check.
#[derive(Debug, Serialize)]
struct CheckJson {
    categories: usize,
    tools: usize,
    warnings: Vec<String>,
    coverage: Vec<CoverageJson>,
}

/// JSON output for one language's UI strings.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Translation coverage of the UI strings for every supported language.
fn coverage(translations: &Translations) -> Vec<LanguageCoverage> {
    let total = translations.all_keys().len();
    SUPPORTED_LANGUAGES
        .iter()
        .map(|&language| {
            let missing: Vec<String> = translations
                .missing_keys(language)
                .into_iter()
                .map(str::to_string)
                .collect();
            LanguageCoverage {
                language: language.code().to_string(),
                translated: total - missing.len(),
                missing,
            }
        })
        .collect()
}

/// Run the check command.
pub fn run_check(globals: &Globals, args: CheckArgs) -> miette::Result<i32> {
    let catalog = globals.catalog()?;
    let translations = Translations::bundled();

    let mut warnings = catalog.validate();
    warnings.extend(validate_translations(&translations));
    let coverage_data = coverage(&translations);
    let key_count = translations.all_keys().len();

    if args.json {
        let json_data = CheckJson {
            categories: catalog.categories().len(),
            tools: catalog.tools().len(),
            warnings: warnings.iter().map(ToString::to_string).collect(),
            coverage: coverage_data
                .iter()
                .map(|c| CoverageJson {
                    language: c.language.clone(),
                    translated: c.translated,
                    total: key_count,
                    missing: c.missing.clone(),
                })
                .collect(),
        };
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        println!("{}", format_coverage_table(key_count, &coverage_data));
        for warning in &warnings {
            output::warn(warning);
        }
        if warnings.is_empty() {
            output::success(format_args!(
                "catalog OK: {} categories, {} tools",
                catalog.categories().len(),
                catalog.tools().len()
            ));
        }
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
