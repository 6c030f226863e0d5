//! Implementation of the `toolhub export` command.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use toolhub::i18n::SUPPORTED_LANGUAGES;
use toolhub::{App, Catalog, MemoryStore, Page, Route};

use crate::output::{self, CliError};
use crate::settings::Globals;

/// Arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output directory; one subdirectory is written per language
    #[arg(long)]
    pub out: PathBuf,
}

/// Every route the site can show: home, the category list and one ranked
/// list per category.
fn routes(catalog: &Catalog) -> Vec<Route> {
    let mut routes = vec![Route::home(), Route::categories()];
    routes.extend(catalog.category_ids().into_iter().map(Route::ranked_list));
    routes
}

fn file_name(route: &Route) -> String {
    match route.page {
        Page::Home => "index.html".to_string(),
        Page::Categories => "categories.html".to_string(),
        Page::RankedList => match &route.category {
            Some(id) => format!("rankedList-{id}.html"),
            None => "rankedList.html".to_string(),
        },
    }
}

/// Render every route in every language under `out/<language>/`.
fn export_site(catalog: &Catalog, out: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut written = Vec::new();
    for language in SUPPORTED_LANGUAGES {
        let dir = out.join(language.code());
        fs::create_dir_all(&dir).map_err(|e| CliError::write(&dir, e))?;

        let mut app = App::builder()
            .catalog(catalog.clone())
            .store(MemoryStore::new())
            .language(language)
            .build();
        for route in routes(catalog) {
            let path = dir.join(file_name(&route));
            let rendered = app.navigate_to(route);
            fs::write(&path, rendered.document).map_err(|e| CliError::write(&path, e))?;
            written.push(path);
        }
        tracing::debug!(%language, dir = %dir.display(), "exported language");
    }
    Ok(written)
}

/// Run the export command.
pub fn run_export(globals: &Globals, args: ExportArgs) -> miette::Result<i32> {
    let catalog = globals.catalog()?;
    let written = export_site(&catalog, &args.out)?;
    output::success(format_args!(
        "wrote {} pages to {}",
        written.len(),
        args.out.display()
    ));
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_per_route() {
        assert_eq!(file_name(&Route::home()), "index.html");
        assert_eq!(file_name(&Route::categories()), "categories.html");
        assert_eq!(
            file_name(&Route::ranked_list("audio")),
            "rankedList-audio.html"
        );
    }

    #[test]
    fn exports_every_route_in_every_language() {
        let catalog = Catalog::bundled().unwrap();
        let dir = tempfile::tempdir().unwrap();

        let written = export_site(&catalog, dir.path()).unwrap();
        assert_eq!(written.len(), 2 * (2 + catalog.categories().len()));

        let arabic = fs::read_to_string(dir.path().join("ar").join("rankedList-coding.html")).unwrap();
        assert!(arabic.contains("dir=\"rtl\""));
        let english = fs::read_to_string(dir.path().join("en").join("index.html")).unwrap();
        assert!(english.contains("AI Tools Hub"));
    }
}
