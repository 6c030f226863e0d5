//! Options shared by every command.

use std::path::PathBuf;

use clap::Args;
use toolhub::preferences::stored_language;
use toolhub::{App, Catalog, FileStore, Language, MemoryStore, PreferenceStore, Translations};

use crate::output::CliError;

#[derive(Debug, Args)]
pub struct Globals {
    /// Display language (en or ar); overrides the stored preference
    #[arg(long, global = true, env = "TOOLHUB_LANG")]
    pub lang: Option<Language>,

    /// File holding the persisted preferences
    #[arg(
        long,
        global = true,
        env = "TOOLHUB_PREFS",
        default_value = ".toolhub/preferences.json"
    )]
    pub prefs: PathBuf,

    /// Directory with categories.json and tools.json [default: bundled catalog]
    #[arg(long, global = true, env = "TOOLHUB_DATA")]
    pub data: Option<PathBuf>,
}

impl Globals {
    /// Load the catalog from `--data`, or the bundled one.
    pub fn catalog(&self) -> Result<Catalog, CliError> {
        let catalog = match &self.data {
            Some(dir) => Catalog::load_dir(dir)?,
            None => Catalog::bundled().map_err(CliError::from_bundled)?,
        };
        tracing::debug!(
            categories = catalog.categories().len(),
            tools = catalog.tools().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(&self.prefs)
    }

    /// The language to display: `--lang`, else the stored one, else the
    /// default.
    pub fn language(&self) -> Language {
        self.lang
            .or_else(|| stored_language(&self.store()))
            .unwrap_or_default()
    }

    /// Start an app session at `hash` backed by the preferences file.
    pub fn app(&self, hash: &str) -> Result<App<FileStore>, CliError> {
        self.build_app(self.store(), hash, self.lang)
    }

    /// Start an app session at `hash` that reads the preferences file but
    /// never writes it.
    pub fn session(&self, hash: &str) -> Result<App<MemoryStore>, CliError> {
        self.build_app(MemoryStore::new(), hash, Some(self.language()))
    }

    fn build_app<S: PreferenceStore>(
        &self,
        store: S,
        hash: &str,
        language: Option<Language>,
    ) -> Result<App<S>, CliError> {
        Ok(App::builder()
            .catalog(self.catalog()?)
            .store(store)
            .translations(Translations::bundled())
            .hash(hash)
            .maybe_language(language)
            .build())
    }
}
