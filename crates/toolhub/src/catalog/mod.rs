//! The static catalog of categories and tools.
//!
//! The catalog is two ordered tables loaded from JSON: `categories.json` and
//! `tools.json`. A copy of both is bundled into the crate; the same loader
//! reads replacement tables from disk.

mod model;
mod validate;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

pub use model::{Category, LocalizedText, Tool};
pub use validate::{CatalogWarning, validate_catalog, validate_translations};

use crate::error::LoadError;
use crate::ranking::{RankedTool, rank_tools};

const BUNDLED_CATEGORIES: &str = include_str!("../../data/categories.json");
const BUNDLED_TOOLS: &str = include_str!("../../data/tools.json");

/// File name of the category table inside a data directory.
pub const CATEGORIES_FILE: &str = "categories.json";
/// File name of the tool table inside a data directory.
pub const TOOLS_FILE: &str = "tools.json";

/// Categories and tools, in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    tools: Vec<Tool>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, tools: Vec<Tool>) -> Self {
        Catalog { categories, tools }
    }

    /// The catalog compiled into the crate.
    pub fn bundled() -> Result<Self, LoadError> {
        Catalog::from_json_str(BUNDLED_CATEGORIES, BUNDLED_TOOLS)
    }

    /// Parse the two tables from JSON strings.
    pub fn from_json_str(categories: &str, tools: &str) -> Result<Self, LoadError> {
        let categories = serde_json::from_str(categories)
            .map_err(|e| LoadError::json(Path::new(CATEGORIES_FILE), &e))?;
        let tools =
            serde_json::from_str(tools).map_err(|e| LoadError::json(Path::new(TOOLS_FILE), &e))?;
        Ok(Catalog::new(categories, tools))
    }

    /// Load `categories.json` and `tools.json` from a directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let categories = read_table(&dir.join(CATEGORIES_FILE))?;
        let tools = read_table(&dir.join(TOOLS_FILE))?;
        let catalog = Catalog::new(categories, tools);
        tracing::debug!(
            dir = %dir.display(),
            categories = catalog.categories.len(),
            tools = catalog.tools.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Ids of all categories, in dataset order.
    pub fn category_ids(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|category| category.id.clone())
            .collect()
    }

    /// Tools belonging to a category, in dataset order.
    pub fn tools_in<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Tool> {
        self.tools
            .iter()
            .filter(move |tool| tool.category == category_id)
    }

    /// Tools of a category sorted by score, best first.
    pub fn ranked(&self, category_id: &str) -> Vec<RankedTool<'_>> {
        rank_tools(self.tools.iter().filter(|tool| tool.category == category_id))
    }

    /// Check every data invariant. See [`validate_catalog`].
    pub fn validate(&self) -> Vec<CatalogWarning> {
        validate_catalog(self)
    }
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| LoadError::json(path, &e))
}
