//! URL hash parsing using winnow.
//!
//! Hashes have the form `#<page>` or `#rankedList/<categoryId>`. The leading
//! `#` is optional and an empty hash means the home page.

use serde::Serialize;
use winnow::combinator::{opt, preceded};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::router::{Page, RouteError, compute_suggestions};

/// A page plus the category it shows, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Route {
    pub page: Page,
    pub category: Option<String>,
}

impl Route {
    /// Build a route. The category is only kept for the ranked list.
    pub fn new(page: Page, category: Option<String>) -> Self {
        let category = match page {
            Page::RankedList => category.filter(|id| !id.is_empty()),
            Page::Home | Page::Categories => None,
        };
        Route { page, category }
    }

    pub fn home() -> Self {
        Route::new(Page::Home, None)
    }

    pub fn categories() -> Self {
        Route::new(Page::Categories, None)
    }

    pub fn ranked_list(category: impl Into<String>) -> Self {
        Route::new(Page::RankedList, Some(category.into()))
    }

    /// Serialize to a URL hash, including the leading `#`.
    pub fn to_hash(&self) -> String {
        match &self.category {
            Some(category) => format!("#{}/{}", self.page, category),
            None => format!("#{}", self.page),
        }
    }

    /// Parse a hash as a browser would on load.
    ///
    /// Never fails: unknown pages become the home page and extra path
    /// segments are ignored.
    pub fn from_hash(hash: &str) -> Route {
        let mut input = hash;
        let (name, category) = hash_parts(&mut input).unwrap_or_default();
        let page = Page::from_name(name).unwrap_or_else(|| {
            if !name.is_empty() {
                tracing::warn!(page = name, "unknown page in hash, showing home");
            }
            Page::Home
        });
        Route::new(page, category.map(str::to_string))
    }
}

/// Parse a hash strictly, rejecting unknown pages and trailing segments.
pub fn parse_hash(hash: &str) -> Result<Route, RouteError> {
    let mut input = hash;
    let (name, category) = hash_parts(&mut input).unwrap_or_default();
    if !input.is_empty() {
        return Err(RouteError::TrailingInput {
            hash: hash.to_string(),
            rest: input.to_string(),
        });
    }
    let page = if name.is_empty() {
        Page::Home
    } else {
        Page::from_name(name).ok_or_else(|| {
            let available: Vec<String> = Page::ALL
                .into_iter()
                .map(|page| page.as_str().to_string())
                .collect();
            RouteError::UnknownPage {
                name: name.to_string(),
                suggestions: compute_suggestions(name, &available),
            }
        })?
    };
    Ok(Route::new(page, category.map(str::to_string)))
}

/// Split `#page/category` into its page name and optional category.
fn hash_parts<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Option<&'i str>)> {
    (opt('#'), segment, opt(preceded('/', segment)))
        .map(|(_, page, category)| (page, category))
        .parse_next(input)
}

fn segment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |c: char| c != '/').parse_next(input)
}
