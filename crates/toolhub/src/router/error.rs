//! Routing errors and "did you mean" suggestions.

use thiserror::Error;

/// A route that cannot be displayed as requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The hash names a page that does not exist.
    #[error("unknown page '{name}'{}", did_you_mean(.suggestions))]
    UnknownPage {
        name: String,
        suggestions: Vec<String>,
    },

    /// The ranked list was requested for a category that does not exist.
    #[error("unknown category '{id}'{}", did_you_mean(.suggestions))]
    UnknownCategory {
        id: String,
        suggestions: Vec<String>,
    },

    /// The ranked list was requested with no category.
    #[error("ranked list requested without a category")]
    MissingCategory,

    /// The hash has extra path segments after the category.
    #[error("unexpected '{rest}' at end of '{hash}'")]
    TrailingInput { hash: String, rest: String },
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Names from `available` within a small edit distance of `name`.
///
/// At most three suggestions are returned, closest first; names at equal
/// distance keep their order in `available`.
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut candidates: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    candidates.sort_by_key(|(distance, _)| *distance);
    candidates
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
