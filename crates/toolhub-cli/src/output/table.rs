//! Table formatting utilities for CLI output.

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use toolhub::{format_number, Language, RankedTool};

/// Translation coverage for a single language.
pub struct LanguageCoverage {
    /// Language code (e.g., "en", "ar").
    pub language: String,
    /// Number of UI strings translated.
    pub translated: usize,
    /// Keys with no string in this language.
    pub missing: Vec<String>,
}

/// Format coverage data as a table.
pub fn format_coverage_table(key_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, key_count),
            lang.missing.len().to_string(),
        ]);
    }

    table
}

/// Format one category's ranking as a table, best first.
pub fn format_ranking_table(ranked: &[RankedTool<'_>], language: Language) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Tool", "Rating", "Reviews", "Sponsored", "Score"]);

    for entry in ranked {
        let tool = entry.tool;
        table.add_row(vec![
            entry.rank.to_string(),
            tool.name.resolve(language).to_string(),
            format!("{:.1}", tool.rating),
            format_number(tool.review_count, language),
            if tool.is_sponsored { "yes" } else { "" }.to_string(),
            format!("{:.2}", entry.score),
        ]);
    }
    for index in [0, 2, 5] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolhub::Catalog;

    #[test]
    fn ranking_table_lists_tools_in_order() {
        let catalog = Catalog::bundled().unwrap();
        let ranked = catalog.ranked("design");
        let rendered = format_ranking_table(&ranked, Language::En).to_string();

        assert!(rendered.find("Gamma").unwrap() < rendered.find("Looka").unwrap());
        assert!(rendered.contains("yes"));
    }

    #[test]
    fn coverage_table_shows_ratio() {
        let rendered = format_coverage_table(
            10,
            &[LanguageCoverage {
                language: "ar".to_string(),
                translated: 9,
                missing: vec!["pricing".to_string()],
            }],
        )
        .to_string();
        assert!(rendered.contains("9/10"));
    }
}
