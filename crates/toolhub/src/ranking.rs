//! Composite scoring and ordering of tools.
//!
//! A tool's score combines its rating with the order of magnitude of its
//! review count, plus a flat bonus for sponsored listings:
//!
//! ```text
//! score = rating * log10(review_count + 1) + (5 if sponsored else 0)
//! ```

use std::cmp::Ordering;

use crate::catalog::Tool;

/// Score added to sponsored tools.
pub const SPONSORED_BONUS: f64 = 5.0;

/// A tool with its position in a ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedTool<'a> {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub score: f64,
    pub tool: &'a Tool,
}

/// Compute the ranking score of a single tool.
pub fn score(tool: &Tool) -> f64 {
    let popularity = (tool.review_count as f64 + 1.0).log10();
    let bonus = if tool.is_sponsored {
        SPONSORED_BONUS
    } else {
        0.0
    };
    tool.rating * popularity + bonus
}

/// Rank tools by descending score.
///
/// The sort is stable: tools with equal scores keep their input order. An
/// empty input produces an empty ranking.
pub fn rank_tools<'a>(tools: impl IntoIterator<Item = &'a Tool>) -> Vec<RankedTool<'a>> {
    let mut scored: Vec<(f64, &'a Tool)> = tools.into_iter().map(|t| (score(t), t)).collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored
        .into_iter()
        .enumerate()
        .map(|(index, (score, tool))| RankedTool {
            rank: index + 1,
            score,
            tool,
        })
        .collect()
}
