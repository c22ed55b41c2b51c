//! Keyword scoring and snippet composition.
//!
//! A page's score is the total number of non-overlapping, case-insensitive
//! occurrences of every query term in its text. Excerpts are the page's
//! sentences that contain any term.
//!
//! ```text
//! score(page) = Σ_term count(lower(page.text), term)
//! ```

use crate::index::SiteIndex;
use crate::types::{Hit, PageRecord, SearchOutcome};

/// Limits applied when composing a snippet from ranked hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetLimits {
    /// Number of top-ranked hits that may contribute.
    pub pages: usize,
    /// Number of leading excerpts taken from each contributing hit.
    pub excerpts_per_page: usize,
}

impl Default for SnippetLimits {
    fn default() -> Self {
        Self {
            pages: 4,
            excerpts_per_page: 2,
        }
    }
}

/// Lower-case `query` and split it into non-empty terms.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Count non-overlapping occurrences of each term in `lower_text`, summed.
///
/// Both sides must already be lower-cased.
pub fn term_score(lower_text: &str, terms: &[String]) -> usize {
    terms
        .iter()
        .map(|term| lower_text.matches(term.as_str()).count())
        .sum()
}

fn score_page<'a>(page: &'a PageRecord, terms: &[String]) -> Hit<'a> {
    let score = term_score(&page.text.to_lowercase(), terms);
    let excerpts = page
        .sentences
        .iter()
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            terms.iter().any(|t| lower.contains(t.as_str()))
        })
        .map(|sentence| sentence.trim())
        .collect();
    Hit {
        page,
        score,
        excerpts,
    }
}

/// Score every page in `index` against `query`.
///
/// Hits with score 0 are dropped; the rest are sorted by descending score,
/// ties keeping index order. A blank query yields an empty outcome.
pub fn search<'a>(query: &str, index: &'a SiteIndex, limits: SnippetLimits) -> SearchOutcome<'a> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return SearchOutcome::default();
    }

    let mut hits: Vec<Hit<'a>> = index
        .pages()
        .iter()
        .map(|page| score_page(page, &terms))
        .filter(|hit| hit.score > 0)
        .collect();

    // Stable, so equal scores keep index order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));

    let snippet = compose_snippet(&hits, limits);
    SearchOutcome { hits, snippet }
}

/// Join the leading excerpts of the top hits, each block tagged with its
/// source page, blocks separated by a blank line.
///
/// Hits without excerpts contribute nothing but still count toward the
/// page limit.
pub fn compose_snippet(hits: &[Hit<'_>], limits: SnippetLimits) -> String {
    hits.iter()
        .take(limits.pages)
        .filter(|hit| !hit.excerpts.is_empty())
        .map(|hit| {
            let excerpts: Vec<&str> = hit
                .excerpts
                .iter()
                .take(limits.excerpts_per_page)
                .copied()
                .collect();
            format!("{} [source: {}]", excerpts.join(" "), hit.page.id)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
