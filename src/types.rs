//! Core types: indexed pages, search hits, and answers.

use serde::{Deserialize, Serialize};

/// Maximum number of sources the assistant surfaces for display.
pub const MAX_DISPLAY_SOURCES: usize = 5;

/// Indexed representation of one fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page identifier as configured (e.g. `index.html`).
    pub id: String,
    /// Page title, or the identifier when the page has none.
    pub title: String,
    /// Visible text with whitespace runs collapsed to single spaces.
    pub text: String,
    /// `text` split into sentences, in document order.
    pub sentences: Vec<String>,
}

/// A page that matched a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit<'a> {
    /// The matched page.
    pub page: &'a PageRecord,
    /// Sum of per-term occurrence counts in the page text.
    pub score: usize,
    /// Sentences containing at least one query term, in page order.
    pub excerpts: Vec<&'a str>,
}

/// Ranked hits plus a composed snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome<'a> {
    /// Hits sorted by descending score; ties keep index order.
    pub hits: Vec<Hit<'a>>,
    /// Top excerpts annotated with their source page, or empty.
    pub snippet: String,
}

impl SearchOutcome<'_> {
    /// Identifiers of every hit page, in ranked order.
    pub fn source_ids(&self) -> Vec<String> {
        self.hits.iter().map(|h| h.page.id.clone()).collect()
    }
}

/// The assistant's reply to a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Reply text. May contain blank-line separated excerpt blocks.
    pub text: String,
    /// Page identifiers the reply was drawn from.
    pub sources: Vec<String>,
}

impl Answer {
    /// Sources with duplicates removed (first occurrence wins), capped at
    /// [`MAX_DISPLAY_SOURCES`].
    pub fn display_sources(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for source in &self.sources {
            if !seen.contains(&source.as_str()) {
                seen.push(source);
            }
        }
        seen.truncate(MAX_DISPLAY_SOURCES);
        seen
    }
}
