//! Responder: intent rules first, keyword search second.

use crate::index::SiteIndex;
use crate::intents::{match_intent, IntentRule};
use crate::scorer::{search, SnippetLimits};
use crate::types::Answer;

/// Reply when search finds pages but no excerpt made it into the snippet.
pub const FOUND_WITHOUT_SNIPPET: &str = "Found info in project files. See sources below.";

/// Reply when nothing matches.
pub const NOT_FOUND: &str = "I could not find project-internal information matching your question. Try simpler keywords (e.g., \"book room\", \"pool hours\", \"dining reservations\").";

/// The no-match reply, with no sources.
pub fn not_found() -> Answer {
    Answer {
        text: NOT_FOUND.to_owned(),
        sources: Vec::new(),
    }
}

/// Answer `query` from `rules`, falling back to searching `index`.
///
/// Blank queries short-circuit to [`not_found`]. Otherwise the first
/// matching intent rule answers regardless of index contents; failing
/// that, the search snippet answers with every hit page as a source.
pub fn respond(
    query: &str,
    rules: &[IntentRule],
    index: &SiteIndex,
    limits: SnippetLimits,
) -> Answer {
    if query.trim().is_empty() {
        return not_found();
    }

    if let Some(rule) = match_intent(query, rules) {
        tracing::trace!(intent = rule.name, "query matched intent");
        return rule.to_answer();
    }

    let outcome = search(query, index, limits);
    if outcome.hits.is_empty() {
        tracing::trace!("query matched no pages");
        return not_found();
    }

    tracing::trace!(hits = outcome.hits.len(), "answering from search");
    let sources = outcome.source_ids();
    let text = if outcome.snippet.is_empty() {
        FOUND_WITHOUT_SNIPPET.to_owned()
    } else {
        outcome.snippet
    };
    Answer { text, sources }
}
