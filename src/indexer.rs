//! Indexer: concurrent page fetch, extraction, and sentence splitting.
//!
//! Every configured page is fetched concurrently. Pages that fail to fetch
//! or extract are dropped from the new index; they are logged at debug
//! level and never reported to the caller.

use futures::future::join_all;

use crate::content::ContentExtractor;
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::index::SiteIndex;
use crate::types::PageRecord;

/// Fetch and index `pages`, preserving their order.
///
/// Failed pages are absent from the result; this never fails as a whole.
pub async fn build_index<F, E>(fetcher: &F, extractor: &E, pages: &[String]) -> SiteIndex
where
    F: PageFetcher,
    E: ContentExtractor,
{
    let futures = pages.iter().map(|id| async move {
        let outcome = index_page(fetcher, extractor, id).await;
        (id, outcome)
    });

    let outcomes = join_all(futures).await;

    let mut records = Vec::with_capacity(outcomes.len());
    for (id, outcome) in outcomes {
        match outcome {
            Ok(record) => {
                tracing::debug!(page = %id, sentences = record.sentences.len(), "page indexed");
                records.push(record);
            }
            Err(err) => {
                tracing::debug!(page = %id, error = %err, "page dropped from index");
            }
        }
    }

    SiteIndex::new(records)
}

async fn index_page<F, E>(fetcher: &F, extractor: &E, id: &str) -> Result<PageRecord>
where
    F: PageFetcher,
    E: ContentExtractor,
{
    let html = fetcher.fetch(id).await?;
    let extracted = extractor.extract(&html, id)?;
    let sentences = split_sentences(&extracted.text);
    Ok(PageRecord {
        id: id.to_owned(),
        title: extracted.title,
        text: extracted.text,
        sentences,
    })
}

/// Split text after `.`, `!` or `?` wherever whitespace follows.
///
/// Empty fragments are discarded. Abbreviations are not special-cased, so
/// "Dr. Smith" splits in two.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
            if !current.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        current.push(ch);
        prev = Some(ch);
    }

    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}
