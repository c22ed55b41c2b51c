//! The site assistant: owns the fetcher, extractor, intent table and the
//! current index snapshot, and exposes `reindex` and `answer`.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::AssistantConfig;
use crate::content::{ContentExtractor, HtmlExtractor};
use crate::error::Result;
use crate::fetch::{PageFetcher, SiteFetcher};
use crate::index::{IndexHandle, SiteIndex};
use crate::indexer::build_index;
use crate::intents::{IntentRule, HOTEL_INTENTS};
use crate::responder::respond;
use crate::scorer::{search, SnippetLimits};
use crate::types::{Answer, SearchOutcome};

/// Question answering over a site's own pages.
///
/// Queries run against an immutable snapshot taken when the query starts;
/// a concurrent [`reindex`](Self::reindex) never changes the pages a
/// running query sees. Reindexes are serialized with each other.
pub struct SiteAssistant<F = SiteFetcher, E = HtmlExtractor> {
    fetcher: F,
    extractor: E,
    pages: Vec<String>,
    rules: &'static [IntentRule],
    limits: SnippetLimits,
    index: IndexHandle,
    reindex_lock: Mutex<()>,
}

impl SiteAssistant {
    /// Build an assistant for the site described by `config`, with the
    /// hotel intent table and an empty index.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the fetcher cannot be
    /// built.
    pub fn from_config(config: &AssistantConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = SiteFetcher::from_config(config)?;
        Ok(Self::new(fetcher, HtmlExtractor, config))
    }
}

impl<F, E> SiteAssistant<F, E>
where
    F: PageFetcher,
    E: ContentExtractor,
{
    /// Build an assistant from explicit capabilities. The index starts empty.
    pub fn new(fetcher: F, extractor: E, config: &AssistantConfig) -> Self {
        Self {
            fetcher,
            extractor,
            pages: config.pages.clone(),
            rules: HOTEL_INTENTS,
            limits: SnippetLimits {
                pages: config.snippet_pages,
                excerpts_per_page: config.excerpts_per_page,
            },
            index: IndexHandle::default(),
            reindex_lock: Mutex::new(()),
        }
    }

    /// Replace the intent table.
    pub fn with_rules(mut self, rules: &'static [IntentRule]) -> Self {
        self.rules = rules;
        self
    }

    /// Rebuild the index from every configured page and swap it in.
    ///
    /// Pages that fail to fetch or extract are left out. Safe to call
    /// repeatedly.
    pub async fn reindex(&self) {
        let _guard = self.reindex_lock.lock().await;
        let index = build_index(&self.fetcher, &self.extractor, &self.pages).await;
        tracing::info!(
            indexed = index.len(),
            configured = self.pages.len(),
            "site index rebuilt"
        );
        self.index.replace(index);
    }

    /// Answer `query` against the current snapshot.
    pub fn answer(&self, query: &str) -> Answer {
        tracing::trace!(query, "answering");
        let snapshot = self.index.snapshot();
        respond(query, self.rules, &snapshot, self.limits)
    }

    /// Run `f` over the keyword search outcome for `query`, bypassing intents.
    pub fn search<R>(&self, query: &str, f: impl FnOnce(&SearchOutcome<'_>) -> R) -> R {
        let snapshot = self.index.snapshot();
        let outcome = search(query, &snapshot, self.limits);
        f(&outcome)
    }

    /// The current index snapshot.
    pub fn snapshot(&self) -> Arc<SiteIndex> {
        self.index.snapshot()
    }

    /// Configured page identifiers, in index order.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }
}
