//! # site-assistant
//!
//! A self-contained question-answering assistant for a static website.
//!
//! The assistant fetches the site's own pages, flattens them to text, and
//! answers questions from that text alone: no external services, no model.
//!
//! ## Design
//!
//! - Fixed page list, fetched concurrently over HTTP or from disk
//! - Keyword scoring over page text with sentence excerpts
//! - A short table of intent rules answered with canned replies first
//! - Immutable index snapshots: a reindex swaps in a new index in one step
//! - Graceful degradation: a page that fails to load is simply not indexed
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> site_assistant::Result<()> {
//! use site_assistant::{AssistantConfig, SiteAssistant, SiteSource};
//!
//! let config = AssistantConfig {
//!     source: SiteSource::Http {
//!         base_url: "https://hotel.example/".into(),
//!     },
//!     ..Default::default()
//! };
//! let assistant = SiteAssistant::from_config(&config)?;
//! assistant.reindex().await;
//!
//! let answer = assistant.answer("pool hours");
//! println!("{}", answer.text);
//! for source in answer.display_sources() {
//!     println!("Source: {source}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod http;
pub mod index;
pub mod indexer;
pub mod intents;
pub mod responder;
pub mod scorer;
pub mod types;

pub use assistant::SiteAssistant;
pub use config::{AssistantConfig, SiteSource};
pub use content::{ContentExtractor, ExtractedPage, HtmlExtractor};
pub use error::{AssistantError, Result};
pub use fetch::{DirectoryFetcher, HttpFetcher, PageFetcher, SiteFetcher};
pub use index::SiteIndex;
pub use intents::{IntentRule, HOTEL_INTENTS};
pub use types::{Answer, Hit, PageRecord, SearchOutcome};
