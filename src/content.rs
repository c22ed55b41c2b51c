//! HTML content extraction: page title plus flattened visible text.
//!
//! The indexer only depends on the [`ContentExtractor`] trait, so hosts
//! that already have a DOM (or tests) can plug in their own extraction.
//! [`HtmlExtractor`] is the default, built on `scraper`.

use scraper::{Html, Selector};

use crate::error::Result;

/// Elements whose content is never rendered and so never indexed.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Title and text extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Trimmed `<title>` text, or the page identifier when missing or blank.
    pub title: String,
    /// Body text with whitespace runs collapsed to one space, trimmed.
    pub text: String,
}

/// Turns raw page markup into an [`ExtractedPage`].
pub trait ContentExtractor: Send + Sync {
    /// Extract title and visible text from `html`.
    ///
    /// `id` is the page identifier, used as the title fallback.
    ///
    /// # Errors
    ///
    /// Implementations may fail on markup they cannot handle; the indexer
    /// drops such pages.
    fn extract(&self, html: &str, id: &str) -> Result<ExtractedPage>;
}

/// Default extractor: parses with `scraper` and flattens `<body>` text.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl ContentExtractor for HtmlExtractor {
    fn extract(&self, html: &str, id: &str) -> Result<ExtractedPage> {
        let document = Html::parse_document(html);

        let title = extract_title(&document);
        let title = if title.is_empty() {
            id.to_owned()
        } else {
            title
        };
        let text = collapse_whitespace(&extract_body_text(&document));

        Ok(ExtractedPage { title, text })
    }
}

fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
        .trim()
        .to_owned()
}

/// Concatenated text nodes of `<body>`, with no separators added between
/// adjacent nodes. Text inside [`INVISIBLE_TAGS`] elements is skipped.
fn extract_body_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("body") else {
        return String::new();
    };
    let Some(body) = document.select(&selector).next() else {
        return String::new();
    };

    let mut text = String::new();
    for node in body.descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| INVISIBLE_TAGS.contains(&el.name()))
        });
        if !hidden {
            text.push_str(fragment);
        }
    }
    text
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
