//! Integration tests for the assistant over the hotel site fixtures.
//!
//! `test-data/site/` holds five of the seven default pages; `login.html`
//! and `main.html` are missing so they exercise the dropped-page path.

use std::path::PathBuf;

use site_assistant::responder::NOT_FOUND;
use site_assistant::{AssistantConfig, SiteAssistant, SiteSource};

fn fixture_config() -> AssistantConfig {
    AssistantConfig {
        source: SiteSource::Directory {
            root: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data/site"),
        },
        ..Default::default()
    }
}

async fn indexed_assistant() -> SiteAssistant {
    let assistant = SiteAssistant::from_config(&fixture_config()).expect("valid config");
    assistant.reindex().await;
    assistant
}

#[tokio::test]
async fn missing_pages_are_left_out_of_index() {
    let assistant = indexed_assistant().await;
    let index = assistant.snapshot();

    assert_eq!(
        index.ids().collect::<Vec<_>>(),
        vec![
            "index.html",
            "luxury-rooms.html",
            "dining-hall.html",
            "infinity-pool.html",
            "food-beverages.html",
        ]
    );
    assert!(index.get("login.html").is_none());
    assert!(index.get("main.html").is_none());
}

#[tokio::test]
async fn titles_extracted_with_fallback() {
    let assistant = indexed_assistant().await;
    let index = assistant.snapshot();

    assert_eq!(index.get("index.html").expect("indexed").title, "Grand Palace Hotel");
    assert_eq!(index.get("luxury-rooms.html").expect("indexed").title, "Luxury Rooms");
    // Blank <title> falls back to the identifier.
    assert_eq!(
        index.get("food-beverages.html").expect("indexed").title,
        "food-beverages.html"
    );
}

#[tokio::test]
async fn scripts_and_styles_not_indexed() {
    let assistant = indexed_assistant().await;
    let home = assistant.snapshot();
    let home = home.get("index.html").expect("indexed");

    assert!(!home.text.contains("addEventListener"));
    assert!(!home.text.contains("font-family"));
    assert!(home.text.contains("Free parking is available for every guest."));
    assert!(!home.text.contains("  "));
}

#[tokio::test]
async fn booking_intent_answers_with_fixed_sources() {
    let assistant = indexed_assistant().await;
    let answer = assistant.answer("book a room");
    assert!(answer.text.starts_with("To make a booking"));
    assert_eq!(answer.sources, vec!["luxury-rooms.html", "index.html"]);
}

#[tokio::test]
async fn search_answer_quotes_matching_sentences() {
    let assistant = indexed_assistant().await;
    let answer = assistant.answer("Parking");

    assert_eq!(
        answer.text,
        "Free parking is available for every guest. [source: index.html]\n\n\
         All rooms include parking and breakfast. [source: luxury-rooms.html]"
    );
    assert_eq!(answer.sources, vec!["index.html", "luxury-rooms.html"]);
}

#[tokio::test]
async fn higher_scoring_page_ranks_first() {
    let assistant = indexed_assistant().await;
    let answer = assistant.answer("lake");

    // index.html mentions the lake twice, every other match once.
    assert_eq!(
        answer.sources,
        vec![
            "index.html",
            "luxury-rooms.html",
            "infinity-pool.html",
            "food-beverages.html",
        ]
    );
    let first_block = answer.text.split("\n\n").next().expect("snippet block");
    assert!(first_block.contains("Lake Road."));
    assert!(first_block.ends_with("[source: index.html]"));
}

#[tokio::test]
async fn snippet_covers_at_most_four_of_five_matching_pages() {
    let assistant = indexed_assistant().await;
    let answer = assistant.answer("the");

    assert_eq!(answer.sources.len(), 5);
    let blocks: Vec<&str> = answer.text.split("\n\n").collect();
    assert_eq!(blocks.len(), 4);
    for (block, source) in blocks.iter().zip(&answer.sources) {
        assert!(
            block.ends_with(&format!("[source: {source}]")),
            "block {block:?} not annotated with {source}"
        );
    }
    assert!(!answer.text.contains(&format!("[source: {}]", answer.sources[4])));
}

#[tokio::test]
async fn unmatched_query_gets_not_found() {
    let assistant = indexed_assistant().await;
    let answer = assistant.answer("helicopter transfer");
    assert_eq!(answer.text, NOT_FOUND);
    assert!(answer.sources.is_empty());
}

#[tokio::test]
async fn whitespace_query_gets_not_found() {
    let assistant = indexed_assistant().await;
    let answer = assistant.answer(" \t ");
    assert_eq!(answer.text, NOT_FOUND);
    assert!(answer.sources.is_empty());
}

#[tokio::test]
async fn reindex_is_idempotent() {
    let assistant = indexed_assistant().await;
    let first = assistant.snapshot();
    assistant.reindex().await;
    assert_eq!(*first, *assistant.snapshot());
}

#[tokio::test]
async fn reindex_picks_up_site_changes() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("index.html"), "<body>Old lobby.</body>").expect("write");

    let config = AssistantConfig {
        pages: vec!["index.html".into(), "spa.html".into()],
        source: SiteSource::Directory {
            root: dir.path().to_path_buf(),
        },
        ..Default::default()
    };
    let assistant = SiteAssistant::from_config(&config).expect("valid config");
    assistant.reindex().await;
    assert_eq!(assistant.snapshot().len(), 1);
    let old = assistant.snapshot();

    std::fs::write(dir.path().join("spa.html"), "<body>Sauna open late.</body>").expect("write");
    assistant.reindex().await;

    assert_eq!(old.len(), 1);
    assert_eq!(assistant.answer("sauna").sources, vec!["spa.html"]);
}
