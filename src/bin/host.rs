//! Headless host for the site assistant over stdin/stdout.
//!
//! Usage: `site-assistant-host [config.toml]`
//!
//! Indexes the configured site, then reads one query per stdin line and
//! writes one JSON `Answer` per stdout line. The line `:reindex` rebuilds
//! the index instead. All tracing output goes to stderr so that stdout
//! stays a clean JSON channel.

use std::path::PathBuf;

use site_assistant::{AssistantConfig, SiteAssistant};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const REINDEX_COMMAND: &str = ":reindex";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => AssistantConfig::from_file(&path)
            .map_err(|e| anyhow::anyhow!("loading {}: {e}", path.display()))?,
        None => AssistantConfig::default(),
    };

    let assistant = SiteAssistant::from_config(&config)?;
    tracing::info!(pages = config.pages.len(), "site-assistant-host starting");
    assistant.reindex().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim() == REINDEX_COMMAND {
            assistant.reindex().await;
            continue;
        }
        let answer = assistant.answer(&line);
        let mut json = serde_json::to_string(&answer)?;
        json.push('\n');
        stdout.write_all(json.as_bytes()).await?;
        stdout.flush().await?;
    }

    tracing::info!("site-assistant-host shut down cleanly");
    Ok(())
}
