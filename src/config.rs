//! Assistant configuration with sensible defaults.
//!
//! [`AssistantConfig`] controls which pages are indexed, where they are
//! fetched from, and how search snippets are composed. It loads from and
//! saves to TOML; missing fields fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, Result};

/// Pages of the hotel site indexed by default.
pub const DEFAULT_PAGES: &[&str] = &[
    "index.html",
    "luxury-rooms.html",
    "dining-hall.html",
    "infinity-pool.html",
    "food-beverages.html",
    "login.html",
    "main.html",
];

/// Where page identifiers are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SiteSource {
    /// Fetch `<base_url>/<id>` over HTTP.
    Http {
        /// Base URL the identifiers are joined onto.
        base_url: String,
    },
    /// Read `<root>/<id>` from the local filesystem.
    Directory {
        /// Site root directory.
        root: PathBuf,
    },
}

impl Default for SiteSource {
    fn default() -> Self {
        Self::Directory {
            root: PathBuf::from("."),
        }
    }
}

/// Configuration for a site assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Page identifiers to index, in index order.
    pub pages: Vec<String>,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent for the HTTP fetcher.
    pub user_agent: Option<String>,
    /// How many top-scoring pages contribute to a search snippet.
    pub snippet_pages: usize,
    /// How many excerpts each contributing page adds to the snippet.
    pub excerpts_per_page: usize,
    /// Where to fetch pages from. Must stay the last field (TOML tables follow values).
    pub source: SiteSource,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            pages: DEFAULT_PAGES.iter().map(|p| (*p).to_owned()).collect(),
            timeout_seconds: 8,
            user_agent: None,
            snippet_pages: 4,
            excerpts_per_page: 2,
            source: SiteSource::default(),
        }
    }
}

impl AssistantConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `pages` must not be empty and must not contain blank identifiers
    /// - `timeout_seconds` must be greater than 0
    /// - `snippet_pages` and `excerpts_per_page` must be greater than 0
    /// - an HTTP `base_url` must parse as a URL
    pub fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(AssistantError::Config(
                "at least one page must be configured".into(),
            ));
        }
        if self.pages.iter().any(|p| p.trim().is_empty()) {
            return Err(AssistantError::Config(
                "page identifiers must not be blank".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(AssistantError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.snippet_pages == 0 {
            return Err(AssistantError::Config(
                "snippet_pages must be greater than 0".into(),
            ));
        }
        if self.excerpts_per_page == 0 {
            return Err(AssistantError::Config(
                "excerpts_per_page must be greater than 0".into(),
            ));
        }
        if let SiteSource::Http { ref base_url } = self.source {
            url::Url::parse(base_url)
                .map_err(|e| AssistantError::Config(format!("invalid base_url {base_url}: {e}")))?;
        }
        Ok(())
    }

    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AssistantError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AssistantError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn default_config_has_hotel_pages() {
        let config = AssistantConfig::default();
        assert_eq!(config.pages.len(), 7);
        assert_eq!(config.pages[0], "index.html");
        assert!(config.pages.contains(&"luxury-rooms.html".to_owned()));
        assert_eq!(config.snippet_pages, 4);
        assert_eq!(config.excerpts_per_page, 2);
        assert_eq!(config.timeout_seconds, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_pages_rejected() {
        let config = AssistantConfig {
            pages: vec![],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page"));
    }

    #[test]
    fn blank_page_rejected() {
        let config = AssistantConfig {
            pages: vec!["index.html".into(), "  ".into()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = AssistantConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn zero_snippet_limits_rejected() {
        let config = AssistantConfig {
            snippet_pages: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = AssistantConfig {
            excerpts_per_page: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_base_url_rejected() {
        let config = AssistantConfig {
            source: SiteSource::Http {
                base_url: "not a url".into(),
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("assistant.toml");

        let config = AssistantConfig {
            pages: vec!["index.html".into()],
            source: SiteSource::Http {
                base_url: "https://hotel.example/".into(),
            },
            user_agent: Some("SiteAssistant/1.0".into()),
            ..Default::default()
        };
        config.save_to_file(&path).expect("save");

        let loaded = AssistantConfig::from_file(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("assistant.toml");
        std::fs::write(
            &path,
            "timeout_seconds = 3\n\n[source]\nkind = \"directory\"\nroot = \"site\"\n",
        )
        .expect("write");

        let loaded = AssistantConfig::from_file(&path).expect("load");
        assert_eq!(loaded.timeout_seconds, 3);
        assert_eq!(
            loaded.source,
            SiteSource::Directory {
                root: PathBuf::from("site")
            }
        );
        assert_eq!(loaded.pages.len(), DEFAULT_PAGES.len());
    }

    #[test]
    fn invalid_toml_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").expect("write");
        assert!(AssistantConfig::from_file(&path).is_err());
    }

    #[test]
    fn nonexistent_file_returns_error() {
        let result = AssistantConfig::from_file(Path::new("/nonexistent/assistant.toml"));
        assert!(result.is_err());
    }
}
