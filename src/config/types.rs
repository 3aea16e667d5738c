use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::provider::{HackerNewsProvider, ProviderError, StaticProvider, StoryProvider, DEFAULT_BASE_URL};
use crate::storage::{FileStore, DEFAULT_SEARCH_KEY};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// How the search query is persisted and initialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Store key for the query (default: "search").
    #[serde(default = "default_search_key")]
    pub key: String,
    /// Query used when the store has none (default: "React").
    #[serde(default = "default_query")]
    pub default_query: String,
}

/// Where persisted values live.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store file. Defaults to `<data_dir>/hacker-stories/state.toml`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Which source populates the story list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Built-in fixture stories after a simulated delay.
    #[default]
    Static,
    /// Hacker News search API.
    HackerNews,
}

/// Story source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub source: SourceKind,
    /// Base URL of the search API (hacker-news source only).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Term sent to the search API (hacker-news source only).
    #[serde(default = "default_term")]
    pub term: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Delay before the static source resolves, in milliseconds (default: 2000).
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

fn default_search_key() -> String {
    DEFAULT_SEARCH_KEY.to_string()
}

fn default_query() -> String {
    "React".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_term() -> String {
    "react".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_simulated_delay_ms() -> u64 {
    2000
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            key: default_search_key(),
            default_query: default_query(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            base_url: default_base_url(),
            term: default_term(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

impl StorageConfig {
    /// Configured path, or the platform default.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(FileStore::default_path)
    }
}

impl ProviderConfig {
    /// Build the configured story source.
    pub fn build(&self) -> Result<Arc<dyn StoryProvider>, ProviderError> {
        match self.source {
            SourceKind::Static => Ok(Arc::new(
                StaticProvider::fixtures().with_delay(Duration::from_millis(self.simulated_delay_ms)),
            )),
            SourceKind::HackerNews => Ok(Arc::new(HackerNewsProvider::new(
                self.base_url.clone(),
                self.term.clone(),
                Duration::from_secs(u64::from(self.connect_timeout_seconds)),
                Duration::from_secs(u64::from(self.timeout_seconds)),
            )?)),
        }
    }
}
