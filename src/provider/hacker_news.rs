//! Hacker News search API source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::error::ProviderError;
use super::traits::StoryProvider;
use crate::story::Story;

/// Public Algolia-hosted Hacker News search API.
pub const DEFAULT_BASE_URL: &str = "https://hn.algolia.com/api/v1";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<Story>,
}

/// Fetches stories matching a fixed search term.
///
/// The term is chosen when the provider is built; the persisted query only
/// filters what was fetched.
pub struct HackerNewsProvider {
    client: Client,
    search_url: Url,
    term: String,
}

impl HackerNewsProvider {
    pub fn new(
        base_url: impl Into<String>,
        term: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let base_url = base_url.into();
        let search_url = format!("{}/search", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&search_url).map_err(|e| ProviderError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            client,
            search_url,
            term: term.into(),
        })
    }

    fn request_url(&self) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("query", &self.term)
            .append_pair("tags", "story");
        url
    }
}

#[async_trait]
impl StoryProvider for HackerNewsProvider {
    fn name(&self) -> &'static str {
        "hacker-news"
    }

    async fn fetch(&self) -> Result<Vec<Story>, ProviderError> {
        let response = self
            .client
            .get(self.request_url())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        tracing::debug!(
            term = %self.term,
            hits = parsed.hits.len(),
            "Hacker News search resolved"
        );
        Ok(parsed.hits)
    }
}
