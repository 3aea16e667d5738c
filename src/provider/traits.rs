//! Core trait for story sources.

use async_trait::async_trait;

use super::error::ProviderError;
use crate::story::Story;

/// Asynchronous source of the full story list.
///
/// `fetch` resolves exactly once per call, either with the stories or
/// with a failure. There is no partial result and no retry; the caller
/// decides what a failure means.
#[async_trait]
pub trait StoryProvider: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    async fn fetch(&self) -> Result<Vec<Story>, ProviderError>;
}
