//! In-memory story source with a simulated network delay.

use std::time::Duration;

use async_trait::async_trait;

use super::error::ProviderError;
use super::traits::StoryProvider;
use crate::story::{fixture_stories, Story};

/// Resolves with a fixed list after `delay`.
///
/// A failing instance rejects after the same delay, which is how the UI
/// error path is exercised without a network.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    stories: Vec<Story>,
    delay: Duration,
    fail: bool,
}

impl StaticProvider {
    pub fn new(stories: Vec<Story>) -> Self {
        Self {
            stories,
            delay: Duration::ZERO,
            fail: false,
        }
    }

    /// The React/Redux fixture list.
    pub fn fixtures() -> Self {
        Self::new(fixture_stories())
    }

    /// A source that always rejects.
    pub fn failing() -> Self {
        Self {
            stories: Vec::new(),
            delay: Duration::ZERO,
            fail: true,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl StoryProvider for StaticProvider {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<Story>, ProviderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.fail {
            return Err(ProviderError::Unavailable {
                reason: "static source configured to fail".to_string(),
            });
        }
        Ok(self.stories.clone())
    }
}
