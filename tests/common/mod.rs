//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_search;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hacker_stories::config::SearchConfig;
use hacker_stories::provider::StoryProvider;
use hacker_stories::storage::{MemoryStore, ValueStore};
use hacker_stories::story::{Story, StoryId};
use hacker_stories::ui::app::App;

/// Memory store that counts writes.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    writes: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl ValueStore for CountingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value);
    }
}

pub fn search_config(default_query: &str) -> SearchConfig {
    SearchConfig {
        key: "search".to_string(),
        default_query: default_query.to_string(),
    }
}

/// App over `provider` with an empty default query.
pub fn make_app(provider: impl StoryProvider + 'static, store: Arc<dyn ValueStore>) -> App {
    App::new(Arc::new(provider), store, &search_config(""))
}

/// `{id: 0, title: "React"}` and `{id: 1, title: "Redux"}`.
pub fn react_and_redux() -> Vec<Story> {
    vec![Story::titled(0u64, "React"), Story::titled(1u64, "Redux")]
}

pub fn ids(stories: &[Story]) -> Vec<StoryId> {
    stories.iter().map(|s| s.object_id.clone()).collect()
}
