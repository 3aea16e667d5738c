use std::sync::Arc;

use crate::config::SearchConfig;
use crate::filter::filter_stories;
use crate::loader::{LoadEvent, Loader};
use crate::provider::StoryProvider;
use crate::storage::{PersistedValue, ValueStore};
use crate::story::{Story, StoryId};
use crate::ui::mvi::Reducer;
use crate::ui::status::{LoadStatus, StatusIntent, StatusReducer};
use crate::ui::stories::{StoriesIntent, StoriesReducer, StoriesState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application controller.
///
/// Owns the story list, the load status and the persisted search query.
/// This is the whole surface a presentation layer talks to.
pub struct App {
    /// Story collection (MVI pattern).
    stories: StoriesState,
    /// Loading/error flags (MVI pattern).
    status: LoadStatus,
    /// Search query, written through to the store on every change.
    search_term: PersistedValue,
    loader: Loader,
    initial_load_started: bool,
}

impl App {
    pub fn new(
        provider: Arc<dyn StoryProvider>,
        store: Arc<dyn ValueStore>,
        search: &SearchConfig,
    ) -> Self {
        Self {
            stories: StoriesState::default(),
            status: LoadStatus::default(),
            search_term: PersistedValue::new(store, search.key.clone(), &search.default_query),
            loader: Loader::new(provider),
            initial_load_started: false,
        }
    }

    // ========================================================================
    // Story collection (MVI pattern)
    // ========================================================================

    /// Dispatch an action to the story collection reducer.
    pub fn dispatch(&mut self, intent: StoriesIntent) {
        tracing::debug!(action = intent.tag(), "Dispatching story action");
        dispatch_mvi!(self, stories, StoriesReducer, intent);
    }

    /// Decode and dispatch an encoded action.
    ///
    /// # Panics
    /// Panics if the action does not decode. Only the two known action
    /// types exist, so anything else reaching this point is a bug in the
    /// caller.
    pub fn dispatch_encoded(&mut self, encoded: &str) {
        match StoriesIntent::from_json(encoded) {
            Ok(intent) => self.dispatch(intent),
            Err(err) => {
                tracing::error!(error = %err, "Rejected story action");
                panic!("invalid story action: {err}");
            }
        }
    }

    pub fn remove_story(&mut self, id: StoryId) {
        self.dispatch(StoriesIntent::RemoveById { id });
    }

    pub fn stories(&self) -> &StoriesState {
        &self.stories
    }

    /// Stories matching the current query, in collection order.
    ///
    /// Recomputed on every call.
    pub fn current_view(&self) -> Vec<Story> {
        filter_stories(self.stories.stories(), self.search_term.get())
    }

    // ========================================================================
    // Search query
    // ========================================================================

    pub fn search_term(&self) -> &str {
        self.search_term.get()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.search_term.set(text);
        tracing::debug!(query = %self.search_term.get(), "Search query changed");
    }

    // ========================================================================
    // Loading
    // ========================================================================

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.loading
    }

    pub fn is_error(&self) -> bool {
        self.status.error
    }

    /// Issue the initial load. Later calls do nothing and return `None`.
    pub fn start(&mut self) -> Option<u64> {
        if self.initial_load_started {
            return None;
        }
        self.initial_load_started = true;
        Some(self.load())
    }

    /// Issue a load and return its generation.
    ///
    /// Sets `loading` immediately. The result is applied when it comes back
    /// through [`App::next_load_event`] or [`App::poll_load_events`]. Must be
    /// called from within a tokio runtime.
    pub fn load(&mut self) -> u64 {
        self.dispatch_status(StatusIntent::LoadStarted);
        self.loader.start()
    }

    /// Manual reload, e.g. after an error was shown.
    pub fn refresh(&mut self) -> u64 {
        self.initial_load_started = true;
        self.load()
    }

    /// Apply a finished load. Returns false if it was stale and ignored.
    pub fn apply_load_event(&mut self, event: LoadEvent) -> bool {
        if !self.loader.is_current(&event) {
            tracing::debug!(
                generation = event.generation,
                latest = self.loader.latest_generation(),
                "Discarding stale load result"
            );
            return false;
        }

        match event.outcome {
            Ok(stories) => {
                tracing::info!(
                    generation = event.generation,
                    count = stories.len(),
                    "Story load finished"
                );
                self.dispatch(StoriesIntent::ReplaceAll { stories });
                self.dispatch_status(StatusIntent::LoadSucceeded);
            }
            Err(err) => {
                tracing::warn!(
                    generation = event.generation,
                    provider = self.loader.provider_name(),
                    error = %err,
                    "Story load failed"
                );
                self.dispatch_status(StatusIntent::LoadFailed);
            }
        }
        true
    }

    /// Wait for the next finished load and apply it.
    ///
    /// Returns false if the event was stale.
    pub async fn next_load_event(&mut self) -> bool {
        match self.loader.next_event().await {
            Some(event) => self.apply_load_event(event),
            None => false,
        }
    }

    /// Apply every load result that has already arrived, without waiting.
    ///
    /// Returns how many were applied (stale ones are not counted).
    pub fn poll_load_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.loader.try_next_event() {
            if self.apply_load_event(event) {
                applied += 1;
            }
        }
        applied
    }

    /// Issue a load and wait until its own result has been applied.
    pub async fn load_and_wait(&mut self) {
        let generation = self.load();
        while let Some(event) = self.loader.next_event().await {
            let done = event.generation == generation;
            self.apply_load_event(event);
            if done {
                break;
            }
        }
    }

    fn dispatch_status(&mut self, intent: StatusIntent) {
        dispatch_mvi!(self, status, StatusReducer, intent);
    }
}
