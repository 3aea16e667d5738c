//! Asynchronous story loading.
//!
//! A [`Loader`] runs the provider on a tokio task and reports the outcome
//! back over a channel. It never touches controller state itself; the
//! controller applies each [`LoadEvent`] when it receives it.
//!
//! Every load gets a generation number. Only an event carrying the latest
//! generation may be applied, so when loads overlap an older result that
//! resolves late is discarded instead of overwriting a newer one.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::provider::{ProviderError, StoryProvider};
use crate::story::Story;

/// Outcome of one load, tagged with the generation that issued it.
#[derive(Debug)]
pub struct LoadEvent {
    pub generation: u64,
    pub outcome: Result<Vec<Story>, ProviderError>,
}

/// Issues loads and hands back their results.
pub struct Loader {
    provider: Arc<dyn StoryProvider>,
    tx: mpsc::UnboundedSender<LoadEvent>,
    rx: mpsc::UnboundedReceiver<LoadEvent>,
    generation: u64,
}

impl Loader {
    pub fn new(provider: Arc<dyn StoryProvider>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            provider,
            tx,
            rx,
            generation: 0,
        }
    }

    /// Spawn a fetch and return its generation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();

        tracing::info!(generation, provider = provider.name(), "Story load started");

        tokio::spawn(async move {
            // A panic in the provider ends only the inner task.
            let outcome = match tokio::spawn(async move { provider.fetch().await }).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    tracing::error!(generation, error = %err, "Story load task failed");
                    Err(ProviderError::Unavailable {
                        reason: format!("load task failed: {err}"),
                    })
                }
            };
            if tx.send(LoadEvent { generation, outcome }).is_err() {
                tracing::trace!(generation, "Load result dropped (receiver gone)");
            }
        });

        generation
    }

    /// Generation of the most recently started load (0 if none).
    pub fn latest_generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, event: &LoadEvent) -> bool {
        event.generation == self.generation
    }

    /// Wait for the next finished load, stale or not.
    pub async fn next_event(&mut self) -> Option<LoadEvent> {
        self.rx.recv().await
    }

    /// A finished load if one is already waiting.
    pub fn try_next_event(&mut self) -> Option<LoadEvent> {
        self.rx.try_recv().ok()
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}
