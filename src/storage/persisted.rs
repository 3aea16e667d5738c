use std::sync::Arc;

use super::ValueStore;

/// A single string value that is written through to a store on every change.
///
/// Initialized from the store, or from `default` if the key is absent.
/// Every `set` writes to the store, even when the value did not change.
pub struct PersistedValue {
    store: Arc<dyn ValueStore>,
    key: String,
    value: String,
}

impl PersistedValue {
    pub fn new(store: Arc<dyn ValueStore>, key: impl Into<String>, default: &str) -> Self {
        let key = key.into();
        let value = store.get(&key).unwrap_or_else(|| default.to_string());
        Self { store, key, value }
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.store.set(&self.key, &self.value);
    }
}
