//! Persistent key/value storage for small string values.
//!
//! The search query is the only value stored today. It survives the
//! session through [`FileStore`]; tests and headless runs use
//! [`MemoryStore`].

mod error;
mod file;
mod memory;
mod persisted;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persisted::PersistedValue;

/// Key the search query is stored under unless configured otherwise.
pub const DEFAULT_SEARCH_KEY: &str = "search";

/// Synchronous string storage.
///
/// Implementations never fail towards the caller. A backing medium that
/// becomes unavailable degrades to keeping values in memory.
pub trait ValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}
