use std::path::PathBuf;

use thiserror::Error;

/// Errors from the file-backed store.
///
/// These never escape [`super::FileStore`]; they are logged and the store
/// falls back to memory.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read store file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse store file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write store file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize store values: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to lock store file '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
