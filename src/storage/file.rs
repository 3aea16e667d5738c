//! TOML-file backed value store.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use fs2::FileExt;
use parking_lot::Mutex;

use super::error::StorageError;
use super::ValueStore;

/// Values persisted to a TOML file of `key = "value"` lines.
///
/// The file is read once on open and rewritten on every `set`. Reads are
/// served from the in-memory copy. If the file cannot be read, parsed or
/// written, the store logs a warning and from then on keeps values in
/// memory only.
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
    degraded: AtomicBool,
}

impl FileStore {
    /// Default location: `<data_dir>/hacker-stories/state.toml`.
    ///
    /// Falls back to the current directory if no data dir is known.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("hacker-stories").join("state.toml")
    }

    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (values, degraded) = match read_values(&path) {
            Ok(values) => (values, false),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Store file unavailable, keeping values in memory only"
                );
                (BTreeMap::new(), true)
            }
        };

        Self {
            path,
            values: Mutex::new(values),
            degraded: AtomicBool::new(degraded),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True once the backing file has failed and values live in memory only.
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::SeqCst)
    }
}

impl ValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.values.lock();
        values.insert(key.to_string(), value.to_string());

        if self.is_degraded() {
            return;
        }

        if let Err(err) = write_values(&self.path, &values) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "Store write failed, keeping values in memory only"
            );
            self.degraded.store(true, Ordering::SeqCst);
        }
    }
}

fn read_values(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let content = fs::read_to_string(path).map_err(|e| StorageError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| StorageError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_values(path: &Path, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
    let write_err = |e: io::Error| StorageError::Write {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let content = toml::to_string(values)?;

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(path)
        .map_err(write_err)?;

    FileExt::lock_exclusive(&file).map_err(|e| StorageError::Lock {
        path: path.to_path_buf(),
        source: e,
    })?;

    let result = overwrite(&mut file, content.as_bytes());

    // Closing the file releases the lock as well.
    let _ = FileExt::unlock(&file);
    result.map_err(write_err)
}

fn overwrite(file: &mut File, bytes: &[u8]) -> io::Result<()> {
    file.set_len(0)?;
    file.write_all(bytes)?;
    file.sync_all()
}
