use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "HACKER_STORIES_LOG";

/// Where log output goes. Both targets are off by default so stdout stays
/// reserved for the story list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogTargets {
    /// Base path of the log file; the real file name gets a
    /// `.{timestamp}.{pid}` suffix.
    pub file: Option<PathBuf>,
    /// Also log to stderr.
    pub stderr: bool,
}

impl LogTargets {
    /// File target from `HACKER_STORIES_LOG`, stderr as requested.
    pub fn from_env(stderr: bool) -> Self {
        Self {
            file: std::env::var_os(LOG_ENV_VAR).map(PathBuf::from),
            stderr,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some() || self.stderr
    }

    /// Level used when `RUST_LOG` is unset. A log file records load
    /// progress; stderr alone only shows problems.
    fn default_directive(&self) -> &'static str {
        if self.file.is_some() {
            "info"
        } else {
            "warn"
        }
    }
}

/// `{base}.{timestamp}.{pid}`, so concurrent runs do not clobber each other.
pub fn unique_log_path(base: &std::path::Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

/// Initialize tracing for the given targets. Does nothing if none is set.
///
/// The level comes from `RUST_LOG`. A log file that cannot be created is
/// reported on stderr and skipped.
pub fn init_tracing(targets: &LogTargets) {
    if !targets.is_enabled() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(targets.default_directive()));

    let file_layer = targets.file.as_ref().and_then(|base| {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let path = unique_log_path(base, timestamp, std::process::id());
        match std::fs::File::create(&path) {
            Ok(file) => Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339()),
            ),
            Err(err) => {
                eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
                None
            }
        }
    });

    let stderr_layer = targets.stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
}
