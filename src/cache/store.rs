//! Single-slot indicator cache
//!
//! Stores the last indicator with its fetch time in one JSON file so that
//! back-to-back hook processes can skip the external command.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Source of the current time in epoch seconds
pub trait Clock: Send + Sync {
    fn now(&self) -> f64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        current_time_secs()
    }
}

/// Cache entry as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Indicator text
    pub indicator: String,
    /// Write time (Unix seconds, fractional)
    pub timestamp: f64,
}

impl CacheEntry {
    /// Age of the entry at `now`
    fn age(&self, now: f64) -> f64 {
        now - self.timestamp
    }
}

/// File-backed indicator cache
///
/// Concurrent processes are not excluded from each other; the last
/// writer wins.
pub struct IndicatorCache {
    /// Path to the cache file
    path: PathBuf,
    /// Entries younger than this are served
    freshness: Duration,
    clock: Arc<dyn Clock>,
}

impl IndicatorCache {
    /// Create a cache at `path` using the wall clock
    pub fn new(path: impl Into<PathBuf>, freshness: Duration) -> Self {
        Self::with_clock(path, freshness, Arc::new(SystemClock))
    }

    /// Create a cache with an explicit clock
    pub fn with_clock(path: impl Into<PathBuf>, freshness: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            path: path.into(),
            freshness,
            clock,
        }
    }

    /// Get the path to the cache file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current time according to the cache's clock
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// True when there is no usable fresh entry
    ///
    /// Missing, unreadable and corrupt files all count as stale.
    pub fn is_stale(&self) -> bool {
        self.fresh_entry().is_none()
    }

    /// Cached indicator, only while fresh
    pub fn get(&self) -> Option<String> {
        self.fresh_entry().map(|entry| entry.indicator)
    }

    /// Store `indicator` stamped with the current time
    ///
    /// Failures are logged and otherwise ignored.
    pub fn set(&self, indicator: &str) {
        let entry = CacheEntry {
            indicator: indicator.to_string(),
            timestamp: self.clock.now(),
        };
        if let Err(e) = self.write(&entry) {
            warn!("Error updating cache: {:#}", e);
        }
    }

    fn fresh_entry(&self) -> Option<CacheEntry> {
        let entry = match self.read() {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                debug!("No cache file at {:?}", self.path);
                return None;
            }
            Err(e) => {
                warn!("Error reading cache: {:#}", e);
                return None;
            }
        };

        if entry.age(self.clock.now()) < self.freshness.as_secs_f64() {
            Some(entry)
        } else {
            None
        }
    }

    /// Read the entry; `Ok(None)` when the file does not exist
    fn read(&self) -> Result<Option<CacheEntry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read cache file: {:?}", self.path))
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .with_context(|| format!("Failed to parse cache file: {:?}", self.path))
    }

    /// Write the entry through a per-process temp file and rename
    fn write(&self, entry: &CacheEntry) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create cache directory: {:?}", dir))?;
                fs::set_permissions(dir, fs::Permissions::from_mode(0o700))
                    .with_context(|| format!("Failed to set permissions on cache directory: {:?}", dir))?;
            }
        }

        let json = serde_json::to_string(entry).context("Failed to serialize cache entry")?;

        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", std::process::id()));

        // Remove a temp file left behind by a crashed process with the same pid
        let _ = fs::remove_file(&temp_path);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp cache file: {:?}", temp_path))?;

        file.write_all(json.as_bytes())
            .with_context(|| format!("Failed to write temp cache file: {:?}", temp_path))?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e).with_context(|| format!("Failed to rename cache file: {:?}", self.path));
        }

        Ok(())
    }
}

/// Get current time in seconds since the Unix epoch
pub fn current_time_secs() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}
