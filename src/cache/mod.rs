mod store;

pub use store::{current_time_secs, CacheEntry, Clock, IndicatorCache, SystemClock};

#[cfg(test)]
pub(crate) use store::tests::ManualClock;

use std::path::PathBuf;

const CACHE_FILE: &str = "footer-cache.json";

/// Get the per-user state directory
///
/// Uses `$XDG_RUNTIME_DIR/ctir` if available, otherwise `/tmp/ctir-{uid}`.
pub fn state_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_RUNTIME_DIR") {
        PathBuf::from(xdg).join("ctir")
    } else {
        let uid = unsafe { libc::getuid() };
        PathBuf::from(format!("/tmp/ctir-{}", uid))
    }
}

/// Default location of the indicator cache file
pub fn default_cache_path() -> PathBuf {
    state_dir().join(CACHE_FILE)
}
