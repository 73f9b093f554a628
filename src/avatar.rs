//! Avatar cache — user id → avatar URL.
//!
//! Lookups hit the host directory only on a miss. Invalidation is wholesale:
//! every entry is dropped once the reset interval has elapsed. There is no
//! per-entry expiry and no size bound; the working set is the handful of
//! users active in open threads.
//!
//! The cache never schedules itself. `run_reset_loop` is the repeating task
//! that drives `clear_if_due`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::constants::AVATAR_CACHE_RESET_SECS;
use crate::error::{EmbedError, EmbedResult};
use crate::host::UserDirectory;

struct CacheState {
    entries: HashMap<String, String>,
    last_reset: Instant,
}

pub struct AvatarCache {
    state: Mutex<CacheState>,
    reset_interval: Duration,
}

impl Default for AvatarCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(AVATAR_CACHE_RESET_SECS))
    }
}

impl AvatarCache {
    pub fn new(reset_interval: Duration) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                last_reset: Instant::now(),
            }),
            reset_interval,
        }
    }

    pub fn reset_interval(&self) -> Duration {
        self.reset_interval
    }

    // A panic while holding the lock cannot leave the map half-written.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Avatar URL for `user_id`, scanning `directory` on a miss.
    ///
    /// Fails with `UserNotCached` when the host does not hold the user.
    pub fn avatar_url(&self, directory: &dyn UserDirectory, user_id: &str) -> EmbedResult<String> {
        if let Some(url) = self.lock().entries.get(user_id) {
            tracing::debug!(user = %user_id, "Avatar cache hit");
            return Ok(url.clone());
        }

        let url = directory
            .cached_users()
            .into_iter()
            .find(|u| u.id == user_id)
            .map(|u| u.avatar_url)
            .ok_or_else(|| EmbedError::UserNotCached(user_id.to_string()))?;

        tracing::debug!(user = %user_id, "Avatar cache miss, stored from directory");
        self.lock().entries.insert(user_id.to_string(), url.clone());
        Ok(url)
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut state = self.lock();
        let dropped = state.entries.len();
        state.entries.clear();
        state.last_reset = Instant::now();
        tracing::debug!(dropped, "Avatar cache cleared");
    }

    /// Clear when `reset_interval` has elapsed since the last clear.
    /// Returns true if the cache was cleared.
    pub fn clear_if_due(&self, now: Instant) -> bool {
        let mut state = self.lock();
        if now.saturating_duration_since(state.last_reset) < self.reset_interval {
            return false;
        }
        let dropped = state.entries.len();
        state.entries.clear();
        state.last_reset = now;
        tracing::debug!(dropped, "Avatar cache reset interval elapsed");
        true
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }
}

/// Reset loop — checks the cache every `tick` until `running` goes false.
pub fn run_reset_loop(cache: Arc<AvatarCache>, running: Arc<AtomicBool>, tick: Duration) {
    while running.load(Ordering::Relaxed) {
        std::thread::sleep(tick);
        if !running.load(Ordering::Relaxed) {
            break;
        }
        cache.clear_if_due(Instant::now());
    }
    tracing::debug!("Avatar reset loop stopped");
}

/// Start `run_reset_loop` on its own thread.
pub fn spawn_reset_task(
    cache: Arc<AvatarCache>,
    running: Arc<AtomicBool>,
    tick: Duration,
) -> EmbedResult<JoinHandle<()>> {
    let handle = std::thread::Builder::new()
        .name("avatar-cache-reset".to_string())
        .spawn(move || run_reset_loop(cache, running, tick))?;
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::StaticDirectory;

    #[test]
    fn test_miss_then_hit() {
        let dir = StaticDirectory::with_users(&[("1", "https://cdn.example/1.png")]);
        let cache = AvatarCache::default();

        assert_eq!(cache.avatar_url(&dir, "1").unwrap(), "https://cdn.example/1.png");
        assert_eq!(dir.scans(), 1);
        assert_eq!(cache.len(), 1);

        assert_eq!(cache.avatar_url(&dir, "1").unwrap(), "https://cdn.example/1.png");
        assert_eq!(dir.scans(), 1, "hit must not scan the directory");
    }

    #[test]
    fn test_clear_forces_rescan() {
        let dir = StaticDirectory::with_users(&[("1", "https://cdn.example/1.png")]);
        let cache = AvatarCache::default();
        cache.avatar_url(&dir, "1").unwrap();
        cache.clear();
        assert!(cache.is_empty());
        cache.avatar_url(&dir, "1").unwrap();
        assert_eq!(dir.scans(), 2);
    }

    #[test]
    fn test_clear_if_due() {
        let dir = StaticDirectory::with_users(&[("1", "a"), ("2", "b")]);
        let cache = AvatarCache::new(Duration::from_secs(3600));
        let start = Instant::now();
        cache.avatar_url(&dir, "1").unwrap();
        cache.avatar_url(&dir, "2").unwrap();

        assert!(!cache.clear_if_due(start + Duration::from_secs(60)));
        assert_eq!(cache.len(), 2);

        assert!(cache.clear_if_due(start + Duration::from_secs(3601)));
        assert!(cache.is_empty());

        cache.avatar_url(&dir, "1").unwrap();
        assert_eq!(dir.scans(), 3);
    }

    #[test]
    fn test_missing_user_is_an_error() {
        let dir = StaticDirectory::with_users(&[("1", "a")]);
        let cache = AvatarCache::default();
        let err = cache.avatar_url(&dir, "99").unwrap_err();
        assert!(matches!(err, EmbedError::UserNotCached(ref id) if id == "99"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_reset_task_clears_and_stops() {
        let dir = StaticDirectory::with_users(&[("1", "a")]);
        let cache = Arc::new(AvatarCache::new(Duration::from_millis(5)));
        cache.avatar_url(&dir, "1").unwrap();

        let running = Arc::new(AtomicBool::new(true));
        let handle =
            spawn_reset_task(cache.clone(), running.clone(), Duration::from_millis(2)).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while !cache.is_empty() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(2));
        }
        assert!(cache.is_empty());

        running.store(false, Ordering::Relaxed);
        handle.join().unwrap();
    }
}
