//! Rate Limiting Infrastructure
//!
//! Fixed-window request counter with sliding eviction, keyed by client
//! identifier. Bursts straddling two windows are not smoothed; the only
//! consumer is a low-volume public form, so that trade-off is acceptable.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Record the attempt and report whether it is allowed.
    ///
    /// Never fails: over-limit attempts are simply denied without being
    /// recorded.
    async fn allow(&self, key: &str, config: &RateLimitConfig) -> bool;
}

/// Idle identifiers are evicted once every timestamp they hold is older
/// than this horizon.
pub const SWEEP_HORIZON: Duration = Duration::from_secs(300);

/// Default interval between background sweeps.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// In-process store: identifier -> timestamps (ms) of allowed requests.
///
/// Constructed once at startup and passed by reference to request handlers;
/// there is no module-level singleton, so tests get a fresh store per case.
#[derive(Debug, Default)]
pub struct InMemoryRateLimitStore {
    entries: Mutex<HashMap<String, Vec<i64>>>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Core check at an explicit clock reading. Drops timestamps that have
    /// left the window, denies without recording when the window is full,
    /// otherwise records `now_ms` and allows.
    pub fn allow_at(&self, key: &str, config: &RateLimitConfig, now_ms: i64) -> bool {
        let window_start = now_ms - config.window_ms();

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let timestamps = entries.entry(key.to_string()).or_default();
        timestamps.retain(|&ts| ts > window_start);

        if timestamps.len() >= config.max_requests as usize {
            return false;
        }

        timestamps.push(now_ms);
        true
    }

    /// Remove identifiers whose entire timestamp sequence has aged out.
    pub fn sweep_at(&self, horizon: Duration, now_ms: i64) -> usize {
        let cutoff = now_ms - horizon.as_millis() as i64;

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|_, timestamps| {
            timestamps.retain(|&ts| ts > cutoff);
            !timestamps.is_empty()
        });
        before - entries.len()
    }

    /// Number of tracked identifiers (for sweep logging and tests).
    pub fn tracked(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Spawn the periodic background sweep.
    pub fn spawn_sweeper(self: Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick fires immediately; skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let evicted = self.sweep_at(SWEEP_HORIZON, now_ms());
                if evicted > 0 {
                    tracing::debug!(evicted, tracked = self.tracked(), "Rate limit sweep");
                }
            }
        })
    }
}

impl RateLimitStore for InMemoryRateLimitStore {
    async fn allow(&self, key: &str, config: &RateLimitConfig) -> bool {
        self.allow_at(key, config, now_ms())
    }
}

impl RateLimitStore for Arc<InMemoryRateLimitStore> {
    async fn allow(&self, key: &str, config: &RateLimitConfig) -> bool {
        self.allow_at(key, config, now_ms())
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RateLimitConfig {
        RateLimitConfig::new(5, 60)
    }

    #[test]
    fn test_allows_up_to_max_then_denies() {
        let store = InMemoryRateLimitStore::new();
        let config = config();
        let now = 1_000_000;

        for i in 0..5 {
            assert!(store.allow_at("10.0.0.1", &config, now + i), "call {}", i);
        }
        assert!(!store.allow_at("10.0.0.1", &config, now + 5));
    }

    #[test]
    fn test_denied_attempt_is_not_recorded() {
        let store = InMemoryRateLimitStore::new();
        let config = RateLimitConfig::new(1, 60);

        assert!(store.allow_at("a", &config, 0));
        assert!(!store.allow_at("a", &config, 1));
        // The denial at t=1 must not extend the window: once the original
        // allowed request ages out, the caller is admitted again.
        assert!(store.allow_at("a", &config, 60_001));
    }

    #[test]
    fn test_window_elapse_resets() {
        let store = InMemoryRateLimitStore::new();
        let config = config();
        let now = 0;

        for i in 0..5 {
            assert!(store.allow_at("a", &config, now + i));
        }
        assert!(!store.allow_at("a", &config, now + 5));
        assert!(store.allow_at("a", &config, now + config.window_ms() + 10));
    }

    #[test]
    fn test_identifiers_are_independent() {
        let store = InMemoryRateLimitStore::new();
        let config = RateLimitConfig::new(1, 60);

        assert!(store.allow_at("a", &config, 0));
        assert!(!store.allow_at("a", &config, 1));
        assert!(store.allow_at("b", &config, 1));
    }

    #[test]
    fn test_sweep_evicts_idle_identifiers() {
        let store = InMemoryRateLimitStore::new();
        let config = config();

        store.allow_at("idle", &config, 0);
        store.allow_at("active", &config, 299_000);
        assert_eq!(store.tracked(), 2);

        let evicted = store.sweep_at(SWEEP_HORIZON, 300_500);
        assert_eq!(evicted, 1);
        assert_eq!(store.tracked(), 1);
    }

    #[tokio::test]
    async fn test_trait_uses_wall_clock() {
        let store = InMemoryRateLimitStore::new();
        let config = RateLimitConfig::new(2, 60);

        assert!(RateLimitStore::allow(&store, "a", &config).await);
        assert!(RateLimitStore::allow(&store, "a", &config).await);
        assert!(!RateLimitStore::allow(&store, "a", &config).await);
    }
}
