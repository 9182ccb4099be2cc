//! Single-slot TTL cache
//!
//! Caches one expensive upstream read (e.g. a full spreadsheet fetch) for a
//! fixed duration. Constructed at startup and shared by reference, never a
//! module-level static.

use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// One cached value with its fill time.
#[derive(Debug)]
pub struct TtlCache<T> {
    slot: RwLock<Option<(Instant, T)>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Return a clone of the cached value if it is younger than `ttl`.
    pub async fn get(&self, ttl: Duration) -> Option<T> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some((filled_at, value)) if filled_at.elapsed() < ttl => Some(value.clone()),
            _ => None,
        }
    }

    /// Replace the cached value, resetting its age.
    pub async fn store(&self, value: T) {
        let mut slot = self.slot.write().await;
        *slot = Some((Instant::now(), value));
    }

}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
