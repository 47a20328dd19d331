//! In-memory query cache backed by `DashMap`, with per-entry staleness
//! deadlines and per-namespace invalidation epochs.
//!
//! Entries are stored as serialized JSON strings under a [`QueryKey`]. Each
//! namespace carries an epoch counter; invalidation bumps the epoch instead
//! of walking entries, so every cached variant under the namespace goes
//! stale at once, and a fetch that settles after its namespace was
//! invalidated cannot resurrect as fresh. Stale entries are lazily evicted
//! on the next `get` for that key.

use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::keys::QueryKey;

struct CacheEntry {
    value: String,
    expires_at: Instant,
    epoch: u64,
}

/// Thread-safe query cache. The only shared mutable state in the data
/// layer; reads and mutations are its only writers.
#[derive(Default)]
pub struct QueryCache {
    entries: DashMap<QueryKey, CacheEntry>,
    epochs: DashMap<String, u64>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current invalidation epoch of a namespace.
    pub fn epoch(&self, namespace: &str) -> u64 {
        self.epochs.get(namespace).map(|e| *e).unwrap_or(0)
    }

    /// Returns the fresh cached value for `key`, or `None` when the entry
    /// is missing, past its deadline, or from a superseded epoch.
    pub fn get(&self, key: &QueryKey) -> Option<String> {
        let entry = self.entries.get(key)?;
        let stale =
            entry.epoch != self.epoch(&key.namespace) || Instant::now() > entry.expires_at;
        if stale {
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Stores a value fetched under `epoch` (observed at fetch start, via
    /// [`QueryCache::epoch`]). Dropped silently when the namespace was
    /// invalidated while the fetch was in flight.
    pub fn set(&self, key: QueryKey, value: String, ttl: Duration, epoch: u64) {
        if epoch != self.epoch(&key.namespace) {
            tracing::debug!("discarding superseded fetch result for {}", key);
            return;
        }
        self.entries.insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
                epoch,
            },
        );
    }

    /// Marks every entry under `namespace` stale by bumping its epoch.
    pub fn invalidate_namespace(&self, namespace: &str) {
        *self.epochs.entry(namespace.to_string()).or_insert(0) += 1;
    }

    /// Drops a single cached entry.
    pub fn invalidate_key(&self, key: &QueryKey) {
        self.entries.remove(key);
    }

    /// Removes all entries and resets every epoch.
    pub fn clear(&self) {
        self.entries.clear();
        self.epochs.clear();
    }
}
