// scrubkit-core/src/cache.rs
//! A thread-safe key/value cache whose entries expire at an absolute instant.
//!
//! Reads evict lazily: an entry observed past its expiration is removed and
//! reported as absent. `remove_expired_items` sweeps every expired entry in one
//! pass and is meant to be driven by whatever scheduler the caller already has.
//!
//! Removal of an expired entry is always compare-and-remove: an entry that was
//! re-set between the expiry check and the removal is left alone.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use log::debug;

use crate::config::CacheConfig;
use crate::errors::ScrubError;

/// Expiration applied when neither the cache nor the caller supplies one.
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(15 * 60);

/// Source of the current instant for expiration checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The default clock, backed by `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A cached value and the instant it stops being visible.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    /// `None` when `now + ttl` does not fit in an `Instant`; such entries never expire.
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn new(value: V, now: Instant, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: now.checked_add(ttl),
        }
    }

    /// An entry is expired once `now` reaches its expiration instant.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Generic time-expiring cache backed by a sharded concurrent map.
pub struct ExpiringCache<K, V, C = MonotonicClock>
where
    K: Eq + Hash,
{
    entries: DashMap<K, CacheEntry<V>>,
    default_expiration: Duration,
    clock: C,
}

impl<K, V> ExpiringCache<K, V, MonotonicClock>
where
    K: Eq + Hash,
{
    /// Creates a cache with the 15 minute default expiration.
    pub fn new() -> Self {
        Self::with_default_expiration(DEFAULT_EXPIRATION)
    }

    pub fn with_default_expiration(default_expiration: Duration) -> Self {
        Self::with_clock(default_expiration, MonotonicClock)
    }

    /// Creates a cache using the expiration configured in `CacheConfig`.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_default_expiration(config.default_expiration())
    }
}

impl<K, V> Default for ExpiringCache<K, V, MonotonicClock>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> ExpiringCache<K, V, C>
where
    K: Eq + Hash,
    C: Clock,
{
    pub fn with_clock(default_expiration: Duration, clock: C) -> Self {
        Self {
            entries: DashMap::new(),
            default_expiration,
            clock,
        }
    }

    pub fn default_expiration(&self) -> Duration {
        self.default_expiration
    }

    /// Inserts or overwrites `key`. Overwriting replaces both value and expiration.
    pub fn set(&self, key: K, value: V, expiration: Option<Duration>) {
        let ttl = expiration.unwrap_or(self.default_expiration);
        let entry = CacheEntry::new(value, self.clock.now(), ttl);
        self.entries.insert(key, entry);
    }

    /// Returns a clone of the live value for `key`.
    ///
    /// An expired entry is evicted as a side effect and `None` is returned.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let now = self.clock.now();
        match self.entries.get(key) {
            None => return None,
            Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
            Some(_) => {}
        }
        // The read guard is released before removal; DashMap would deadlock otherwise.
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now))
            .is_some()
        {
            debug!("Evicted expired cache entry on read.");
        }
        None
    }

    /// Returns true if `key` holds an entry that has not yet expired.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now))
    }

    /// Removes `key` if present, returning its value regardless of expiration.
    pub fn try_remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key).map(|(_, entry)| entry.value)
    }

    /// Strict removal: fails with `ScrubError::CacheKeyNotFound` if `key` is absent.
    pub fn remove<Q>(&self, key: &Q) -> Result<V, ScrubError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.try_remove(key).ok_or(ScrubError::CacheKeyNotFound)
    }

    /// Drops every entry without looking at expiration.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of physically stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V, C> ExpiringCache<K, V, C>
where
    K: Eq + Hash + Clone,
    C: Clock,
{
    /// Removes every entry that has expired as of a single `now` sample.
    ///
    /// Returns the number of entries actually removed. Keys re-set with a fresh
    /// expiration between the snapshot and the removal survive the sweep.
    pub fn remove_expired_items(&self) -> usize {
        let now = self.clock.now();
        let expired: Vec<K> = self
            .entries
            .iter()
            .filter(|item| item.value().is_expired(now))
            .map(|item| item.key().clone())
            .collect();

        let removed = expired
            .iter()
            .filter(|key| {
                self.entries
                    .remove_if(*key, |_, entry| entry.is_expired(now))
                    .is_some()
            })
            .count();

        debug!(
            "Expired sweep removed {} of {} candidate entries.",
            removed,
            expired.len()
        );
        removed
    }
}

impl<K, V, C> fmt::Debug for ExpiringCache<K, V, C>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("entries", &self.entries.len())
            .field("default_expiration", &self.default_expiration)
            .finish()
    }
}
