//! TTL [`Cache`] service.

use std::{
    collections::HashMap,
    hash::Hash,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

/// [`Cache`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Time entries stay fresh for.
    pub ttl: Duration,

    /// Maximum number of entries held at once.
    pub capacity: usize,
}

/// Capacity-bounded cache with per-entry expiry.
///
/// An explicit service injected into whatever needs caching, rather than
/// ambient global state. When full, inserting a new key evicts the entry
/// expiring soonest. Expired entries are dropped on access and swept in
/// the background.
///
/// Cheaply cloneable: clones share the same entries.
#[derive(Debug)]
pub struct Cache<K, V> {
    /// Configuration of this [`Cache`].
    config: Config,

    /// Entries of this [`Cache`].
    entries: Arc<Mutex<HashMap<K, Entry<V>>>>,
}

/// Single [`Cache`] entry.
#[derive(Clone, Debug)]
struct Entry<V> {
    /// Cached value.
    value: V,

    /// [`Instant`] this [`Entry`] expires at.
    expires_at: Instant,
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Cache<K, V> {
    /// Creates a new empty [`Cache`] with the provided [`Config`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            entries: Arc::default(),
        }
    }

    /// Returns the fresh value cached under the provided key, if any.
    ///
    /// An expired entry is dropped and reported as a miss.
    #[expect(clippy::missing_panics_doc, reason = "lock cannot be poisoned")]
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock().expect("non-poisoned");
        let entry = entries.get(key)?;
        if Instant::now() >= entry.expires_at {
            _ = entries.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Caches the provided value under the provided key.
    ///
    /// The entry expires after the configured TTL. When the [`Cache`] is
    /// full and the key is not present yet, the entry expiring soonest is
    /// evicted first.
    #[expect(clippy::missing_panics_doc, reason = "lock cannot be poisoned")]
    pub fn set(&self, key: K, value: V) {
        let mut entries = self.entries.lock().expect("non-poisoned");

        if entries.len() >= self.config.capacity.max(1)
            && !entries.contains_key(&key)
        {
            let evicted = entries
                .iter()
                .min_by_key(|(_, e)| e.expires_at)
                .map(|(k, _)| k.clone());
            if let Some(k) = evicted {
                _ = entries.remove(&k);
            }
        }

        _ = entries.insert(
            key,
            Entry {
                value,
                expires_at: Instant::now() + self.config.ttl,
            },
        );
    }

    /// Removes the entry cached under the provided key, returning its
    /// value.
    #[expect(clippy::missing_panics_doc, reason = "lock cannot be poisoned")]
    pub fn delete(&self, key: &K) -> Option<V> {
        self.entries
            .lock()
            .expect("non-poisoned")
            .remove(key)
            .map(|e| e.value)
    }

    /// Removes every entry of this [`Cache`].
    #[expect(clippy::missing_panics_doc, reason = "lock cannot be poisoned")]
    pub fn clear(&self) {
        self.entries.lock().expect("non-poisoned").clear();
    }

    /// Removes every expired entry, returning the number of removed ones.
    #[expect(clippy::missing_panics_doc, reason = "lock cannot be poisoned")]
    pub fn evict_expired(&self) -> usize {
        let mut entries = self.entries.lock().expect("non-poisoned");
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, e| now < e.expires_at);
        before - entries.len()
    }

    /// Returns the number of entries held, expired ones included.
    #[expect(clippy::missing_panics_doc, reason = "lock cannot be poisoned")]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().expect("non-poisoned").len()
    }

    /// Indicates whether this [`Cache`] holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use super::{Cache, Config};

    fn cache(ttl: Duration, capacity: usize) -> Cache<String, u32> {
        Cache::new(Config { ttl, capacity })
    }

    #[test]
    fn returns_fresh_values() {
        let cache = cache(Duration::from_secs(60), 8);

        cache.set("a".to_owned(), 1);
        assert_eq!(cache.get(&"a".to_owned()), Some(1));
        assert_eq!(cache.get(&"b".to_owned()), None);
    }

    #[test]
    fn expired_entries_are_misses() {
        let cache = cache(Duration::ZERO, 8);

        cache.set("a".to_owned(), 1);
        assert_eq!(cache.get(&"a".to_owned()), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let cache = cache(Duration::from_secs(60), 2);

        cache.set("a".to_owned(), 1);
        cache.set("b".to_owned(), 2);
        cache.set("c".to_owned(), 3);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"c".to_owned()), Some(3));
    }

    #[test]
    fn overwriting_does_not_evict_others() {
        let cache = cache(Duration::from_secs(60), 2);

        cache.set("a".to_owned(), 1);
        cache.set("b".to_owned(), 2);
        cache.set("b".to_owned(), 22);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a".to_owned()), Some(1));
        assert_eq!(cache.get(&"b".to_owned()), Some(22));
    }

    #[test]
    fn sweep_drops_only_expired_entries() {
        let cache = cache(Duration::ZERO, 8);
        cache.set("a".to_owned(), 1);
        cache.set("b".to_owned(), 2);

        assert_eq!(cache.evict_expired(), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn delete_and_clear() {
        let cache = cache(Duration::from_secs(60), 8);
        cache.set("a".to_owned(), 1);
        cache.set("b".to_owned(), 2);

        assert_eq!(cache.delete(&"a".to_owned()), Some(1));
        assert_eq!(cache.delete(&"a".to_owned()), None);

        cache.clear();
        assert!(cache.is_empty());
    }
}
