//! In-memory cache mirror.
//!
//! Thread-safe, suitable for a single-process deployment. The whole
//! collection lives behind one lock so `set` is a single assignment with
//! no partial visibility.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use roster_core::error::{Result, RosterError};
use roster_core::traits::EntryCache;
use roster_core::types::Entry;

/// In-memory mirror of the record collection.
///
/// `None` means the mirror is absent (never populated or invalidated),
/// which is distinct from a present-but-empty collection: an absent
/// mirror forces the next read to go to the remote store.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<Option<Vec<Entry>>>,
}

impl MemoryCache {
    /// Creates an empty (absent) cache mirror.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mirrored collection length, or `None` if absent.
    pub fn len(&self) -> Option<usize> {
        self.entries.read().as_ref().map(Vec::len)
    }

    /// Returns true if the mirror is populated.
    pub fn is_present(&self) -> bool {
        self.entries.read().is_some()
    }
}

#[async_trait]
impl EntryCache for MemoryCache {
    async fn get(&self) -> Result<Option<Vec<Entry>>> {
        Ok(self.entries.read().clone())
    }

    #[instrument(skip(self, entries), fields(count = entries.len()))]
    async fn set(&self, entries: Vec<Entry>) -> Result<()> {
        debug!("Replacing cache mirror");
        *self.entries.write() = Some(entries);
        Ok(())
    }

    async fn append(&self, entry: Entry) -> Result<()> {
        let mut guard = self.entries.write();
        guard.get_or_insert_with(Vec::new).push(entry);
        Ok(())
    }

    async fn mutate_at(&self, index: usize, entry: Entry) -> Result<()> {
        let mut guard = self.entries.write();
        let entries = guard.get_or_insert_with(Vec::new);
        match entries.get_mut(index) {
            Some(slot) => {
                *slot = entry;
                Ok(())
            }
            None => Err(RosterError::InvalidIndex {
                index,
                len: entries.len(),
            }),
        }
    }

    async fn remove_at(&self, index: usize) -> Result<()> {
        let mut guard = self.entries.write();
        let entries = guard.get_or_insert_with(Vec::new);
        if index >= entries.len() {
            return Err(RosterError::InvalidIndex {
                index,
                len: entries.len(),
            });
        }
        entries.remove(index);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn invalidate(&self) -> Result<()> {
        debug!("Dropping cache mirror");
        *self.entries.write() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> Entry {
        Entry::new(name, "2099-01-01", "10.0.0.1")
    }

    #[tokio::test]
    async fn test_absent_until_set() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get().await.unwrap(), None);
        assert!(!cache.is_present());

        cache.set(vec![]).await.unwrap();
        assert_eq!(cache.get().await.unwrap(), Some(vec![]));
        assert!(cache.is_present());
    }

    #[tokio::test]
    async fn test_set_replaces_whole_collection() {
        let cache = MemoryCache::new();
        cache.set(vec![entry("alpha"), entry("beta")]).await.unwrap();
        cache.set(vec![entry("gamma")]).await.unwrap();

        let entries = cache.get().await.unwrap().unwrap();
        assert_eq!(entries, vec![entry("gamma")]);
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let cache = MemoryCache::new();
        cache.set(vec![entry("alpha"), entry("beta")]).await.unwrap();
        cache.append(entry("gamma")).await.unwrap();

        let entries = cache.get().await.unwrap().unwrap();
        assert_eq!(entries, vec![entry("alpha"), entry("beta"), entry("gamma")]);
    }

    #[tokio::test]
    async fn test_append_on_absent_mirror_starts_empty() {
        let cache = MemoryCache::new();
        cache.append(entry("alpha")).await.unwrap();
        assert_eq!(cache.get().await.unwrap(), Some(vec![entry("alpha")]));
    }

    #[tokio::test]
    async fn test_mutate_at() {
        let cache = MemoryCache::new();
        cache.set(vec![entry("alpha"), entry("beta")]).await.unwrap();
        cache.mutate_at(1, entry("beta2")).await.unwrap();

        let entries = cache.get().await.unwrap().unwrap();
        assert_eq!(entries, vec![entry("alpha"), entry("beta2")]);
    }

    #[tokio::test]
    async fn test_mutate_at_out_of_range() {
        let cache = MemoryCache::new();
        cache.set(vec![entry("alpha")]).await.unwrap();

        let err = cache.mutate_at(5, entry("x")).await.unwrap_err();
        assert!(matches!(err, RosterError::InvalidIndex { index: 5, len: 1 }));
        // Failed mutation leaves the mirror untouched.
        assert_eq!(cache.get().await.unwrap(), Some(vec![entry("alpha")]));
    }

    #[tokio::test]
    async fn test_remove_at() {
        let cache = MemoryCache::new();
        cache
            .set(vec![entry("alpha"), entry("beta"), entry("gamma")])
            .await
            .unwrap();
        cache.remove_at(1).await.unwrap();

        let entries = cache.get().await.unwrap().unwrap();
        assert_eq!(entries, vec![entry("alpha"), entry("gamma")]);
    }

    #[tokio::test]
    async fn test_remove_at_out_of_range() {
        let cache = MemoryCache::new();
        cache.set(vec![entry("alpha")]).await.unwrap();

        let err = cache.remove_at(1).await.unwrap_err();
        assert!(matches!(err, RosterError::InvalidIndex { index: 1, len: 1 }));
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = MemoryCache::new();
        cache.set(vec![entry("alpha")]).await.unwrap();
        cache.invalidate().await.unwrap();
        assert_eq!(cache.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_len() {
        let cache = MemoryCache::new();
        assert_eq!(cache.len(), None);
        cache.set(vec![entry("alpha"), entry("beta")]).await.unwrap();
        assert_eq!(cache.len(), Some(2));
    }
}
