//! CRUD orchestration over the remote store and cache mirror.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use roster_core::codec;
use roster_core::error::{Result, RosterError};
use roster_core::traits::{EntryCache, Notifier, RemoteStore};
use roster_core::types::Entry;
use roster_scanner::ExpiryScanner;

/// Coordinates reads and writes across the durable store and the cache
/// mirror, keeping both on the same ordered record collection.
///
/// Every operation is request-scoped: no session state, no locking around
/// the read-modify-write sequence. Two concurrent mutations race on the
/// version token and the loser surfaces `Conflict` to its caller.
pub struct SyncService<S, C, N> {
    store: S,
    cache: C,
    notifier: Arc<N>,
    scanner: ExpiryScanner,
}

impl<S, C, N> SyncService<S, C, N>
where
    S: RemoteStore,
    C: EntryCache,
    N: Notifier,
{
    /// Creates a service over the given collaborators.
    pub fn new(store: S, cache: C, notifier: Arc<N>) -> Self {
        Self {
            store,
            cache,
            notifier,
            scanner: ExpiryScanner::new(),
        }
    }

    /// Returns the display rows, preferring the cache mirror.
    ///
    /// On a cache miss the remote file is read, parsed and mirrored. Each
    /// read also runs the expiration scanner over the returned collection;
    /// expired-entry notifications are fire-and-forget.
    #[instrument(skip(self))]
    pub async fn read(&self) -> Result<Vec<String>> {
        let entries = match self.cache.get().await? {
            Some(entries) => {
                debug!(count = entries.len(), "Cache hit");
                entries
            }
            None => {
                let doc = self.store.read().await?;
                let entries = codec::parse_document(&doc.content);
                debug!(count = entries.len(), "Cache miss, populated from remote");
                if let Err(e) = self.cache.set(entries.clone()).await {
                    warn!(error = %e, "Cache population failed, serving remote copy");
                }
                entries
            }
        };

        self.scanner
            .notify_expired(&entries, Utc::now().date_naive(), self.notifier.as_ref())
            .await;

        Ok(entries.iter().map(codec::format_line).collect())
    }

    /// Rebuilds the cache mirror from the remote file, discarding any
    /// divergent mirror state. Returns the number of mirrored entries.
    #[instrument(skip(self))]
    pub async fn resync(&self) -> Result<usize> {
        let doc = self.store.read().await?;
        let entries = codec::parse_document(&doc.content);
        let count = entries.len();

        self.cache.set(entries).await?;
        info!(count, "Cache resynchronized from remote");

        self.notify("Data synchronized with remote repository.").await;
        Ok(count)
    }

    /// Appends an entry to the durable file, then mirrors the append.
    ///
    /// A remote failure aborts the whole operation with the cache
    /// untouched; callers never observe a partial mutation.
    #[instrument(skip(self, entry), fields(name = %entry.name))]
    pub async fn add(&self, entry: Entry) -> Result<()> {
        entry.validate()?;

        let doc = self.store.read().await?;
        let line = codec::format_line(&entry);
        // Appending to the raw content preserves any non-record lines the
        // file may still carry.
        let content = if doc.content.is_empty() {
            line
        } else {
            format!("{}\n{}", doc.content, line)
        };

        self.store
            .write(&content, &doc.version, &format!("Add entry for {}", entry.name))
            .await?;

        if let Err(e) = self.cache.append(entry.clone()).await {
            warn!(error = %e, "Cache append failed, divergence until next resync");
        }

        info!(name = %entry.name, "Entry added");
        self.notify(&format!("New entry added: {}", entry.describe()))
            .await;
        Ok(())
    }

    /// Replaces the entry at `index` in both stores.
    #[instrument(skip(self, entry))]
    pub async fn edit(&self, index: usize, entry: Entry) -> Result<()> {
        entry.validate()?;

        let doc = self.store.read().await?;
        let mut entries = codec::parse_document(&doc.content);
        if index >= entries.len() {
            return Err(RosterError::InvalidIndex {
                index,
                len: entries.len(),
            });
        }
        entries[index] = entry.clone();

        self.store
            .write(
                &codec::render_document(&entries),
                &doc.version,
                &format!("Edit entry at index {index}"),
            )
            .await?;

        // An index past the mirror's end means the mirror was already
        // stale; leave it for the next resync.
        if let Err(e) = self.cache.mutate_at(index, entry.clone()).await {
            warn!(error = %e, "Cache update failed, divergence until next resync");
        }

        info!(index, name = %entry.name, "Entry updated");
        self.notify(&format!("Entry updated: {}", entry.describe()))
            .await;
        Ok(())
    }

    /// Removes the entry at `index` from both stores, returning it.
    #[instrument(skip(self))]
    pub async fn delete(&self, index: usize) -> Result<Entry> {
        let doc = self.store.read().await?;
        let mut entries = codec::parse_document(&doc.content);
        if index >= entries.len() {
            return Err(RosterError::InvalidIndex {
                index,
                len: entries.len(),
            });
        }
        let removed = entries.remove(index);

        self.store
            .write(
                &codec::render_document(&entries),
                &doc.version,
                &format!("Delete entry at index {index}"),
            )
            .await?;

        if let Err(e) = self.cache.remove_at(index).await {
            warn!(error = %e, "Cache removal failed, divergence until next resync");
        }

        info!(index, name = %removed.name, "Entry deleted");
        self.notify(&format!("Entry deleted: {}", removed.describe()))
            .await;
        Ok(removed)
    }

    /// Best-effort notification: failures are logged, never propagated.
    async fn notify(&self, text: &str) {
        if let Err(e) = self.notifier.send(text).await {
            warn!(error = %e, "Notification failed");
        }
    }
}
