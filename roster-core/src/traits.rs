//! Common traits for the roster service.
//!
//! These traits define the seams between the orchestrator and its
//! collaborators, enabling in-memory substitutes in tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Entry, RemoteDocument, VersionToken};

// ═══════════════════════════════════════════════════════════════════════════════
// REMOTE STORE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface to the durable text file in the remote repository.
///
/// The file is the source of truth for the record collection. Writes are
/// conditional on the version token returned by the preceding read; a
/// stale token fails with `Conflict` and is never retried here.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches the file's current content and version token.
    ///
    /// Fails with `RemoteUnavailable` on network/auth failure and
    /// `NotFound` if the file does not exist.
    async fn read(&self) -> Result<RemoteDocument>;

    /// Replaces the file content, conditioned on `version`.
    ///
    /// `message` becomes the commit message of the resulting revision.
    async fn write(&self, content: &str, version: &VersionToken, message: &str) -> Result<()>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE MIRROR TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Fast-path mirror of the record collection.
///
/// The cache is a derived, invalidatable projection of the durable file
/// and must preserve the same ordering: entries are addressed by index
/// across both stores.
#[async_trait]
pub trait EntryCache: Send + Sync {
    /// Returns the cached collection, or `None` if the mirror is absent.
    async fn get(&self) -> Result<Option<Vec<Entry>>>;

    /// Replaces the cached collection atomically.
    async fn set(&self, entries: Vec<Entry>) -> Result<()>;

    /// Appends an entry. An absent mirror is treated as empty.
    async fn append(&self, entry: Entry) -> Result<()>;

    /// Replaces the entry at `index`. Fails with `InvalidIndex` when
    /// `index` is past the end of the mirrored collection.
    async fn mutate_at(&self, index: usize, entry: Entry) -> Result<()>;

    /// Removes the entry at `index`. Fails with `InvalidIndex` when
    /// `index` is past the end of the mirrored collection.
    async fn remove_at(&self, index: usize) -> Result<()>;

    /// Drops the mirror entirely; the next read repopulates it.
    async fn invalidate(&self) -> Result<()>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// NOTIFIER TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Fire-and-forget delivery of a text message to the configured recipient.
///
/// Callers on the primary path swallow notification failures; only
/// channel-configuration operations surface them.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers `text` to the configured recipient. No retry.
    async fn send(&self, text: &str) -> Result<()>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// SHARED-HANDLE FORWARDING
// ═══════════════════════════════════════════════════════════════════════════════
// Collaborators are often shared between the orchestrator and the HTTP
// layer; forwarding through `Arc` keeps both sides on one instance.

#[async_trait]
impl<T: RemoteStore + ?Sized> RemoteStore for Arc<T> {
    async fn read(&self) -> Result<RemoteDocument> {
        (**self).read().await
    }

    async fn write(&self, content: &str, version: &VersionToken, message: &str) -> Result<()> {
        (**self).write(content, version, message).await
    }
}

#[async_trait]
impl<T: EntryCache + ?Sized> EntryCache for Arc<T> {
    async fn get(&self) -> Result<Option<Vec<Entry>>> {
        (**self).get().await
    }

    async fn set(&self, entries: Vec<Entry>) -> Result<()> {
        (**self).set(entries).await
    }

    async fn append(&self, entry: Entry) -> Result<()> {
        (**self).append(entry).await
    }

    async fn mutate_at(&self, index: usize, entry: Entry) -> Result<()> {
        (**self).mutate_at(index, entry).await
    }

    async fn remove_at(&self, index: usize) -> Result<()> {
        (**self).remove_at(index).await
    }

    async fn invalidate(&self) -> Result<()> {
        (**self).invalidate().await
    }
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    async fn send(&self, text: &str) -> Result<()> {
        (**self).send(text).await
    }
}
