//! # Roster Sync
//!
//! The read/write orchestrator: every CRUD operation coordinates the
//! durable remote file and the cache mirror so both converge to the same
//! ordered record collection.
//!
//! The durable file is the source of truth. Mutations write it first,
//! conditioned on the version token from the preceding read, then update
//! the mirror; a mirror update that fails after a successful durable
//! write is tolerated and heals on the next resync or cache-miss read.
//!
//! ## Example
//!
//! ```rust,ignore
//! use roster_sync::SyncService;
//!
//! let service = SyncService::new(store, cache, notifier);
//! service.add(Entry::new("alpha", "2099-01-01", "10.0.0.1")).await?;
//! let rows = service.read().await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod service;

pub use service::SyncService;
